//! The menu state machine
//!
//! Owns the current [`State`], the structure loaded for it and the option
//! bindings. Entering a structure state loads its file, leaving it saves the
//! file, and the main loop runs the current state's stay hook until an
//! action says stop.

use crate::console::Console;
use crate::filesystem::Storage;
use crate::options::{Action, OptionRegistry, Signal};
use crate::state::State;
use crate::structures::Structure;
use crate::visualizer;

/// Position in an input line that carries the character for Add
const PAYLOAD_INDEX: usize = 2;

/// Option number typed as the first character of `line`
pub fn parse_choice(line: &str) -> Option<u32> {
    line.chars().next()?.to_digit(10)
}

/// Character to add, taken from a fixed position in `line`
pub fn parse_payload(line: &str) -> Option<char> {
    line.chars().nth(PAYLOAD_INDEX)
}

/// Interactive menu over one stack, queue or list at a time
#[derive(Debug)]
pub struct Machine<S: Storage, C: Console> {
    state: State,
    structure: Option<Structure>,
    registry: OptionRegistry,
    visualization: String,
    storage: S,
    console: C,
    color: bool,
}

impl<S: Storage, C: Console> Machine<S, C> {
    /// Create a machine sitting in the idle menu
    pub fn new(storage: S, console: C) -> Self {
        let mut machine = Self {
            state: State::Idle,
            structure: None,
            registry: OptionRegistry::empty(),
            visualization: String::new(),
            storage,
            console,
            color: true,
        };
        machine.enter();
        machine
    }

    /// Turn ANSI accents on or off
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Structure loaded for the current state; `None` while idle
    pub fn structure(&self) -> Option<&Structure> {
        self.structure.as_ref()
    }

    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// Text drawn for the structure on the last cycle
    pub fn visualization(&self) -> &str {
        &self.visualization
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Move to `new_state`, saving the structure being left and loading the
    /// one being entered. Does nothing if already there.
    pub fn transition_to(&mut self, new_state: State) {
        if self.state == new_state {
            return;
        }

        log::debug!("transition {} -> {}", self.state.label(), new_state.label());
        self.exit();
        self.state = new_state;
        self.enter();
        self.visualization.clear();
    }

    /// Run cycles until an action returns [`Signal::Stop`]
    pub fn run_until_stopped(&mut self) {
        while self.stay() == Signal::Continue {}
        log::debug!("stopped in {}", self.state.label());
    }

    /// One cycle of the current state: draw, read a line, act on it
    pub fn stay(&mut self) -> Signal {
        if let Some(structure) = &self.structure {
            self.visualization = visualizer::render(structure);
        }

        let screen = visualizer::render_screen(self.state, &self.visualization, self.color);
        self.console.write(&screen);

        match self.console.read_line() {
            Some(line) => self.handle_line(&line),
            None => {
                log::info!("end of input, leaving without saving");
                Signal::Stop
            }
        }
    }

    /// Interpret one input line against the current bindings
    pub fn handle_line(&mut self, line: &str) -> Signal {
        match parse_choice(line) {
            Some(choice) => self.dispatch(choice, parse_payload(line)),
            None => {
                log::trace!("ignoring input {:?}", line);
                Signal::Continue
            }
        }
    }

    /// Run the action bound to `choice`. Unbound choices are ignored.
    pub fn dispatch(&mut self, choice: u32, payload: Option<char>) -> Signal {
        let Some(action) = self.registry.resolve(choice) else {
            log::trace!("no option {} in {}", choice, self.state.label());
            return Signal::Continue;
        };

        match action {
            Action::Select(target) | Action::SaveAndMove(target) => {
                self.transition_to(target);
                Signal::Continue
            }
            Action::Add => {
                match (self.structure.as_mut(), payload) {
                    (Some(structure), Some(value)) => structure.add(value),
                    _ => log::trace!("add skipped, no payload"),
                }
                Signal::Continue
            }
            Action::Remove => {
                if let Some(structure) = self.structure.as_mut() {
                    structure.remove();
                }
                Signal::Continue
            }
            Action::Quit => Signal::Stop,
        }
    }

    /// Enter hook: bind options and load the state's structure
    fn enter(&mut self) {
        self.registry = OptionRegistry::rebuild(self.state);

        let (Some(kind), Some(name)) = (self.state.kind(), self.state.file_name()) else {
            self.structure = None;
            return;
        };

        let data = match self.storage.read(name) {
            Ok(data) => data,
            Err(e) => {
                log::error!("{}; starting with an empty {}", e, self.state.label());
                String::new()
            }
        };
        let structure = Structure::decode(kind, &data);
        log::debug!("loaded {} element(s) from {}", structure.len(), name);
        self.structure = Some(structure);
    }

    /// Exit hook: save the state's structure and drop the bindings
    fn exit(&mut self) {
        if let (Some(structure), Some(name)) = (self.structure.take(), self.state.file_name()) {
            debug_assert_eq!(Some(structure.kind()), self.state.kind());
            match self.storage.write(name, &structure.encode()) {
                Ok(()) => log::debug!("saved {} element(s) to {}", structure.len(), name),
                Err(e) => log::error!("{}; changes to {} are lost", e, self.state.label()),
            }
        }
        self.registry = OptionRegistry::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use crate::filesystem::MemoryStorage;
    use crate::structures::Kind;
    use quickcheck_macros::quickcheck;

    fn machine(storage: MemoryStorage) -> Machine<MemoryStorage, ScriptedConsole> {
        Machine::new(storage, ScriptedConsole::default()).with_color(false)
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(parse_choice("3"), Some(3));
        assert_eq!(parse_choice("1 x"), Some(1));
        assert_eq!(parse_choice(""), None);
        assert_eq!(parse_choice("x1"), None);
    }

    #[test]
    fn test_parse_payload() {
        assert_eq!(parse_payload("1 x"), Some('x'));
        assert_eq!(parse_payload("1xy"), Some('y'));
        assert_eq!(parse_payload("1x"), None);
        assert_eq!(parse_payload("1"), None);
    }

    #[test]
    fn test_starts_idle() {
        let machine = machine(MemoryStorage::new());
        assert_eq!(machine.state(), State::Idle);
        assert!(machine.structure().is_none());
        assert_eq!(machine.registry(), &OptionRegistry::rebuild(State::Idle));
        assert_eq!(machine.storage().reads(), 0);
    }

    #[test]
    fn test_select_loads_structure() {
        let mut machine = machine(MemoryStorage::new().with_resource("queue.txt", "a,b,"));

        assert_eq!(machine.dispatch(2, None), Signal::Continue);
        assert_eq!(machine.state(), State::Queue);
        assert_eq!(machine.structure().unwrap().elements(), vec!['a', 'b']);
        assert_eq!(machine.storage().reads(), 1);
        // Leaving idle saves nothing
        assert_eq!(machine.storage().writes(), 0);
    }

    #[test]
    fn test_transition_to_same_state_is_noop() {
        let mut machine = machine(MemoryStorage::new());
        machine.transition_to(State::Stack);
        machine.dispatch(1, Some('q'));
        let registry = machine.registry().clone();

        machine.transition_to(State::Stack);

        assert_eq!(machine.storage().reads(), 1);
        assert_eq!(machine.storage().writes(), 0);
        assert_eq!(machine.registry(), &registry);
        assert_eq!(machine.structure().unwrap().elements(), vec!['q']);
    }

    #[test]
    fn test_save_and_move_persists_then_loads() {
        let mut machine = machine(MemoryStorage::new().with_resource("list.txt", "l,"));
        machine.transition_to(State::Stack);
        machine.dispatch(1, Some('a'));
        machine.dispatch(1, Some('b'));

        machine.dispatch(4, None);

        assert_eq!(machine.state(), State::List);
        assert_eq!(machine.storage().get("stack.txt"), Some("b,a,"));
        assert_eq!(machine.structure().unwrap().kind(), Kind::List);
        assert_eq!(machine.structure().unwrap().elements(), vec!['l']);
        assert_eq!(machine.registry(), &OptionRegistry::rebuild(State::List));
    }

    #[test]
    fn test_add_without_payload_is_skipped() {
        let mut machine = machine(MemoryStorage::new());
        machine.transition_to(State::List);

        machine.handle_line("1");
        machine.handle_line("1x");

        assert!(machine.structure().unwrap().is_empty());
    }

    #[test]
    fn test_quit_does_not_save() {
        let mut machine = machine(MemoryStorage::new());
        machine.transition_to(State::Queue);
        machine.dispatch(1, Some('z'));

        assert_eq!(machine.dispatch(5, None), Signal::Stop);
        assert_eq!(machine.storage().writes(), 0);
        assert_eq!(machine.state(), State::Queue);
    }

    #[test]
    fn test_write_failure_keeps_session_alive() {
        let mut machine = machine(MemoryStorage::new());
        machine.transition_to(State::Stack);
        machine.dispatch(1, Some('a'));
        machine.storage_mut().set_fail_writes(true);

        assert_eq!(machine.dispatch(3, None), Signal::Continue);

        assert_eq!(machine.state(), State::Queue);
        assert_eq!(machine.storage().get("stack.txt"), None);
        assert!(machine.structure().unwrap().is_empty());
    }

    #[test]
    fn test_read_failure_starts_empty_and_continues() {
        let mut machine = machine(MemoryStorage::new().with_resource("queue.txt", "a,b,"));
        machine.storage_mut().set_fail_reads(true);

        assert_eq!(machine.dispatch(2, None), Signal::Continue);
        assert_eq!(machine.state(), State::Queue);
        assert!(machine.structure().unwrap().is_empty());

        // The session keeps working on the empty queue
        machine.dispatch(1, Some('z'));
        assert_eq!(machine.structure().unwrap().elements(), vec!['z']);
        assert_eq!(machine.storage().reads(), 1);
    }

    #[test]
    fn test_visualization_reset_on_transition() {
        let mut machine = machine(MemoryStorage::new());
        machine.transition_to(State::Stack);
        machine.visualization = "stale".to_string();

        machine.transition_to(State::Queue);

        assert_eq!(machine.visualization(), "");
    }

    /// Choices with no binding never change anything
    #[quickcheck]
    fn prop_unbound_dispatch_is_inert(choice: u32, payload: Option<char>) -> bool {
        let mut machine = machine(MemoryStorage::new().with_resource("stack.txt", "a,"));
        machine.transition_to(State::Stack);
        if machine.registry().resolve(choice).is_some() {
            return true;
        }

        let before = machine.structure().cloned();
        let signal = machine.dispatch(choice, payload);

        signal == Signal::Continue
            && machine.state() == State::Stack
            && machine.structure().cloned() == before
            && machine.storage().writes() == 0
    }
}
