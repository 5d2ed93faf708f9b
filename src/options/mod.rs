//! Option registry
//!
//! Maps the number a user types to the action it triggers in the current
//! state. A registry is built for one state and thrown away on the next
//! transition; it is never edited in place.

use std::collections::BTreeMap;

use crate::state::State;

/// Whether the main loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    Stop,
}

/// Something a menu option does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Leave the idle menu for a structure
    Select(State),
    /// Push, enqueue or append the payload character
    Add,
    /// Pop, dequeue or remove the last element
    Remove,
    /// Persist the current structure and switch to another one
    SaveAndMove(State),
    /// End the session without saving
    Quit,
}

/// Bindings from 1-based choices to actions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionRegistry {
    bindings: BTreeMap<u32, Action>,
}

impl OptionRegistry {
    /// A registry with nothing bound
    pub fn empty() -> Self {
        Self::default()
    }

    /// Fresh bindings for `state`, in the same order as its option labels
    pub fn rebuild(state: State) -> Self {
        let actions: &[Action] = match state {
            State::Idle => &[
                Action::Select(State::Stack),
                Action::Select(State::Queue),
                Action::Select(State::List),
                Action::Quit,
            ],
            State::Stack => &[
                Action::Add,
                Action::Remove,
                Action::SaveAndMove(State::Queue),
                Action::SaveAndMove(State::List),
                Action::Quit,
            ],
            State::Queue => &[
                Action::Add,
                Action::Remove,
                Action::SaveAndMove(State::Stack),
                Action::SaveAndMove(State::List),
                Action::Quit,
            ],
            State::List => &[
                Action::Add,
                Action::Remove,
                Action::SaveAndMove(State::Stack),
                Action::SaveAndMove(State::Queue),
                Action::Quit,
            ],
        };

        let bindings = actions
            .iter()
            .enumerate()
            .map(|(i, action)| (i as u32 + 1, *action))
            .collect();
        Self { bindings }
    }

    /// Action bound to `choice`, if any
    pub fn resolve(&self, choice: u32) -> Option<Action> {
        self.bindings.get(&choice).copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_bindings() {
        let registry = OptionRegistry::rebuild(State::Idle);
        assert_eq!(registry.resolve(1), Some(Action::Select(State::Stack)));
        assert_eq!(registry.resolve(2), Some(Action::Select(State::Queue)));
        assert_eq!(registry.resolve(3), Some(Action::Select(State::List)));
        assert_eq!(registry.resolve(4), Some(Action::Quit));
        assert_eq!(registry.resolve(5), None);
    }

    #[test]
    fn test_structure_bindings_never_target_self() {
        for state in [State::Stack, State::Queue, State::List] {
            let registry = OptionRegistry::rebuild(state);
            assert_eq!(registry.resolve(1), Some(Action::Add));
            assert_eq!(registry.resolve(2), Some(Action::Remove));
            assert_eq!(registry.resolve(5), Some(Action::Quit));
            for choice in [3, 4] {
                match registry.resolve(choice) {
                    Some(Action::SaveAndMove(target)) => {
                        assert_ne!(target, state);
                        assert_ne!(target, State::Idle);
                    }
                    other => panic!("unexpected binding {:?}", other),
                }
            }
        }
    }

    #[test]
    fn test_bindings_match_labels() {
        for state in [State::Idle, State::Stack, State::Queue, State::List] {
            assert_eq!(OptionRegistry::rebuild(state).len(), state.options().len());
        }
    }

    #[test]
    fn test_zero_and_out_of_range_are_unbound() {
        let registry = OptionRegistry::rebuild(State::List);
        assert_eq!(registry.resolve(0), None);
        assert_eq!(registry.resolve(6), None);
        assert!(OptionRegistry::empty().is_empty());
    }
}
