//! Menu states
//!
//! Every state other than [`State::Idle`] owns one structure and the file it
//! is stored in.

use crate::structures::Kind;

/// ANSI reset sequence
pub const RESET: &str = "\u{1b}[0m";
/// Accent used for option lines and the prompt
pub const HIGHLIGHT: &str = "\u{1b}[33m";

/// Which menu is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum State {
    #[default]
    Idle,
    Stack,
    Queue,
    List,
}

impl State {
    /// Resource the state's structure is persisted to
    pub fn file_name(&self) -> Option<&'static str> {
        match self {
            State::Idle => None,
            State::Stack => Some("stack.txt"),
            State::Queue => Some("queue.txt"),
            State::List => Some("list.txt"),
        }
    }

    /// Option labels in menu order; option `n` is `options()[n - 1]`
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            State::Idle => &["Stack", "Queue", "List", "Quit"],
            State::Stack => &[
                "Push",
                "Pop",
                "Save & Move to Queue",
                "Save & Move to List",
                "Quit",
            ],
            State::Queue => &[
                "Enqueue",
                "Dequeue",
                "Save & Move to Stack",
                "Save & Move to List",
                "Quit",
            ],
            State::List => &[
                "Append",
                "Remove",
                "Save & Move to Stack",
                "Save & Move to Queue",
                "Quit",
            ],
        }
    }

    /// Colour the structure is drawn in
    pub fn accent(&self) -> &'static str {
        match self {
            State::Idle => "\u{1b}[37m",  // white
            State::Stack => "\u{1b}[31m", // red
            State::Queue => "\u{1b}[32m", // green
            State::List => "\u{1b}[34m",  // blue
        }
    }

    /// Structure kind held while in this state
    pub fn kind(&self) -> Option<Kind> {
        match self {
            State::Idle => None,
            State::Stack => Some(Kind::Stack),
            State::Queue => Some(Kind::Queue),
            State::List => Some(Kind::List),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            State::Idle => "Idle",
            State::Stack => "Stack",
            State::Queue => "Queue",
            State::List => "List",
        }
    }
}
