//! Text rendering of structures and the menu screen
//!
//! Everything here is a pure function of its inputs.

use std::fmt::Write;

use crate::state::{State, HIGHLIGHT, RESET};
use crate::structures::Structure;

/// Draw a structure in its display order
pub fn render(structure: &Structure) -> String {
    match structure {
        Structure::Stack(_) => render_stack(&structure.elements()),
        Structure::Queue(_) => render_queue(&structure.elements()),
        Structure::List(list) => render_list(list),
    }
}

/// A vertical column, top of the stack first
fn render_stack(top_first: &[char]) -> String {
    let mut out = String::from("|   |\n");
    for value in top_first {
        let _ = write!(out, "|---|\n| {} |\n", value);
    }
    out.push_str("|---|\n");
    out
}

/// A single row, front of the queue first
fn render_queue(front_first: &[char]) -> String {
    let mut out = String::from("|");
    for value in front_first {
        let _ = write!(out, " {} |", value);
    }
    out.push('\n');
    out
}

fn render_list(list: &[char]) -> String {
    let mut out = String::from("{ ");
    for value in list {
        let _ = write!(out, "{}, ", value);
    }
    out.push_str(" }\n");
    out
}

/// The full screen for one cycle: the structure, the numbered options for
/// `state` and the prompt. With `color` off no escape codes are written.
pub fn render_screen(state: State, visualization: &str, color: bool) -> String {
    let (accent, highlight, reset) = if color {
        (state.accent(), HIGHLIGHT, RESET)
    } else {
        ("", "", "")
    };

    let mut out = String::new();
    out.push_str(accent);
    out.push_str(visualization);
    out.push_str(reset);

    for (i, label) in state.options().iter().enumerate() {
        let _ = writeln!(out, "{}{}. {}", highlight, i + 1, label);
    }

    out.push_str(highlight);
    out.push_str("? ");
    out.push_str(reset);
    out
}
