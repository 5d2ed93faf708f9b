//! In-memory data structures behind the menu
//!
//! Exactly one structure is live at a time. [`Structure`] is a sum type so a
//! stack can never be operated on while the queue menu is active.

use std::collections::VecDeque;

/// Separator between stored elements
pub const DELIMITER: char = ',';

/// The three kinds of structure the menu can hold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Stack,
    Queue,
    List,
}

/// The live contents of the active structure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Structure {
    /// Last in, first out. The top is the end of the vector.
    Stack(Vec<char>),
    /// First in, first out. The front is the front of the deque.
    Queue(VecDeque<char>),
    /// Insertion ordered
    List(Vec<char>),
}

impl Structure {
    /// An empty structure of the given kind
    pub fn empty(kind: Kind) -> Self {
        match kind {
            Kind::Stack => Structure::Stack(Vec::new()),
            Kind::Queue => Structure::Queue(VecDeque::new()),
            Kind::List => Structure::List(Vec::new()),
        }
    }

    /// Build a structure from elements given in its stored order
    /// (stack top-first, queue front-first, list index order)
    pub fn from_elements(kind: Kind, elements: impl IntoIterator<Item = char>) -> Self {
        match kind {
            Kind::Stack => {
                let mut stack: Vec<char> = elements.into_iter().collect();
                stack.reverse();
                Structure::Stack(stack)
            }
            Kind::Queue => Structure::Queue(elements.into_iter().collect()),
            Kind::List => Structure::List(elements.into_iter().collect()),
        }
    }

    /// Which kind of structure this is
    pub fn kind(&self) -> Kind {
        match self {
            Structure::Stack(_) => Kind::Stack,
            Structure::Queue(_) => Kind::Queue,
            Structure::List(_) => Kind::List,
        }
    }

    /// Push, enqueue or append
    pub fn add(&mut self, value: char) {
        match self {
            Structure::Stack(stack) => stack.push(value),
            Structure::Queue(queue) => queue.push_back(value),
            Structure::List(list) => list.push(value),
        }
    }

    /// Pop, dequeue or remove the last element. Empty structures are left alone.
    pub fn remove(&mut self) {
        match self {
            Structure::Stack(stack) => {
                stack.pop();
            }
            Structure::Queue(queue) => {
                queue.pop_front();
            }
            Structure::List(list) => {
                list.pop();
            }
        }
    }

    /// Number of elements held
    pub fn len(&self) -> usize {
        match self {
            Structure::Stack(stack) => stack.len(),
            Structure::Queue(queue) => queue.len(),
            Structure::List(list) => list.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements in the order they are shown and stored
    pub fn elements(&self) -> Vec<char> {
        match self {
            Structure::Stack(stack) => stack.iter().rev().copied().collect(),
            Structure::Queue(queue) => queue.iter().copied().collect(),
            Structure::List(list) => list.clone(),
        }
    }

    /// Serialize as `c,` per element, in stored order
    pub fn encode(&self) -> String {
        let mut data = String::with_capacity(self.len() * 2);
        for value in self.elements() {
            data.push(value);
            data.push(DELIMITER);
        }
        data
    }

    /// Parse stored text back into a structure of the given kind.
    ///
    /// Line breaks are dropped first. Each non-empty token contributes its
    /// first character; anything after it is ignored.
    pub fn decode(kind: Kind, data: &str) -> Self {
        let joined: String = data.lines().collect();
        let elements = joined
            .split(DELIMITER)
            .filter_map(|token| token.chars().next());
        Self::from_elements(kind, elements)
    }
}
