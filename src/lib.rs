//! Structure Menu
//!
//! An interactive console menu for playing with three classic data structures
//! (stack, queue and list) of single characters. Each structure is kept in its
//! own flat file and is loaded when its menu is entered and saved when the
//! user moves on to another structure.

pub mod cli;
pub mod console;
pub mod filesystem;
pub mod machine;
pub mod options;
pub mod state;
pub mod structures;
pub mod visualizer;

// Re-export core types for convenience
pub use crate::error::{Result, StorageError};
pub use console::{Console, ScriptedConsole, StdConsole};
pub use filesystem::{FileStorage, MemoryStorage, Storage};
pub use machine::Machine;
pub use options::{Action, OptionRegistry, Signal};
pub use state::State;
pub use structures::{Kind, Structure};

/// Error types for the persistence layer
pub mod error {
    use std::io;

    use thiserror::Error;

    /// Result type for storage operations
    pub type Result<T> = std::result::Result<T, StorageError>;

    /// Failures while reading or writing a named resource
    #[derive(Debug, Error)]
    pub enum StorageError {
        #[error("failed to read {name}: {source}")]
        Read {
            name: String,
            #[source]
            source: io::Error,
        },

        #[error("failed to write {name}: {source}")]
        Write {
            name: String,
            #[source]
            source: io::Error,
        },

        /// The backing store refused the operation outright
        #[error("storage for {name} is unavailable")]
        Unavailable { name: String },
    }
}
