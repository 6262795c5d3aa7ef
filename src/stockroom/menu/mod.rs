//! # Menu Layer
//!
//! The menu is a state machine over [`State`]. Each cycle the session asks
//! the [`MenuHandler`] for the current screen, reads a line when the state
//! takes input, and hands it back through [`MenuHandler::step`]. The handler
//! parses the line into a [`Trigger`](input::Trigger), drives the storage
//! backend, and returns an [`Outcome`] describing the transition together
//! with any messages for the user.
//!
//! - [`state`]: the closed set of states and their lookup table
//! - [`input`]: line parsing, no side effects
//! - [`machine`]: dispatch and error containment
//!
//! Nothing in this module writes to stdout.

pub mod input;
pub mod machine;
pub mod state;

pub use machine::{MenuHandler, Screen};
pub use state::{InputMode, State};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Result of one dispatch: where the menu was, where it is now, and what to
/// tell the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub from: State,
    pub to: State,
    pub messages: Vec<CmdMessage>,
}
