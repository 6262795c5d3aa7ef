use super::input::{self, Trigger};
use super::state::{InputMode, State};
use super::{CmdMessage, Outcome};
use crate::error::{Result, StockError};
use crate::model::ItemId;
use crate::render;
use crate::store::StorageBackend;
use tracing::{debug, error, warn};

/// What the session shows before reading input: messages first, then the
/// screen body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Screen {
    pub messages: Vec<CmdMessage>,
    pub body: String,
}

/// Drives a storage backend from menu input.
///
/// Holds the only mutable reference to the backend for the length of the
/// session, so mutations apply strictly in input order.
pub struct MenuHandler<'s, B: StorageBackend> {
    state: State,
    store: &'s mut B,
}

impl<'s, B: StorageBackend> MenuHandler<'s, B> {
    pub fn new(store: &'s mut B) -> Self {
        Self {
            state: State::Main,
            store,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.input() == InputMode::Terminal
    }

    pub fn reads_input(&self) -> bool {
        self.state.reads_input()
    }

    /// Renders the current state. Screens that list items take a snapshot
    /// first; if the backend refuses, the menu moves to `Invalid` and the
    /// screen carries the diagnostic instead.
    pub fn screen(&mut self) -> Screen {
        let records = match self.state {
            State::View | State::ExportCsv => match self.store.query_all() {
                Ok(records) => Some(records),
                Err(e) => {
                    let outcome = self.fail(e);
                    return Screen {
                        messages: outcome.messages,
                        body: render::screen(self.state, None),
                    };
                }
            },
            _ => None,
        };

        Screen {
            messages: Vec::new(),
            body: render::screen(self.state, records.as_ref()),
        }
    }

    /// Advances one cycle. States that read input consume `line`; the rest
    /// ignore it and follow their automatic edge. `None` on an input state
    /// leaves the menu where it is.
    pub fn step(&mut self, line: Option<&str>) -> Outcome {
        match (self.state.input(), line) {
            (InputMode::Auto(next), _) => self.transition(next, Vec::new()),
            (InputMode::Terminal, _) | (_, None) => self.transition(self.state, Vec::new()),
            (_, Some(line)) => self.dispatch(line),
        }
    }

    /// Routes an entry that could not be read as text to `Invalid`, the same
    /// way a line that fails to parse does.
    pub fn reject(&mut self, error: StockError) -> Outcome {
        self.fail(error)
    }

    fn dispatch(&mut self, line: &str) -> Outcome {
        let result = input::parse(self.state, line).and_then(|trigger| self.apply(trigger));
        match result {
            Ok((next, messages)) => self.transition(next, messages),
            Err(e) => self.fail(e),
        }
    }

    fn apply(&mut self, trigger: Trigger) -> Result<(State, Vec<CmdMessage>)> {
        let stay = self.state;
        match trigger {
            Trigger::Goto(next) => Ok((next, Vec::new())),
            Trigger::AddItem { name, quantity } => {
                let id = self.store.add_item(&name, quantity)?;
                debug!(id, "added from console");
                Ok((stay, vec![CmdMessage::success("Item added!")]))
            }
            Trigger::Remove(id) => {
                let message = self.set_quantity(id, 0)?;
                Ok((stay, vec![message]))
            }
            Trigger::Adjust { id, delta } => {
                let current = self.store.query_by_id(id)?;
                let target = i64::from(current.quantity)
                    .checked_add(delta)
                    .ok_or_else(|| {
                        StockError::InvalidData(format!(
                            "adjustment {delta} overflows item {id}, record not edited"
                        ))
                    })?;
                let message = self.set_quantity(id, target)?;
                Ok((stay, vec![message]))
            }
            Trigger::SetQuantity { id, quantity } => {
                let message = self.set_quantity(id, quantity)?;
                Ok((stay, vec![message]))
            }
        }
    }

    // Zero removes the record, whether it came from a bare id or `id,0`.
    fn set_quantity(&mut self, id: ItemId, quantity: i64) -> Result<CmdMessage> {
        self.store.edit_quantity(id, quantity)?;
        if quantity == 0 {
            Ok(CmdMessage::success("Item deleted!"))
        } else {
            Ok(CmdMessage::success("Item edited!"))
        }
    }

    fn fail(&mut self, e: StockError) -> Outcome {
        if e.is_recoverable() {
            warn!(state = %self.state, error = %e, "entry rejected");
        } else {
            error!(state = %self.state, error = %e, "backend failure");
        }
        self.transition(State::Invalid, vec![CmdMessage::error(e.to_string())])
    }

    fn transition(&mut self, to: State, messages: Vec<CmdMessage>) -> Outcome {
        let from = self.state;
        if from != to {
            debug!(%from, %to, "state change");
        }
        self.state = to;
        Outcome { from, to, messages }
    }
}
