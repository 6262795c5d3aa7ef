//! Turns a raw input line into a [`Trigger`] for the current state.
//!
//! A comma anywhere in the line selects the structured parser for the state.
//! If that parse fails the line is rejected; it never falls back to option
//! tokens.

use super::state::{InputMode, State};
use crate::error::{Result, StockError};
use crate::model::ItemId;

/// A validated request extracted from one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// Move to another state.
    Goto(State),
    /// `<name>,<qty>` on the console add screen.
    AddItem { name: String, quantity: i64 },
    /// A bare `<id>` on the edit screen.
    Remove(ItemId),
    /// `<id>,+n` or `<id>,-n`: adjust the stored quantity by `delta`.
    Adjust { id: ItemId, delta: i64 },
    /// `<id>,<qty>`: overwrite the stored quantity.
    SetQuantity { id: ItemId, quantity: i64 },
}

/// Parses `line` against the edges of `state`. Surrounding whitespace is
/// ignored.
pub fn parse(state: State, line: &str) -> Result<Trigger> {
    let line = line.trim();
    match state.input() {
        InputMode::Options => follow_option(state, line),
        InputMode::AddItem => {
            if line.contains(',') {
                parse_add(line)
            } else {
                follow_option(state, line)
            }
        }
        InputMode::EditItem => {
            if line.contains(',') {
                parse_edit(line)
            } else if !line.is_empty() && line.chars().all(|c| c.is_ascii_digit()) {
                parse_id(line).map(Trigger::Remove)
            } else {
                follow_option(state, line)
            }
        }
        InputMode::Auto(_) | InputMode::Terminal => Err(StockError::Parse(format!(
            "the {} screen takes no input",
            state
        ))),
    }
}

fn follow_option(state: State, token: &str) -> Result<Trigger> {
    state
        .entry()
        .follow(token)
        .map(Trigger::Goto)
        .ok_or_else(|| StockError::Parse(format!("unknown option '{}'", token)))
}

fn split_pair(line: &str) -> Result<(&str, &str)> {
    let mut parts = line.split(',');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(left), Some(right), None) => Ok((left.trim(), right.trim())),
        _ => Err(StockError::Parse(format!(
            "expected two values separated by one comma, got '{}'",
            line
        ))),
    }
}

fn parse_add(line: &str) -> Result<Trigger> {
    let (name, quantity) = split_pair(line)?;
    Ok(Trigger::AddItem {
        name: name.to_string(),
        quantity: parse_amount(quantity)?,
    })
}

fn parse_edit(line: &str) -> Result<Trigger> {
    let (id, amount) = split_pair(line)?;
    let id = parse_id(id)?;
    if amount.starts_with(['+', '-']) {
        Ok(Trigger::Adjust {
            id,
            delta: parse_amount(amount)?,
        })
    } else {
        Ok(Trigger::SetQuantity {
            id,
            quantity: parse_amount(amount)?,
        })
    }
}

fn parse_id(s: &str) -> Result<ItemId> {
    s.parse()
        .map_err(|_| StockError::Parse(format!("'{}' is not a valid item ID", s)))
}

fn parse_amount(s: &str) -> Result<i64> {
    s.parse()
        .map_err(|_| StockError::Parse(format!("'{}' is not a whole number", s)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_tokens_move_between_states() {
        assert_eq!(parse(State::Main, "view").unwrap(), Trigger::Goto(State::View));
        assert_eq!(
            parse(State::Add, "  console \n").unwrap(),
            Trigger::Goto(State::AddConsole)
        );
        assert_eq!(parse(State::Edit, "main").unwrap(), Trigger::Goto(State::Main));
    }

    #[test]
    fn tokens_outside_the_state_are_rejected() {
        assert!(matches!(parse(State::Main, "zz"), Err(StockError::Parse(_))));
        assert!(matches!(parse(State::Main, "main"), Err(StockError::Parse(_))));
        assert!(matches!(parse(State::View, "add"), Err(StockError::Parse(_))));
        assert!(matches!(parse(State::Main, ""), Err(StockError::Parse(_))));
    }

    #[test]
    fn add_line_splits_name_and_quantity() {
        assert_eq!(
            parse(State::AddConsole, "Hammer, 2").unwrap(),
            Trigger::AddItem {
                name: "Hammer".into(),
                quantity: 2
            }
        );
    }

    #[test]
    fn add_line_keeps_non_positive_quantity_for_the_backend() {
        assert_eq!(
            parse(State::AddConsole, "Nails,0").unwrap(),
            Trigger::AddItem {
                name: "Nails".into(),
                quantity: 0
            }
        );
    }

    #[test]
    fn malformed_add_line_does_not_fall_back_to_tokens() {
        assert!(matches!(
            parse(State::AddConsole, "main,"),
            Err(StockError::Parse(_))
        ));
        assert!(matches!(
            parse(State::AddConsole, "a,b,c"),
            Err(StockError::Parse(_))
        ));
        assert!(matches!(
            parse(State::AddConsole, "Hammer,two"),
            Err(StockError::Parse(_))
        ));
    }

    #[test]
    fn bare_id_on_edit_means_remove() {
        assert_eq!(parse(State::Edit, "3").unwrap(), Trigger::Remove(3));
    }

    #[test]
    fn signed_amount_is_a_delta() {
        assert_eq!(
            parse(State::Edit, "1,+5").unwrap(),
            Trigger::Adjust { id: 1, delta: 5 }
        );
        assert_eq!(
            parse(State::Edit, "3, -1").unwrap(),
            Trigger::Adjust { id: 3, delta: -1 }
        );
    }

    #[test]
    fn plain_amount_is_an_absolute_set() {
        assert_eq!(
            parse(State::Edit, "3, 2").unwrap(),
            Trigger::SetQuantity { id: 3, quantity: 2 }
        );
        assert_eq!(
            parse(State::Edit, "3,0").unwrap(),
            Trigger::SetQuantity { id: 3, quantity: 0 }
        );
    }

    #[test]
    fn malformed_edit_lines_are_rejected() {
        for line in ["x,2", "1,", "1,+", "1,2-", ",3", "1,2,3", "-1", "1.5"] {
            assert!(
                matches!(parse(State::Edit, line), Err(StockError::Parse(_))),
                "expected parse error for {:?}",
                line
            );
        }
    }

    #[test]
    fn auto_states_take_no_input() {
        assert!(parse(State::Invalid, "main").is_err());
        assert!(parse(State::ExportCsv, "").is_err());
    }
}
