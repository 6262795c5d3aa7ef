//! # Rendering
//!
//! Pure functions turning a state (plus a snapshot of the record table) into
//! the text shown to the user. Nothing here touches the store, the state
//! machine, or stdout; the session loop decides where the strings go.
//!
//! Column widths are measured with `unicode-width`, so names with wide
//! characters still line up.

use crate::menu::{CmdMessage, MessageLevel, State};
use crate::model::Records;
use colored::Colorize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const PROMPT: &str = "Select option: >> ";

pub const HEADER_WIDTH: usize = 50;
pub const OPTION_WIDTH: usize = 15;
pub const ID_WIDTH: usize = 8;
pub const NAME_WIDTH: usize = 15;
pub const QUANTITY_WIDTH: usize = 10;

const SELECT_ACTION: &str = "Select what you want to do:";
const INVALID_ENTRY: &str = "User entry is not valid, going back to main menu...";
const NOT_IMPLEMENTED: &str = "Not implemented, sorry :)";
const EXPORTING: &str = "Exporting data...";
const EDIT_USAGE: &str = "Select item you wish to edit by ID.
Input: 3 -> removes ID 3 completely
Input: 3, -1 -> subtract 1 from item 3 quantity
Input: 3, +1 -> add 1 to item 3 quantity
Input: 3, 2 -> set item 3 quantity to 2";

/// Full screen text for `state`. `records` is only read by the screens that
/// list items (`View`, `ExportCsv`); `None` renders an empty table there.
pub fn screen(state: State, records: Option<&Records>) -> String {
    let empty = Records::new();
    let records = records.unwrap_or(&empty);
    let mut out = String::new();

    match state {
        State::Main => {
            out.push_str(&format!(
                "{:-^width$}\n",
                "Welcome to inventory app!",
                width = HEADER_WIDTH
            ));
            out.push_str(SELECT_ACTION);
            out.push('\n');
            out.push_str(&option_list(state));
        }
        State::View => {
            out.push_str(&table(records));
            out.push_str("\n\n");
            out.push_str(SELECT_ACTION);
            out.push('\n');
            out.push_str(&option_list(state));
        }
        State::Add => {
            out.push_str("Select how you want to add new item:\n");
            out.push_str(&option_list(state));
        }
        State::AddConsole => {
            out.push_str("Provide item name and quantity separated by comma or\n");
            out.push_str(&option_list(state));
        }
        State::AddJson | State::AddCsv => {
            out.push_str(NOT_IMPLEMENTED);
            out.push('\n');
        }
        State::Edit => {
            out.push_str(EDIT_USAGE);
            out.push('\n');
            out.push_str(&option_list(state));
        }
        State::ExportCsv => {
            out.push_str(EXPORTING);
            out.push('\n');
            out.push_str(&table(records));
        }
        State::Invalid => {
            out.push_str(INVALID_ENTRY);
            out.push('\n');
        }
        State::Exit => {}
    }

    out
}

/// One line per outgoing option: `     - view    -> View all items`.
pub fn option_list(state: State) -> String {
    state
        .options()
        .iter()
        .map(|option| {
            format!(
                "{}-> {}\n",
                pad_to_width(&format!("     - {}", option.token()), OPTION_WIDTH),
                option.description()
            )
        })
        .collect()
}

/// Fixed-width table of all records, header and dashed rule first.
pub fn table(records: &Records) -> String {
    let header = format!(
        "{}{}{}",
        pad_to_width("ID", ID_WIDTH),
        pad_to_width("Name", NAME_WIDTH),
        pad_to_width("Quantity", QUANTITY_WIDTH)
    );
    let mut out = format!("{}\n{}\n", header, "-".repeat(header.width()));

    // Numbers are only left-justified, never cut.
    for (id, item) in records {
        out.push_str(&format!("{:<width$}", id, width = ID_WIDTH));
        out.push_str(&pad_to_width(&item.name, NAME_WIDTH));
        out.push_str(&format!("{:<width$}", item.quantity, width = QUANTITY_WIDTH));
        out.push('\n');
    }

    out
}

/// Single-line diagnostic shown before routing to the invalid screen.
pub fn diagnostic(message: &str) -> String {
    format!("{}\n", message.lines().next().unwrap_or_default())
}

/// Messages one per line, colored by level when `color` is set.
pub fn messages(messages: &[CmdMessage], color: bool) -> String {
    messages
        .iter()
        .map(|message| {
            let line = diagnostic(&message.content);
            if !color {
                return line;
            }
            let styled = match message.level {
                MessageLevel::Success => line.green(),
                MessageLevel::Error => line.red(),
            };
            styled.to_string()
        })
        .collect()
}

/// Left-justifies `s` in `width` columns. Text that would leave no gap
/// before the next column is cut and marked with `…`.
fn pad_to_width(s: &str, width: usize) -> String {
    let text = if s.width() >= width {
        truncate_to_width(s, width.saturating_sub(1))
    } else {
        s.to_string()
    };
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}
