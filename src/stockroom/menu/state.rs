use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

/// Every screen the menu can be on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Main,
    View,
    Add,
    AddConsole,
    AddJson,
    AddCsv,
    Edit,
    ExportCsv,
    Invalid,
    Exit,
}

/// How a state consumes input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Reads a line and matches it against the option tokens.
    Options,
    /// Reads a line; `<name>,<qty>` adds an item, otherwise option tokens.
    AddItem,
    /// Reads a line; `<id>`, `<id>,<qty>` and `<id>,±<delta>` edit an item,
    /// otherwise option tokens.
    EditItem,
    /// Reads nothing and moves to the given state.
    Auto(State),
    /// Reads nothing; the session is over.
    Terminal,
}

/// Static description of a state: its token, option copy, and edges.
#[derive(Debug)]
pub struct StateEntry {
    pub token: &'static str,
    pub description: &'static str,
    pub options: &'static [State],
    pub input: InputMode,
}

impl StateEntry {
    /// Follows a bare option token to its target state.
    pub fn follow(&self, token: &str) -> Option<State> {
        self.options
            .iter()
            .copied()
            .find(|option| option.token() == token)
    }
}

static STATE_TABLE: Lazy<HashMap<State, StateEntry>> = Lazy::new(|| {
    use State::*;

    HashMap::from([
        (
            Main,
            StateEntry {
                token: "main",
                description: "Go to main menu",
                options: &[View, Add, Edit, ExportCsv, Exit],
                input: InputMode::Options,
            },
        ),
        (
            View,
            StateEntry {
                token: "view",
                description: "View all items",
                options: &[Main],
                input: InputMode::Options,
            },
        ),
        (
            Add,
            StateEntry {
                token: "add",
                description: "Add new item",
                options: &[AddConsole, AddJson, AddCsv, Main],
                input: InputMode::Options,
            },
        ),
        (
            AddConsole,
            StateEntry {
                token: "console",
                description: "Provide item data in console",
                options: &[Main],
                input: InputMode::AddItem,
            },
        ),
        (
            AddJson,
            StateEntry {
                token: "json",
                description: "Provide item data in json file",
                options: &[],
                input: InputMode::Auto(Invalid),
            },
        ),
        (
            AddCsv,
            StateEntry {
                token: "csv",
                description: "Provide item data in csv file",
                options: &[],
                input: InputMode::Auto(Invalid),
            },
        ),
        (
            Edit,
            StateEntry {
                token: "edit",
                description: "Edit item",
                options: &[Main],
                input: InputMode::EditItem,
            },
        ),
        (
            ExportCsv,
            StateEntry {
                token: "export",
                description: "Print all items for export",
                options: &[],
                input: InputMode::Auto(Main),
            },
        ),
        (
            Invalid,
            StateEntry {
                token: "inv",
                description: "Invalid entry",
                options: &[],
                input: InputMode::Auto(Main),
            },
        ),
        (
            Exit,
            StateEntry {
                token: "exit",
                description: "Exit app",
                options: &[],
                input: InputMode::Terminal,
            },
        ),
    ])
});

impl State {
    pub const ALL: [State; 10] = [
        State::Main,
        State::View,
        State::Add,
        State::AddConsole,
        State::AddJson,
        State::AddCsv,
        State::Edit,
        State::ExportCsv,
        State::Invalid,
        State::Exit,
    ];

    pub fn entry(self) -> &'static StateEntry {
        // The table is built from every variant, so the lookup cannot miss.
        &STATE_TABLE[&self]
    }

    pub fn token(self) -> &'static str {
        self.entry().token
    }

    pub fn description(self) -> &'static str {
        self.entry().description
    }

    pub fn options(self) -> &'static [State] {
        self.entry().options
    }

    pub fn input(self) -> InputMode {
        self.entry().input
    }

    /// Whether the session reads a line of input while on this state.
    pub fn reads_input(self) -> bool {
        matches!(
            self.input(),
            InputMode::Options | InputMode::AddItem | InputMode::EditItem
        )
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_state_has_an_entry() {
        for state in State::ALL {
            assert!(!state.token().is_empty());
            assert!(!state.description().is_empty());
        }
    }

    #[test]
    fn tokens_are_unique() {
        let tokens: HashSet<_> = State::ALL.iter().map(|s| s.token()).collect();
        assert_eq!(tokens.len(), State::ALL.len());
    }

    #[test]
    fn main_options_follow_their_tokens() {
        let entry = State::Main.entry();
        assert_eq!(entry.follow("view"), Some(State::View));
        assert_eq!(entry.follow("add"), Some(State::Add));
        assert_eq!(entry.follow("edit"), Some(State::Edit));
        assert_eq!(entry.follow("export"), Some(State::ExportCsv));
        assert_eq!(entry.follow("exit"), Some(State::Exit));
        assert_eq!(entry.follow("main"), None);
        assert_eq!(entry.follow("console"), None);
    }

    #[test]
    fn only_interactive_states_read_input() {
        let reading: Vec<_> = State::ALL
            .into_iter()
            .filter(|s| s.reads_input())
            .collect();
        assert_eq!(
            reading,
            vec![
                State::Main,
                State::View,
                State::Add,
                State::AddConsole,
                State::Edit
            ]
        );
    }

    #[test]
    fn transient_states_route_automatically() {
        assert_eq!(State::Invalid.input(), InputMode::Auto(State::Main));
        assert_eq!(State::ExportCsv.input(), InputMode::Auto(State::Main));
        assert_eq!(State::AddJson.input(), InputMode::Auto(State::Invalid));
        assert_eq!(State::AddCsv.input(), InputMode::Auto(State::Invalid));
        assert_eq!(State::Exit.input(), InputMode::Terminal);
    }
}
