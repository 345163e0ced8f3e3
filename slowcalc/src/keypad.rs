//! Keypad layout and the label → action dispatch table

use std::collections::HashMap;

use egui::Key;

use crate::controller::Action;

/// Key labels, row by row, as they appear in the window.
pub const KEYPAD: [[&str; 5]; 4] = [
    ["7", "8", "9", "/", "("],
    ["4", "5", "6", "*", ")"],
    ["1", "2", "3", "-", "C"],
    ["0", "00", ".", "+", "="],
];

pub const CLEAR_LABEL: &str = "C";
pub const SUBMIT_LABEL: &str = "=";

/// Maps every keypad label to the action it triggers. Built once at start-up.
pub struct ButtonMap {
    actions: HashMap<&'static str, Action>,
}

impl Default for ButtonMap {
    fn default() -> Self {
        Self::new()
    }
}

impl ButtonMap {
    pub fn new() -> Self {
        let actions = KEYPAD
            .iter()
            .flatten()
            .map(|&label| (label, action_for_label(label)))
            .collect();
        Self { actions }
    }

    pub fn action(&self, label: &str) -> Option<Action> {
        self.actions.get(label).copied()
    }

    /// Rows of `(label, action)` in layout order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<(&'static str, Action)>> + '_ {
        KEYPAD.iter().map(move |row| {
            row.iter()
                .filter_map(|&label| self.action(label).map(|action| (label, action)))
                .collect()
        })
    }
}

fn action_for_label(label: &'static str) -> Action {
    match label {
        CLEAR_LABEL => Action::Clear,
        SUBMIT_LABEL => Action::Submit,
        symbol => Action::Append(symbol),
    }
}

/// Action for a typed character, if it is one the keypad knows.
pub fn action_for_char(ch: char) -> Option<Action> {
    let symbol = match ch {
        '0' => "0",
        '1' => "1",
        '2' => "2",
        '3' => "3",
        '4' => "4",
        '5' => "5",
        '6' => "6",
        '7' => "7",
        '8' => "8",
        '9' => "9",
        '.' => ".",
        '(' => "(",
        ')' => ")",
        '+' => "+",
        '-' => "-",
        '*' => "*",
        '/' => "/",
        '=' => return Some(Action::Submit),
        'c' | 'C' => return Some(Action::Clear),
        _ => return None,
    };
    Some(Action::Append(symbol))
}

/// Action for a non-text key. Enter only submits while the display has focus.
pub fn action_for_key(key: Key, display_focused: bool) -> Option<Action> {
    match key {
        Key::Enter if display_focused => Some(Action::Submit),
        Key::Escape => Some(Action::Clear),
        _ => None,
    }
}
