//! Expression controller
//!
//! Turns keypad actions into edits of the display text. The controller keeps
//! no state of its own: the display's text is the whole expression.

use tracing::trace;

use crate::eval::ERROR_SENTINEL;

/// The view side of the calculator, as the controller sees it.
pub trait Display {
    fn text(&self) -> &str;

    /// Replace the text and take input focus.
    fn set_text(&mut self, text: String);

    fn clear(&mut self) {
        self.set_text(String::new());
    }
}

/// What a key or button asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Append a symbol (`7`, `00`, `.`, `(`, `+`, ...) to the expression.
    Append(&'static str),
    Clear,
    Submit,
}

#[derive(Clone, Copy)]
pub struct Controller {
    evaluate: fn(&str) -> String,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(crate::eval::evaluate)
    }
}

impl Controller {
    pub fn new(evaluate: fn(&str) -> String) -> Self {
        Self { evaluate }
    }

    pub fn dispatch(&self, action: Action, display: &mut impl Display) {
        let text = display.text();
        trace!(?action, text, "dispatch");
        match action {
            Action::Append(symbol) => self.append(symbol, display),
            Action::Clear => self.clear(display),
            Action::Submit => self.submit(display),
        }
    }

    /// A stale error is discarded before the symbol goes in.
    pub fn append(&self, symbol: &str, display: &mut impl Display) {
        if display.text() == ERROR_SENTINEL {
            display.clear();
        }
        let mut expression = display.text().to_string();
        expression.push_str(symbol);
        display.set_text(expression);
    }

    pub fn clear(&self, display: &mut impl Display) {
        display.clear();
    }

    pub fn submit(&self, display: &mut impl Display) {
        let result = (self.evaluate)(display.text());
        display.set_text(result);
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// In-memory display that counts focus grabs.
    #[derive(Default)]
    pub(crate) struct MockDisplay {
        pub text: String,
        pub focus_grabs: usize,
    }

    impl MockDisplay {
        pub fn with_text(text: &str) -> Self {
            Self { text: text.to_string(), focus_grabs: 0 }
        }
    }

    impl Display for MockDisplay {
        fn text(&self) -> &str {
            &self.text
        }

        fn set_text(&mut self, text: String) {
            self.text = text;
            self.focus_grabs += 1;
        }
    }

    fn type_keys(controller: &Controller, display: &mut MockDisplay, keys: &[&'static str]) {
        for key in keys {
            controller.dispatch(Action::Append(*key), display);
        }
    }

    #[test]
    fn test_starts_empty() {
        let display = MockDisplay::default();
        assert_eq!(display.text(), "");
    }

    #[test]
    fn test_append_builds_expression() {
        let controller = Controller::default();
        let mut display = MockDisplay::default();
        type_keys(&controller, &mut display, &["1", "2", "+", "(", "3", ")"]);
        assert_eq!(display.text, "12+(3)");
    }

    #[test]
    fn test_append_grabs_focus() {
        let controller = Controller::default();
        let mut display = MockDisplay::default();
        controller.append("5", &mut display);
        assert!(display.focus_grabs > 0);
    }

    #[test]
    fn test_double_zero_appends_both() {
        let controller = Controller::default();
        let mut display = MockDisplay::default();
        controller.dispatch(Action::Append("00"), &mut display);
        assert_eq!(display.text, "00");
    }

    #[test]
    fn test_error_is_discarded_on_key() {
        let controller = Controller::default();
        let mut display = MockDisplay::with_text(ERROR_SENTINEL);
        controller.dispatch(Action::Append("5"), &mut display);
        assert_eq!(display.text, "5");
    }

    #[test]
    fn test_result_is_extended_on_key() {
        let controller = Controller::default();
        let mut display = MockDisplay::with_text("2+3");
        controller.dispatch(Action::Submit, &mut display);
        assert_eq!(display.text, "5");
        controller.dispatch(Action::Append("*"), &mut display);
        controller.dispatch(Action::Append("2"), &mut display);
        assert_eq!(display.text, "5*2");
    }

    #[test]
    fn test_clear_from_editing_and_result() {
        let controller = Controller::default();

        let mut editing = MockDisplay::with_text("12+");
        controller.dispatch(Action::Clear, &mut editing);
        assert_eq!(editing.text, "");

        let mut result = MockDisplay::with_text("1/0");
        controller.dispatch(Action::Submit, &mut result);
        assert_eq!(result.text, ERROR_SENTINEL);
        controller.dispatch(Action::Clear, &mut result);
        assert_eq!(result.text, "");
    }

    #[test]
    fn test_submit_writes_result() {
        let controller = Controller::default();
        let mut display = MockDisplay::default();
        type_keys(&controller, &mut display, &["2", "+", "3", "*", "4"]);
        controller.dispatch(Action::Submit, &mut display);
        assert_eq!(display.text, "14");
    }

    #[test]
    fn test_submit_error_then_recover() {
        let controller = Controller::default();
        let mut display = MockDisplay::default();
        type_keys(&controller, &mut display, &["2", "+"]);
        controller.dispatch(Action::Submit, &mut display);
        assert_eq!(display.text, ERROR_SENTINEL);

        type_keys(&controller, &mut display, &["7"]);
        assert_eq!(display.text, "7");
    }

    #[test]
    fn test_submit_empty_is_error() {
        let controller = Controller::default();
        let mut display = MockDisplay::default();
        controller.submit(&mut display);
        assert_eq!(display.text, ERROR_SENTINEL);
    }

    #[test]
    fn test_dispatch_with_trace_enabled() {
        slowcore::logging::init("slowcalc=trace");
        let controller = Controller::default();
        let mut display = MockDisplay::default();
        controller.dispatch(Action::Append("9"), &mut display);
        controller.dispatch(Action::Submit, &mut display);
        assert_eq!(display.text, "9");
    }

    #[test]
    fn test_custom_evaluator() {
        let controller = Controller::new(|expr| expr.chars().rev().collect());
        let mut display = MockDisplay::with_text("1+2");
        controller.submit(&mut display);
        assert_eq!(display.text, "2+1");
    }

    proptest::proptest! {
        /// The sentinel never leaks into the next expression.
        #[test]
        fn prop_error_never_prefixes_input(index in 0usize..20) {
            let labels: Vec<&'static str> = crate::keypad::KEYPAD.iter().flatten().copied().collect();
            let label = labels[index];
            let controller = Controller::default();
            let mut display = MockDisplay::with_text(ERROR_SENTINEL);
            controller.append(label, &mut display);
            assert_eq!(display.text, label);
        }
    }
}
