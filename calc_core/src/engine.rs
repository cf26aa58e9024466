//! # Calculator Engine
//!
//! A small finite-state machine that consumes [`Key`] tokens and maintains the
//! text shown in the calculator display. One binary operation can be pending
//! at a time; there is no operator precedence and no history.
//!
//! ## State
//!
//! ```text
//! Calculator
//! ├── display: String                 (always a number, "0" or "Error")
//! ├── first_value: Option<String>     (left operand once an operator is chosen)
//! ├── operator: Option<Operator>      (pending operation)
//! ├── waiting_for_second_value: bool  (operator chosen, right operand not started)
//! └── previous_key: KeyType           (classification of the last key)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use calc_core::engine::Calculator;
//! use calc_core::keys::Digit;
//! use calc_core::operator::Operator;
//!
//! let mut calc = Calculator::new();
//! calc.digit(Digit::new(2).unwrap());
//! calc.operator(Operator::Add);
//! calc.digit(Digit::new(3).unwrap());
//! calc.calculate();
//! assert_eq!(calc.display(), "5");
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::errors::{CalcError, CalcResult};
use crate::format::format_result;
use crate::keys::{Digit, Key, KeyType};
use crate::operator::{evaluate, Operator};

/// Text shown while the calculator is in its error state
pub const ERROR_DISPLAY: &str = "Error";

/// Token-driven four-function calculator.
///
/// Every entry point runs to completion and leaves the state consistent.
/// Errors never escape: a failed evaluation shows `"Error"` until the user
/// clears it.
///
/// Deserializing goes through [`CalculatorState`], so a JSON snapshot that
/// describes an unreachable state is rejected instead of restored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CalculatorState")]
pub struct Calculator {
    display: String,
    first_value: Option<String>,
    operator: Option<Operator>,
    waiting_for_second_value: bool,
    previous_key: KeyType,
}

/// Unchecked mirror of [`Calculator`] used when restoring a snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct CalculatorState {
    pub display: String,
    pub first_value: Option<String>,
    pub operator: Option<Operator>,
    pub waiting_for_second_value: bool,
    pub previous_key: KeyType,
}

impl TryFrom<CalculatorState> for Calculator {
    type Error = CalcError;

    fn try_from(state: CalculatorState) -> CalcResult<Self> {
        if state.display.is_empty() {
            return Err(CalcError::invalid_snapshot("empty display"));
        }
        if state.previous_key == KeyType::Clear {
            return Err(CalcError::invalid_snapshot("engine was never initialized"));
        }
        if state.waiting_for_second_value && state.operator.is_none() {
            return Err(CalcError::invalid_snapshot(
                "waiting for a second value with no operator",
            ));
        }
        if state.operator.is_some() && state.first_value.is_none() {
            return Err(CalcError::invalid_snapshot("operator without a left operand"));
        }

        if state.display == ERROR_DISPLAY {
            if state.first_value.is_some() || state.operator.is_some() {
                return Err(CalcError::invalid_snapshot(
                    "error state with a pending operation",
                ));
            }
        } else if state.display != "-" && !is_number_text(&state.display) {
            return Err(CalcError::invalid_snapshot(format!(
                "display is not a number: '{}'",
                state.display
            )));
        }

        if let Some(first) = &state.first_value {
            if !is_number_text(first) {
                return Err(CalcError::invalid_snapshot(format!(
                    "left operand is not a number: '{}'",
                    first
                )));
            }
        }

        Ok(Calculator {
            display: state.display,
            first_value: state.first_value,
            operator: state.operator,
            waiting_for_second_value: state.waiting_for_second_value,
            previous_key: state.previous_key,
        })
    }
}

/// Plain decimal text as the engine writes it: optional `-`, digits, at most one `.`
fn is_number_text(text: &str) -> bool {
    let unsigned = text.strip_prefix('-').unwrap_or(text);
    unsigned.chars().any(|c| c.is_ascii_digit())
        && unsigned.chars().all(|c| c.is_ascii_digit() || c == '.')
        && unsigned.matches('.').count() <= 1
}

impl Calculator {
    /// Create a calculator showing `"0"` with nothing pending.
    pub fn new() -> Self {
        let mut calc = Calculator {
            display: "0".to_string(),
            first_value: None,
            operator: None,
            waiting_for_second_value: false,
            previous_key: KeyType::Clear,
        };
        calc.all_clear_action();
        calc
    }

    // ------------------------------------------------------------------
    // Read access
    // ------------------------------------------------------------------

    /// The text the display should show
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Left operand captured when an operator was chosen
    pub fn first_value(&self) -> Option<&str> {
        self.first_value.as_deref()
    }

    /// Operation waiting for its right operand
    pub fn pending_operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True between choosing an operator and starting the right operand
    pub fn is_waiting_for_second_value(&self) -> bool {
        self.waiting_for_second_value
    }

    /// Classification of the most recently processed key
    pub fn previous_key(&self) -> KeyType {
        self.previous_key
    }

    /// True while the display is locked to `"Error"`
    pub fn is_error(&self) -> bool {
        self.display == ERROR_DISPLAY
    }

    /// Pending left operand and operator, e.g. `"12 ×"`.
    ///
    /// Empty when no operation is pending. Meant for a secondary display line.
    pub fn expression(&self) -> String {
        match (&self.first_value, self.operator) {
            (Some(first), Some(op)) => format!("{} {}", first, op),
            _ => String::new(),
        }
    }

    // ------------------------------------------------------------------
    // Entry points
    // ------------------------------------------------------------------

    /// Type a digit
    pub fn digit(&mut self, digit: Digit) {
        self.press(Key::Digit(digit));
    }

    /// Type the decimal point
    pub fn decimal(&mut self) {
        self.press(Key::Decimal);
    }

    /// Choose a binary operator
    pub fn operator(&mut self, op: Operator) {
        self.press(Key::Operator(op));
    }

    /// The `=` key
    pub fn calculate(&mut self) {
        self.press(Key::Calculate);
    }

    /// Reset everything to `"0"`
    pub fn all_clear(&mut self) {
        self.press(Key::AllClear);
    }

    /// Clear the current entry (backspace, or all-clear after `=`/error)
    pub fn clear_entry(&mut self) {
        self.press(Key::ClearEntry);
    }

    /// Process one key.
    ///
    /// While the display shows `"Error"`, only all-clear and clear-entry are
    /// honoured, and clear-entry acts as all-clear.
    pub fn press(&mut self, key: Key) {
        if self.is_error() {
            match key {
                Key::AllClear | Key::ClearEntry => self.all_clear_action(),
                _ => trace!(%key, "ignored while in error state"),
            }
            return;
        }

        match key {
            Key::Digit(d) => self.input_digit(d),
            Key::Decimal => self.input_decimal(),
            Key::Operator(op) => self.handle_operator(op),
            Key::Calculate => self.handle_calculate(),
            Key::AllClear => self.all_clear_action(),
            Key::ClearEntry => self.clear_entry_action(),
        }

        debug!(%key, display = %self.display, "key processed");
    }

    /// Process a sequence of keys in order.
    pub fn press_all(&mut self, keys: impl IntoIterator<Item = Key>) {
        for key in keys {
            self.press(key);
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn starts_new_number(&self) -> bool {
        self.waiting_for_second_value
            || matches!(self.previous_key, KeyType::Calculate | KeyType::Operator)
    }

    fn input_digit(&mut self, digit: Digit) {
        if self.starts_new_number() {
            self.display = digit.to_string();
            self.waiting_for_second_value = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit.as_char());
        }
        self.previous_key = KeyType::Number;
    }

    fn input_decimal(&mut self) {
        if self.starts_new_number() {
            self.display = "0.".to_string();
            self.waiting_for_second_value = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self.previous_key = KeyType::Decimal;
    }

    fn handle_operator(&mut self, next: Operator) {
        // Operator pressed twice in a row: the later one wins
        if self.operator.is_some() && self.waiting_for_second_value {
            self.operator = Some(next);
            self.previous_key = KeyType::Operator;
            return;
        }

        let pending = match (self.first_value.as_deref(), self.operator) {
            (Some(first), Some(op)) => Some(evaluate(first, op, &self.display)),
            _ => None,
        };

        match pending {
            Some(Ok(result)) => {
                let text = format_result(result);
                self.display = text.clone();
                self.first_value = Some(text);
            }
            Some(Err(err)) => {
                self.enter_error(err);
                return;
            }
            // Fresh start, or chaining after `=` cleared the operator
            None => self.first_value = Some(self.display.clone()),
        }

        self.operator = Some(next);
        self.waiting_for_second_value = true;
        self.previous_key = KeyType::Operator;
    }

    fn handle_calculate(&mut self) {
        let (Some(first), Some(op)) = (self.first_value.as_deref(), self.operator) else {
            return;
        };

        // "5 + =" repeats the left operand: 5 + 5
        let second = if self.waiting_for_second_value {
            first
        } else {
            self.display.as_str()
        };

        let result = evaluate(first, op, second);
        match result {
            Ok(result) => self.finish_calculation(result),
            Err(err) => self.enter_error(err),
        }
    }

    fn finish_calculation(&mut self, result: f64) {
        let text = format_result(result);
        self.display = text.clone();
        self.first_value = Some(text);
        self.operator = None;
        self.waiting_for_second_value = false;
        self.previous_key = KeyType::Calculate;
    }

    fn all_clear_action(&mut self) {
        self.display = "0".to_string();
        self.reset_operation();
        self.previous_key = KeyType::AllClear;
    }

    fn clear_entry_action(&mut self) {
        if self.previous_key == KeyType::Calculate {
            self.all_clear_action();
            return;
        }

        if self.previous_key == KeyType::Operator && self.waiting_for_second_value {
            // Keep the left operand and operator, restart the right operand
            self.display = "0".to_string();
        } else if self.display.chars().count() > 1 {
            self.display.pop();
        } else {
            self.display = "0".to_string();
        }
        self.previous_key = KeyType::ClearEntry;
    }

    fn enter_error(&mut self, err: CalcError) {
        warn!(error = %err, code = err.error_code(), "calculation failed");
        self.display = ERROR_DISPLAY.to_string();
        self.reset_operation();
        self.previous_key = KeyType::Error;
    }

    fn reset_operation(&mut self) {
        self.first_value = None;
        self.operator = None;
        self.waiting_for_second_value = false;
    }

    // ------------------------------------------------------------------
    // Snapshots
    // ------------------------------------------------------------------

    /// Serialize the engine state to JSON.
    pub fn to_json(&self) -> CalcResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Calculator::new()
    }
}
