//! Input tokens and keyboard mapping
//!
//! Front ends translate a button activation or a key press into exactly one
//! [`Key`]. The engine only ever sees this closed token set, so malformed
//! input cannot reach it.
//!
//! ## Keyboard mapping
//!
//! | Key name                   | Token                    |
//! |----------------------------|--------------------------|
//! | `0` .. `9`                 | [`Key::Digit`]           |
//! | `.`                        | [`Key::Decimal`]         |
//! | `+` `-` `*` `/`            | [`Key::Operator`]        |
//! | `Enter`, `=`               | [`Key::Calculate`]       |
//! | `Escape`                   | [`Key::AllClear`]        |
//! | `Backspace`, `c`, `C`      | [`Key::ClearEntry`]      |

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};
use crate::operator::Operator;

/// A single decimal digit, `0..=9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Digit(u8);

impl Digit {
    /// Create a digit, returning `None` outside `0..=9`
    pub fn new(value: u8) -> Option<Digit> {
        (value <= 9).then_some(Digit(value))
    }

    /// Numeric value of the digit
    pub fn value(self) -> u8 {
        self.0
    }

    /// ASCII character of the digit
    pub fn as_char(self) -> char {
        char::from(b'0' + self.0)
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Digit> {
        (0..=9).map(Digit)
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(c: char) -> CalcResult<Self> {
        c.to_digit(10)
            .map(|d| Digit(d as u8))
            .ok_or_else(|| CalcError::unknown_key(c.to_string()))
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> CalcResult<Self> {
        Digit::new(value).ok_or_else(|| CalcError::unknown_key(value.to_string()))
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.0
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One input token for the calculator engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "key", content = "value", rename_all = "snake_case")]
pub enum Key {
    Digit(Digit),
    Decimal,
    Operator(Operator),
    Calculate,
    AllClear,
    ClearEntry,
}

impl Key {
    /// Map a keyboard key name (as reported by a windowing toolkit) to a token.
    ///
    /// Returns `None` for keys the calculator ignores.
    ///
    /// # Example
    /// ```
    /// use calc_core::keys::Key;
    ///
    /// assert_eq!(Key::from_keyboard("Enter"), Some(Key::Calculate));
    /// assert_eq!(Key::from_keyboard("Backspace"), Some(Key::ClearEntry));
    /// assert_eq!(Key::from_keyboard("Tab"), None);
    /// ```
    pub fn from_keyboard(name: &str) -> Option<Key> {
        match name {
            "Enter" => Some(Key::Calculate),
            "Escape" => Some(Key::AllClear),
            "Backspace" => Some(Key::ClearEntry),
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::from_char(c),
                    _ => None,
                }
            }
        }
    }

    /// Map a single typed character to a token.
    ///
    /// Besides the printable keys, `'\n'`/`'\r'` act as Enter and `'\u{1b}'`
    /// as Escape so that key strings can be replayed from text.
    pub fn from_char(c: char) -> Option<Key> {
        match c {
            '0'..='9' => Digit::try_from(c).ok().map(Key::Digit),
            '.' => Some(Key::Decimal),
            '=' | '\n' | '\r' => Some(Key::Calculate),
            '\u{1b}' => Some(Key::AllClear),
            'c' | 'C' | '\u{8}' => Some(Key::ClearEntry),
            _ => Operator::from_key_char(c).map(Key::Operator),
        }
    }

    /// Caption for the on-screen button
    pub fn label(&self) -> String {
        match self {
            Key::Digit(d) => d.to_string(),
            Key::Decimal => ".".to_string(),
            Key::Operator(op) => op.symbol().to_string(),
            Key::Calculate => "=".to_string(),
            Key::AllClear => "AC".to_string(),
            Key::ClearEntry => "C".to_string(),
        }
    }

    /// Shorthand for `Key::Digit` from a character, panicking on non-digits.
    #[cfg(test)]
    pub(crate) fn digit(c: char) -> Key {
        Key::Digit(Digit::try_from(c).unwrap())
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Button layout of the keypad, top row first.
///
/// ```text
/// AC  C  ÷  ×
///  7  8  9  −
///  4  5  6  +
///  1  2  3  =
///  0  .
/// ```
pub fn keypad_layout() -> Vec<Vec<Key>> {
    let d = |v| Key::Digit(Digit(v));
    vec![
        vec![
            Key::AllClear,
            Key::ClearEntry,
            Key::Operator(Operator::Divide),
            Key::Operator(Operator::Multiply),
        ],
        vec![d(7), d(8), d(9), Key::Operator(Operator::Subtract)],
        vec![d(4), d(5), d(6), Key::Operator(Operator::Add)],
        vec![d(1), d(2), d(3), Key::Calculate],
        vec![d(0), Key::Decimal],
    ]
}

/// How the previous key press was classified.
///
/// Drives the context-sensitive behavior of the next key: a digit after `=`
/// starts a new number, a second operator replaces the first, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyType {
    Number,
    Decimal,
    Operator,
    Calculate,
    /// State before the engine has been initialized by its first all-clear
    Clear,
    AllClear,
    ClearEntry,
    Error,
}

/// Parse a string of typed characters into tokens.
///
/// Whitespace is skipped; any other unmapped character is an error.
///
/// # Example
/// ```
/// use calc_core::keys::{parse_keys, Key};
/// use calc_core::operator::Operator;
///
/// let keys = parse_keys("2 * 3 =").unwrap();
/// assert_eq!(keys.len(), 4);
/// assert_eq!(keys[1], Key::Operator(Operator::Multiply));
/// ```
pub fn parse_keys(input: &str) -> CalcResult<Vec<Key>> {
    input
        .chars()
        .filter(|c| !matches!(c, ' ' | '\t'))
        .map(|c| Key::from_char(c).ok_or_else(|| CalcError::unknown_key(c.to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Digit::new(9).map(Digit::value), Some(9));
        assert_eq!(Digit::new(10), None);
        assert_eq!(Digit::all().count(), 10);
        assert!(Digit::try_from('a').is_err());
        assert_eq!(Digit::try_from('7').unwrap().as_char(), '7');
    }

    #[test]
    fn test_keyboard_mapping() {
        assert_eq!(Key::from_keyboard("5"), Some(Key::digit('5')));
        assert_eq!(Key::from_keyboard("."), Some(Key::Decimal));
        assert_eq!(Key::from_keyboard("+"), Some(Key::Operator(Operator::Add)));
        assert_eq!(Key::from_keyboard("-"), Some(Key::Operator(Operator::Subtract)));
        assert_eq!(Key::from_keyboard("*"), Some(Key::Operator(Operator::Multiply)));
        assert_eq!(Key::from_keyboard("/"), Some(Key::Operator(Operator::Divide)));
        assert_eq!(Key::from_keyboard("="), Some(Key::Calculate));
        assert_eq!(Key::from_keyboard("Enter"), Some(Key::Calculate));
        assert_eq!(Key::from_keyboard("Escape"), Some(Key::AllClear));
        assert_eq!(Key::from_keyboard("Backspace"), Some(Key::ClearEntry));
        assert_eq!(Key::from_keyboard("c"), Some(Key::ClearEntry));
        assert_eq!(Key::from_keyboard("C"), Some(Key::ClearEntry));
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        assert_eq!(Key::from_keyboard("x"), None);
        assert_eq!(Key::from_keyboard("Shift"), None);
        assert_eq!(Key::from_keyboard("12"), None);
        assert_eq!(Key::from_keyboard(""), None);
    }

    #[test]
    fn test_parse_keys() {
        let keys = parse_keys("1.5+2=").unwrap();
        assert_eq!(
            keys,
            vec![
                Key::digit('1'),
                Key::Decimal,
                Key::digit('5'),
                Key::Operator(Operator::Add),
                Key::digit('2'),
                Key::Calculate,
            ]
        );
    }

    #[test]
    fn test_parse_keys_control_characters() {
        assert_eq!(
            parse_keys("5+\u{1b}").unwrap(),
            vec![Key::digit('5'), Key::Operator(Operator::Add), Key::AllClear]
        );
        assert_eq!(parse_keys("\r\n").unwrap(), vec![Key::Calculate, Key::Calculate]);
        assert_eq!(parse_keys("\u{8}").unwrap(), vec![Key::ClearEntry]);
    }

    #[test]
    fn test_parse_keys_rejects_unknown() {
        assert_eq!(parse_keys("2^3"), Err(CalcError::unknown_key("^")));
    }

    #[test]
    fn test_labels() {
        assert_eq!(Key::AllClear.label(), "AC");
        assert_eq!(Key::ClearEntry.label(), "C");
        assert_eq!(Key::Operator(Operator::Divide).label(), "÷");
        assert_eq!(Key::digit('0').to_string(), "0");
    }

    #[test]
    fn test_keypad_covers_every_key() {
        let layout = keypad_layout();
        let all: Vec<Key> = layout.iter().flatten().copied().collect();
        assert_eq!(all.len(), 18);
        assert!(Digit::all().all(|d| all.contains(&Key::Digit(d))));
        assert!(Operator::ALL.iter().all(|op| all.contains(&Key::Operator(*op))));
        for key in [Key::Decimal, Key::Calculate, Key::AllClear, Key::ClearEntry] {
            assert!(all.contains(&key));
        }
    }

    #[test]
    fn test_key_serialization() {
        let json = serde_json::to_string(&Key::digit('4')).unwrap();
        assert_eq!(json, r#"{"key":"digit","value":4}"#);
        let roundtrip: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, Key::digit('4'));
        assert!(serde_json::from_str::<Key>(r#"{"key":"digit","value":12}"#).is_err());
    }
}
