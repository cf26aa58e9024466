//! # calc_core - Four-Function Calculator Engine
//!
//! `calc_core` is the computational heart of Abacus: a token-driven state
//! machine that turns digit, operator, decimal-point and clear keys into the
//! text of a single display field. It knows nothing about buttons, windows or
//! terminals; front ends translate their input into [`Key`]s and render
//! [`Calculator::display`] verbatim after every key.
//!
//! ## Design Philosophy
//!
//! - **Owned state**: each [`Calculator`] is an independent value, no globals
//! - **Closed token set**: digits, operators and commands are enums, so
//!   malformed input cannot reach the engine
//! - **Explicit errors**: arithmetic returns [`CalcResult`]; the engine turns
//!   failures into the `"Error"` display state
//! - **JSON-First**: engine state, keys and errors implement Serialize/Deserialize
//!
//! ## Quick Start
//!
//! ```rust
//! use calc_core::{parse_keys, Calculator};
//!
//! let mut calc = Calculator::new();
//! calc.press_all(parse_keys("2+3=").unwrap());
//! assert_eq!(calc.display(), "5");
//!
//! calc.press_all(parse_keys("*4=").unwrap());
//! assert_eq!(calc.display(), "20");
//! ```
//!
//! ## Modules
//!
//! - [`engine`] - The calculator state machine
//! - [`keys`] - Input tokens and keyboard mapping
//! - [`operator`] - Binary operators and arithmetic
//! - [`format`] - Result rounding and display formatting
//! - [`errors`] - Structured error types

pub mod engine;
pub mod errors;
pub mod format;
pub mod keys;
pub mod operator;

// Re-export commonly used types at crate root for convenience
pub use engine::{Calculator, CalculatorState, ERROR_DISPLAY};
pub use errors::{CalcError, CalcResult};
pub use keys::{keypad_layout, parse_keys, Digit, Key, KeyType};
pub use operator::Operator;
