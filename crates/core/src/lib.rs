//! termcalc-core - evaluation engine for the termcalc console calculator
//!
//! This crate provides functionality to:
//! - Read whitespace-delimited operand and operator tokens from any `BufRead` source
//! - Dispatch the four arithmetic operations with a division-by-zero guard
//! - Drive the read-validate-compute-print loop until the quit sentinel
pub mod error;
pub mod ops;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use error::{Error, Result};
pub use ops::Operator;
pub use session::{Calculation, Session, SessionOptions};
pub use token::{QUIT_SENTINEL, Token, TokenReader};
