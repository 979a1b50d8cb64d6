use std::fmt;
use std::io::{BufRead, Write};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::ops::Operator;
use crate::token::{Token, TokenReader};

/// One successfully evaluated expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub lhs: f64,
    pub op: Operator,
    pub rhs: f64,
    pub result: f64,
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.lhs,
            self.op.symbol(),
            self.rhs,
            self.result
        )
    }
}

/// Controls the interactive chrome around the loop
#[derive(Debug, Clone, Copy)]
pub struct SessionOptions {
    /// Print the banner before the first prompt
    pub banner: bool,
    /// Print per-step prompts and the goodbye line
    pub prompts: bool,
}

impl Default for SessionOptions {
    fn default() -> Self {
        SessionOptions {
            banner: true,
            prompts: true,
        }
    }
}

/// The read-validate-compute-print loop.
///
/// Generic over its streams: results go to `out`, error conditions to
/// `err`, matching the original cout/cerr split. The loop has exactly
/// two states - running and terminated - and every calculator error is
/// a self-loop back into running.
pub struct Session<R, O, E> {
    tokens: TokenReader<R>,
    out: O,
    err: E,
    options: SessionOptions,
}

impl<R: BufRead, O: Write, E: Write> Session<R, O, E> {
    pub fn new(input: R, out: O, err: E, options: SessionOptions) -> Self {
        Session {
            tokens: TokenReader::new(input),
            out,
            err,
            options,
        }
    }

    /// Run until the quit sentinel is entered (or the input source is
    /// exhausted). Only stream failures escape; invalid operands,
    /// invalid operators and division by zero are reported and the
    /// next iteration begins.
    pub fn run(&mut self) -> Result<()> {
        if self.options.banner {
            writeln!(self.out, "termcalc - console calculator")?;
            writeln!(self.out, "-----------------------------")?;
        }

        loop {
            self.prompt("\nEnter first number (or 'q' to quit): ")?;
            let Some(first) = self.tokens.next_token()? else {
                break;
            };
            let lhs = match Token::parse(&first) {
                Token::Number(n) => n,
                Token::Quit => {
                    debug!("quit sentinel received");
                    if self.options.prompts {
                        writeln!(self.out, "Exiting calculator.")?;
                    }
                    break;
                }
                Token::Invalid(raw) => {
                    self.report(&Error::InvalidNumber(raw))?;
                    self.tokens.discard_line();
                    continue;
                }
            };

            self.prompt("Enter operator (+, -, *, /): ")?;
            let Some(op_token) = self.tokens.next_token()? else {
                break;
            };
            // Validity is deferred to dispatch; only the first
            // character counts, like a single-char read would.
            let op_char = op_token.chars().next().unwrap_or(' ');

            self.prompt("Enter second number: ")?;
            let Some(second) = self.tokens.next_token()? else {
                break;
            };
            // No sentinel check here - only the first operand quits
            let rhs = match Token::parse(&second) {
                Token::Number(n) => n,
                Token::Quit | Token::Invalid(_) => {
                    self.report(&Error::InvalidNumber(second))?;
                    self.tokens.discard_line();
                    continue;
                }
            };

            match self.dispatch(lhs, op_char, rhs) {
                Ok(calc) => writeln!(self.out, "{}", calc)?,
                Err(e) if e.is_recoverable() => self.report(&e)?,
                Err(e) => return Err(e),
            }
            // Division by zero takes this same path: no result line,
            // but the trailing input is still discarded.
            self.tokens.discard_line();
        }

        Ok(())
    }

    fn dispatch(&self, lhs: f64, op_char: char, rhs: f64) -> Result<Calculation> {
        let op = Operator::try_from(op_char)?;
        let result = op.apply(lhs, rhs)?;
        let calc = Calculation {
            lhs,
            op,
            rhs,
            result,
        };
        debug!(%calc, "evaluated expression");
        Ok(calc)
    }

    fn prompt(&mut self, text: &str) -> Result<()> {
        if self.options.prompts {
            write!(self.out, "{}", text)?;
            self.out.flush()?;
        }
        Ok(())
    }

    fn report(&mut self, error: &Error) -> Result<()> {
        debug!(error = %error, "recoverable input error");
        writeln!(self.err, "error: {}", error)?;
        Ok(())
    }
}
