use std::io::{self, BufRead};

/// The literal token that ends the session when entered in place of
/// the first operand. Matched case-insensitively.
pub const QUIT_SENTINEL: &str = "q";

/// Classification of a raw operand token
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Parsed successfully as a number
    Number(f64),
    /// The quit sentinel ("q"/"Q")
    Quit,
    /// Neither a number nor the sentinel; carries the raw text for reporting
    Invalid(String),
}

impl Token {
    /// Classify a raw token using the two-step strategy: attempt a
    /// numeric parse first, and only on failure fall back to the
    /// sentinel check. The sentinel is unreachable from numeric input.
    pub fn parse(raw: &str) -> Token {
        match raw.parse::<f64>() {
            Ok(n) => Token::Number(n),
            Err(_) if raw.eq_ignore_ascii_case(QUIT_SENTINEL) => Token::Quit,
            Err(_) => Token::Invalid(raw.to_string()),
        }
    }
}

/// Reads whitespace/newline-delimited tokens from a buffered source,
/// keeping track of the current line so that unconsumed trailing input
/// can be discarded between iterations.
#[derive(Debug)]
pub struct TokenReader<R> {
    input: R,
    line: String,
    pos: usize,
}

impl<R: BufRead> TokenReader<R> {
    pub fn new(input: R) -> Self {
        TokenReader {
            input,
            line: String::new(),
            pos: 0,
        }
    }

    /// Next token, pulling further lines from the source as needed.
    /// Returns `None` once the source is exhausted.
    pub fn next_token(&mut self) -> io::Result<Option<String>> {
        loop {
            let rest = &self.line[self.pos..];
            let trimmed = rest.trim_start();
            if !trimmed.is_empty() {
                let start = self.pos + (rest.len() - trimmed.len());
                let end = trimmed
                    .find(char::is_whitespace)
                    .map(|i| start + i)
                    .unwrap_or(self.line.len());
                let token = self.line[start..end].to_string();
                self.pos = end;
                return Ok(Some(token));
            }

            self.line.clear();
            self.pos = 0;
            if self.input.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
        }
    }

    /// Drop whatever remains of the current line so the next read
    /// starts on fresh input.
    pub fn discard_line(&mut self) {
        self.line.clear();
        self.pos = 0;
    }
}
