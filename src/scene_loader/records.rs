use std::{iter::Peekable, str::Lines};

use glam::Vec3;
use thiserror::Error;

/// Problems with the layout of a scene text file, as opposed to the values in
/// it. Line numbers start at 1.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SyntaxError {
    #[error("unknown light type {keyword:?} on line {line}")]
    UnknownLightType { line: usize, keyword: String },
    #[error("expected {field} after line {line} but the file ended")]
    UnexpectedEnd { line: usize, field: &'static str },
    #[error("expected {expected} values for {field} on line {line} but found {found}")]
    MissingValues {
        line: usize,
        field: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("{token:?} is not a valid number for {field} on line {line}")]
    InvalidNumber {
        line: usize,
        field: &'static str,
        token: String,
    },
}

/// Reads fixed-shape records from scene text.
///
/// Blank lines are skipped. Numeric fields are read as whitespace separated
/// tokens and may wrap onto following lines. Once a field has all of its
/// values, the rest of the line holding its last value is ignored, so every
/// field starts on a fresh line.
pub struct RecordReader<'a> {
    lines: Peekable<std::iter::Enumerate<Lines<'a>>>,
    /// Number of the last line consumed, or 0 before the first read.
    line_number: usize,
}

impl<'a> RecordReader<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            lines: text.lines().enumerate().peekable(),
            line_number: 0,
        }
    }

    /// Number of the last line consumed.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Returns true when only blank lines remain.
    pub fn is_at_end(&mut self) -> bool {
        self.skip_blank_lines();
        self.lines.peek().is_none()
    }

    /// Consume the next non-blank line and return it with surrounding whitespace
    /// removed, or `None` at the end of the text.
    pub fn next_line(&mut self) -> Option<&'a str> {
        self.skip_blank_lines();

        let (index, line) = self.lines.next()?;
        self.line_number = index + 1;
        Some(line.trim())
    }

    /// Read the next line as a single text value. Used for values like file
    /// paths that may contain spaces.
    pub fn read_text(&mut self, field: &'static str) -> Result<&'a str, SyntaxError> {
        self.next_line().ok_or(SyntaxError::UnexpectedEnd {
            line: self.line_number,
            field,
        })
    }

    /// Read `N` numbers starting at the next line, continuing onto later lines
    /// until all `N` are found.
    pub fn read_floats<const N: usize>(
        &mut self,
        field: &'static str,
    ) -> Result<[f32; N], SyntaxError> {
        let mut tokens = self.read_text(field)?.split_whitespace();
        let mut values = [0.0; N];

        for (found, value) in values.iter_mut().enumerate() {
            let token = loop {
                if let Some(token) = tokens.next() {
                    break token;
                }

                tokens = self
                    .next_line()
                    .ok_or(SyntaxError::MissingValues {
                        line: self.line_number,
                        field,
                        expected: N,
                        found,
                    })?
                    .split_whitespace();
            };

            *value = parse_number(token).ok_or_else(|| SyntaxError::InvalidNumber {
                line: self.line_number,
                field,
                token: token.to_string(),
            })?;
        }

        Ok(values)
    }

    /// Read three numbers, see `read_floats`.
    pub fn read_vec3(&mut self, field: &'static str) -> Result<Vec3, SyntaxError> {
        self.read_floats::<3>(field).map(Vec3::from)
    }

    fn skip_blank_lines(&mut self) {
        while let Some((_, line)) = self.lines.peek() {
            if !line.trim().is_empty() {
                break;
            }

            self.lines.next();
        }
    }
}

/// Parses a finite decimal number. Infinities and NaN are rejected.
fn parse_number(token: &str) -> Option<f32> {
    token.parse::<f32>().ok().filter(|v| v.is_finite())
}
