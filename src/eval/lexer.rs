//! Tokenizer for arithmetic expressions.

use crate::core::Operator;
use crate::eval::error::EvalError;

/// A lexical token with the byte position it started at.
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    Number(f64),
    Operator(Operator),
}

impl Token {
    pub(crate) fn describe(&self) -> String {
        match &self.kind {
            TokenKind::Number(value) => value.to_string(),
            TokenKind::Operator(op) => op.symbol().to_string(),
        }
    }
}

/// Split an expression into numbers and operators.
///
/// Only decimal literals (`12`, `1.5`, `.5`, `5.`) and `+ - * /` are
/// accepted. ASCII whitespace is skipped.
pub fn tokenize(input: &str) -> Result<Vec<Token>, EvalError> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        let c = bytes[pos];

        if c.is_ascii_whitespace() {
            pos += 1;
            continue;
        }

        if let Some(op) = Operator::from_char(c as char) {
            tokens.push(Token {
                kind: TokenKind::Operator(op),
                position: pos,
            });
            pos += 1;
            continue;
        }

        if c.is_ascii_digit() || c == b'.' {
            let start = pos;
            let mut seen_point = false;
            while pos < bytes.len() && (bytes[pos].is_ascii_digit() || bytes[pos] == b'.') {
                if bytes[pos] == b'.' {
                    if seen_point {
                        return Err(EvalError::MalformedNumber {
                            text: input[start..=pos].to_string(),
                            position: start,
                        });
                    }
                    seen_point = true;
                }
                pos += 1;
            }

            let text = &input[start..pos];
            tokens.push(Token {
                kind: TokenKind::Number(parse_literal(text, start)?),
                position: start,
            });
            continue;
        }

        // Report the full (possibly multi-byte) character
        let ch = input[pos..].chars().next().unwrap_or('\u{FFFD}');
        return Err(EvalError::UnexpectedCharacter { ch, position: pos });
    }

    Ok(tokens)
}

fn parse_literal(text: &str, position: usize) -> Result<f64, EvalError> {
    if text == "." {
        return Err(EvalError::MalformedNumber {
            text: text.to_string(),
            position,
        });
    }

    let value: f64 = text.parse().map_err(|_| EvalError::MalformedNumber {
        text: text.to_string(),
        position,
    })?;

    if !value.is_finite() {
        return Err(EvalError::NumberOutOfRange {
            text: text.to_string(),
        });
    }

    Ok(value)
}
