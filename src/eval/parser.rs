//! Recursive-descent evaluation over a token stream.
//!
//! Grammar:
//!
//! ```text
//! expr  := term (('+' | '-') term)*
//! term  := unary (('*' | '/') unary)*
//! unary := ('+' | '-')* number
//! ```

use crate::core::Operator;
use crate::eval::error::EvalError;
use crate::eval::lexer::{Token, TokenKind};

pub(crate) struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    pub(crate) fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Evaluate the whole token stream.
    ///
    /// Fails if tokens remain after a complete expression.
    pub(crate) fn evaluate(mut self) -> Result<f64, EvalError> {
        if self.tokens.is_empty() {
            return Err(EvalError::Empty);
        }

        let value = self.expr()?;

        if let Some(token) = self.peek() {
            return Err(EvalError::UnexpectedToken {
                token: token.describe(),
                position: token.position,
            });
        }

        Ok(value)
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.pos)
    }

    fn next(&mut self) -> Option<&'a Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn peek_operator(&self, accepted: &[Operator]) -> Option<Operator> {
        match self.peek() {
            Some(Token {
                kind: TokenKind::Operator(op),
                ..
            }) if accepted.contains(op) => Some(*op),
            _ => None,
        }
    }

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        while let Some(op) = self.peek_operator(&[Operator::Add, Operator::Subtract]) {
            self.pos += 1;
            let rhs = self.term()?;
            value = op.apply(value, rhs);
        }
        Ok(value)
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        while let Some(op) = self.peek_operator(&[Operator::Multiply, Operator::Divide]) {
            self.pos += 1;
            let rhs = self.unary()?;
            value = op.apply(value, rhs);
        }
        Ok(value)
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        // Iterative: sign prefixes may be arbitrarily long
        let mut negate = false;
        loop {
            match self.next() {
                None => return Err(EvalError::UnexpectedEnd),
                Some(Token {
                    kind: TokenKind::Number(value),
                    ..
                }) => return Ok(if negate { -*value } else { *value }),
                Some(Token {
                    kind: TokenKind::Operator(Operator::Subtract),
                    ..
                }) => negate = !negate,
                Some(Token {
                    kind: TokenKind::Operator(Operator::Add),
                    ..
                }) => {}
                Some(token) => {
                    return Err(EvalError::UnexpectedToken {
                        token: token.describe(),
                        position: token.position,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::eval::{evaluate, EvalError};

    #[test]
    fn sign_prefix_folds_without_recursion() {
        let deep = format!("{}1", "-".repeat(100_000));
        assert_eq!(evaluate(&deep), Ok(1.0));

        let odd = format!("{}1", "-".repeat(100_001));
        assert_eq!(evaluate(&odd), Ok(-1.0));
    }

    #[test]
    fn plus_signs_are_skipped() {
        assert_eq!(evaluate("+-+2*3"), Ok(-6.0));
        assert_eq!(evaluate("4-+-1"), Ok(5.0));
    }

    #[test]
    fn dangling_signs_fail() {
        assert_eq!(evaluate("--"), Err(EvalError::UnexpectedEnd));
        assert!(matches!(
            evaluate("-*2"),
            Err(EvalError::UnexpectedToken { position: 1, .. })
        ));
    }
}
