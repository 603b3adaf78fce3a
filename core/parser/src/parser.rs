//! FILENAME: core/parser/src/parser.rs
//! PURPOSE: Recursive descent parser that converts a stream of Tokens into an AST.
//! CONTEXT: This is the second stage of the parsing pipeline. Tokens are
//! pulled from the Lexer one at a time; only the single current token is
//! buffered, and no token is ever requested twice.
//!
//! Precedence is encoded structurally instead of by a grammar ladder:
//!   - '*' and '/' bind exactly one operand to their right (a number or a
//!     parenthesized group), which gives them precedence over '+' and '-'.
//!   - '+' and '-' take the entire remainder of the current nesting level
//!     as their right operand, so additive chains group to the RIGHT:
//!     `10 - 2 - 3` parses as `10 - (2 - 3)` and evaluates to 11.
//!     Callers depend on this grouping; keep it when touching this file.
//!   - '(' opens a nesting level; ')' closes the innermost open level. An
//!     unclosed group is closed implicitly at the end of the input.

use crate::ast::{BinaryOperator, Expression};
use crate::error::ParseError;
use crate::lexer::Lexer;
use crate::token::Token;

pub type ParseResult<T> = Result<T, ParseError>;

/// The Parser struct holds the lexer and the current token.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    current_token: Token,
}

impl<'a> Parser<'a> {
    /// Creates a new parser from an input string.
    /// Automatically advances to the first token, which can already fail
    /// if the first chunk is not a valid token.
    pub fn new(input: &'a str) -> ParseResult<Self> {
        let mut lexer = Lexer::new(input);
        let current_token = lexer.next_token()?;
        Ok(Parser {
            lexer,
            current_token,
        })
    }

    /// Parses the entire input and returns the root of the expression tree.
    pub fn parse(&mut self) -> ParseResult<Expression> {
        if self.current_token == Token::EOF {
            return Err(ParseError::MalformedExpression(
                "Empty expression".to_string(),
            ));
        }

        self.parse_expression(0)
    }

    /// Advances to the next token.
    fn advance(&mut self) -> ParseResult<()> {
        self.current_token = self.lexer.next_token()?;
        Ok(())
    }

    /// Parses one nesting level: everything up to the ')' that closes it,
    /// or the end of the input. `depth` is 0 at the outermost level.
    ///
    /// Walks left to right carrying a single partial result. A number
    /// becomes the partial result; '*'/'/' fold one more operand into it;
    /// '+'/'-' hand the rest of the level to a recursive call and return.
    fn parse_expression(&mut self, depth: u32) -> ParseResult<Expression> {
        let mut current: Option<Expression> = None;

        loop {
            match self.current_token.clone() {
                Token::Number(n) => {
                    self.advance()?;
                    current = Some(Expression::Number(n));
                }

                Token::Asterisk => {
                    current =
                        Some(self.parse_tight(current.take(), BinaryOperator::Multiply, depth)?);
                }
                Token::Slash => {
                    current =
                        Some(self.parse_tight(current.take(), BinaryOperator::Divide, depth)?);
                }

                Token::Plus => {
                    return self.parse_remainder(current.take(), BinaryOperator::Add, depth);
                }
                Token::Minus => {
                    return self.parse_remainder(current.take(), BinaryOperator::Subtract, depth);
                }

                Token::LParen => {
                    self.advance()?;
                    current = Some(self.parse_expression(depth + 1)?);
                }

                Token::RParen => {
                    if depth == 0 {
                        return Err(ParseError::MalformedExpression(
                            "Unmatched closing parenthesis".to_string(),
                        ));
                    }
                    self.advance()?;
                    break;
                }

                Token::EOF => break,
            }
        }

        current.ok_or_else(|| ParseError::MalformedExpression("Expected an expression".to_string()))
    }

    /// Handles '*' and '/': binds exactly one operand to the right of the
    /// partial result built so far.
    fn parse_tight(
        &mut self,
        left: Option<Expression>,
        op: BinaryOperator,
        depth: u32,
    ) -> ParseResult<Expression> {
        let left = self.require_left(left, op)?;
        self.advance()?;
        let right = self.parse_operand(depth)?;

        Ok(Expression::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /// Handles '+' and '-': consumes the entire remainder of the current
    /// nesting level as the right operand. This is what gives the additive
    /// operators their low precedence and right-associative grouping.
    fn parse_remainder(
        &mut self,
        left: Option<Expression>,
        op: BinaryOperator,
        depth: u32,
    ) -> ParseResult<Expression> {
        let left = self.require_left(left, op)?;
        self.advance()?;
        let right = self.parse_expression(depth)?;

        Ok(Expression::BinaryOp {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    /// Parses the single operand that follows '*' or '/': a number, or a
    /// parenthesized group.
    fn parse_operand(&mut self, depth: u32) -> ParseResult<Expression> {
        match self.current_token.clone() {
            Token::Number(n) => {
                self.advance()?;
                Ok(Expression::Number(n))
            }

            Token::LParen => {
                self.advance()?;
                self.parse_expression(depth + 1)
            }

            Token::EOF => Err(ParseError::MalformedExpression(
                "Operator is missing its right operand".to_string(),
            )),

            token => Err(ParseError::MalformedExpression(format!(
                "Expected a number or '(', found '{}'",
                token
            ))),
        }
    }

    /// Checks that an operator has something to its left to operate on.
    fn require_left(
        &self,
        left: Option<Expression>,
        op: BinaryOperator,
    ) -> ParseResult<Expression> {
        left.ok_or_else(|| {
            ParseError::MalformedExpression(format!("Operator '{}' is missing a left operand", op))
        })
    }
}

/// Convenience function to parse an expression string directly.
pub fn parse(input: &str) -> ParseResult<Expression> {
    let mut parser = Parser::new(input)?;
    parser.parse()
}
