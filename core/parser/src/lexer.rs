//! FILENAME: core/parser/src/lexer.rs
//! PURPOSE: Scans a raw expression string and produces a stream of Tokens.
//! CONTEXT: This is the first stage of the parsing pipeline. The input is
//! whitespace-tokenized: a maximal run of non-whitespace characters is one
//! chunk, and the whole chunk is classified as a single token. That makes
//! the leading sign of `-4.5` part of the number, and it means parentheses
//! must be separated by spaces (`( 2 + 3 )`, not `(2 + 3)`).
//!
//! CLASSIFICATION ORDER:
//! - Exact match: * / + - ( )
//! - Otherwise: parsed as an f64 literal
//! - Otherwise: InvalidToken carrying the offending chunk

use crate::error::ParseError;
use crate::token::Token;
use std::iter::Peekable;
use std::str::Chars;

pub struct Lexer<'a> {
    input: Peekable<Chars<'a>>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Lexer {
            input: input.chars().peekable(),
        }
    }

    /// Advances the lexer and returns the next token.
    ///
    /// Exhausted input yields `Token::EOF`, on this call and every call
    /// after it. No lookahead happens beyond the current chunk.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        self.skip_whitespace();

        let chunk = self.read_chunk();
        if chunk.is_empty() {
            return Ok(Token::EOF);
        }

        Ok(match chunk.as_str() {
            "*" => Token::Asterisk,
            "/" => Token::Slash,
            "+" => Token::Plus,
            "-" => Token::Minus,
            "(" => Token::LParen,
            ")" => Token::RParen,
            _ => match chunk.parse::<f64>() {
                Ok(n) => Token::Number(n),
                Err(_) => return Err(ParseError::InvalidToken { raw: chunk }),
            },
        })
    }

    fn skip_whitespace(&mut self) {
        while let Some(&ch) = self.input.peek() {
            if !ch.is_whitespace() {
                break;
            }
            self.input.next();
        }
    }

    /// Reads the maximal run of non-whitespace characters.
    fn read_chunk(&mut self) -> String {
        let mut chunk = String::new();

        while let Some(&ch) = self.input.peek() {
            if ch.is_whitespace() {
                break;
            }
            chunk.push(ch);
            self.input.next();
        }

        chunk
    }
}
