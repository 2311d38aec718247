//! Tokens produced by the lexer.

use std::fmt;

/// One lexical token.
///
/// C# keywords such as `record` are contextual, so every word is an
/// [`Token::Identifier`] and the parser decides what it means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Identifier(String),
    NumLiteral(String),
    StringLiteral(String),
    CharLiteral(String),

    LBrace,     // {
    RBrace,     // }
    LParen,     // (
    RParen,     // )
    LBracket,   // [
    RBracket,   // ]
    Smaller,    // <
    Greater,    // >
    Comma,      // ,
    Semicolon,  // ;
    Dot,        // .
    Colon,      // :
    ColonColon, // ::
    Question,   // ?
    Equal,      // =
    Other(char),
}

impl Token {
    /// Returns true if this is the identifier `word`.
    #[must_use]
    pub fn is_ident(&self, word: &str) -> bool {
        matches!(self, Self::Identifier(name) if name == word)
    }

    /// Returns the identifier text, if this is an identifier.
    #[must_use]
    pub fn as_ident(&self) -> Option<&str> {
        match self {
            Self::Identifier(name) => Some(name),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(text) | Self::NumLiteral(text) => f.write_str(text),
            Self::StringLiteral(text) => write!(f, "\"{text}\""),
            Self::CharLiteral(text) => write!(f, "'{text}'"),
            Self::LBrace => f.write_str("{"),
            Self::RBrace => f.write_str("}"),
            Self::LParen => f.write_str("("),
            Self::RParen => f.write_str(")"),
            Self::LBracket => f.write_str("["),
            Self::RBracket => f.write_str("]"),
            Self::Smaller => f.write_str("<"),
            Self::Greater => f.write_str(">"),
            Self::Comma => f.write_str(","),
            Self::Semicolon => f.write_str(";"),
            Self::Dot => f.write_str("."),
            Self::Colon => f.write_str(":"),
            Self::ColonColon => f.write_str("::"),
            Self::Question => f.write_str("?"),
            Self::Equal => f.write_str("="),
            Self::Other(c) => write!(f, "{c}"),
        }
    }
}

/// A token with its 1-based source position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    pub token: Token,
    pub line: usize,
    pub column: usize,
}
