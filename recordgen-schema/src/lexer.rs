//! Lexer for C# source text.
//!
//! Only the token classes the declaration scanner needs are distinguished.
//! Comments, whitespace and preprocessor lines are dropped; literal
//! contents are kept so that default values can be skipped reliably.

use crate::error::ParseError;
use crate::token::{Spanned, Token};

/// Splits source text into tokens.
///
/// # Errors
/// Returns [`ParseError::Lex`] on unterminated comments or literals.
pub fn tokenize(input: &str) -> Result<Vec<Spanned>, ParseError> {
    Lexer::new(input).collect()
}

const ONE_CHAR_TOKENS: &[(char, Token)] = &[
    ('{', Token::LBrace),
    ('}', Token::RBrace),
    ('(', Token::LParen),
    (')', Token::RParen),
    ('[', Token::LBracket),
    (']', Token::RBracket),
    ('<', Token::Smaller),
    ('>', Token::Greater),
    (',', Token::Comma),
    (';', Token::Semicolon),
    ('.', Token::Dot),
    (':', Token::Colon),
    ('?', Token::Question),
    ('=', Token::Equal),
];

struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
}

impl Lexer {
    fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
        }
    }

    fn peek(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn current(&self) -> Option<char> {
        self.peek(0)
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.current()?;
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.current()
            && c != '\n'
        {
            self.advance();
        }
    }

    /// Skips whitespace, comments and preprocessor directives.
    fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            match (self.current(), self.peek(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.advance();
                }
                (Some('/'), Some('/')) | (Some('#'), _) => self.skip_line(),
                (Some('/'), Some('*')) => {
                    let (line, column) = (self.line, self.column);
                    self.advance();
                    self.advance();
                    loop {
                        match (self.current(), self.peek(1)) {
                            (Some('*'), Some('/')) => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            (Some(_), _) => {
                                self.advance();
                            }
                            (None, _) => {
                                return Err(ParseError::lex(line, column, "unterminated comment"));
                            }
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn is_ident_start(c: char) -> bool {
        c.is_alphabetic() || c == '_'
    }

    fn is_ident_continue(c: char) -> bool {
        c.is_alphanumeric() || c == '_'
    }

    fn try_parse_identifier(&mut self) -> Option<Token> {
        let verbatim = self.current() == Some('@');
        let first = if verbatim { self.peek(1)? } else { self.current()? };
        if !Self::is_ident_start(first) {
            return None;
        }

        let mut identifier = String::new();
        if verbatim {
            identifier.push('@');
            self.advance();
        }
        while let Some(c) = self.current()
            && Self::is_ident_continue(c)
        {
            identifier.push(c);
            self.advance();
        }

        Some(Token::Identifier(identifier))
    }

    fn try_parse_number(&mut self) -> Option<Token> {
        if !self.current()?.is_ascii_digit() {
            return None;
        }

        let mut number = String::new();
        while let Some(c) = self.current() {
            let fraction = c == '.' && self.peek(1).is_some_and(|next| next.is_ascii_digit());
            if !(c.is_alphanumeric() || c == '_' || fraction) {
                break;
            }
            number.push(c);
            self.advance();
        }

        Some(Token::NumLiteral(number))
    }

    /// Parses `"..."`, `@"..."`, `$"..."`, `$@"..."` and raw `"""..."""` literals.
    fn try_parse_string(&mut self) -> Option<Result<Token, ParseError>> {
        let mut prefix_len = 0;
        let mut verbatim = false;
        while let Some(c) = self.peek(prefix_len)
            && (c == '$' || c == '@')
        {
            verbatim |= c == '@';
            prefix_len += 1;
        }
        if self.peek(prefix_len) != Some('"') {
            return None;
        }

        let (line, column) = (self.line, self.column);
        for _ in 0..prefix_len {
            self.advance();
        }

        let mut quotes = 0;
        while self.peek(quotes) == Some('"') {
            quotes += 1;
        }

        let result = if quotes >= 3 {
            self.scan_raw_string(quotes)
        } else if verbatim {
            self.advance();
            self.scan_verbatim_string()
        } else {
            self.advance();
            self.scan_regular_string()
        };

        Some(result.ok_or_else(|| ParseError::lex(line, column, "unterminated string literal")))
    }

    fn scan_raw_string(&mut self, quotes: usize) -> Option<Token> {
        for _ in 0..quotes {
            self.advance();
        }
        let mut content = String::new();
        loop {
            if (0..quotes).all(|i| self.peek(i) == Some('"')) {
                for _ in 0..quotes {
                    self.advance();
                }
                return Some(Token::StringLiteral(content));
            }
            content.push(self.advance()?);
        }
    }

    fn scan_verbatim_string(&mut self) -> Option<Token> {
        let mut content = String::new();
        loop {
            match self.advance()? {
                '"' if self.current() == Some('"') => {
                    self.advance();
                    content.push('"');
                }
                '"' => return Some(Token::StringLiteral(content)),
                c => content.push(c),
            }
        }
    }

    fn scan_regular_string(&mut self) -> Option<Token> {
        let mut content = String::new();
        loop {
            match self.advance()? {
                '"' => return Some(Token::StringLiteral(content)),
                '\n' => return None,
                '\\' => {
                    content.push('\\');
                    content.push(self.advance()?);
                }
                c => content.push(c),
            }
        }
    }

    fn try_parse_char(&mut self) -> Option<Result<Token, ParseError>> {
        if self.current() != Some('\'') {
            return None;
        }

        let (line, column) = (self.line, self.column);
        self.advance();
        let mut content = String::new();
        loop {
            match self.advance() {
                Some('\'') => return Some(Ok(Token::CharLiteral(content))),
                Some('\\') => {
                    content.push('\\');
                    match self.advance() {
                        Some(c) => content.push(c),
                        None => break,
                    }
                }
                Some('\n') | None => break,
                Some(c) => content.push(c),
            }
        }
        Some(Err(ParseError::lex(line, column, "unterminated character literal")))
    }

    fn try_parse_punctuation(&mut self) -> Option<Token> {
        if self.current() == Some(':') && self.peek(1) == Some(':') {
            self.advance();
            self.advance();
            return Some(Token::ColonColon);
        }

        let c = self.current()?;
        let token = ONE_CHAR_TOKENS
            .iter()
            .find_map(|(s, token)| (*s == c).then(|| token.clone()))
            .unwrap_or(Token::Other(c));
        self.advance();
        Some(token)
    }
}

impl Iterator for Lexer {
    type Item = Result<Spanned, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Err(e) = self.skip_trivia() {
            self.position = self.input.len();
            return Some(Err(e));
        }
        self.current()?;

        let (line, column) = (self.line, self.column);
        let token = if let Some(result) = self.try_parse_string() {
            result
        } else if let Some(result) = self.try_parse_char() {
            result
        } else if let Some(token) = self.try_parse_identifier() {
            Ok(token)
        } else if let Some(token) = self.try_parse_number() {
            Ok(token)
        } else {
            self.try_parse_punctuation()
                .ok_or_else(|| ParseError::lex(line, column, "unexpected end of input"))
        };

        if token.is_err() {
            self.position = self.input.len();
        }
        Some(token.map(|token| Spanned {
            token,
            line,
            column,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input)
            .expect("Failed to tokenize")
            .into_iter()
            .map(|spanned| spanned.token)
            .collect()
    }

    fn ident(name: &str) -> Token {
        Token::Identifier(name.to_string())
    }

    #[test]
    fn test_tokenize_record() {
        assert_eq!(
            tokens("record Point(int X, int[] Y);"),
            vec![
                ident("record"),
                ident("Point"),
                Token::LParen,
                ident("int"),
                ident("X"),
                Token::Comma,
                ident("int"),
                Token::LBracket,
                Token::RBracket,
                ident("Y"),
                Token::RParen,
                Token::Semicolon,
            ]
        );
    }

    #[test]
    fn test_skip_comments_and_directives() {
        let input = "// line\n#nullable enable\n/* block\n comment */ record";
        assert_eq!(tokens(input), vec![ident("record")]);
    }

    #[test]
    fn test_positions() {
        let spanned = tokenize("\n  record A").expect("Failed to tokenize");
        assert_eq!((spanned[0].line, spanned[0].column), (2, 3));
        assert_eq!((spanned[1].line, spanned[1].column), (2, 10));
    }

    #[test]
    fn test_string_literals() {
        assert_eq!(
            tokens(r#""a\"b" @"c""d" $"{x}" """raw "quoted" text""""#),
            vec![
                Token::StringLiteral("a\\\"b".to_string()),
                Token::StringLiteral("c\"d".to_string()),
                Token::StringLiteral("{x}".to_string()),
                Token::StringLiteral("raw \"quoted\" text".to_string()),
            ]
        );
    }

    #[test]
    fn test_char_and_number_literals() {
        assert_eq!(
            tokens("'x' '\\'' 1.5f 0xFF x.Y"),
            vec![
                Token::CharLiteral("x".to_string()),
                Token::CharLiteral("\\'".to_string()),
                Token::NumLiteral("1.5f".to_string()),
                Token::NumLiteral("0xFF".to_string()),
                ident("x"),
                Token::Dot,
                ident("Y"),
            ]
        );
    }

    #[test]
    fn test_verbatim_identifier_and_qualifier() {
        assert_eq!(
            tokens("global::System.String @class"),
            vec![
                ident("global"),
                Token::ColonColon,
                ident("System"),
                Token::Dot,
                ident("String"),
                ident("@class"),
            ]
        );
    }

    #[test]
    fn test_unterminated_string() {
        let err = tokenize("record A(string S = \"abc);").unwrap_err();
        assert!(matches!(err, ParseError::Lex { line: 1, column: 21, .. }));
    }

    #[test]
    fn test_unterminated_comment() {
        let err = tokenize("record /* never closed").unwrap_err();
        assert!(matches!(err, ParseError::Lex { line: 1, column: 8, .. }));
    }

    #[test]
    fn test_other_punctuation() {
        assert_eq!(
            tokens("a + b"),
            vec![ident("a"), Token::Other('+'), ident("b")]
        );
    }
}
