//! Record declaration scanner.
//!
//! Finds every `record` declaration in a C# source text, at any nesting
//! depth, and reports its name, form and positional parameter list. Other
//! code is skipped token by token, so record bodies are scanned too and
//! nested records are found in encounter order.

use crate::error::ParseError;
use crate::lexer::tokenize;
use crate::token::{Spanned, Token};
use crate::types::{DeclaredType, Parameter, SourceFile, TypeSymbol};
use recordgen_core::{PrimitiveType, RecordKind};
use std::path::Path;

/// Parameter modifiers that do not change the parameter's type.
const PARAMETER_MODIFIERS: &[&str] = &["in", "ref", "out", "params", "this", "scoped", "readonly"];

/// Contextual keywords that may follow an identifier named `record` inside
/// an expression, as in `record with { X = 1 }` or `record switch { .. }`.
const EXPRESSION_KEYWORDS: &[&str] = &["with", "switch", "is", "as", "and", "or", "not", "when"];

/// Parses C# source text into record declarations.
///
/// # Arguments
/// * `source` - C# source text
///
/// # Returns
/// All record declarations in encounter order.
///
/// # Errors
/// Returns `ParseError` if the text cannot be tokenized or a parameter list
/// is not closed.
pub fn parse_source(source: &str) -> Result<SourceFile, ParseError> {
    let tokens = tokenize(source)?;
    Parser::new(&tokens).parse()
}

/// Parses a C# source file into record declarations.
///
/// # Errors
/// Returns `ParseError` if reading or parsing fails.
pub fn parse_file(path: &Path) -> Result<SourceFile, ParseError> {
    let source = std::fs::read_to_string(path)?;
    parse_source(&source)
}

struct Parser<'a> {
    tokens: &'a [Spanned],
    position: usize,
}

impl<'a> Parser<'a> {
    fn new(tokens: &'a [Spanned]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn token(&self, index: usize) -> Option<&'a Token> {
        self.tokens.get(index).map(|spanned| &spanned.token)
    }

    fn parse(mut self) -> Result<SourceFile, ParseError> {
        let mut file = SourceFile::default();

        while self.position < self.tokens.len() {
            match self.try_parse_record()? {
                Some(decl) => {
                    tracing::debug!(
                        "Found record '{}' at line {} ({} parameters)",
                        decl.name,
                        decl.line,
                        decl.parameters.as_ref().map_or(0, Vec::len)
                    );
                    file.declarations.push(decl);
                }
                None => self.position += 1,
            }
        }

        Ok(file)
    }

    /// Parses a record header starting at the current token.
    ///
    /// Returns `None` without consuming anything if the current token does
    /// not start a record declaration.
    fn try_parse_record(&mut self) -> Result<Option<DeclaredType>, ParseError> {
        let start = self.position;
        if !self.token(start).is_some_and(|t| t.is_ident("record")) {
            return Ok(None);
        }
        if start > 0 && self.token(start - 1) == Some(&Token::Dot) {
            return Ok(None);
        }

        let mut cursor = start + 1;
        let kind = match self.token(cursor) {
            Some(t) if t.is_ident("class") => {
                cursor += 1;
                RecordKind::Class
            }
            Some(t) if t.is_ident("struct") => {
                cursor += 1;
                RecordKind::Struct
            }
            _ => RecordKind::Class,
        };

        let Some(name) = self.token(cursor).and_then(Token::as_ident) else {
            return Ok(None);
        };
        if EXPRESSION_KEYWORDS.contains(&name) {
            return Ok(None);
        }
        cursor += 1;
        if !matches!(
            self.token(cursor),
            Some(
                Token::LParen | Token::Smaller | Token::Semicolon | Token::LBrace | Token::Colon
            )
        ) {
            return Ok(None);
        }

        let mut decl = DeclaredType::new(name, self.tokens[start].line);
        decl.kind = kind;

        if self.token(cursor) == Some(&Token::Smaller) {
            let close = self.find_closing(cursor, &Token::Smaller, &Token::Greater)?;
            decl.type_parameters = self.tokens[cursor + 1..close]
                .iter()
                .filter_map(|spanned| spanned.token.as_ident())
                .filter(|word| *word != "in" && *word != "out")
                .map(str::to_string)
                .collect();
            cursor = close + 1;
        }

        if self.token(cursor) == Some(&Token::LParen) {
            let close = self.find_closing(cursor, &Token::LParen, &Token::RParen)?;
            decl.parameters = Some(parse_parameters(&self.tokens[cursor + 1..close]));
            cursor = close + 1;
        }

        self.position = cursor;
        Ok(Some(decl))
    }

    /// Finds the token closing the bracket opened at `open_index`.
    ///
    /// A statement or block end reached before the closing token means the
    /// list was never closed.
    fn find_closing(&self, open_index: usize, open: &Token, close: &Token) -> Result<usize, ParseError> {
        let opened = &self.tokens[open_index];
        let mut depth = 0usize;
        let mut nesting = 0usize;

        for (index, spanned) in self.tokens.iter().enumerate().skip(open_index) {
            let token = &spanned.token;
            if token == open {
                depth += 1;
            } else if token == close {
                depth -= 1;
                if depth == 0 {
                    return Ok(index);
                }
            } else {
                match token {
                    Token::LParen | Token::LBracket | Token::LBrace => nesting += 1,
                    Token::RParen | Token::RBracket | Token::RBrace if nesting > 0 => nesting -= 1,
                    Token::Semicolon | Token::RBrace | Token::RParen | Token::RBracket
                        if nesting == 0 =>
                    {
                        return Err(ParseError::unexpected(
                            format!("'{close}'"),
                            token.to_string(),
                            spanned.line,
                            spanned.column,
                        ));
                    }
                    _ => {}
                }
            }
        }

        Err(ParseError::eof(format!("'{close}'"), opened.line))
    }
}

/// Splits a parameter list at top-level commas and parses each parameter.
fn parse_parameters(tokens: &[Spanned]) -> Vec<Parameter> {
    let mut parameters = Vec::new();
    let mut segment_start = 0;
    let mut depth = 0usize;
    let mut angle_depth = 0usize;
    let mut in_default = false;

    for (index, spanned) in tokens.iter().enumerate() {
        match spanned.token {
            Token::LParen | Token::LBracket | Token::LBrace => depth += 1,
            Token::RParen | Token::RBracket | Token::RBrace => depth = depth.saturating_sub(1),
            Token::Smaller if !in_default => angle_depth += 1,
            Token::Greater if !in_default => angle_depth = angle_depth.saturating_sub(1),
            Token::Equal if depth == 0 && angle_depth == 0 => in_default = true,
            Token::Comma if depth == 0 && angle_depth == 0 => {
                parameters.extend(parse_parameter(&tokens[segment_start..index]));
                segment_start = index + 1;
                in_default = false;
            }
            _ => {}
        }
    }
    parameters.extend(parse_parameter(&tokens[segment_start..]));

    parameters
}

/// Parses one parameter. Returns `None` for an empty segment.
fn parse_parameter(tokens: &[Spanned]) -> Option<Parameter> {
    let end = top_level_position(tokens, &Token::Equal).unwrap_or(tokens.len());
    let mut head = &tokens[..end];

    while head.first().map(|s| &s.token) == Some(&Token::LBracket) {
        let close = top_level_position(head, &Token::RBracket)?;
        head = &head[close + 1..];
    }
    while head
        .first()
        .and_then(|s| s.token.as_ident())
        .is_some_and(|word| PARAMETER_MODIFIERS.contains(&word))
    {
        head = &head[1..];
    }

    let (last, type_tokens) = head.split_last()?;
    let raw_type = render(type_tokens);

    let Some(name) = last.token.as_ident() else {
        return Some(Parameter {
            name: render(head),
            type_symbol: None,
            raw_type,
        });
    };

    Some(Parameter {
        name: name.to_string(),
        type_symbol: TypeParser::new(type_tokens).parse_complete(),
        raw_type,
    })
}

/// Position of the first `target` outside any brackets.
fn top_level_position(tokens: &[Spanned], target: &Token) -> Option<usize> {
    let mut depth = 0usize;
    for (index, spanned) in tokens.iter().enumerate() {
        if depth == 0 && &spanned.token == target {
            return Some(index);
        }
        match spanned.token {
            Token::LParen | Token::LBracket | Token::LBrace | Token::Smaller => depth += 1,
            Token::RParen | Token::RBracket | Token::RBrace | Token::Greater => {
                depth = depth.saturating_sub(1);
                if depth == 0 && &spanned.token == target {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Renders tokens back to compact source text.
fn render(tokens: &[Spanned]) -> String {
    let mut text = String::new();
    for (index, spanned) in tokens.iter().enumerate() {
        let word = matches!(spanned.token, Token::Identifier(_) | Token::NumLiteral(_));
        let previous_word = index > 0
            && matches!(
                tokens[index - 1].token,
                Token::Identifier(_) | Token::NumLiteral(_)
            );
        if word && previous_word {
            text.push(' ');
        }
        text.push_str(&spanned.token.to_string());
        if spanned.token == Token::Comma {
            text.push(' ');
        }
    }
    text
}

/// Parses a type written as a token sequence.
struct TypeParser<'a> {
    tokens: &'a [Spanned],
    position: usize,
}

impl<'a> TypeParser<'a> {
    fn new(tokens: &'a [Spanned]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    fn peek(&self, offset: usize) -> Option<&'a Token> {
        self.tokens.get(self.position + offset).map(|s| &s.token)
    }

    fn eat(&mut self, token: &Token) -> bool {
        if self.peek(0) == Some(token) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn ident(&mut self) -> Option<&'a str> {
        let name = self.peek(0)?.as_ident()?;
        self.position += 1;
        Some(name)
    }

    /// Parses a type and requires that it spans every token.
    fn parse_complete(mut self) -> Option<TypeSymbol> {
        let symbol = self.parse_type()?;
        (self.position == self.tokens.len()).then_some(symbol)
    }

    fn parse_type(&mut self) -> Option<TypeSymbol> {
        let mut symbol = self.parse_named()?;
        if self.eat(&Token::Question) {
            symbol = symbol.into_nullable();
        }
        while self.eat(&Token::LBracket) {
            // Only single-rank arrays are representable.
            if !self.eat(&Token::RBracket) {
                return None;
            }
            symbol = TypeSymbol::array(symbol);
            if self.eat(&Token::Question) {
                symbol = symbol.into_nullable();
            }
        }
        Some(symbol)
    }

    fn parse_named(&mut self) -> Option<TypeSymbol> {
        if self.peek(0).is_some_and(|t| t.as_ident().is_some())
            && self.peek(1) == Some(&Token::ColonColon)
        {
            self.position += 2;
        }

        let mut name = self.ident()?;
        let mut arguments = Vec::new();
        let mut qualified = false;
        loop {
            if self.eat(&Token::Smaller) {
                arguments = self.parse_arguments()?;
            }
            if self.peek(0) == Some(&Token::Dot) {
                self.position += 1;
                name = self.ident()?;
                arguments = Vec::new();
                qualified = true;
                continue;
            }
            break;
        }

        let name = match PrimitiveType::from_keyword(name) {
            Some(prim) if !qualified && arguments.is_empty() => prim.metadata_name(),
            _ => name,
        };
        Some(TypeSymbol::named(name).with_arguments(arguments))
    }

    fn parse_arguments(&mut self) -> Option<Vec<TypeSymbol>> {
        let mut arguments = vec![self.parse_type()?];
        while self.eat(&Token::Comma) {
            arguments.push(self.parse_type()?);
        }
        self.eat(&Token::Greater).then_some(arguments)
    }
}
