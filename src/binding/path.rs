//! logos-based reference path lexer and parser.
//!
//! A reference is a head identifier followed by dot fields and bracketed
//! numeric indices: `data.list[0].name`. Paths are parsed into segments and
//! interpreted against a JSON value — never evaluated as code.

use std::fmt;
use std::str::FromStr;

use logos::Logos;
use serde_json::Value;

use super::BindingError;

/// Reference path token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
enum Token {
    /// Field name: `list`, `imgUrl`, `table_data`.
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,

    /// Bracketed numeric index: `[0]`, `[12]`.
    #[regex(r"\[[0-9]+\]")]
    Index,

    /// `.`
    #[token(".")]
    Dot,
}

/// One step of a reference path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// Object field access by name.
    Field(String),
    /// Array element access by position.
    Index(usize),
}

/// A parsed reference path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefPath {
    segments: Vec<PathSegment>,
}

impl RefPath {
    /// Parse a reference string.
    pub fn parse(input: &str) -> Result<Self, BindingError> {
        let malformed = |message: &str| BindingError::Ref {
            path: input.to_owned(),
            message: message.to_owned(),
        };

        let mut tokens = Vec::new();
        for (result, span) in Token::lexer(input).spanned() {
            match result {
                Ok(token) => tokens.push((token, &input[span])),
                Err(()) => return Err(malformed("unexpected character")),
            }
        }

        let mut segments = Vec::new();
        let mut cursor = tokens.iter();
        match cursor.next() {
            Some((Token::Ident, text)) => segments.push(PathSegment::Field((*text).to_owned())),
            Some(_) => return Err(malformed("must start with an identifier")),
            None => return Err(malformed("empty reference")),
        }
        while let Some((token, text)) = cursor.next() {
            match token {
                Token::Dot => match cursor.next() {
                    Some((Token::Ident, field)) => {
                        segments.push(PathSegment::Field((*field).to_owned()));
                    }
                    _ => return Err(malformed("expected a field name after '.'")),
                },
                Token::Index => {
                    let digits = &text[1..text.len() - 1];
                    let index = digits
                        .parse::<usize>()
                        .map_err(|_| malformed("index out of range"))?;
                    segments.push(PathSegment::Index(index));
                }
                Token::Ident => return Err(malformed("missing '.' between fields")),
            }
        }

        Ok(Self { segments })
    }

    /// Build a path from an ordered field-name list, as selected in a
    /// cascading picker. Numeric segments after the head become indices:
    /// `["data", "list", "0", "name"]` → `data.list[0].name`.
    pub fn from_fields<S: AsRef<str>>(fields: &[S]) -> Self {
        let segments = fields
            .iter()
            .enumerate()
            .map(|(position, field)| {
                let field = field.as_ref();
                match field.parse::<usize>() {
                    Ok(index) if position > 0 => PathSegment::Index(index),
                    _ => PathSegment::Field(field.to_owned()),
                }
            })
            .collect();
        Self { segments }
    }

    /// The parsed segments.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    /// The head identifier, when the path starts with one.
    pub fn head(&self) -> Option<&str> {
        match self.segments.first() {
            Some(PathSegment::Field(name)) => Some(name),
            _ => None,
        }
    }

    /// Walk `value` along this path. A head segment naming the root (the
    /// data source's own name) addresses `value` itself and is skipped;
    /// otherwise every segment is looked up inside the value. Returns `None`
    /// whenever a step does not exist.
    pub fn resolve<'a>(&self, root: &str, value: &'a Value) -> Option<&'a Value> {
        let mut segments = self.segments.as_slice();
        if let Some(PathSegment::Field(head)) = segments.first() {
            if head == root {
                segments = &segments[1..];
            }
        }
        let mut current = value;
        for segment in segments {
            current = match segment {
                PathSegment::Field(name) => current.get(name.as_str())?,
                PathSegment::Index(index) => current.get(*index)?,
            };
        }
        Some(current)
    }
}

impl fmt::Display for RefPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (position, segment) in self.segments.iter().enumerate() {
            match segment {
                PathSegment::Field(name) => {
                    if position > 0 {
                        f.write_str(".")?;
                    }
                    f.write_str(name)?;
                }
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

impl FromStr for RefPath {
    type Err = BindingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
