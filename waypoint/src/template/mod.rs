//! Parses path templates such as `posts/<id:int>` into `Token` sequences.
//!
//! The grammar is small:
//!
//! ```text
//! template     := (literal | parameter)*
//! literal      := any run of characters excluding '<' and '>'
//! parameter    := '<' spec '>'
//! spec         := name | name ':' type | ':' type
//! ```
//!
//! Names and types are trimmed, may not contain whitespace, and a parameter must carry at least
//! one of the two.

mod token;

use std::ops::Deref;

use log::trace;

use crate::error::{Error, MalformedReason, Result};

pub use self::token::{Parameter, Token};

/// The ordered tokens parsed from a single template.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SegmentTokens {
    tokens: Vec<Token>,
}

impl SegmentTokens {
    /// The concatenation of every `Literal` token, ignoring parameters.
    pub fn literal_text(&self) -> String {
        self.tokens.iter().filter_map(Token::as_literal).collect()
    }

    /// Iterates over the `Parameter` tokens in template order.
    pub fn parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.tokens.iter().filter_map(Token::as_parameter)
    }

    /// Consumes the sequence, returning the underlying tokens.
    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }
}

impl Deref for SegmentTokens {
    type Target = [Token];

    fn deref(&self) -> &[Token] {
        &self.tokens
    }
}

impl IntoIterator for SegmentTokens {
    type Item = Token;
    type IntoIter = ::std::vec::IntoIter<Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.into_iter()
    }
}

impl<'a> IntoIterator for &'a SegmentTokens {
    type Item = &'a Token;
    type IntoIter = ::std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Parses one template into its tokens.
///
/// ```rust
/// # use waypoint::template::{parse_segment, Token};
/// let tokens = parse_segment("posts/<id:int>").unwrap();
/// assert_eq!(tokens.len(), 2);
/// assert_eq!(tokens[0], Token::Literal("posts/".to_owned()));
///
/// let param = tokens[1].as_parameter().unwrap();
/// assert_eq!(param.name(), Some("id"));
/// assert_eq!(param.type_name(), Some("int"));
/// ```
pub fn parse_segment(template: &str) -> Result<SegmentTokens> {
    trace!("[parsing template: {}]", template);

    let mut tokens = Vec::new();
    let mut buf = String::new();
    let mut in_parameter = false;

    for c in template.chars() {
        match c {
            '<' => {
                if in_parameter {
                    return Err(Error::malformed(
                        template,
                        MalformedReason::UnterminatedParameterStart,
                    ));
                }

                if !buf.is_empty() {
                    tokens.push(Token::Literal(::std::mem::take(&mut buf)));
                }
                in_parameter = true;
            }
            '>' => {
                if !in_parameter {
                    return Err(Error::malformed(
                        template,
                        MalformedReason::UnmatchedParameterEnd,
                    ));
                }

                let parameter = parse_parameter(template, &buf)?;
                tokens.push(Token::Parameter(parameter));
                buf.clear();
                in_parameter = false;
            }
            _ => buf.push(c),
        }
    }

    if in_parameter {
        return Err(Error::malformed(
            template,
            MalformedReason::UnterminatedParameter,
        ));
    }

    if !buf.trim().is_empty() {
        tokens.push(Token::Literal(buf));
    }

    trace!("[parsed {} tokens from: {}]", tokens.len(), template);
    Ok(SegmentTokens { tokens })
}

/// Parses a full path by splitting it on `/` and parsing every piece as its own segment.
///
/// The token sequences of the pieces are concatenated in order; the separators themselves are not
/// kept. Parsing stops at the first malformed piece.
///
/// ```rust
/// # use waypoint::template::parse_path;
/// let tokens = parse_path("/blog/<year:int>/<slug>").unwrap();
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens.literal_text(), "blog");
/// ```
pub fn parse_path(path: &str) -> Result<SegmentTokens> {
    let mut tokens = Vec::new();

    for piece in path.split('/') {
        tokens.extend(parse_segment(piece)?);
    }

    Ok(SegmentTokens { tokens })
}

fn parse_parameter(template: &str, spec: &str) -> Result<Parameter> {
    let parts: Vec<&str> = spec.split(':').collect();

    let (name, type_name) = match parts.as_slice() {
        [only] => (only.trim(), only.trim()),
        [name, type_name] => (name.trim(), type_name.trim()),
        _ => return Err(Error::malformed(template, MalformedReason::TooManyColons)),
    };

    if name.contains(char::is_whitespace) {
        return Err(Error::malformed(template, MalformedReason::SpaceInName));
    }

    if type_name.contains(char::is_whitespace) {
        return Err(Error::malformed(template, MalformedReason::SpaceInType));
    }

    Parameter::new(Some(name), Some(type_name))
        .ok_or_else(|| Error::malformed(template, MalformedReason::EmptyParameter))
}
