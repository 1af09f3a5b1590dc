//! Parser for seedexpr
//!
//! Converts raw stage text into an `Expression`. Each stage is trimmed and
//! classified: the quoted-literal pattern is tried first, then the stage is
//! read as a call. Nothing is evaluated here.

use crate::ast::{Expression, Stage};
use crate::lexer::{call_words, split_stages, LexError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty function call (stage {stage})")]
    EmptyCall { stage: usize },
    #[error("malformed literal in stage {stage}: {text}")]
    MalformedLiteral { stage: usize, text: String },
    #[error(transparent)]
    Lex(#[from] LexError),
}

/// Parse an expression string into stages
pub fn parse(input: &str) -> Result<Expression, ParseError> {
    let stages = split_stages(input)?
        .into_iter()
        .enumerate()
        .map(|(index, raw)| parse_stage(index, raw))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Expression::new(stages))
}

/// Classify a single stage
fn parse_stage(index: usize, raw: &str) -> Result<Stage, ParseError> {
    let text = raw.trim();

    if let Some(content) = literal_content(text) {
        return Ok(Stage::Literal(content.to_string()));
    }

    // A leading quote that did not close at the end of the stage
    if text.starts_with(is_quote) {
        return Err(ParseError::MalformedLiteral {
            stage: index,
            text: text.to_string(),
        });
    }

    let mut words = call_words(text)?.into_iter();
    let name = words.next().ok_or(ParseError::EmptyCall { stage: index })?;

    Ok(Stage::Call {
        name: name.to_string(),
        args: words.map(str::to_string).collect(),
    })
}

/// Contents of `'...'` or `"..."` when the same quote opens and closes the text
fn literal_content(text: &str) -> Option<&str> {
    let quote = text.chars().next().filter(|c| is_quote(*c))?;
    if text.len() < 2 {
        return None;
    }
    text.strip_prefix(quote)?.strip_suffix(quote)
}

fn is_quote(c: char) -> bool {
    c == '\'' || c == '"'
}
