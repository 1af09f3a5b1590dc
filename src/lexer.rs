//! Tokenization for seedexpr
//!
//! Two jobs: split an expression into raw stage text on `|`, and split a
//! call stage into whitespace-separated words. Neither step trims or
//! classifies stages; that is the parser's job.

use nom::{
    branch::alt,
    bytes::complete::{take_till, take_till1, take_while, take_while1},
    character::complete::char,
    combinator::{all_consuming, opt, recognize},
    multi::{separated_list0, separated_list1},
    sequence::{delimited, pair, preceded},
    IResult,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexError {
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Zero or more whitespace characters, Unicode included (same set `str::trim` removes)
fn space0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

/// One or more whitespace characters, Unicode included
fn space1(input: &str) -> IResult<&str, &str> {
    take_while1(char::is_whitespace)(input)
}

/// Parse a single-quoted run: '...'
fn single_quoted(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('\''), take_till(|c| c == '\''), char('\'')))(input)
}

/// Parse a double-quoted run: "..."
fn double_quoted(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('"'), take_till(|c| c == '"'), char('"')))(input)
}

/// Parse the raw text of one stage
///
/// A quote at the start of a stage hides everything up to the matching
/// quote from the splitter, so `'a|b'` stays one stage. Quotes anywhere
/// else are ordinary characters.
fn stage_text(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        opt(preceded(space0, alt((single_quoted, double_quoted)))),
        take_till(|c| c == '|'),
    ))(input)
}

/// Split an expression into raw stages on `|`
///
/// Always yields at least one stage; `n` separators yield `n + 1` stages,
/// empty ones included.
pub fn split_stages(input: &str) -> Result<Vec<&str>, LexError> {
    let (_, stages) = all_consuming(separated_list1(char('|'), stage_text))(input)
        .map_err(|e| LexError::ParseError(e.to_string()))?;
    Ok(stages)
}

/// Parse one whitespace-delimited word
fn word(input: &str) -> IResult<&str, &str> {
    take_till1(char::is_whitespace)(input)
}

/// Split a call stage into words: `name arg1 arg2 ...`
pub fn call_words(stage: &str) -> Result<Vec<&str>, LexError> {
    let (_, words) = all_consuming(delimited(space0, separated_list0(space1, word), space0))(stage)
        .map_err(|e| LexError::ParseError(e.to_string()))?;
    Ok(words)
}
