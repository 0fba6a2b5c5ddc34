//! Permissive parser for the list-valued text columns of the recipe source.
//!
//! The source stores tags, ingredients and steps as Python list literals, e.g.
//! `['60-minutes-or-less', "mom's cooking"]`. Anything that is not a flat list of
//! string literals parses to an empty list instead of an error.

use nom::{
    Finish, IResult,
    branch::alt,
    bytes::complete::take_while_m_n,
    character::complete::{char, multispace0, none_of},
    combinator::{all_consuming, map, map_opt, opt},
    multi::{many0, separated_list0},
    sequence::{delimited, preceded, terminated},
};

type ParseResult<'a, T> = IResult<&'a str, T>;

/// Parses a list literal, falling back to an empty list on any syntax or shape error.
pub fn parse_list(text: &str) -> Vec<String> {
    all_consuming(list_literal)(text.trim())
        .finish()
        .map(|(_, items)| items)
        .unwrap_or_default()
}

/// Like [`parse_list`], treating an absent field as an empty list.
pub fn parse_optional_list(text: Option<&str>) -> Vec<String> {
    text.map(parse_list).unwrap_or_default()
}

fn list_literal(input: &str) -> ParseResult<'_, Vec<String>> {
    delimited(
        terminated(char('['), multispace0),
        terminated(
            separated_list0(ws(char(',')), string_literal),
            opt(ws(char(','))),
        ),
        preceded(multispace0, char(']')),
    )(input)
}

fn string_literal(input: &str) -> ParseResult<'_, String> {
    alt((quoted('\'', "\\'"), quoted('"', "\\\"")))(input)
}

fn quoted<'a>(
    quote: char,
    forbidden: &'static str,
) -> impl FnMut(&'a str) -> ParseResult<'a, String> {
    map(
        delimited(
            char(quote),
            many0(alt((escaped_char, none_of(forbidden)))),
            char(quote),
        ),
        |chars: Vec<char>| chars.into_iter().collect(),
    )
}

fn escaped_char(input: &str) -> ParseResult<'_, char> {
    preceded(
        char('\\'),
        alt((
            preceded(char('x'), hex_code(2)),
            preceded(char('u'), hex_code(4)),
            preceded(char('U'), hex_code(8)),
            // A bad \x, \u or \U sequence fails the whole literal.
            map(none_of("xuU"), |c| match c {
                'n' => '\n',
                't' => '\t',
                'r' => '\r',
                other => other,
            }),
        )),
    )(input)
}

/// Exactly `digits` hex digits naming a Unicode scalar value.
fn hex_code<'a>(digits: usize) -> impl FnMut(&'a str) -> ParseResult<'a, char> {
    map_opt(
        take_while_m_n(digits, digits, |c: char| c.is_ascii_hexdigit()),
        |hex: &str| u32::from_str_radix(hex, 16).ok().and_then(char::from_u32),
    )
}

fn ws<'a, O, F>(inner: F) -> impl FnMut(&'a str) -> ParseResult<'a, O>
where
    F: FnMut(&'a str) -> ParseResult<'a, O>,
{
    delimited(multispace0, inner, multispace0)
}
