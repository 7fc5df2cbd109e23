use nom::{
    IResult,
    Parser,
    bytes::complete::take_till,
    character::complete::char,
    combinator::rest,
    sequence::separated_pair,
};

use crate::{
    error::ParseError,
    rule::{AttributeValuePair, Permutation},
};

const TOKEN_SEPARATOR: char = ',';
const PAIR_SEPARATOR: char = ':';

fn attr_value(input: &str) -> IResult<&str, (&str, &str)> {
    separated_pair(take_till(|c| c == PAIR_SEPARATOR), char(PAIR_SEPARATOR), rest).parse(input)
}

fn pair(token: &str) -> Result<AttributeValuePair, ParseError> {
    let (_, (attribute, value)) = attr_value(token).map_err(|_| ParseError::MissingSeparator {
        token: token.to_string(),
    })?;

    let attribute = attribute.trim();
    if attribute.is_empty() {
        return Err(ParseError::EmptyAttribute {
            token: token.to_string(),
        });
    }

    Ok(AttributeValuePair::new(attribute, value.trim()))
}

/// Parse `Attribute:Value, Attribute:Value, ...` into a permutation.
///
/// Blank tokens are dropped, so an all-blank input yields an empty
/// permutation. Only the first ':' of a token separates attribute from
/// value.
pub fn parse(expr: &str) -> Result<Permutation, ParseError> {
    expr.split(TOKEN_SEPARATOR)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(pair)
        .collect::<Result<Vec<_>, _>>()
        .map(Permutation::new)
}
