use nom::{
    branch::alt,
    bytes::complete::{is_not, tag_no_case},
    character::complete::{char, satisfy},
    combinator::{not, recognize},
    sequence::{delimited, terminated, tuple},
    IResult,
};
use texttoken::{Connector, Token, TokenKind};

//Braces can't nest and symbols never contain whitespace
fn parse_symbol(text: &str) -> IResult<&str, Token<'_>, ()> {
    let (rest, symbol) = recognize(delimited(char('{'), is_not("{} \t\r\n"), char('}')))(text)?;
    let kind = if symbol.eq_ignore_ascii_case("{T}") {
        TokenKind::TapSymbol
    } else {
        TokenKind::ManaSymbol
    };
    Ok((rest, Token::new(kind, symbol)))
}

//The whitespace on both sides belongs to the connector.
//"hand" never matches and in "or or" only the first is found.
fn parse_connector(text: &str) -> IResult<&str, Token<'_>, ()> {
    let (rest, (_, word, _)) = tuple((
        satisfy(char::is_whitespace),
        alt((tag_no_case("and"), tag_no_case("or"))),
        satisfy(char::is_whitespace),
    ))(text)?;
    let token = if word.eq_ignore_ascii_case("and") {
        Token::new(TokenKind::Connector(Connector::And), "AND")
    } else {
        Token::new(TokenKind::Connector(Connector::Or), "OR")
    };
    Ok((rest, token))
}

//Only called at a word start, this checks the word also ends after "add"
fn parse_action(text: &str) -> IResult<&str, Token<'_>, ()> {
    let (rest, _) = terminated(tag_no_case("add"), not(satisfy(char::is_alphanumeric)))(text)?;
    Ok((rest, Token::new(TokenKind::Action, "ADD")))
}

fn parse_terminator(text: &str) -> IResult<&str, Token<'_>, ()> {
    let (rest, _) = char('.')(text)?;
    Ok((rest, Token::new(TokenKind::Terminator, ".")))
}

fn parse_token(text: &str, word_start: bool) -> IResult<&str, Token<'_>, ()> {
    if word_start {
        alt((parse_symbol, parse_connector, parse_action, parse_terminator))(text)
    } else {
        alt((parse_symbol, parse_connector, parse_terminator))(text)
    }
}

//Pulls the keywords the mana resolver cares about out of rules text.
//Anything that isn't one of them is skipped, so this never fails.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut res = Vec::new();
    let mut rest = text;
    let mut prev: Option<char> = None;
    while let Some(next) = rest.chars().next() {
        let word_start = !prev.map_or(false, char::is_alphanumeric);
        match parse_token(rest, word_start) {
            Ok((remaining, token)) => {
                prev = rest[..rest.len() - remaining.len()].chars().last();
                res.push(token);
                rest = remaining;
            }
            Err(_) => {
                prev = Some(next);
                rest = &rest[next.len_utf8()..];
            }
        }
    }
    res
}
