use crate::tokenize::tokenize;
use common::card_behavior::TapPurpose;
use common::mana::{Color, ManaTapProfile};
use log::debug;
use nom::bytes::complete::take_till;
use nom::IResult;
use schemars::JsonSchema;
use serde_derive::Serialize;
use texttoken::{Connector, Token, TokenKind, Tokens};

//One "{T}: ..." ability, from the tap symbol up to its terminator
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, JsonSchema)]
pub struct TapClause {
    pub purpose: TapPurpose,
    pub mana: ManaTapProfile,
}

//Splits before the first token of the given kind.
//Returns (from that token on, everything before it). With no match the first half is empty.
fn split_before<'s, 'a>(tokens: &'s Tokens<'a>, kind: TokenKind) -> (&'s Tokens<'a>, &'s Tokens<'a>) {
    let res: IResult<&'s Tokens<'a>, &'s Tokens<'a>, ()> =
        take_till(|token: &Token| token.is(kind))(tokens);
    match res {
        Ok(split) => split,
        Err(_) => (&tokens[tokens.len()..], tokens),
    }
}

fn read_clause(clause: &Tokens, text: &str) -> TapClause {
    if !clause.contains_kind(TokenKind::Action) {
        debug!("tap ability without add in {:?}, not a mana ability", text);
        return TapClause {
            purpose: TapPurpose::Action,
            mana: ManaTapProfile::new(),
        };
    }
    let mut mana = ManaTapProfile::new();
    for token in clause {
        match token.kind {
            TokenKind::ManaSymbol => match Color::from_symbol(&token.text) {
                Some(color) => mana.add(color),
                None => debug!("ignoring mana symbol {} in {:?}", token.text, text),
            },
            TokenKind::Connector(Connector::Or) => mana.mutually_exclusive = true,
            _ => {}
        }
    }
    TapClause {
        purpose: TapPurpose::Mana,
        mana,
    }
}

//Every tap ability in the text, in order.
//Clauses run from a tap symbol to the next terminator, or to the end of the text when it's missing.
pub fn tap_clauses(text: &str) -> Vec<TapClause> {
    let owned = tokenize(text);
    let mut rest = Tokens::from_slice(&owned);
    let mut res = Vec::new();
    loop {
        let (from_tap, _) = split_before(rest, TokenKind::TapSymbol);
        if from_tap.is_empty() {
            break;
        }
        let (after, clause) = split_before(from_tap, TokenKind::Terminator);
        res.push(read_clause(clause, text));
        if after.is_empty() {
            debug!("tap ability runs to the end of {:?}", text);
            break;
        }
        rest = &after[1..];
    }
    if res.is_empty() && !owned.is_empty() {
        debug!("no tap ability in {:?}", text);
    }
    res
}

//Sum of the mana clauses, other tap abilities add nothing
pub fn merge_mana(clauses: &[TapClause]) -> ManaTapProfile {
    let mut profile = ManaTapProfile::new();
    for clause in clauses {
        if clause.purpose == TapPurpose::Mana {
            profile.merge(&clause.mana);
        }
    }
    profile
}

//Total mana the tap abilities of a permanent can produce
pub fn resolve_mana_tap(text: &str) -> ManaTapProfile {
    merge_mana(&tap_clauses(text))
}
