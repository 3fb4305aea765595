use std::borrow::Cow;
use std::ops::{Index, RangeFrom};

use nom::Needed;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Connector {
    And,
    Or,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    ManaSymbol, //Any brace delimited symbol except the tap symbol
    TapSymbol,
    Connector(Connector),
    Action, //"add"
    Terminator,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: Cow<'a, str>,
}
impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}

//A borrowed run of tokens that nom parsers can consume.
//Splitting never copies, it only narrows the slice.
#[derive(Debug)]
#[repr(transparent)]
pub struct Tokens<'a> {
    pub tokens: [Token<'a>],
}
impl<'a> Tokens<'a> {
    pub fn from_slice<'s>(tokens: &'s [Token<'a>]) -> &'s Self {
        //Tokens is repr(transparent) over the slice, so the pointer metadata is identical
        unsafe { &*(tokens as *const [Token<'a>] as *const Tokens<'a>) }
    }
    pub fn len(&self) -> usize {
        self.tokens.len()
    }
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
    pub fn contains_kind(&self, kind: TokenKind) -> bool {
        self.tokens.iter().any(|token| token.is(kind))
    }
}
impl<'s, 'a> IntoIterator for &'s Tokens<'a> {
    type Item = &'s Token<'a>;
    type IntoIter = std::slice::Iter<'s, Token<'a>>;
    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl<'s, 'a> nom::InputLength for &'s Tokens<'a> {
    fn input_len(&self) -> usize {
        self.tokens.len()
    }
}
impl<'s, 'a> nom::InputTake for &'s Tokens<'a> {
    fn take(&self, count: usize) -> Self {
        let this: &'s Tokens<'a> = *self;
        Tokens::from_slice(&this.tokens[..count])
    }
    fn take_split(&self, count: usize) -> (Self, Self) {
        let this: &'s Tokens<'a> = *self;
        let (prefix, suffix) = this.tokens.split_at(count);
        (Tokens::from_slice(suffix), Tokens::from_slice(prefix))
    }
}

impl<'s, 'a> nom::UnspecializedInput for &'s Tokens<'a> {}

impl<'s, 'a> nom::InputIter for &'s Tokens<'a> {
    type Item = &'s Token<'a>;
    type Iter = std::iter::Enumerate<std::slice::Iter<'s, Token<'a>>>;
    type IterElem = std::slice::Iter<'s, Token<'a>>;
    fn iter_indices(&self) -> Self::Iter {
        let this: &'s Tokens<'a> = *self;
        this.tokens.iter().enumerate()
    }
    fn iter_elements(&self) -> Self::IterElem {
        let this: &'s Tokens<'a> = *self;
        this.tokens.iter()
    }
    fn position<P>(&self, predicate: P) -> Option<usize>
    where
        P: Fn(Self::Item) -> bool,
    {
        let this: &'s Tokens<'a> = *self;
        this.tokens.iter().position(predicate)
    }
    #[inline]
    fn slice_index(&self, count: usize) -> Result<usize, Needed> {
        if self.len() >= count {
            Ok(count)
        } else {
            Err(Needed::new(count - self.len()))
        }
    }
}
impl<'a> Index<usize> for Tokens<'a> {
    type Output = Token<'a>;
    fn index(&self, x: usize) -> &Token<'a> {
        &self.tokens[x]
    }
}

impl<'a> Index<RangeFrom<usize>> for Tokens<'a> {
    type Output = Tokens<'a>;
    fn index(&self, x: RangeFrom<usize>) -> &Tokens<'a> {
        Tokens::from_slice(&self.tokens[x])
    }
}
