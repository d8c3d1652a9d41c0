//! Complex selectors: selectors joined by combinators.
//! Spec: <https://www.w3.org/TR/selectors-3/#combinators>

use crate::{CompoundSelector, Selector};
use core::fmt::{self, Display, Formatter};
use log::trace;

/// Combinators between two selectors.
/// Spec: Section 8 — Combinators
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// Spec: Section 8.1 — Descendant combinator (whitespace).
    Descendant,
    /// Spec: Section 8.2 — Child combinator `>`.
    Child,
    /// Spec: Section 8.3.1 — Next-sibling combinator `+`.
    AdjacentSibling,
    /// Spec: Section 8.3.2 — Subsequent-sibling combinator `~`.
    GeneralSibling,
}

impl Combinator {
    /// The symbol inserted between the two selectors.
    #[inline]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::AdjacentSibling => "+",
            Self::GeneralSibling => "~",
        }
    }

    /// Map one of `" "`, `">"`, `"+"`, `"~"` to its combinator.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            " " => Some(Self::Descendant),
            ">" => Some(Self::Child),
            "+" => Some(Self::AdjacentSibling),
            "~" => Some(Self::GeneralSibling),
            _ => None,
        }
    }
}

impl AsRef<str> for Combinator {
    #[inline]
    fn as_ref(&self) -> &str {
        self.symbol()
    }
}

impl Display for Combinator {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}

/// The result of joining two selectors with a combinator.
///
/// Only the rendered text is kept. There are no part methods on this type,
/// so nothing can be appended after a combination.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct ComplexSelector {
    text: String,
}

impl ComplexSelector {
    /// Join `left` and `right` as `left <symbol> right`.
    ///
    /// The symbol is inserted verbatim with one space on each side, so a
    /// descendant combinator renders as three spaces.
    pub fn combine<L, C, R>(left: &L, combinator: C, right: &R) -> Self
    where
        L: Selector + ?Sized,
        C: AsRef<str>,
        R: Selector + ?Sized,
    {
        let (lhs, symbol, rhs) = (left.stringify(), combinator.as_ref(), right.stringify());
        let mut text = String::with_capacity(lhs.len() + symbol.len() + rhs.len() + 2);
        text.push_str(lhs);
        text.push(' ');
        text.push_str(symbol);
        text.push(' ');
        text.push_str(rhs);
        trace!("combined with {symbol:?}: {text:?}");
        Self { text }
    }
}

impl Selector for ComplexSelector {
    #[inline]
    fn stringify(&self) -> &str {
        &self.text
    }
}

impl Display for ComplexSelector {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

impl From<CompoundSelector> for ComplexSelector {
    #[inline]
    fn from(compound: CompoundSelector) -> Self {
        Self {
            text: compound.to_string(),
        }
    }
}
