//! Simple selector kinds and their rendering templates.
//! Spec: <https://www.w3.org/TR/selectors-3/#simple-selectors>

use core::fmt::{self, Display, Formatter};

/// The kind of a simple selector appended to a compound selector.
///
/// Variants are declared in the order they must appear inside a compound
/// selector, so the derived `Ord` is the ordering rule:
/// element, id, class, attribute, pseudo-class, pseudo-element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PartKind {
    /// Spec: Section 6.1 — Type selector, rendered as `value`.
    Element,
    /// Spec: Section 6.5 — ID selector, rendered as `#value`.
    Id,
    /// Spec: Section 6.4 — Class selector, rendered as `.value`.
    Class,
    /// Spec: Section 6.3 — Attribute selector, rendered as `[value]`.
    Attribute,
    /// Spec: Section 6.6 — Pseudo-class, rendered as `:value`.
    PseudoClass,
    /// Spec: Section 7 — Pseudo-element, rendered as `::value`.
    PseudoElement,
}

impl PartKind {
    /// Every kind, in the order they must appear.
    pub const ALL: [Self; 6] = [
        Self::Element,
        Self::Id,
        Self::Class,
        Self::Attribute,
        Self::PseudoClass,
        Self::PseudoElement,
    ];

    /// True for kinds that may occur at most once in a compound selector.
    #[inline]
    pub const fn is_singleton(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }

    /// Human readable name, as used in error messages.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Element => "element",
            Self::Id => "id",
            Self::Class => "class",
            Self::Attribute => "attribute",
            Self::PseudoClass => "pseudo-class",
            Self::PseudoElement => "pseudo-element",
        }
    }

    /// Text written before the value.
    #[inline]
    const fn prefix(self) -> &'static str {
        match self {
            Self::Element => "",
            Self::Id => "#",
            Self::Class => ".",
            Self::Attribute => "[",
            Self::PseudoClass => ":",
            Self::PseudoElement => "::",
        }
    }

    /// Text written after the value.
    #[inline]
    const fn suffix(self) -> &'static str {
        match self {
            Self::Attribute => "]",
            Self::Element | Self::Id | Self::Class | Self::PseudoClass | Self::PseudoElement => "",
        }
    }

    /// Append the rendered form of `value` to `out`. The value is embedded verbatim.
    #[inline]
    pub(crate) fn render_into(self, out: &mut String, value: &str) {
        out.reserve(self.prefix().len() + value.len() + self.suffix().len());
        out.push_str(self.prefix());
        out.push_str(value);
        out.push_str(self.suffix());
    }

    /// Render `value` with this kind's template.
    pub fn render(self, value: &str) -> String {
        let mut out = String::new();
        self.render_into(&mut out, value);
        out
    }
}

impl Display for PartKind {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// The singleton kinds already present in a compound selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct SingletonSet {
    bits: u8,
}

impl SingletonSet {
    /// No kinds recorded.
    pub(crate) const EMPTY: Self = Self { bits: 0 };

    /// Bit for a singleton kind, `None` for repeatable kinds.
    const fn bit(kind: PartKind) -> Option<u8> {
        match kind {
            PartKind::Element => Some(0b001),
            PartKind::Id => Some(0b010),
            PartKind::PseudoElement => Some(0b100),
            PartKind::Class | PartKind::Attribute | PartKind::PseudoClass => None,
        }
    }

    #[inline]
    pub(crate) const fn contains(self, kind: PartKind) -> bool {
        match Self::bit(kind) {
            Some(bit) => (self.bits & bit) != 0,
            None => false,
        }
    }

    /// Copy of this set with `kind` recorded. Repeatable kinds leave it unchanged.
    #[inline]
    #[must_use]
    pub(crate) const fn with(self, kind: PartKind) -> Self {
        match Self::bit(kind) {
            Some(bit) => Self {
                bits: self.bits | bit,
            },
            None => self,
        }
    }
}
