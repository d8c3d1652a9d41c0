//! Selectors Level 3 — Building selector text from structured calls.
//! Spec: <https://www.w3.org/TR/selectors-3/>
//!
//! This crate assembles selector strings without parsing them:
//! - Compound selectors, appended part by part in the canonical order
//!   element, id, class, attribute, pseudo-class, pseudo-element
//! - At most one element, id and pseudo-element per compound selector
//! - Combinators joining any two built selectors
//!
//! Values are persistent: appending never mutates the receiver, so a partly
//! built selector can be shared between several derived selectors.

#![forbid(unsafe_code)]

mod builder;
mod complex;
mod compound;
mod error;
mod part;

// Re-export public API
pub use builder::SelectorBuilder;
pub use complex::{Combinator, ComplexSelector};
pub use compound::CompoundSelector;
pub use error::{BuildError, DUPLICATE_SINGLETON_MESSAGE, ORDER_MESSAGE};
pub use part::PartKind;

/// A built selector that can be rendered as CSS text.
///
/// Implemented by [`CompoundSelector`] and [`ComplexSelector`], so either can
/// be an operand of [`ComplexSelector::combine`].
pub trait Selector {
    /// The selector text, exactly as built.
    fn stringify(&self) -> &str;

    /// True if nothing has been appended.
    #[inline]
    fn is_empty(&self) -> bool {
        self.stringify().is_empty()
    }
}
