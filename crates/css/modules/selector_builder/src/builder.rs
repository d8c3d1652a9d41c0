//! Entry point for building selectors from structured calls.

use crate::{BuildError, ComplexSelector, CompoundSelector, Selector};

/// Facade over [`CompoundSelector`] and [`ComplexSelector`].
///
/// Each part method starts a new chain from the empty selector; further parts
/// are appended on the returned [`CompoundSelector`]:
///
/// ```
/// use css_selector_builder::{Selector as _, SelectorBuilder};
///
/// let builder = SelectorBuilder;
/// let sel = builder.id("main")?.class("container")?.class("editable")?;
/// assert_eq!(sel.stringify(), "#main.container.editable");
/// # Ok::<(), css_selector_builder::BuildError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectorBuilder;

impl SelectorBuilder {
    /// The empty selector all chains start from.
    #[inline]
    pub const fn empty(self) -> CompoundSelector {
        CompoundSelector::new()
    }

    /// Start a chain with a type selector.
    ///
    /// # Errors
    /// Never fails on the empty selector; the signature matches
    /// [`CompoundSelector::element`].
    #[inline]
    pub fn element(self, value: &str) -> Result<CompoundSelector, BuildError> {
        self.empty().element(value)
    }

    /// Start a chain with an id selector.
    ///
    /// # Errors
    /// See [`SelectorBuilder::element`].
    #[inline]
    pub fn id(self, value: &str) -> Result<CompoundSelector, BuildError> {
        self.empty().id(value)
    }

    /// Start a chain with a class selector.
    ///
    /// # Errors
    /// See [`SelectorBuilder::element`].
    #[inline]
    pub fn class(self, value: &str) -> Result<CompoundSelector, BuildError> {
        self.empty().class(value)
    }

    /// Start a chain with an attribute selector.
    ///
    /// # Errors
    /// See [`SelectorBuilder::element`].
    #[inline]
    pub fn attr(self, value: &str) -> Result<CompoundSelector, BuildError> {
        self.empty().attr(value)
    }

    /// Start a chain with a pseudo-class.
    ///
    /// # Errors
    /// See [`SelectorBuilder::element`].
    #[inline]
    pub fn pseudo_class(self, value: &str) -> Result<CompoundSelector, BuildError> {
        self.empty().pseudo_class(value)
    }

    /// Start a chain with a pseudo-element.
    ///
    /// # Errors
    /// See [`SelectorBuilder::element`].
    #[inline]
    pub fn pseudo_element(self, value: &str) -> Result<CompoundSelector, BuildError> {
        self.empty().pseudo_element(value)
    }

    /// Join two selectors with a combinator. See [`ComplexSelector::combine`].
    #[inline]
    pub fn combine<L, C, R>(self, left: &L, combinator: C, right: &R) -> ComplexSelector
    where
        L: Selector + ?Sized,
        C: AsRef<str>,
        R: Selector + ?Sized,
    {
        ComplexSelector::combine(left, combinator, right)
    }

    /// Owned copy of a selector's text.
    #[inline]
    pub fn stringify<S: Selector + ?Sized>(self, selector: &S) -> String {
        selector.stringify().to_owned()
    }
}
