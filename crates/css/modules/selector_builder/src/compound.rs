//! Persistent builder for compound selectors.
//! Spec: <https://www.w3.org/TR/selectors-3/#sequence>

use crate::part::SingletonSet;
use crate::{BuildError, PartKind, Selector};
use core::fmt::{self, Display, Formatter};
use log::{debug, trace};

/// A compound selector under construction, such as `a#nav.item[href]:hover`.
///
/// Every part method borrows `self` and returns a new value, so one selector
/// can serve as the base of several derived selectors.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CompoundSelector {
    /// Rendered text so far.
    text: String,
    /// Kind of the most recently appended part.
    last: Option<PartKind>,
    /// Element, id and pseudo-element kinds already used.
    seen: SingletonSet,
}

impl CompoundSelector {
    /// The empty selector every chain starts from.
    #[inline]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last: None,
            seen: SingletonSet::EMPTY,
        }
    }

    /// Kind of the most recently appended part, `None` when empty.
    #[inline]
    pub const fn last_kind(&self) -> Option<PartKind> {
        self.last
    }

    /// True if `kind` is a singleton kind already present.
    /// Repeatable kinds are not tracked and always report `false`.
    #[inline]
    pub const fn contains(&self, kind: PartKind) -> bool {
        self.seen.contains(kind)
    }

    /// Return a copy of this selector with one more part appended.
    ///
    /// # Errors
    /// - [`BuildError::Order`] if `kind` must come before the last appended kind.
    /// - [`BuildError::DuplicateSingleton`] if `kind` is an element, id or
    ///   pseudo-element already present.
    ///
    /// The ordering rule is checked first.
    pub fn push(&self, kind: PartKind, value: &str) -> Result<Self, BuildError> {
        if let Some(after) = self.last
            && kind < after
        {
            debug!("rejecting {kind} after {after} in {:?}", self.text);
            return Err(BuildError::Order { kind, after });
        }
        if self.seen.contains(kind) {
            debug!("rejecting second {kind} in {:?}", self.text);
            return Err(BuildError::DuplicateSingleton { kind });
        }
        let mut text = self.text.clone();
        kind.render_into(&mut text, value);
        trace!("appended {kind}: {text:?}");
        Ok(Self {
            text,
            last: Some(kind),
            seen: self.seen.with(kind),
        })
    }

    /// Append a type selector: `value`.
    ///
    /// # Errors
    /// See [`CompoundSelector::push`].
    #[inline]
    pub fn element(&self, value: &str) -> Result<Self, BuildError> {
        self.push(PartKind::Element, value)
    }

    /// Append an id selector: `#value`.
    ///
    /// # Errors
    /// See [`CompoundSelector::push`].
    #[inline]
    pub fn id(&self, value: &str) -> Result<Self, BuildError> {
        self.push(PartKind::Id, value)
    }

    /// Append a class selector: `.value`.
    ///
    /// # Errors
    /// See [`CompoundSelector::push`].
    #[inline]
    pub fn class(&self, value: &str) -> Result<Self, BuildError> {
        self.push(PartKind::Class, value)
    }

    /// Append an attribute selector: `[value]`.
    ///
    /// # Errors
    /// See [`CompoundSelector::push`].
    #[inline]
    pub fn attr(&self, value: &str) -> Result<Self, BuildError> {
        self.push(PartKind::Attribute, value)
    }

    /// Append a pseudo-class: `:value`.
    ///
    /// # Errors
    /// See [`CompoundSelector::push`].
    #[inline]
    pub fn pseudo_class(&self, value: &str) -> Result<Self, BuildError> {
        self.push(PartKind::PseudoClass, value)
    }

    /// Append a pseudo-element: `::value`.
    ///
    /// # Errors
    /// See [`CompoundSelector::push`].
    #[inline]
    pub fn pseudo_element(&self, value: &str) -> Result<Self, BuildError> {
        self.push(PartKind::PseudoElement, value)
    }
}

impl Selector for CompoundSelector {
    #[inline]
    fn stringify(&self) -> &str {
        &self.text
    }
}

impl Display for CompoundSelector {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::CompoundSelector;
    use crate::{BuildError, PartKind, Selector as _};

    type TestResult = Result<(), BuildError>;

    #[test]
    fn full_compound_in_order() -> TestResult {
        let sel = CompoundSelector::new()
            .element("a")?
            .id("nav")?
            .class("item")?
            .class("active")?
            .attr("href")?
            .attr(r#"rel="next""#)?
            .pseudo_class("hover")?
            .pseudo_class("focus")?
            .pseudo_element("after")?;
        assert_eq!(
            sel.stringify(),
            r#"a#nav.item.active[href][rel="next"]:hover:focus::after"#
        );
        assert_eq!(sel.last_kind(), Some(PartKind::PseudoElement));
        Ok(())
    }

    #[test]
    fn any_suffix_of_the_order_may_start_a_chain() -> TestResult {
        let empty = CompoundSelector::new();
        assert_eq!(empty.attr("disabled")?.pseudo_class("checked")?.stringify(), "[disabled]:checked");
        assert_eq!(empty.pseudo_element("before")?.stringify(), "::before");
        assert_eq!(empty.id("main")?.pseudo_element("marker")?.stringify(), "#main::marker");
        Ok(())
    }

    #[test]
    fn earlier_kind_after_later_kind_is_rejected() -> TestResult {
        let class = CompoundSelector::new().class("x")?;
        assert_eq!(
            class.id("y"),
            Err(BuildError::Order {
                kind: PartKind::Id,
                after: PartKind::Class
            })
        );
        let pseudo = CompoundSelector::new().pseudo_class("hover")?;
        assert!(matches!(pseudo.class("x"), Err(BuildError::Order { .. })));
        assert!(matches!(pseudo.attr("x"), Err(BuildError::Order { .. })));
        Ok(())
    }

    #[test]
    fn singleton_tracking() -> TestResult {
        let sel = CompoundSelector::new().element("div")?.class("x")?;
        assert!(sel.contains(PartKind::Element));
        assert!(!sel.contains(PartKind::Id));
        assert!(!sel.contains(PartKind::Class));
        assert_eq!(
            CompoundSelector::new().id("a")?.id("b"),
            Err(BuildError::DuplicateSingleton { kind: PartKind::Id })
        );
        assert_eq!(
            CompoundSelector::new().pseudo_element("a")?.pseudo_element("b"),
            Err(BuildError::DuplicateSingleton {
                kind: PartKind::PseudoElement
            })
        );
        Ok(())
    }

    #[test]
    fn rejected_append_leaves_receiver_usable() -> TestResult {
        let base = CompoundSelector::new().element("li")?.class("entry")?;
        let before = base.clone();
        assert!(matches!(base.element("ul"), Err(BuildError::Order { .. })));
        assert_eq!(base, before);
        assert_eq!(base.class("last")?.stringify(), "li.entry.last");
        Ok(())
    }

    #[test]
    fn values_are_embedded_verbatim() -> TestResult {
        let empty_values = CompoundSelector::new().class("")?.attr("")?;
        assert_eq!(empty_values.stringify(), ".[]");
        let verbatim = CompoundSelector::new().pseudo_class("not(.a, .b)")?;
        assert_eq!(verbatim.to_string(), ":not(.a, .b)");
        Ok(())
    }
}
