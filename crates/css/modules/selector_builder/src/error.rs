//! Errors raised while appending parts to a compound selector.

use crate::PartKind;
use core::error::Error;
use core::fmt::{self, Display, Formatter};

/// Message carried by [`BuildError::Order`].
pub const ORDER_MESSAGE: &str = "Selector parts should be arranged in the following order: element, id, class, attribute, pseudo-class, pseudo-element";

/// Message carried by [`BuildError::DuplicateSingleton`].
pub const DUPLICATE_SINGLETON_MESSAGE: &str =
    "Element, id and pseudo-element should not occur more then one time inside the selector";

/// A rejected append. The selector it was called on is left untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BuildError {
    /// `kind` was appended after `after`, which must come later.
    Order {
        /// The kind that was being appended.
        kind: PartKind,
        /// The last kind already present.
        after: PartKind,
    },
    /// A second element, id or pseudo-element was appended.
    DuplicateSingleton {
        /// The repeated kind.
        kind: PartKind,
    },
}

impl BuildError {
    /// The kind whose append was rejected.
    pub const fn kind(self) -> PartKind {
        match self {
            Self::Order { kind, .. } | Self::DuplicateSingleton { kind } => kind,
        }
    }

    /// The fixed message describing the violated rule.
    pub const fn message(self) -> &'static str {
        match self {
            Self::Order { .. } => ORDER_MESSAGE,
            Self::DuplicateSingleton { .. } => DUPLICATE_SINGLETON_MESSAGE,
        }
    }
}

impl Display for BuildError {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.message())
    }
}

impl Error for BuildError {}
