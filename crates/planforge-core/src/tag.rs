//! Category and group tags.
//!
//! Both tag kinds are string-backed newtypes so that categories and groups
//! cannot be mixed up at a call site, while still comparing and hashing
//! like their label.

use std::borrow::Borrow;
use std::fmt;

/// Generates a string-backed tag newtype with conversions and `Display`.
///
/// # Usage
/// ```ignore
/// impl_tag!(
///     /// Docs for the tag.
///     Category
/// );
/// ```
macro_rules! impl_tag {
    ($(#[$meta:meta])* $type:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(transparent))]
        pub struct $type(String);

        impl $type {
            /// Creates a tag from its label.
            pub fn new(label: impl Into<String>) -> Self {
                Self(label.into())
            }

            /// Returns the tag label.
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $type {
            fn from(label: &str) -> Self {
                Self(label.to_string())
            }
        }

        impl From<String> for $type {
            fn from(label: String) -> Self {
                Self(label)
            }
        }

        impl Borrow<str> for $type {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_tag!(
    /// The kind of an item, e.g. `"transport"` or `"food"`.
    Category
);

impl_tag!(
    /// A grouping of items, typically a day index.
    Group
);

impl From<u32> for Group {
    fn from(index: u32) -> Self {
        Self(index.to_string())
    }
}
