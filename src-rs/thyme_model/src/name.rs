//! Names used to refer to entities in a Thyme document.
//!
//! Every name is a trimmed string wrapped in its own type so that, for
//! example, a page import name can never be passed where a step import name
//! is expected.

use std::{fmt, ops::Deref};

macro_rules! name_type {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Creates a new name, trimming surrounding whitespace.
            #[must_use]
            pub fn new(name: impl AsRef<str>) -> Self {
                Self(name.as_ref().trim().to_string())
            }

            /// Returns the name as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl Deref for $name {
            type Target = str;

            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self::new(name)
            }
        }
    };
}

name_type!(
    /// The name of an element, either declared on a page or on a step.
    ElementName
);

name_type!(
    /// The name of an attribute read from an element.
    AttributeName
);

name_type!(
    /// The local name under which a page is imported.
    PageImportName
);

name_type!(
    /// The local name under which a step is imported.
    StepImportName
);

name_type!(
    /// The local name under which a data provider is imported.
    DataProviderName
);

name_type!(
    /// The name of a step within a test.
    StepName
);

name_type!(
    /// The name of a test, usually the path it was loaded from.
    TestName
);

impl StepImportName {
    /// Returns the form of this name used for cycle comparison.
    ///
    /// Two import names that only differ in letter case refer to the same
    /// link in an import chain.
    #[must_use]
    pub fn normalized(&self) -> String {
        self.0.to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed() {
        let name = ElementName::new("  submit_button \t");

        assert_eq!(name.as_str(), "submit_button");
        assert_eq!(name.to_string(), "submit_button");
    }

    #[test]
    fn normalized_step_import_names_ignore_case() {
        let lower = StepImportName::new("open_form");
        let upper = StepImportName::new(" Open_Form");

        assert_ne!(lower, upper);
        assert_eq!(lower.normalized(), upper.normalized());
    }
}
