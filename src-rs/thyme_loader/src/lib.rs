//! Loading of Thyme tests and test suites from YAML documents
//!
//! A test document declares its configuration, the pages, steps and data
//! providers it imports, and its own steps:
//!
//! ```yaml
//! config:
//!   browsers: [chrome, firefox]
//!   url: home.url
//!
//! imports:
//!   pages:
//!     home: ../pages/home.yml
//!   steps:
//!     open form: ../steps/open_form.yml
//!
//! sign in:
//!   use: open form
//!   actions:
//!     - set $elements.username to "ada"
//!   assertions:
//!     - $page.title is "Welcome"
//! ```
//!
//! [`TestLoader`] reads such a document, loads every import eagerly,
//! resolves the tests with `thyme_resolver` and checks the result with
//! [`validate_test`]. [`TestSuiteLoader`] does the same for every test
//! listed by a suite document.

mod builder;
mod config;
mod document;
mod error;
mod imports;
mod loader;
mod path;
mod validator;

pub use crate::config::LoaderConfig;
pub use crate::error::LoadError;
pub use crate::imports::Imports;
pub use crate::loader::{LoadedTest, TestLoader, TestSuiteLoader};
pub use crate::path::resolve_import_path;
pub use crate::validator::{InvalidReason, Validity, validate_test};
