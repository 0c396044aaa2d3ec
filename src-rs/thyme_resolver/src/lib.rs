//! Resolution engine for the Thyme browser test language
//!
//! A loaded test still refers to things declared elsewhere: pages it
//! imports, steps it reuses, data providers it runs with and elements its
//! steps declare. Resolution replaces every such reference with what it
//! refers to, producing a test that can be run without any of its imports.
//!
//! # Overview
//!
//! Resolution starts from a [`Test`](thyme_model::Test) and the
//! [`Providers`] populated for it by a loader:
//!
//! 1. the start URL is resolved if it is written as `<page>.url`
//! 2. each step's step import chain is followed, prepending the actions and
//!    assertions of imported steps, and its data provider import is attached
//! 3. the elements the step declares (including those of imported steps)
//!    form its symbol table
//! 4. every action and assertion is resolved against the symbol table and
//!    the imported pages
//!
//! Errors are reported with a context trail naming the statement, step,
//! test and suite they occurred in.
//!
//! # Example
//!
//! ```
//! use indexmap::IndexMap;
//! use thyme_model::{Configuration, Page, PageImportName, IdentifierCollection, Test, TestName};
//! use thyme_resolver::{EmptyProvider, PopulatedProvider, Providers, resolve_test};
//!
//! let pages = PopulatedProvider::new().with_entry(
//!     PageImportName::new("home"),
//!     Page::new("https://example.com".to_string(), IdentifierCollection::new()),
//! );
//! let providers = Providers::new(&pages, &EmptyProvider, &EmptyProvider);
//!
//! let test = Test::new(
//!     TestName::new("home.yml"),
//!     Configuration::new("chrome", "home.url"),
//!     IndexMap::new(),
//! );
//!
//! let resolved = resolve_test(&test, providers).expect("test should resolve");
//! assert_eq!(resolved.configuration().url(), "https://example.com");
//! ```

pub mod error;
pub mod provider;
mod resolver;
mod util;

#[cfg(test)]
mod test;

pub use crate::error::{ResolutionContext, ResolutionError, ResolutionErrorKind};
pub use crate::provider::{
    DataSetProvider, EmptyProvider, LookupError, PageProvider, PopulatedProvider, Providers,
    StepProvider,
};
pub use crate::resolver::{
    MAX_IMPORT_DEPTH, page_url_reference, resolve_action, resolve_assertion,
    resolve_attribute_parameter, resolve_configuration, resolve_data_provider_import,
    resolve_element_parameter, resolve_identifier, resolve_page_element_reference,
    resolve_step_import, resolve_test, resolve_test_suite, resolve_value,
};
