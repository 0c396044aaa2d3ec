//! The resolvers, from single identifiers up to test suites.
//!
//! ```text
//! resolve_test_suite
//!   └─ resolve_test
//!        ├─ resolve_configuration
//!        └─ for each step
//!             ├─ resolve_step_import ─▶ resolve_data_provider_import
//!             └─ resolve_action / resolve_assertion
//!                  └─ resolve_identifier / resolve_value
//! ```

mod action;
mod configuration;
mod identifier;
mod lookup;
mod step_import;
mod value;

pub use action::{resolve_action, resolve_assertion};
pub use configuration::{page_url_reference, resolve_configuration};
pub use identifier::{
    resolve_attribute_parameter, resolve_element_parameter, resolve_identifier,
    resolve_page_element_reference,
};
pub use step_import::{MAX_IMPORT_DEPTH, resolve_data_provider_import, resolve_step_import};
pub use test::{resolve_test, resolve_test_suite};
pub use value::resolve_value;
