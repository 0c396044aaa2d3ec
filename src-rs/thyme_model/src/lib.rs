//! Data model for the Thyme browser test language
//!
//! All types in this crate are immutable values. Resolution never mutates a
//! model in place; it builds new values from old ones through the `with_*`
//! methods.
//!
//! A test is made of named steps. Each step holds ordered actions and
//! assertions whose identifiers and values may still refer to pages, to
//! elements declared on the step, or to data parameters. A step may also be
//! waiting on a step import or a data provider import, which is represented
//! by [`StepDefinition::PendingImport`].

mod action;
mod assertion;
mod data_set;
mod identifier;
mod identifier_collection;
mod name;
mod page;
mod step;
mod value;

pub use action::{Action, InputAction, InteractionAction, InteractionType, NavigationType};
pub use assertion::{Assertion, Comparison};
pub use data_set::{DataSet, DataSetCollection};
pub use identifier::{
    AttributeIdentifier, ElementIdentifier, Identifier, Locator, PageElementReference, Position,
};
pub use identifier_collection::IdentifierCollection;
pub use name::{
    AttributeName, DataProviderName, ElementName, PageImportName, StepImportName, StepName,
    TestName,
};
pub use page::Page;
pub use step::{PendingImportStep, Step, StepDefinition};
pub use test::{Configuration, Test, TestSuite};
pub use value::Value;
