//! Serde representations of the YAML documents.
//!
//! These mirror the documents as written and carry no meaning of their own;
//! [`crate::builder`] turns them into model values.

use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

/// A test document.
///
/// Every top-level key other than `config` and `imports` is a step.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TestDocument {
    #[serde(default)]
    pub config: ConfigDocument,
    #[serde(default)]
    pub imports: ImportsDocument,
    #[serde(flatten)]
    pub steps: IndexMap<String, StepDocument>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigDocument {
    pub browser: Option<String>,
    #[serde(default)]
    pub browsers: Vec<String>,
    #[serde(default)]
    pub url: String,
}

impl ConfigDocument {
    /// Returns `browser` followed by `browsers`.
    pub fn all_browsers(&self) -> Vec<String> {
        self.browser
            .iter()
            .chain(&self.browsers)
            .map(|browser| browser.trim().to_string())
            .collect()
    }
}

/// Import name to path, relative to the importing test.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportsDocument {
    #[serde(default)]
    pub steps: IndexMap<String, String>,
    #[serde(default)]
    pub pages: IndexMap<String, String>,
    #[serde(default)]
    pub data_providers: IndexMap<String, String>,
}

/// A step, either inside a test document or as a document of its own.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StepDocument {
    #[serde(rename = "use")]
    pub import_name: Option<String>,
    pub data: Option<DataDocument>,
    #[serde(default)]
    pub elements: IndexMap<String, String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub assertions: Vec<String>,
}

/// The `data` of a step: a data provider import name or inline data sets.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum DataDocument {
    Import(String),
    Inline(DataProviderDocument),
}

/// Data set name to parameters.
pub type DataProviderDocument = IndexMap<String, IndexMap<String, Scalar>>;

/// A page document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageDocument {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub elements: IndexMap<String, String>,
}

/// A YAML scalar read as text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(value) => f.write_str(value),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
        }
    }
}
