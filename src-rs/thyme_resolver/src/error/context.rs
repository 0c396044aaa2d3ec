use std::fmt;

use thyme_model::{ElementName, StepName, TestName};

/// One entry of the trail an error gathers on its way out of the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionContext {
    /// The action or assertion being resolved
    Statement(String),
    /// The step element declaration being resolved
    Element(ElementName),
    /// The step being resolved
    Step(StepName),
    /// The test being resolved
    Test(TestName),
    /// The test suite being resolved
    TestSuite(String),
}

impl fmt::Display for ResolutionContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Statement(source) => write!(f, "in statement `{source}`"),
            Self::Element(name) => write!(f, "in element `{name}`"),
            Self::Step(name) => write!(f, "in step `{name}`"),
            Self::Test(name) => write!(f, "in test `{name}`"),
            Self::TestSuite(name) => write!(f, "in test suite `{name}`"),
        }
    }
}
