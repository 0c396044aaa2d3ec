//! Data sets parameterise a step.

use indexmap::IndexMap;

/// A named set of data parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataSet {
    name: String,
    parameters: IndexMap<String, String>,
}

impl DataSet {
    /// Creates a new data set.
    #[must_use]
    pub fn new(name: impl Into<String>, parameters: IndexMap<String, String>) -> Self {
        Self {
            name: name.into(),
            parameters,
        }
    }

    /// Returns the name of this data set.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters.get(key).map(String::as_str)
    }

    /// Returns all parameters in declaration order.
    #[must_use]
    pub const fn parameters(&self) -> &IndexMap<String, String> {
        &self.parameters
    }
}

/// An ordered sequence of data sets.
///
/// By convention every data set in a collection declares the same
/// parameter names, but this is not enforced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataSetCollection(Vec<DataSet>);

impl DataSetCollection {
    /// Creates a collection from data sets.
    #[must_use]
    pub const fn new(data_sets: Vec<DataSet>) -> Self {
        Self(data_sets)
    }

    /// Returns the data set with the given name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&DataSet> {
        self.0.iter().find(|data_set| data_set.name() == name)
    }

    /// Iterates over the data sets in order.
    pub fn iter(&self) -> std::slice::Iter<'_, DataSet> {
        self.0.iter()
    }

    /// Returns the number of data sets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the collection holds no data sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<DataSet> for DataSetCollection {
    fn from_iter<I: IntoIterator<Item = DataSet>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a DataSetCollection {
    type Item = &'a DataSet;
    type IntoIter = std::slice::Iter<'a, DataSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
