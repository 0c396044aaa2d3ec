//! Test and test suite loaders.

use std::{
    fs,
    path::{Path, PathBuf},
};

use thyme_model::{Test, TestSuite};
use thyme_resolver::{resolve_test, resolve_test_suite};
use tracing::{debug, info};

use crate::{
    builder::build_tests,
    config::LoaderConfig,
    document::TestDocument,
    error::LoadError,
    imports::Imports,
    path::resolve_import_path,
    validator::{Validity, validate_test},
};

/// A test document read from disk, before resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedTest {
    path: PathBuf,
    tests: Vec<Test>,
    imports: Imports,
}

impl LoadedTest {
    /// Returns the path of the test document.
    #[must_use]
    pub const fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the unresolved tests described by the document.
    ///
    /// A document naming several browsers describes one test per browser.
    #[must_use]
    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    /// Returns the imports of the document.
    #[must_use]
    pub const fn imports(&self) -> &Imports {
        &self.imports
    }
}

/// Loads test documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestLoader {
    config: LoaderConfig,
}

impl TestLoader {
    /// Creates a loader with the given options.
    #[must_use]
    pub const fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Reads a test document and its imports without resolving it.
    ///
    /// The tests are named after the path they were loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, is not a valid test
    /// document, is empty, or contains a statement that cannot be parsed.
    /// Imports that cannot be loaded are not errors here; they fail the
    /// test when it is resolved.
    pub fn read(&self, path: &Path) -> Result<LoadedTest, LoadError> {
        info!(path = %path.display(), "loading test");

        let source =
            fs::read_to_string(path).map_err(|error| LoadError::io(path.to_path_buf(), &error))?;

        if is_blank(&source) {
            return Err(LoadError::empty_test(path.to_path_buf()));
        }

        let document: Option<TestDocument> = serde_yaml::from_str(&source)
            .map_err(|error| LoadError::yaml(path.to_path_buf(), &error))?;
        let document = document.ok_or_else(|| LoadError::empty_test(path.to_path_buf()))?;

        let name = path.display().to_string();
        let tests = build_tests(&name, &document, self.config.expand_browsers)
            .map_err(|error| LoadError::parse(path.to_path_buf(), error.step, error.error))?;

        let imports = Imports::load(path, &document.imports);

        debug!(path = %path.display(), tests = tests.len(), "read test");

        Ok(LoadedTest {
            path: path.to_path_buf(),
            tests,
            imports,
        })
    }

    /// Loads, resolves and validates the tests of a document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document cannot be read, if a test cannot be
    /// resolved, or if validation is enabled and a resolved test cannot be
    /// run.
    pub fn load(&self, path: &Path) -> Result<Vec<Test>, LoadError> {
        let loaded = self.read(path)?;
        let providers = loaded.imports.providers();

        loaded
            .tests
            .iter()
            .map(|test| {
                let resolved = resolve_test(test, providers)
                    .map_err(|error| LoadError::resolution(path.to_path_buf(), error))?;
                self.check(path, resolved)
            })
            .collect()
    }

    fn check(&self, path: &Path, test: Test) -> Result<Test, LoadError> {
        if !self.config.validate {
            return Ok(test);
        }

        match validate_test(&test) {
            Validity::Valid => Ok(test),
            Validity::Invalid(reason) => Err(LoadError::invalid(
                path.to_path_buf(),
                test.name().clone(),
                test.configuration().browser().to_string(),
                reason,
            )),
        }
    }
}

/// Loads test suites: YAML lists of test document paths.
#[derive(Debug, Clone, Copy, Default)]
pub struct TestSuiteLoader {
    tests: TestLoader,
}

impl TestSuiteLoader {
    /// Creates a loader with the given options.
    #[must_use]
    pub const fn new(config: LoaderConfig) -> Self {
        Self {
            tests: TestLoader::new(config),
        }
    }

    /// Loads, resolves and validates every test listed by a suite.
    ///
    /// Test paths are relative to the suite document. Entries that are not
    /// strings are ignored. The suite is named after its path.
    ///
    /// # Errors
    ///
    /// Returns an error if the suite cannot be read, if it lists a test that
    /// does not exist, or if any listed test fails to load, resolve or
    /// validate. Loading stops at the first error.
    pub fn load(&self, path: &Path) -> Result<TestSuite, LoadError> {
        info!(path = %path.display(), "loading test suite");

        let source =
            fs::read_to_string(path).map_err(|error| LoadError::io(path.to_path_buf(), &error))?;
        let entries: Option<Vec<serde_yaml::Value>> = serde_yaml::from_str(&source)
            .map_err(|error| LoadError::yaml(path.to_path_buf(), &error))?;

        let suite_name = path.display().to_string();
        let mut tests = Vec::new();

        for entry in entries.unwrap_or_default() {
            let Some(test) = entry.as_str() else {
                debug!(suite = %path.display(), "ignoring entry that is not a path");
                continue;
            };

            let test_path = resolve_import_path(path, test);
            if !test_path.is_file() {
                return Err(LoadError::unknown_test(test_path, path.to_path_buf()));
            }

            tests.extend(self.load_listed_test(&suite_name, &test_path)?);
        }

        Ok(TestSuite::new(suite_name, tests))
    }

    /// Loads, resolves and validates one listed test before the next is read.
    fn load_listed_test(
        &self,
        suite_name: &str,
        test_path: &Path,
    ) -> Result<Vec<Test>, LoadError> {
        let loaded = self.tests.read(test_path)?;
        let providers = loaded.imports.providers();

        let resolved = resolve_test_suite(
            &TestSuite::new(suite_name, loaded.tests.clone()),
            |_| providers,
        )
        .map_err(|error| LoadError::resolution(test_path.to_path_buf(), error))?;

        resolved
            .tests()
            .iter()
            .map(|test| self.tests.check(test_path, test.clone()))
            .collect()
    }
}

/// Returns whether a document holds nothing but comments.
fn is_blank(source: &str) -> bool {
    source.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
