/// Options controlling how tests are loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Whether a test naming several browsers becomes one test per browser.
    ///
    /// When disabled only the first browser is kept.
    pub expand_browsers: bool,
    /// Whether resolved tests are checked by the validator.
    pub validate: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            expand_browsers: true,
            validate: true,
        }
    }
}
