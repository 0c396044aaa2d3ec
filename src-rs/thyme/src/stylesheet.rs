use owo_colors::Style;

pub const ERROR_COLOR: Style = Style::new().red();
pub const NOTE_COLOR: Style = Style::new().blue();
pub const HELP_COLOR: Style = Style::new().cyan();
pub const SOURCE_ANNOTATION: Style = Style::new().blue().bold();

pub const TEST_NAME: Style = Style::new().bold();
pub const BROWSER: Style = Style::new().green();
pub const STEP_NAME: Style = Style::new().yellow().bold();
pub const STATEMENT_KIND: Style = Style::new().dimmed();
pub const VALID: Style = Style::new().green().bold();
