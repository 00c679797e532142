//! Central constants for the tea application

/// Defaults for pull request listings
pub mod pulls {
    /// Width of the submitter column
    pub const NAME_WIDTH: usize = 22;

    /// Width of the title column
    pub const TITLE_WIDTH: usize = 25;

    /// Appended to values cut down to their column width
    pub const ELLIPSIS: &str = "...";

    /// Layout of the update timestamp column
    pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    /// Tracker prefix looked up in pull request bodies, as in `[PRD-123]`
    pub const TICKET_PREFIX: &str = "PRD";

    /// Upper bound on pages requested by a single listing
    pub const DEFAULT_MAX_PAGES: u32 = 500;

    /// First page index accepted by the Gitea API
    pub const FIRST_PAGE: u32 = 1;
}

/// Default values for configuration
pub mod config {
    /// Environment variable pointing at an alternative config file
    pub const CONFIG_ENV_VAR: &str = "TEA_CONFIG";

    /// Directory under the home directory holding the config file
    pub const CONFIG_DIR: &str = ".tea";

    /// Configuration file name
    pub const CONFIG_FILE: &str = "tea.yml";
}
