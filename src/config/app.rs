//! Application-level configuration derived from the command line.
//!
//! Every argument is a date/time pattern. Blank arguments are ignored, so a
//! launcher that passes `""` still gets the locale's patterns.

/// Startup options for one process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Non-blank patterns from the command line, in the order given.
    pub patterns: Vec<String>,
}

impl AppConfig {
    /// Build the configuration from the arguments after the program name.
    pub fn from_args<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let patterns = args
            .into_iter()
            .map(Into::into)
            .filter(|arg| !arg.trim().is_empty())
            .collect();

        Self { patterns }
    }

    /// Build the configuration for the running process.
    pub fn from_env() -> Self {
        Self::from_args(std::env::args().skip(1))
    }

    /// True when the command line replaces the locale patterns.
    pub fn has_explicit_patterns(&self) -> bool {
        !self.patterns.is_empty()
    }
}
