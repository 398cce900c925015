use clap::{ArgAction, Parser, ValueEnum};
use std::io::IsTerminal;

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorMode {
    /// Color when the output is a terminal
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    fn resolve(self, terminal: bool) -> bool {
        match self {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => terminal,
        }
    }

    /// Whether the report on stdout gets colored.
    pub fn enabled(self) -> bool {
        self.resolve(std::io::stdout().is_terminal())
    }

    /// Whether messages on stderr get colored.
    pub fn enabled_on_stderr(self) -> bool {
        self.resolve(std::io::stderr().is_terminal())
    }
}

/// Lists the Jira issues of a project release and flags the ones missing evidence
#[derive(Parser, Debug)]
#[command(name = "jira-version-checker", version, about)]
pub struct Cli {
    /// Jira project key, e.g. PAY
    pub project: String,

    /// Release name as used in the issues' fixVersion
    #[arg(value_name = "VERSION")]
    pub fix_version: String,

    /// Sets the level of verbosity (can be used multiple times)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// When to color the report
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    pub color: ColorMode,
}

impl Cli {
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}
