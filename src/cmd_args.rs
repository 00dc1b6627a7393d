use std::ffi::OsString;
use std::path::{Path, PathBuf};

pub use clap::Parser;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct ClapArgs {
    /// Files to open. The first one fills the screen, the rest are docked
    /// above it.
    #[clap(help = "files to open")]
    files: Vec<PathBuf>,

    #[clap(short = 'c', long, help = "config file path")]
    config: Option<PathBuf>,

    #[clap(short = 'r', long, help = "highlight rules file, replaces the configured one")]
    rules: Option<PathBuf>,

    /// Dock extra files on the left, side by side, instead of stacking them
    /// on top
    #[clap(long, help = "place extra files side by side")]
    vertical: bool,

    #[clap(long, help = "log level filter (error, warn, info, debug, trace)")]
    log_level: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CommandLineArgs {
    files: Vec<PathBuf>,
    config: Option<PathBuf>,
    rules: Option<PathBuf>,
    vertical: bool,
    log_level: Option<String>,
}

impl From<ClapArgs> for CommandLineArgs {
    fn from(args: ClapArgs) -> Self {
        Self {
            files: args.files,
            config: args.config,
            rules: args.rules,
            vertical: args.vertical,
            log_level: args.log_level,
        }
    }
}

impl CommandLineArgs {
    pub fn parse() -> Self {
        ClapArgs::parse().into()
    }

    pub fn parse_from<I, T>(itr: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        ClapArgs::parse_from(itr).into()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn config(&self) -> Option<&Path> {
        self.config.as_deref()
    }

    pub fn rules(&self) -> Option<&Path> {
        self.rules.as_deref()
    }

    pub fn vertical(&self) -> bool {
        self.vertical
    }

    pub fn log_level(&self) -> Option<&str> {
        self.log_level.as_deref()
    }
}
