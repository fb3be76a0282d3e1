use std::path::{Path, PathBuf};
use std::{fs, io};

use directories::ProjectDirs;
use termcolor::ColorChoice;

use super::error::{Error, Result};

const CONFIG_FILE: &str = "liturgy.conf";

/// When to use colors and other terminal styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Set up [`colored`] for the rest of the program.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }

    /// The equivalent setting for diagnostics.
    pub fn choice(self) -> ColorChoice {
        match self {
            Self::Auto => ColorChoice::Auto,
            Self::Always => ColorChoice::Always,
            Self::Never => ColorChoice::Never,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub color: ColorMode,
    /// How many days `range` shows before the current date.
    pub before: u32,
    /// How many days `range` shows after the current date.
    pub after: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            before: 3,
            after: 10,
        }
    }
}

fn default_file() -> Option<PathBuf> {
    ProjectDirs::from("", "", "liturgy").map(|dirs| dirs.config_dir().join(CONFIG_FILE))
}

impl Config {
    /// Load the config from `file`, or from the default location if no file is
    /// given. A missing default file is fine, a missing explicit file is not.
    pub fn load(file: Option<&Path>) -> Result<Self> {
        let (file, required) = match file {
            Some(file) => (file.to_path_buf(), true),
            None => match default_file() {
                Some(file) => (file, false),
                None => return Ok(Self::default()),
            },
        };

        let content = match fs::read_to_string(&file) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound && !required => {
                return Ok(Self::default())
            }
            Err(error) => return Err(Error::ReadConfig { file, error }),
        };

        content
            .parse()
            .map_err(|error| Error::ParseConfig {
                file,
                content,
                error,
            })
    }
}
