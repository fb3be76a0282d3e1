use std::path::PathBuf;
use std::{io, result};

use codespan_reporting::files::SimpleFile;
use termcolor::ColorChoice;

use crate::calendar;

use super::parse::ParseError;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{0}")]
    Calendar(#[from] calendar::Error),
    #[error("Could not read config file {}: {error}", .file.display())]
    ReadConfig { file: PathBuf, error: io::Error },
    #[error("Could not parse config file {}: {error}", .file.display())]
    ParseConfig {
        file: PathBuf,
        content: String,
        error: ParseError,
    },
    #[error("Could not parse date {input:?}: {error}")]
    ParseDate { input: String, error: ParseError },
    #[error("Date is outside the supported range")]
    DateOutOfRange,
}

impl Error {
    pub fn eprint(&self, color: ColorChoice) {
        match self {
            Self::ParseConfig {
                file,
                content,
                error,
            } => {
                let name = file.display().to_string();
                crate::error::eprint_error(&SimpleFile::new(name, content), error, color);
            }
            Self::ParseDate { input, error } => {
                crate::error::eprint_error(&SimpleFile::new("date", input), error, color);
            }
            _ => eprintln!("{self}"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
