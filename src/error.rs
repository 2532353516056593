use std::io;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ScrapError>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum ScrapError {
    /// DNS, connection, timeout or body read failure, never retried
    #[error("Couldn't download {url} got: {source}")]
    Transport {
        url: String,
        #[source]
        source: BoxError,
    },

    #[error("Missing {field} in quote #{index} of page {page}")]
    MissingField {
        page: u32,
        index: usize,
        field: Field,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid config: {0}")]
    Config(String),
}

impl ScrapError {
    pub fn transport<E>(url: impl Into<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport {
            url: url.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Text,
    Author,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Author => write!(f, "author"),
        }
    }
}
