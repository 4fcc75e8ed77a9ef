use std::{io, path::PathBuf};

use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum Error {
    /// A required configuration value is absent or empty.
    #[error("missing configuration value: {0}")]
    Config(&'static str),

    /// The dotenv file exists but could not be read.
    #[error("failed to read env file {}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },

    /// Network or HTTP failure talking to one of the providers.
    #[error("{service} request failed: {source}")]
    Transport {
        service: &'static str,
        #[source]
        source: BoxError,
    },

    /// A provider answered with something we could not make sense of.
    #[error("unexpected {service} response: {message}")]
    Parse {
        service: &'static str,
        message: String,
    },

    /// The address on `row` could not be resolved. A missing cause means the
    /// geocoder returned no candidates.
    #[error("failed to geocode {address:?} on sheet row {row}")]
    Enrichment {
        row: usize,
        address: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// The sheet does not have the shape its header promises.
    #[error("sheet row {row}: {reason}")]
    Mapping { row: usize, reason: String },

    #[error("failed to write {}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn transport(service: &'static str, source: impl Into<BoxError>) -> Self {
        Self::Transport {
            service,
            source: source.into(),
        }
    }

    pub fn parse(service: &'static str, message: impl ToString) -> Self {
        Self::Parse {
            service,
            message: message.to_string(),
        }
    }

    /// Process exit status for a run that failed with this error.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Config(_) | Self::EnvFile { .. } => 2,
            Self::Transport { .. } => 3,
            Self::Parse { .. } => 4,
            Self::Enrichment { .. } => 5,
            Self::Mapping { .. } => 6,
            Self::Persistence { .. } => 7,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let errors = [
            Error::Config("API_KEY"),
            Error::transport("geocoder", "connection refused"),
            Error::parse("geocoder", "bad xml"),
            Error::Enrichment {
                row: 2,
                address: "x".into(),
                source: None,
            },
            Error::Mapping {
                row: 3,
                reason: "short".into(),
            },
            Error::Persistence {
                path: "data.json".into(),
                source: io::Error::other("disk full"),
            },
        ];

        let mut codes: Vec<u8> = errors.iter().map(Error::exit_code).collect();
        assert!(codes.iter().all(|x| *x > 1));
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn env_file_is_a_config_failure() {
        let err = Error::EnvFile {
            path: ".env".into(),
            source: dotenvy::Error::LineParse("A B".into(), 2),
        };
        assert_eq!(err.exit_code(), Error::Config("API_KEY").exit_code());
    }

    #[test]
    fn enrichment_keeps_cause() {
        let err = Error::Enrichment {
            row: 4,
            address: "東京都".into(),
            source: Some(Box::new(Error::parse("geocoder", "bad xml"))),
        };
        assert_eq!(err.to_string(), "failed to geocode \"東京都\" on sheet row 4");
        let cause = std::error::Error::source(&err).unwrap();
        assert_eq!(cause.to_string(), "unexpected geocoder response: bad xml");
    }
}
