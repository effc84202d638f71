//! Error enum
use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// Title or render query failed (network, HTTP status or service error).
    RemoteFetch(String),
    /// Malformed service payload or HTML.
    Parse(String),
    CorpusNotFound(PathBuf),
    EmptyCorpus(PathBuf),
    ModelNotFound(String),
    Serialization(serde_json::Error),
    Config(String),
    Custom(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "io error: {e}"),
            Error::RemoteFetch(e) => write!(f, "remote fetch failed: {e}"),
            Error::Parse(e) => write!(f, "parse failure: {e}"),
            Error::CorpusNotFound(p) => write!(f, "corpus not found: {}", p.display()),
            Error::EmptyCorpus(p) => write!(f, "corpus is empty: {}", p.display()),
            Error::ModelNotFound(k) => write!(f, "no trained model for {k}"),
            Error::Serialization(e) => write!(f, "model (de)serialization failed: {e}"),
            Error::Config(e) => write!(f, "invalid configuration: {e}"),
            Error::Custom(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Error {
        Error::Io(e)
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Error {
        Error::RemoteFetch(e.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Error {
        Error::Config(format!("bad api url: {e}"))
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Error {
        Error::Serialization(e)
    }
}

impl From<String> for Error {
    fn from(s: String) -> Error {
        Error::Custom(s)
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(e: rayon::ThreadPoolBuildError) -> Error {
        Error::Custom(format!("could not build worker pool: {e}"))
    }
}
