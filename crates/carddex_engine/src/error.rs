use std::fmt;

use thiserror::Error;

use crate::decode::DecodeError;
use crate::persist::PersistError;

/// Network-level failure while fetching a page or an image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    RedirectLimitExceeded,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    UnsupportedContentType { content_type: String },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::RedirectLimitExceeded => write!(f, "redirect limit exceeded"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::UnsupportedContentType { content_type } => {
                write!(f, "unsupported content type {content_type}")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

/// No category marker matched the page. Fatal: the output schema for the
/// page is unknown, so the whole batch stops.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    #[error("unable to determine the card type of {url}")]
    UnknownCardType { url: String },
}

/// The page classified cleanly but a field its category requires is
/// missing or malformed. Per-URL: that card is skipped, the batch goes on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("{url}: expected {field} not found in page markup")]
    MissingField { url: String, field: &'static str },
    #[error("{url}: malformed {field}: {value:?}")]
    InvalidField {
        url: String,
        field: &'static str,
        value: String,
    },
}

/// Any failure that can occur while processing a single URL.
#[derive(Debug, Error)]
pub enum UrlError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error(transparent)]
    Extract(#[from] ExtractError),
    #[error(transparent)]
    Persist(#[from] PersistError),
}

/// Conditions that terminate a batch run.
#[derive(Debug, Error)]
pub enum BatchError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),
    #[error("cannot prepare output directory: {0}")]
    OutputDir(#[from] PersistError),
}
