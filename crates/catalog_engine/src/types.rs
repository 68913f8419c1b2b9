use std::fmt;

/// Correlates a fetch command with the events it produces.
pub type Ticket = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogRecord {
    pub id: u64,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: i64,
    pub date_end: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogPage {
    pub records: Vec<CatalogRecord>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchProgress {
    pub ticket: Ticket,
    pub page: u32,
    pub bytes: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    Progress(FetchProgress),
    PageFetched {
        ticket: Ticket,
        page: u32,
        result: Result<CatalogPage, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
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
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Malformed,
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Malformed => write!(f, "malformed response"),
            FailureKind::Network => write!(f, "network error"),
        }
    }
}
