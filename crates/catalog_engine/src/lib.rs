//! Catalog engine: HTTP page fetching and effect execution.
mod engine;
mod fetch;
mod types;
mod wire;

pub use engine::{EngineError, EngineHandle};
pub use fetch::{ChannelProgressSink, FetchSettings, PageSource, ProgressSink, ReqwestPageSource};
pub use types::{
    CatalogPage, CatalogRecord, EngineEvent, FailureKind, FetchError, FetchProgress, Pagination,
    Ticket,
};
pub use wire::decode_page;
