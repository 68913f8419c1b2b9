//! Catalog core: pure state machine, accumulation store and view-model helpers.
mod accumulate;
mod effect;
mod msg;
mod record;
mod selection;
mod sort;
mod state;
mod update;
mod view_model;

pub use accumulate::{merge, Accumulated, MergeStats};
pub use effect::Effect;
pub use msg::Msg;
pub use record::{Artwork, ArtworkId, PageInfo};
pub use selection::Selection;
pub use sort::{sorted_order, Column, SortDirection, SortSpec};
pub use state::{AppState, FetchTicket, DEFAULT_ROWS_PER_VIEW};
pub use update::update;
pub use view_model::{AppViewModel, BusyView, CountPanelView, RowView};
