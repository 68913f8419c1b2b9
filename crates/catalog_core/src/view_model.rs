use crate::{ArtworkId, PageInfo, SortSpec};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    /// Rows of the current view page, in display order.
    pub rows: Vec<RowView>,
    pub focus: usize,
    pub view_page: usize,
    pub view_page_count: usize,
    pub loaded: usize,
    pub page_info: Option<PageInfo>,
    pub selected_count: usize,
    pub sort: Option<SortSpec>,
    pub busy: Option<BusyView>,
    pub can_fetch_next: bool,
    pub count_panel: Option<CountPanelView>,
    pub pending_count: Option<usize>,
    pub last_error: Option<String>,
    pub last_fetched_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: ArtworkId,
    pub selected: bool,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: i64,
    pub date_end: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusyView {
    pub page: u32,
    pub bytes: Option<u64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountPanelView {
    pub value: usize,
    pub max: usize,
    pub apply_enabled: bool,
}
