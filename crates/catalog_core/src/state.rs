use crate::accumulate::{Accumulated, MergeStats};
use crate::selection::Selection;
use crate::sort::{sorted_order, SortSpec};
use crate::view_model::{AppViewModel, BusyView, CountPanelView, RowView};
use crate::{Artwork, ArtworkId, PageInfo};

/// Rows per view page, matching the table paginator of the browser.
pub const DEFAULT_ROWS_PER_VIEW: usize = 10;

/// Identifies the single outstanding fetch. Responses carrying any other
/// ticket are stale and get dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FetchTicket(pub u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct InFlight {
    pub ticket: FetchTicket,
    pub page: u32,
    pub bytes: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub(crate) enum FetchStatus {
    #[default]
    Idle,
    Fetching(InFlight),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    accumulated: Accumulated,
    page_info: Option<PageInfo>,
    selection: Selection,
    fetch: FetchStatus,
    next_ticket: u64,
    pending_count: Option<usize>,
    count_panel_open: bool,
    count_input: usize,
    sort: Option<SortSpec>,
    rows_per_view: usize,
    view_page: usize,
    focus: usize,
    last_error: Option<String>,
    last_fetched_at: Option<String>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_rows_per_view(DEFAULT_ROWS_PER_VIEW)
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows_per_view(rows_per_view: usize) -> Self {
        Self {
            accumulated: Accumulated::new(),
            page_info: None,
            selection: Selection::default(),
            fetch: FetchStatus::Idle,
            next_ticket: 1,
            pending_count: None,
            count_panel_open: false,
            count_input: 0,
            sort: None,
            rows_per_view: rows_per_view.max(1),
            view_page: 0,
            focus: 0,
            last_error: None,
            last_fetched_at: None,
            dirty: false,
        }
    }

    pub fn accumulated(&self) -> &Accumulated {
        &self.accumulated
    }

    pub fn page_info(&self) -> Option<PageInfo> {
        self.page_info
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Selected records in selection order.
    pub fn selected_records(&self) -> Vec<&Artwork> {
        self.selection
            .ids()
            .iter()
            .filter_map(|id| self.accumulated.get(*id))
            .collect()
    }

    pub fn is_busy(&self) -> bool {
        matches!(self.fetch, FetchStatus::Fetching(_))
    }

    pub fn pending_count(&self) -> Option<usize> {
        self.pending_count
    }

    pub fn count_input(&self) -> usize {
        self.count_input
    }

    /// Upper bound of the count input: the catalog total, or 0 before the first page.
    pub fn count_max(&self) -> usize {
        self.page_info
            .map(|info| usize::try_from(info.total).unwrap_or(usize::MAX))
            .unwrap_or(0)
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Returns whether a redraw is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub fn view(&self) -> AppViewModel {
        let records = self.accumulated.records();
        let order = sorted_order(records, self.sort);
        let view_page_count = self.view_page_count();
        let view_page = self.view_page.min(view_page_count - 1);
        let rows: Vec<RowView> = order
            .iter()
            .skip(view_page * self.rows_per_view)
            .take(self.rows_per_view)
            .map(|&index| {
                let record = &records[index];
                RowView {
                    id: record.id,
                    selected: self.selection.contains(record.id),
                    title: record.title.clone(),
                    place_of_origin: record.place_of_origin.clone(),
                    artist_display: record.artist_display.clone(),
                    inscriptions: record.inscriptions.clone(),
                    date_start: record.date_start,
                    date_end: record.date_end,
                }
            })
            .collect();
        let focus = self.focus.min(rows.len().saturating_sub(1));

        AppViewModel {
            rows,
            focus,
            view_page,
            view_page_count,
            loaded: records.len(),
            page_info: self.page_info,
            selected_count: self.selection.len(),
            sort: self.sort,
            busy: match &self.fetch {
                FetchStatus::Idle => None,
                FetchStatus::Fetching(in_flight) => Some(BusyView {
                    page: in_flight.page,
                    bytes: in_flight.bytes,
                }),
            },
            can_fetch_next: !self.is_busy() && self.next_page_index().is_some(),
            count_panel: self.count_panel_open.then(|| CountPanelView {
                value: self.count_input,
                max: self.count_max(),
                apply_enabled: !self.is_busy(),
            }),
            pending_count: self.pending_count,
            last_error: self.last_error.clone(),
            last_fetched_at: self.last_fetched_at.clone(),
        }
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn in_flight(&self) -> Option<&InFlight> {
        match &self.fetch {
            FetchStatus::Idle => None,
            FetchStatus::Fetching(in_flight) => Some(in_flight),
        }
    }

    /// Whether the catalog may hold pages not fetched yet. Unknown before the first page.
    pub(crate) fn has_more_pages(&self) -> bool {
        self.page_info.map_or(true, |info| info.has_more())
    }

    pub(crate) fn next_page_index(&self) -> Option<u32> {
        match self.page_info {
            None => Some(1),
            Some(info) if info.has_more() => Some(info.current_page + 1),
            Some(_) => None,
        }
    }

    pub(crate) fn begin_fetch(&mut self, page: u32) -> FetchTicket {
        let ticket = FetchTicket(self.next_ticket);
        self.next_ticket += 1;
        self.fetch = FetchStatus::Fetching(InFlight {
            ticket,
            page,
            bytes: None,
        });
        self.mark_dirty();
        ticket
    }

    /// Clears the busy state if `ticket` is the outstanding one; returns the page it was for.
    pub(crate) fn finish_fetch(&mut self, ticket: FetchTicket) -> Option<u32> {
        match &self.fetch {
            FetchStatus::Fetching(in_flight) if in_flight.ticket == ticket => {
                let page = in_flight.page;
                self.fetch = FetchStatus::Idle;
                self.mark_dirty();
                Some(page)
            }
            _ => None,
        }
    }

    pub(crate) fn record_progress(&mut self, ticket: FetchTicket, bytes: u64) -> bool {
        match &mut self.fetch {
            FetchStatus::Fetching(in_flight) if in_flight.ticket == ticket => {
                in_flight.bytes = Some(bytes);
                self.mark_dirty();
                true
            }
            _ => false,
        }
    }

    pub(crate) fn merge_page(
        &mut self,
        records: Vec<Artwork>,
        page: PageInfo,
        fetched_at: Option<String>,
    ) -> MergeStats {
        let stats = self.accumulated.merge(records);
        self.page_info = Some(page);
        self.last_fetched_at = fetched_at;
        self.last_error = None;
        self.mark_dirty();
        stats
    }

    pub(crate) fn set_pending_count(&mut self, pending: Option<usize>) {
        self.pending_count = pending;
        self.mark_dirty();
    }

    pub(crate) fn set_last_error(&mut self, error: String) {
        self.last_error = Some(error);
        self.mark_dirty();
    }

    /// Replaces the selection with the first `count` accumulated records (clamped).
    pub(crate) fn select_prefix(&mut self, count: usize) -> usize {
        let prefix = self.accumulated.prefix(count);
        self.selection.replace_with(prefix);
        let selected = prefix.len();
        self.mark_dirty();
        selected
    }

    pub(crate) fn toggle_row(&mut self, id: ArtworkId) -> Option<bool> {
        if !self.accumulated.contains(id) {
            return None;
        }
        let selected = self.selection.toggle(id);
        self.mark_dirty();
        Some(selected)
    }

    pub(crate) fn clear_selection(&mut self) {
        if !self.selection.is_empty() {
            self.selection.clear();
            self.mark_dirty();
        }
    }

    pub(crate) fn count_panel_open(&self) -> bool {
        self.count_panel_open
    }

    pub(crate) fn set_count_panel_open(&mut self, open: bool) {
        if self.count_panel_open != open {
            self.count_panel_open = open;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_count_input(&mut self, value: usize) {
        let clamped = value.min(self.count_max());
        if self.count_input != clamped {
            self.count_input = clamped;
            self.mark_dirty();
        }
    }

    pub(crate) fn apply_sort(&mut self, column: crate::Column) {
        self.sort = Some(SortSpec::toggled(self.sort, column));
        self.mark_dirty();
    }

    pub(crate) fn move_focus(&mut self, delta: isize) {
        let visible = self.visible_row_count();
        if visible == 0 {
            return;
        }
        let focus = self.focus.min(visible - 1).saturating_add_signed(delta);
        let focus = focus.min(visible - 1);
        if focus != self.focus {
            self.focus = focus;
            self.mark_dirty();
        }
    }

    pub(crate) fn move_view_page(&mut self, delta: isize) {
        let last = self.view_page_count() - 1;
        let page = self.view_page.min(last).saturating_add_signed(delta).min(last);
        if page != self.view_page {
            self.view_page = page;
            self.focus = self.focus.min(self.visible_row_count().saturating_sub(1));
            self.mark_dirty();
        }
    }

    fn view_page_count(&self) -> usize {
        self.accumulated.len().div_ceil(self.rows_per_view).max(1)
    }

    fn visible_row_count(&self) -> usize {
        let start = self.view_page.min(self.view_page_count() - 1) * self.rows_per_view;
        self.accumulated
            .len()
            .saturating_sub(start)
            .min(self.rows_per_view)
    }
}
