use crate::{Artwork, ArtworkId, Column, FetchTicket, PageInfo};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// App finished setting up; loads the first page.
    Started,
    /// User asked for the next unseen catalog page.
    NextPageClicked,
    /// User opened or closed the row-count panel.
    CountPanelToggled,
    /// User edited the row-count input.
    CountInputChanged(usize),
    /// User confirmed the row-count input.
    ApplyCountClicked,
    /// User toggled a single row's checkbox.
    RowToggled(ArtworkId),
    /// User cleared the selection.
    SelectionCleared,
    /// User clicked a column header.
    SortClicked(Column),
    /// User moved the row focus within the visible view page.
    FocusMoved(isize),
    /// User moved to a neighbouring view page.
    ViewPageChanged(isize),
    /// Engine received more body bytes for the outstanding fetch.
    FetchProgress { ticket: FetchTicket, bytes: u64 },
    /// Engine finished a fetch.
    PageLoaded {
        ticket: FetchTicket,
        records: Vec<Artwork>,
        page: PageInfo,
        fetched_at: Option<String>,
    },
    /// Engine failed a fetch.
    PageFailed { ticket: FetchTicket, error: String },
}
