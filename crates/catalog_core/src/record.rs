/// Stable catalog identifier of an artwork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ArtworkId(pub u64);

/// One catalog entry. Never modified after it has been fetched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    pub id: ArtworkId,
    pub title: String,
    pub place_of_origin: String,
    pub artist_display: String,
    pub inscriptions: String,
    pub date_start: i64,
    pub date_end: i64,
}

/// Pagination metadata from the most recent successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PageInfo {
    pub total: u64,
    pub limit: u32,
    pub offset: u64,
    pub total_pages: u32,
    pub current_page: u32,
}

impl PageInfo {
    pub fn has_more(&self) -> bool {
        self.current_page < self.total_pages
    }
}
