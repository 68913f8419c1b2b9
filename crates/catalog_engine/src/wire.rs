use serde::Deserialize;

use crate::{CatalogPage, CatalogRecord, FailureKind, FetchError, Pagination};

// The live API sends `null` for missing text and dates.
#[derive(Debug, Deserialize)]
struct Envelope {
    data: Vec<WireArtwork>,
    pagination: WirePagination,
}

#[derive(Debug, Deserialize)]
struct WireArtwork {
    id: u64,
    title: Option<String>,
    place_of_origin: Option<String>,
    artist_display: Option<String>,
    inscriptions: Option<String>,
    date_start: Option<i64>,
    date_end: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct WirePagination {
    total: u64,
    limit: u32,
    #[serde(default)]
    offset: u64,
    total_pages: u32,
    current_page: u32,
}

/// Decode one `{ data, pagination }` envelope.
pub fn decode_page(bytes: &[u8]) -> Result<CatalogPage, FetchError> {
    let envelope: Envelope = serde_json::from_slice(bytes)
        .map_err(|err| FetchError::new(FailureKind::Malformed, err.to_string()))?;

    let records = envelope
        .data
        .into_iter()
        .map(|artwork| CatalogRecord {
            id: artwork.id,
            title: artwork.title.unwrap_or_default(),
            place_of_origin: artwork.place_of_origin.unwrap_or_default(),
            artist_display: artwork.artist_display.unwrap_or_default(),
            inscriptions: artwork.inscriptions.unwrap_or_default(),
            date_start: artwork.date_start.unwrap_or_default(),
            date_end: artwork.date_end.unwrap_or_default(),
        })
        .collect();

    let wire = envelope.pagination;
    Ok(CatalogPage {
        records,
        pagination: Pagination {
            total: wire.total,
            limit: wire.limit,
            offset: wire.offset,
            total_pages: wire.total_pages,
            current_page: wire.current_page,
        },
    })
}
