use std::cmp::Ordering;

use crate::Artwork;

/// Sortable table columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Title,
    PlaceOfOrigin,
    Artist,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Title,
        Column::PlaceOfOrigin,
        Column::Artist,
        Column::Inscriptions,
        Column::DateStart,
        Column::DateEnd,
    ];

    pub fn from_index(index: usize) -> Option<Column> {
        Self::ALL.get(index).copied()
    }

    pub fn header(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::PlaceOfOrigin => "Place of Origin",
            Column::Artist => "Artist",
            Column::Inscriptions => "Inscriptions",
            Column::DateStart => "Date Start",
            Column::DateEnd => "Date End",
        }
    }

    fn compare(self, a: &Artwork, b: &Artwork) -> Ordering {
        match self {
            Column::Title => compare_text(&a.title, &b.title),
            Column::PlaceOfOrigin => compare_text(&a.place_of_origin, &b.place_of_origin),
            Column::Artist => compare_text(&a.artist_display, &b.artist_display),
            Column::Inscriptions => compare_text(&a.inscriptions, &b.inscriptions),
            Column::DateStart => a.date_start.cmp(&b.date_start),
            Column::DateEnd => a.date_end.cmp(&b.date_end),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec {
    pub column: Column,
    pub direction: SortDirection,
}

impl SortSpec {
    /// Header-click semantics: a new column starts ascending, the same column flips.
    pub fn toggled(current: Option<SortSpec>, column: Column) -> SortSpec {
        let direction = match current {
            Some(spec) if spec.column == column => match spec.direction {
                SortDirection::Ascending => SortDirection::Descending,
                SortDirection::Descending => SortDirection::Ascending,
            },
            _ => SortDirection::Ascending,
        };
        SortSpec { column, direction }
    }
}

/// Indices into `records` in display order. Stable; `records` itself is untouched.
pub fn sorted_order(records: &[Artwork], sort: Option<SortSpec>) -> Vec<usize> {
    let mut order: Vec<usize> = (0..records.len()).collect();
    if let Some(spec) = sort {
        order.sort_by(|&a, &b| {
            let ordering = spec.column.compare(&records[a], &records[b]);
            match spec.direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
    order
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}
