use catalog_core::{merge, Accumulated, Artwork, ArtworkId, MergeStats};
use pretty_assertions::assert_eq;

fn artwork(id: u64) -> Artwork {
    Artwork {
        id: ArtworkId(id),
        title: format!("Artwork {id}"),
        place_of_origin: String::new(),
        artist_display: String::new(),
        inscriptions: String::new(),
        date_start: 1900,
        date_end: 1901,
    }
}

fn ids(records: &[Artwork]) -> Vec<u64> {
    records.iter().map(|record| record.id.0).collect()
}

#[test]
fn merging_same_page_twice_is_idempotent() {
    let page: Vec<_> = (1..=3).map(artwork).collect();
    let mut store = Accumulated::new();

    let first = store.merge(page.clone());
    let after_first = store.clone();
    let second = store.merge(page);

    assert_eq!(first, MergeStats { added: 3, skipped: 0 });
    assert_eq!(second, MergeStats { added: 0, skipped: 3 });
    assert_eq!(store, after_first);
}

#[test]
fn order_follows_first_sighting_across_pages() {
    let mut store = Accumulated::new();
    store.merge([artwork(4), artwork(2)]);
    store.merge([artwork(2), artwork(7), artwork(4), artwork(1)]);
    store.merge([artwork(7), artwork(9)]);

    assert_eq!(ids(store.records()), vec![4, 2, 7, 1, 9]);
}

#[test]
fn first_occurrence_wins_on_conflicting_payload() {
    let mut store = Accumulated::new();
    store.merge([artwork(5)]);
    let mut changed = artwork(5);
    changed.title = "Renamed".to_string();
    store.merge([changed]);

    assert_eq!(store.get(ArtworkId(5)).unwrap().title, "Artwork 5");
}

#[test]
fn duplicates_inside_one_batch_are_dropped() {
    let mut store = Accumulated::new();
    let stats = store.merge([artwork(1), artwork(1), artwork(2)]);

    assert_eq!(stats, MergeStats { added: 2, skipped: 1 });
    assert_eq!(ids(store.records()), vec![1, 2]);
}

#[test]
fn value_merge_keeps_existing_order() {
    let existing = vec![artwork(3), artwork(1)];
    let incoming = vec![artwork(1), artwork(2)];

    let merged = merge(&existing, &incoming);
    assert_eq!(ids(&merged), vec![3, 1, 2]);
    assert_eq!(merge(&merged, &incoming), merged);
}

#[test]
fn prefix_is_clamped_to_length() {
    let mut store = Accumulated::new();
    store.merge((1..=3).map(artwork));

    assert_eq!(ids(store.prefix(2)), vec![1, 2]);
    assert_eq!(ids(store.prefix(10)), vec![1, 2, 3]);
    assert!(store.prefix(0).is_empty());
}
