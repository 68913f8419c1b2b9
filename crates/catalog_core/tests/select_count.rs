use std::sync::Once;

use catalog_core::{update, AppState, Artwork, ArtworkId, Effect, FetchTicket, Msg, PageInfo};
use pretty_assertions::assert_eq;

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(catalog_logging::initialize_for_tests);
}

const PAGE_SIZE: u64 = 2;
const TOTAL_PAGES: u32 = 3;

fn artwork(id: u64) -> Artwork {
    Artwork {
        id: ArtworkId(id),
        title: format!("Artwork {id}"),
        place_of_origin: "France".to_string(),
        artist_display: "Unknown".to_string(),
        inscriptions: String::new(),
        date_start: 1800 + id as i64,
        date_end: 1810 + id as i64,
    }
}

/// Page `n` of a 3 x 2 catalog holding ids 1..=6.
fn catalog_page(page: u32) -> (Vec<Artwork>, PageInfo) {
    let first = (u64::from(page) - 1) * PAGE_SIZE + 1;
    let records = (first..first + PAGE_SIZE).map(artwork).collect();
    let info = PageInfo {
        total: PAGE_SIZE * u64::from(TOTAL_PAGES),
        limit: PAGE_SIZE as u32,
        offset: first - 1,
        total_pages: TOTAL_PAGES,
        current_page: page,
    };
    (records, info)
}

fn fetch_of(effects: &[Effect]) -> Option<(FetchTicket, u32)> {
    effects.iter().find_map(|effect| match effect {
        Effect::FetchPage { ticket, page } => Some((*ticket, *page)),
    })
}

fn answer(state: AppState, effects: &[Effect]) -> (AppState, Vec<Effect>) {
    let (ticket, page) = fetch_of(effects).expect("fetch effect");
    let (records, info) = catalog_page(page);
    update(
        state,
        Msg::PageLoaded {
            ticket,
            records,
            page: info,
            fetched_at: None,
        },
    )
}

/// State after the initial load of page 1 (ids 1 and 2).
fn first_page_loaded() -> AppState {
    let (state, effects) = update(AppState::new(), Msg::Started);
    assert_eq!(fetch_of(&effects).map(|(_, page)| page), Some(1));
    let (state, effects) = answer(state, &effects);
    assert!(effects.is_empty());
    state
}

fn apply_count(state: AppState, count: usize) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::CountPanelToggled);
    let (state, _) = update(state, Msg::CountInputChanged(count));
    update(state, Msg::ApplyCountClicked)
}

fn selected_ids(state: &AppState) -> Vec<u64> {
    state.selection().ids().iter().map(|id| id.0).collect()
}

fn loaded_ids(state: &AppState) -> Vec<u64> {
    state
        .accumulated()
        .records()
        .iter()
        .map(|record| record.id.0)
        .collect()
}

#[test]
fn count_beyond_loaded_rows_fetches_following_pages() {
    init_logging();
    let state = first_page_loaded();

    let (state, effects) = apply_count(state, 5);
    assert_eq!(fetch_of(&effects).map(|(_, page)| page), Some(2));
    assert!(state.is_busy());
    assert!(state.selection().is_empty());

    let (state, effects) = answer(state, &effects);
    assert_eq!(fetch_of(&effects).map(|(_, page)| page), Some(3));
    assert_eq!(loaded_ids(&state), vec![1, 2, 3, 4]);

    let (state, effects) = answer(state, &effects);
    assert!(effects.is_empty());
    assert!(!state.is_busy());
    assert_eq!(loaded_ids(&state), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(selected_ids(&state), vec![1, 2, 3, 4, 5]);
    assert_eq!(state.pending_count(), None);
}

#[test]
fn count_within_loaded_rows_needs_no_fetch() {
    init_logging();
    let state = first_page_loaded();

    let (state, effects) = apply_count(state, 1);

    assert!(effects.is_empty());
    assert!(!state.is_busy());
    assert_eq!(selected_ids(&state), vec![1]);
}

#[test]
fn zero_count_clears_selection_without_fetch() {
    init_logging();
    let state = first_page_loaded();
    let (state, _) = apply_count(state, 2);
    assert_eq!(selected_ids(&state), vec![1, 2]);

    let (state, effects) = apply_count(state, 0);

    assert!(effects.is_empty());
    assert!(state.selection().is_empty());
}

#[test]
fn selection_is_prefix_of_loaded_rows() {
    init_logging();
    let state = first_page_loaded();
    let (mut state, effects) = apply_count(state, 6);
    let (next, effects) = answer(state, &effects);
    let (next, _) = answer(next, &effects);
    state = next;

    for count in 0..=state.accumulated().len() {
        let (next, effects) = apply_count(state, count);
        assert!(effects.is_empty());
        assert_eq!(
            next.selection().ids(),
            next.accumulated()
                .prefix(count)
                .iter()
                .map(|record| record.id)
                .collect::<Vec<_>>()
                .as_slice()
        );
        state = next;
    }
}

#[test]
fn count_above_catalog_total_is_clamped_and_terminates() {
    init_logging();
    let state = first_page_loaded();
    let (state, _) = update(state, Msg::CountPanelToggled);
    let (state, _) = update(state, Msg::CountInputChanged(1_000));
    assert_eq!(state.count_input(), 6);

    let (mut state, mut effects) = update(state, Msg::ApplyCountClicked);
    let mut rounds = 0;
    while !effects.is_empty() {
        rounds += 1;
        assert!(rounds <= TOTAL_PAGES as usize, "selection loop did not terminate");
        let (next, next_effects) = answer(state, &effects);
        state = next;
        effects = next_effects;
    }

    assert_eq!(selected_ids(&state), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn exhausted_catalog_with_overlapping_pages_selects_what_exists() {
    init_logging();
    let state = first_page_loaded();
    let (state, effects) = apply_count(state, 6);
    let (state, effects) = answer(state, &effects);

    // The last page repeats id 4, so only five unique records ever arrive.
    let (ticket, page) = fetch_of(&effects).expect("fetch effect");
    assert_eq!(page, 3);
    let (_, info) = catalog_page(3);
    let (state, effects) = update(
        state,
        Msg::PageLoaded {
            ticket,
            records: vec![artwork(5), artwork(4)],
            page: info,
            fetched_at: None,
        },
    );

    assert!(effects.is_empty());
    assert_eq!(loaded_ids(&state), vec![1, 2, 3, 4, 5]);
    assert_eq!(selected_ids(&state), vec![1, 2, 3, 4, 5]);

    let (state, effects) = update(state, Msg::ApplyCountClicked);
    assert!(effects.is_empty());
    assert_eq!(selected_ids(&state), vec![1, 2, 3, 4, 5]);
}

#[test]
fn failed_fetch_aborts_selection_and_keeps_loaded_rows() {
    init_logging();
    let state = first_page_loaded();
    let (state, _) = apply_count(state, 1);
    assert_eq!(selected_ids(&state), vec![1]);

    let (state, effects) = apply_count(state, 5);
    let (ticket, page) = fetch_of(&effects).expect("fetch effect");
    assert_eq!(page, 2);

    let (state, effects) = update(
        state,
        Msg::PageFailed {
            ticket,
            error: "network error: connection reset".to_string(),
        },
    );

    assert!(effects.is_empty());
    assert!(!state.is_busy());
    assert_eq!(loaded_ids(&state), vec![1, 2]);
    assert_eq!(selected_ids(&state), vec![1]);
    assert_eq!(state.pending_count(), None);
    assert!(state.last_error().unwrap().contains("connection reset"));
}

#[test]
fn selection_can_be_retried_after_failure() {
    init_logging();
    let state = first_page_loaded();
    let (state, effects) = apply_count(state, 3);
    let (ticket, _) = fetch_of(&effects).expect("fetch effect");
    let (state, _) = update(
        state,
        Msg::PageFailed {
            ticket,
            error: "timeout".to_string(),
        },
    );

    let (state, effects) = update(state, Msg::ApplyCountClicked);
    assert_eq!(fetch_of(&effects).map(|(_, page)| page), Some(2));
    let (state, effects) = answer(state, &effects);

    assert!(effects.is_empty());
    assert_eq!(selected_ids(&state), vec![1, 2, 3]);
    assert_eq!(state.last_error(), None);
}
