use catalog_logging::{catalog_debug, catalog_error, catalog_info, catalog_warn};

use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => {
            if state.page_info().is_none() && !state.is_busy() {
                request_next_page(&mut state, "initial load")
            } else {
                Vec::new()
            }
        }
        Msg::NextPageClicked => request_next_page(&mut state, "next page"),
        Msg::CountPanelToggled => {
            let open = !state.count_panel_open();
            state.set_count_panel_open(open);
            Vec::new()
        }
        Msg::CountInputChanged(value) => {
            state.set_count_input(value);
            Vec::new()
        }
        Msg::ApplyCountClicked => {
            if let Some(in_flight) = state.in_flight() {
                catalog_warn!(
                    "Ignoring row-count apply: page {} still in flight",
                    in_flight.page
                );
                return (state, Vec::new());
            }
            let required = state.count_input();
            state.set_count_panel_open(false);
            select_count(&mut state, required)
        }
        Msg::RowToggled(id) => {
            match state.toggle_row(id) {
                Some(selected) => catalog_debug!("Row {} selected={}", id.0, selected),
                None => catalog_debug!("Ignoring toggle of unknown row {}", id.0),
            }
            Vec::new()
        }
        Msg::SelectionCleared => {
            state.clear_selection();
            Vec::new()
        }
        Msg::SortClicked(column) => {
            state.apply_sort(column);
            Vec::new()
        }
        Msg::FocusMoved(delta) => {
            state.move_focus(delta);
            Vec::new()
        }
        Msg::ViewPageChanged(delta) => {
            state.move_view_page(delta);
            Vec::new()
        }
        Msg::FetchProgress { ticket, bytes } => {
            state.record_progress(ticket, bytes);
            Vec::new()
        }
        Msg::PageLoaded {
            ticket,
            records,
            page,
            fetched_at,
        } => {
            if state.finish_fetch(ticket).is_none() {
                catalog_warn!("Dropping stale page response for ticket {}", ticket.0);
                return (state, Vec::new());
            }
            let stats = state.merge_page(records, page, fetched_at);
            catalog_info!(
                "Merged page {}/{}: {} new, {} duplicate, {} loaded of {}",
                page.current_page,
                page.total_pages,
                stats.added,
                stats.skipped,
                state.accumulated().len(),
                page.total
            );
            continue_count_selection(&mut state)
        }
        Msg::PageFailed { ticket, error } => {
            let Some(page) = state.finish_fetch(ticket) else {
                catalog_warn!("Dropping stale failure for ticket {}: {}", ticket.0, error);
                return (state, Vec::new());
            };
            catalog_error!("Error fetching page {}: {}", page, error);
            if let Some(required) = state.pending_count() {
                catalog_warn!(
                    "Abandoning selection of {} rows with {} loaded",
                    required,
                    state.accumulated().len()
                );
                state.set_pending_count(None);
            }
            state.set_last_error(format!("page {page}: {error}"));
            Vec::new()
        }
    };

    (state, effects)
}

/// Starts a count-based selection, fetching more pages only when the loaded
/// rows cannot satisfy `required` yet.
fn select_count(state: &mut AppState, required: usize) -> Vec<Effect> {
    if state.accumulated().len() >= required || !state.has_more_pages() {
        let selected = state.select_prefix(required);
        catalog_info!("Selected first {} rows (requested {})", selected, required);
        return Vec::new();
    }
    catalog_info!(
        "Selecting {} rows: {} loaded, fetching more",
        required,
        state.accumulated().len()
    );
    state.set_pending_count(Some(required));
    request_next_page(state, "row-count selection")
}

fn continue_count_selection(state: &mut AppState) -> Vec<Effect> {
    let Some(required) = state.pending_count() else {
        return Vec::new();
    };
    if state.accumulated().len() < required && state.has_more_pages() {
        return request_next_page(state, "row-count selection");
    }
    state.set_pending_count(None);
    let selected = state.select_prefix(required);
    catalog_info!("Selected first {} rows (requested {})", selected, required);
    Vec::new()
}

fn request_next_page(state: &mut AppState, reason: &str) -> Vec<Effect> {
    if let Some(in_flight) = state.in_flight() {
        catalog_warn!(
            "Ignoring {} request: page {} still in flight",
            reason,
            in_flight.page
        );
        return Vec::new();
    }
    let Some(page) = state.next_page_index() else {
        catalog_debug!("Ignoring {} request: no pages left", reason);
        return Vec::new();
    };
    let ticket = state.begin_fetch(page);
    catalog_info!("Fetching page {} ({}) ticket={}", page, reason, ticket.0);
    vec![Effect::FetchPage { ticket, page }]
}
