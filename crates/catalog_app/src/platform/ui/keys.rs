use catalog_core::{AppViewModel, Column, CountPanelView, Msg};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Dispatch(Msg),
    Ignore,
}

/// Key bindings shown in the hint bar, as (key, label).
pub const TABLE_HINTS: &[(&str, &str)] = &[
    ("↑↓", "row"),
    ("←→", "view page"),
    ("space", "toggle"),
    ("1-6", "sort"),
    ("s", "select N"),
    ("c", "clear"),
    ("q", "quit"),
];

pub const NEXT_PAGE_HINT: (&str, &str) = ("n", "fetch next page");

pub const PANEL_HINTS: &[(&str, &str)] = &[
    ("0-9", "edit"),
    ("↑↓", "step"),
    ("enter", "apply"),
    ("esc", "close"),
];

pub fn map_key(key: KeyEvent, view: &AppViewModel) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::Ignore;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }
    match view.count_panel {
        Some(panel) => map_panel_key(key.code, panel),
        None => map_table_key(key.code, view),
    }
}

fn map_panel_key(code: KeyCode, panel: CountPanelView) -> KeyAction {
    let msg = match code {
        KeyCode::Char(ch) if ch.is_ascii_digit() => {
            let digit = ch as usize - '0' as usize;
            Msg::CountInputChanged(panel.value.saturating_mul(10).saturating_add(digit))
        }
        KeyCode::Backspace => Msg::CountInputChanged(panel.value / 10),
        KeyCode::Up => Msg::CountInputChanged(panel.value.saturating_add(1)),
        KeyCode::Down => Msg::CountInputChanged(panel.value.saturating_sub(1)),
        KeyCode::Enter if panel.apply_enabled => Msg::ApplyCountClicked,
        KeyCode::Esc => Msg::CountPanelToggled,
        _ => return KeyAction::Ignore,
    };
    KeyAction::Dispatch(msg)
}

fn map_table_key(code: KeyCode, view: &AppViewModel) -> KeyAction {
    let msg = match code {
        KeyCode::Char('q') | KeyCode::Esc => return KeyAction::Quit,
        KeyCode::Up | KeyCode::Char('k') => Msg::FocusMoved(-1),
        KeyCode::Down | KeyCode::Char('j') => Msg::FocusMoved(1),
        KeyCode::Left | KeyCode::PageUp => Msg::ViewPageChanged(-1),
        KeyCode::Right | KeyCode::PageDown => Msg::ViewPageChanged(1),
        KeyCode::Char(' ') => match view.rows.get(view.focus) {
            Some(row) => Msg::RowToggled(row.id),
            None => return KeyAction::Ignore,
        },
        KeyCode::Char('n') if view.can_fetch_next => Msg::NextPageClicked,
        KeyCode::Char('s') => Msg::CountPanelToggled,
        KeyCode::Char('c') => Msg::SelectionCleared,
        KeyCode::Char(ch @ '1'..='6') => {
            match Column::from_index(ch as usize - '1' as usize) {
                Some(column) => Msg::SortClicked(column),
                None => return KeyAction::Ignore,
            }
        }
        _ => return KeyAction::Ignore,
    };
    KeyAction::Dispatch(msg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{ArtworkId, RowView};
    use pretty_assertions::assert_eq;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn table_view() -> AppViewModel {
        AppViewModel {
            rows: vec![RowView {
                id: ArtworkId(77),
                selected: false,
                title: "Nighthawks".to_string(),
                place_of_origin: "United States".to_string(),
                artist_display: "Edward Hopper".to_string(),
                inscriptions: String::new(),
                date_start: 1942,
                date_end: 1942,
            }],
            can_fetch_next: true,
            ..AppViewModel::default()
        }
    }

    #[test]
    fn table_keys_map_to_messages() {
        let view = table_view();

        assert_eq!(
            map_key(press(KeyCode::Char(' ')), &view),
            KeyAction::Dispatch(Msg::RowToggled(ArtworkId(77)))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('3')), &view),
            KeyAction::Dispatch(Msg::SortClicked(Column::Artist))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('n')), &view),
            KeyAction::Dispatch(Msg::NextPageClicked)
        );
        assert_eq!(map_key(press(KeyCode::Char('7')), &view), KeyAction::Ignore);
        assert_eq!(map_key(press(KeyCode::Char('q')), &view), KeyAction::Quit);
    }

    #[test]
    fn next_page_key_is_inert_when_unavailable() {
        let view = AppViewModel {
            can_fetch_next: false,
            ..table_view()
        };
        assert_eq!(map_key(press(KeyCode::Char('n')), &view), KeyAction::Ignore);
    }

    #[test]
    fn panel_keys_edit_the_count() {
        let view = AppViewModel {
            count_panel: Some(CountPanelView {
                value: 12,
                max: 500,
                apply_enabled: true,
            }),
            ..table_view()
        };

        assert_eq!(
            map_key(press(KeyCode::Char('4')), &view),
            KeyAction::Dispatch(Msg::CountInputChanged(124))
        );
        assert_eq!(
            map_key(press(KeyCode::Backspace), &view),
            KeyAction::Dispatch(Msg::CountInputChanged(1))
        );
        assert_eq!(
            map_key(press(KeyCode::Down), &view),
            KeyAction::Dispatch(Msg::CountInputChanged(11))
        );
        assert_eq!(
            map_key(press(KeyCode::Enter), &view),
            KeyAction::Dispatch(Msg::ApplyCountClicked)
        );
        assert_eq!(
            map_key(press(KeyCode::Char('q')), &view),
            KeyAction::Ignore
        );
    }

    #[test]
    fn apply_is_blocked_while_busy() {
        let view = AppViewModel {
            count_panel: Some(CountPanelView {
                value: 3,
                max: 10,
                apply_enabled: false,
            }),
            ..table_view()
        };
        assert_eq!(map_key(press(KeyCode::Enter), &view), KeyAction::Ignore);
    }
}
