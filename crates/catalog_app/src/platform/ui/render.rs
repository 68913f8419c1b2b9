use catalog_core::{AppViewModel, Column, CountPanelView, RowView, SortDirection};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Clear, Paragraph, Row, Table, TableState};
use ratatui::Frame;

use super::keys::{NEXT_PAGE_HINT, PANEL_HINTS, TABLE_HINTS};
use super::layout::{self, COUNT_PANEL_HEIGHT, COUNT_PANEL_WIDTH};

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let areas = layout::split(frame.area());
    render_table(frame, areas.table, view);
    frame.render_widget(Paragraph::new(hint_line(view)), areas.hints);
    frame.render_widget(Paragraph::new(status_line(view)), areas.status);
    if let Some(panel) = view.count_panel {
        render_count_panel(frame, panel);
    }
}

fn render_table(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let header = Row::new(
        std::iter::once(Cell::from("[▾]")).chain(
            Column::ALL
                .iter()
                .enumerate()
                .map(|(index, column)| Cell::from(header_label(index, *column, view))),
        ),
    )
    .style(Style::new().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = view.rows.iter().map(table_row).collect();
    let title = format!(
        " Artworks · view {}/{} ",
        view.view_page + 1,
        view.view_page_count.max(1)
    );

    let table = Table::new(rows, layout::column_widths())
        .header(header)
        .block(Block::bordered().title(title))
        .row_highlight_style(Style::new().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default();
    if !view.rows.is_empty() {
        state.select(Some(view.focus));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

fn header_label(index: usize, column: Column, view: &AppViewModel) -> String {
    let arrow = match view.sort {
        Some(spec) if spec.column == column => match spec.direction {
            SortDirection::Ascending => " ▲",
            SortDirection::Descending => " ▼",
        },
        _ => "",
    };
    format!("{} {}{}", index + 1, column.header(), arrow)
}

fn table_row(row: &RowView) -> Row<'static> {
    let checkbox = if row.selected { "[x]" } else { "[ ]" };
    Row::new(vec![
        Cell::from(checkbox),
        Cell::from(single_line(&row.title)),
        Cell::from(single_line(&row.place_of_origin)),
        Cell::from(single_line(&row.artist_display)),
        Cell::from(single_line(&row.inscriptions)),
        Cell::from(row.date_start.to_string()),
        Cell::from(row.date_end.to_string()),
    ])
}

fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn hint_line(view: &AppViewModel) -> Line<'static> {
    let hints: Vec<(&str, &str)> = if view.count_panel.is_some() {
        PANEL_HINTS.to_vec()
    } else {
        let mut hints = TABLE_HINTS.to_vec();
        if view.can_fetch_next {
            hints.insert(0, NEXT_PAGE_HINT);
        }
        hints
    };

    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(
            format!(" {key} "),
            Style::new().add_modifier(Modifier::REVERSED),
        ));
        spans.push(Span::raw(format!(" {label}  ")));
    }
    Line::from(spans)
}

fn status_line(view: &AppViewModel) -> Line<'static> {
    let mut parts = Vec::new();
    match view.page_info {
        Some(info) => {
            parts.push(format!(
                "Loaded {} of {}",
                format_with_commas(view.loaded as u64),
                format_with_commas(info.total)
            ));
            parts.push(format!("Page {}/{}", info.current_page, info.total_pages));
        }
        None => parts.push(format!("Loaded {}", view.loaded)),
    }
    parts.push(format!("Selected {}", view.selected_count));
    if let Some(busy) = view.busy {
        let received = busy
            .bytes
            .map(|bytes| format!(" ({} B)", format_with_commas(bytes)))
            .unwrap_or_default();
        let target = view
            .pending_count
            .map(|count| format!(" for {count} rows"))
            .unwrap_or_default();
        parts.push(format!("Fetching page {}{}{}", busy.page, received, target));
    } else if let Some(at) = &view.last_fetched_at {
        parts.push(format!("Updated {at}"));
    }

    let mut spans = vec![Span::raw(format!(" {}", parts.join(" | ")))];
    if let Some(error) = &view.last_error {
        spans.push(Span::styled(
            format!(" | Error: {error}"),
            Style::new().fg(Color::Red),
        ));
    }
    Line::from(spans)
}

fn render_count_panel(frame: &mut Frame, panel: CountPanelView) {
    let area = layout::centered(frame.area(), COUNT_PANEL_WIDTH, COUNT_PANEL_HEIGHT);
    let apply = if panel.apply_enabled {
        Span::raw("enter: apply")
    } else {
        Span::styled("busy, wait for fetch", Style::new().fg(Color::DarkGray))
    };
    let lines = vec![
        Line::from(format!("Rows: {}", panel.value)),
        Line::from(format!("Allowed: 0..={}", format_with_commas(panel.max as u64))),
        Line::from(""),
        Line::from(apply),
    ];
    frame.render_widget(Clear, area);
    frame.render_widget(
        Paragraph::new(lines).block(Block::bordered().title(" Select Rows ")),
        area,
    );
}

fn format_with_commas(value: u64) -> String {
    let mut out = String::new();
    for (i, ch) in value.to_string().chars().rev().enumerate() {
        if i != 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
