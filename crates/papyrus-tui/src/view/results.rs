use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Clear, List, ListItem, Paragraph, Row, Table};
use ratatui::Frame;

use papyrus_core::format_authors;

use crate::app::{App, InputMode};
use crate::view::{spinner_char, truncate};

/// Render the results screen: search bar, ranked result table, footer,
/// and the suggestion popup overlay when visible.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Length(3), // search bar
        Constraint::Length(1), // status line
        Constraint::Min(3),    // result table
        Constraint::Length(1), // footer
    ])
    .split(area);

    render_header(f, chunks[0], app);
    let search_area = chunks[1];
    render_search_bar(f, search_area, app);
    render_status(f, chunks[2], app);
    render_table(f, chunks[3], app);
    app.last_table_area = Some(chunks[3]);
    render_footer(f, chunks[4], app);

    // Suggestion popup is painted last so it sits above the table.
    if app.suggestions_visible && !app.suggestions.is_empty() {
        render_suggestions(f, search_area, app);
    } else {
        app.last_suggest_area = None;
    }
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = vec![Span::styled(" papyrus ", theme.header_style())];

    if let Some(query) = &app.active_query {
        spans.push(Span::styled(
            format!(" \u{201C}{}\u{201D}", query),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!("  {} of {} results", app.results.len(), app.total),
            Style::default().fg(theme.dim),
        ));
    } else {
        spans.push(Span::styled(
            " type a query to search the corpus",
            Style::default().fg(theme.dim),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_search_bar(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let editing = app.input_mode == InputMode::Editing;

    let border_color = if editing { theme.accent } else { theme.border };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .title(" Search ");

    let mut spans = vec![Span::styled(
        app.query_input.clone(),
        Style::default().fg(theme.text),
    )];
    if editing {
        spans.push(Span::styled(
            "\u{2588}",
            Style::default().fg(theme.accent),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let line = match &app.status {
        Some(status) => {
            let color = if status.is_error { theme.error } else { theme.dim };
            Line::from(Span::styled(format!(" {}", status.text), Style::default().fg(color)))
        }
        None => Line::from(""),
    };
    f.render_widget(Paragraph::new(line), area);
}

fn render_table(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    if app.results.is_empty() {
        let hint = if app.active_query.is_some() {
            ""
        } else {
            "  Press / to search, ? for help"
        };
        f.render_widget(
            Paragraph::new(Span::styled(hint, Style::default().fg(theme.dim))),
            area,
        );
        return;
    }

    let title_width = (area.width as usize).saturating_sub(4 + 7 + 30 + 12 + 5);

    let header = Row::new(vec![
        Cell::from("#"),
        Cell::from("score"),
        Cell::from("title"),
        Cell::from("authors"),
        Cell::from("date"),
    ])
    .style(Style::default().fg(theme.dim).add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .results
        .iter()
        .enumerate()
        .map(|(i, hit)| {
            let title = truncate(hit.title.as_deref().unwrap_or(&hit.doc_id), title_width);
            let authors = truncate(
                &format_authors(hit.authors.as_deref().unwrap_or_default()),
                28,
            );
            let date = hit.publish_time.as_deref().unwrap_or("\u{2014}");
            let row = Row::new(vec![
                Cell::from(format!("{}", i + 1)),
                Cell::from(Span::styled(
                    format!("{:.3}", hit.score),
                    Style::default().fg(theme.score),
                )),
                Cell::from(Span::styled(title, Style::default().fg(theme.text))),
                Cell::from(Span::styled(authors, Style::default().fg(theme.dim))),
                Cell::from(Span::styled(
                    date.to_string(),
                    Style::default().fg(theme.dim),
                )),
            ]);
            if i == app.result_cursor {
                row.style(Style::default().bg(theme.highlight_bg))
            } else {
                row
            }
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Length(7),
            Constraint::Min(20),
            Constraint::Length(30),
            Constraint::Length(12),
        ],
    )
    .header(header);

    f.render_widget(table, area);
}

fn render_suggestions(f: &mut Frame, search_area: Rect, app: &mut App) {
    let theme = &app.theme;
    let count = app.suggestions.len().min(8) as u16;
    let popup = Rect {
        x: search_area.x + 1,
        y: search_area.y + search_area.height,
        width: search_area.width.saturating_sub(2).min(50),
        height: count + 2,
    };

    let items: Vec<ListItem> = app
        .suggestions
        .iter()
        .take(8)
        .enumerate()
        .map(|(i, s)| {
            let style = if Some(i) == app.suggest_cursor {
                Style::default().fg(theme.text).bg(theme.highlight_bg)
            } else {
                Style::default().fg(theme.text)
            };
            ListItem::new(Span::styled(s.clone(), style))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent)),
    );

    f.render_widget(Clear, popup);
    f.render_widget(list, popup);
    app.last_suggest_area = Some(popup);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let mut spans = Vec::new();

    if app.busy() {
        spans.push(Span::styled(
            format!(" {} loading\u{2026} ", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        ));
    }

    let hints = match app.input_mode {
        InputMode::Editing => " Enter: search  Tab: accept suggestion  Esc: done  Ctrl+c: quit",
        InputMode::Normal => " /: search  j/k: move  Enter: open  ?: help  q: quit",
    };
    spans.push(Span::styled(hints, Style::default().fg(theme.dim)));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
