use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use papyrus_core::{format_abstract, format_authors, Reference, Segment};

use crate::app::{App, Mode};
use crate::theme::Theme;
use crate::view::spinner_char;

/// Render the document screen: metadata header, decoded body, references.
pub fn render_in(f: &mut Frame, app: &mut App, area: Rect) {
    let Mode::Reading(view) = &app.mode else {
        return;
    };
    let theme = &app.theme;

    let chunks = Layout::vertical([
        Constraint::Length(1), // header
        Constraint::Min(3),    // document body
        Constraint::Length(1), // footer
    ])
    .split(area);

    // Header
    let header = Line::from(vec![
        Span::styled(" papyrus ", theme.header_style()),
        Span::styled(
            format!(" {}", view.record.display_title()),
            Style::default().fg(theme.text).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    // Body
    let mut lines: Vec<Line> = Vec::new();
    push_metadata(&mut lines, app, theme);
    push_abstract(&mut lines, app, theme);
    push_segments(&mut lines, &view.segments, theme);
    if view.segments.is_empty() {
        // No body text: fall back to the flat section listing, if any.
        push_section_listing(&mut lines, view.record.sections.as_deref(), theme);
    }
    push_references(&mut lines, view.record.references.as_deref(), theme);

    let body = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border)),
        )
        .wrap(Wrap { trim: false })
        .scroll((view.scroll, 0));
    f.render_widget(body, chunks[1]);

    // Footer
    let mut spans = Vec::new();
    if app.busy() {
        spans.push(Span::styled(
            format!(" {} loading\u{2026} ", spinner_char(app.tick)),
            Style::default().fg(theme.spinner),
        ));
    }
    spans.push(Span::styled(
        " Esc: back to results  j/k: scroll  g/G: top/bottom  q: quit",
        Style::default().fg(theme.dim),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[2]);
}

fn push_metadata(lines: &mut Vec<Line<'static>>, app: &App, theme: &Theme) {
    let Mode::Reading(view) = &app.mode else {
        return;
    };
    let meta = &view.record.metadata;

    if let Some(authors) = meta.authors.as_deref() {
        let formatted = format_authors(authors);
        if !formatted.is_empty() {
            lines.push(Line::from(Span::styled(
                formatted,
                Style::default().fg(theme.text),
            )));
        }
    }

    let mut venue = Vec::new();
    if let Some(journal) = meta.journal.as_deref() {
        if !journal.is_empty() {
            venue.push(journal.to_string());
        }
    }
    if let Some(date) = meta.publish_time.as_deref() {
        if !date.is_empty() {
            venue.push(date.to_string());
        }
    }
    if !venue.is_empty() {
        lines.push(Line::from(Span::styled(
            venue.join(" \u{00B7} "),
            Style::default().fg(theme.dim),
        )));
    }
    lines.push(Line::from(""));
}

fn push_abstract(lines: &mut Vec<Line<'static>>, app: &App, theme: &Theme) {
    let Mode::Reading(view) = &app.mode else {
        return;
    };
    let Some(raw) = view.record.abstract_text.as_deref() else {
        return;
    };
    let formatted = format_abstract(raw);
    if formatted.is_empty() {
        return;
    }

    lines.push(heading_line("Abstract", theme));
    for part in formatted.split('\n') {
        lines.push(Line::from(Span::styled(
            part.to_string(),
            Style::default().fg(theme.text),
        )));
    }
    lines.push(Line::from(""));
}

fn push_segments(lines: &mut Vec<Line<'static>>, segments: &[Segment], theme: &Theme) {
    for segment in segments {
        match segment {
            Segment::Heading(name) => {
                lines.push(heading_line(name, theme));
            }
            Segment::Paragraph(text) => {
                for part in text.split('\n') {
                    lines.push(Line::from(Span::styled(
                        part.to_string(),
                        Style::default().fg(theme.text),
                    )));
                }
                lines.push(Line::from(""));
            }
        }
    }
}

fn push_section_listing(lines: &mut Vec<Line<'static>>, sections: Option<&str>, theme: &Theme) {
    let Some(sections) = sections else {
        return;
    };
    if sections.trim().is_empty() {
        return;
    }
    lines.push(heading_line("Sections", theme));
    lines.push(Line::from(Span::styled(
        sections.trim().to_string(),
        Style::default().fg(theme.text),
    )));
    lines.push(Line::from(""));
}

fn push_references(lines: &mut Vec<Line<'static>>, refs: Option<&[Reference]>, theme: &Theme) {
    let Some(refs) = refs else {
        return;
    };
    if refs.is_empty() {
        return;
    }

    lines.push(heading_line("References", theme));
    for r in refs {
        lines.push(Line::from(vec![
            Span::styled(
                format!("[{}] ", r.bibref_id),
                Style::default().fg(theme.accent),
            ),
            Span::styled(format_reference(r), Style::default().fg(theme.text)),
        ]));
    }
}

fn heading_line(text: &str, theme: &Theme) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(theme.heading)
            .add_modifier(Modifier::BOLD),
    ))
}

/// One-line citation: authors. title. venue volume:pages (year).
fn format_reference(r: &Reference) -> String {
    let mut out = String::new();
    if let Some(authors) = r.authors.as_deref() {
        let formatted = format_authors(authors);
        if !formatted.is_empty() {
            out.push_str(&formatted);
            out.push_str(". ");
        }
    }
    if let Some(title) = r.title.as_deref() {
        if !title.is_empty() {
            out.push_str(title);
            out.push_str(". ");
        }
    }
    if let Some(venue) = r.venue.as_deref() {
        if !venue.is_empty() {
            out.push_str(venue);
            if let Some(volume) = r.volume.as_deref() {
                if !volume.is_empty() {
                    out.push_str(&format!(" {volume}"));
                    if let Some(pages) = r.pages.as_deref() {
                        if !pages.is_empty() {
                            out.push_str(&format!(":{pages}"));
                        }
                    }
                }
            }
            out.push(' ');
        }
    }
    if let Some(year) = r.year {
        out.push_str(&format!("({year})"));
    }
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> Reference {
        Reference {
            ref_id: None,
            bibref_id: "BIBREF0".to_string(),
            title: Some("Viral dynamics".to_string()),
            authors: Some("Smith J, Doe A".to_string()),
            year: Some(2020),
            venue: Some("Nature".to_string()),
            volume: Some("580".to_string()),
            pages: Some("12-19".to_string()),
            issn: None,
        }
    }

    #[test]
    fn reference_formats_full_citation() {
        assert_eq!(
            format_reference(&reference()),
            "Smith J, Doe A. Viral dynamics. Nature 580:12-19 (2020)"
        );
    }

    #[test]
    fn reference_tolerates_missing_fields() {
        let mut r = reference();
        r.authors = None;
        r.venue = None;
        r.year = None;
        assert_eq!(format_reference(&r), "Viral dynamics.");
    }
}
