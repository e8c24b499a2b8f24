//! Decoding of a document body into renderable segments.
//!
//! The backend embeds section headings inline in the body text as
//! `##SECTION_START##<name>##SECTION_END##` markers. The decoder turns the
//! body into an ordered sequence of headings and paragraphs with an
//! explicit left-to-right scan. It never fails: malformed or unterminated
//! markers degrade to plain paragraph text, and no non-marker character is
//! lost or reordered.

/// Opening section marker literal.
pub const SECTION_START: &str = "##SECTION_START##";
/// Closing section marker literal.
pub const SECTION_END: &str = "##SECTION_END##";

/// A decoded unit of a document body, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Heading(String),
    Paragraph(String),
}

/// A well-formed marker located in the body.
struct Marker {
    /// Byte offset of the opening literal.
    start: usize,
    /// Raw name between the literals (untrimmed).
    name: String,
    /// Byte offset just past the closing literal, where section text begins.
    body_start: usize,
}

/// Find the next well-formed marker at or after `from`.
///
/// The name is everything between an opening literal and the *first*
/// closing literal after it. An opening literal with no closing literal
/// anywhere after it is not a marker.
fn next_marker(body: &str, from: usize) -> Option<Marker> {
    let start = from + body[from..].find(SECTION_START)?;
    let name_start = start + SECTION_START.len();
    let name_len = body[name_start..].find(SECTION_END)?;
    Some(Marker {
        start,
        name: body[name_start..name_start + name_len].to_string(),
        body_start: name_start + name_len + SECTION_END.len(),
    })
}

/// Decode a document body into segments.
///
/// - Empty input yields no segments.
/// - A body without markers yields a single verbatim paragraph
///   (whitespace preserved).
/// - Each marker with a non-empty trimmed name yields a heading, followed
///   by a paragraph holding the trimmed text up to the next marker (or end
///   of string); empty paragraphs are omitted. Text before the first
///   marker becomes a leading paragraph.
pub fn segment_body(body: &str) -> Vec<Segment> {
    if body.is_empty() {
        return Vec::new();
    }

    let mut marker = match next_marker(body, 0) {
        Some(m) => m,
        None => return vec![Segment::Paragraph(body.to_string())],
    };

    let mut segments = Vec::new();

    let lead = body[..marker.start].trim();
    if !lead.is_empty() {
        segments.push(Segment::Paragraph(lead.to_string()));
    }

    loop {
        let next = next_marker(body, marker.body_start);
        let text_end = next.as_ref().map_or(body.len(), |n| n.start);

        let name = marker.name.trim();
        if !name.is_empty() {
            segments.push(Segment::Heading(name.to_string()));
        }
        let text = body[marker.body_start..text_end].trim();
        if !text.is_empty() {
            segments.push(Segment::Paragraph(text.to_string()));
        }

        match next {
            Some(n) => marker = n,
            None => break,
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn marked(name: &str) -> String {
        format!("{SECTION_START}{name}{SECTION_END}")
    }

    #[test]
    fn empty_body_yields_no_segments() {
        assert!(segment_body("").is_empty());
    }

    #[test]
    fn markerless_body_is_one_verbatim_paragraph() {
        let body = "  plain text,\n with whitespace preserved  ";
        assert_eq!(
            segment_body(body),
            vec![Segment::Paragraph(body.to_string())]
        );
    }

    #[test]
    fn two_sections_round_trip() {
        let body = format!("{} hello {} world", marked("Intro"), marked("Methods"));
        assert_eq!(
            segment_body(&body),
            vec![
                Segment::Heading("Intro".to_string()),
                Segment::Paragraph("hello".to_string()),
                Segment::Heading("Methods".to_string()),
                Segment::Paragraph("world".to_string()),
            ]
        );
    }

    #[test]
    fn leading_text_becomes_first_paragraph() {
        let body = format!("preamble {} body", marked("A"));
        assert_eq!(
            segment_body(&body),
            vec![
                Segment::Paragraph("preamble".to_string()),
                Segment::Heading("A".to_string()),
                Segment::Paragraph("body".to_string()),
            ]
        );
    }

    #[test]
    fn empty_section_text_is_omitted() {
        let body = format!("{}   {}tail", marked("A"), marked("B"));
        assert_eq!(
            segment_body(&body),
            vec![
                Segment::Heading("A".to_string()),
                Segment::Heading("B".to_string()),
                Segment::Paragraph("tail".to_string()),
            ]
        );
    }

    #[test]
    fn empty_name_skips_heading_but_keeps_text() {
        let body = format!("{}kept", marked("  "));
        assert_eq!(
            segment_body(&body),
            vec![Segment::Paragraph("kept".to_string())]
        );
    }

    #[test]
    fn unterminated_marker_degrades_to_plain_text() {
        let body = format!("intro {SECTION_START}Broken and the rest");
        assert_eq!(segment_body(&body), vec![Segment::Paragraph(body.clone())]);
    }

    #[test]
    fn trailing_unterminated_marker_kept_as_text() {
        let body = format!("{}ok {SECTION_START}dangling", marked("A"));
        assert_eq!(
            segment_body(&body),
            vec![
                Segment::Heading("A".to_string()),
                Segment::Paragraph(format!("ok {SECTION_START}dangling")),
            ]
        );
    }

    #[test]
    fn decoding_is_pure() {
        let body = format!("x {} y", marked("S"));
        assert_eq!(segment_body(&body), segment_body(&body));
    }
}
