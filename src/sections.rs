//! Shared section extraction: turn markup (or `##`/`###` plain text) into an
//! ordered sequence of (heading label, heading level, body text) sections.

use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::patterns::MD_HEADING_RE;

pub const NO_HEADINGS_LABEL: &str = "(no headings)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeadingLevel {
    H2,
    H3,
    None,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub label: String,
    pub level: HeadingLevel,
    /// Concatenated paragraph text between this heading and the next heading
    /// of level <= its own.
    pub body: String,
}

/// Whitespace-delimited token count of a section body (or any text).
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Extract sections from `html` when supplied, else from markdown-style
/// headings in `text`. Input with no headings at all becomes one synthetic
/// `(no headings)` section, provided it is non-empty.
pub fn extract_sections(text: &str, html: Option<&str>) -> Vec<Section> {
    match html {
        Some(markup) if !markup.trim().is_empty() => sections_from_html(markup),
        _ => sections_from_markdown(text),
    }
}

fn element_text(el: &ElementRef) -> String {
    el.text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

fn sections_from_html(markup: &str) -> Vec<Section> {
    let doc = Html::parse_document(markup);
    let headings = Selector::parse("h2, h3").expect("static selector");

    let mut sections = Vec::new();
    for el in doc.select(&headings) {
        let level = match el.value().name() {
            "h2" => HeadingLevel::H2,
            _ => HeadingLevel::H3,
        };
        // Body = sibling <p> text up to (not including) the next h2/h3.
        let mut parts: Vec<String> = Vec::new();
        for node in el.next_siblings() {
            let Some(sib) = ElementRef::wrap(node) else {
                continue;
            };
            match sib.value().name() {
                "h2" | "h3" => break,
                "p" => {
                    let t = element_text(&sib);
                    if !t.is_empty() {
                        parts.push(t);
                    }
                }
                _ => {}
            }
        }
        sections.push(Section {
            label: element_text(&el),
            level,
            body: parts.join(" "),
        });
    }

    if sections.is_empty() {
        let whole = doc
            .root_element()
            .text()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if !whole.is_empty() {
            sections.push(Section {
                label: NO_HEADINGS_LABEL.to_string(),
                level: HeadingLevel::None,
                body: whole,
            });
        }
    }
    sections
}

fn sections_from_markdown(text: &str) -> Vec<Section> {
    let headings: Vec<_> = MD_HEADING_RE.captures_iter(text).collect();
    if headings.is_empty() {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        return vec![Section {
            label: NO_HEADINGS_LABEL.to_string(),
            level: HeadingLevel::None,
            body: trimmed.to_string(),
        }];
    }

    let mut sections = Vec::new();
    for (i, caps) in headings.iter().enumerate() {
        let whole = caps.get(0).expect("match group 0");
        let markers = &caps[1];
        let level = if markers.len() == 2 {
            HeadingLevel::H2
        } else {
            HeadingLevel::H3
        };
        let body_start = whole.end();
        let body_end = match headings.get(i + 1) {
            Some(next) => next.get(0).expect("match group 0").start(),
            None => text.len(),
        };
        sections.push(Section {
            label: caps[2].trim().to_string(),
            level,
            body: text[body_start..body_end].trim().to_string(),
        });
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_levels_and_bodies() {
        let text = "## Alpha\none two three\n### Beta\nfour five\n## Gamma\n";
        let sections = extract_sections(text, None);
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].label, "Alpha");
        assert_eq!(sections[0].level, HeadingLevel::H2);
        assert_eq!(sections[0].body, "one two three");
        assert_eq!(sections[1].level, HeadingLevel::H3);
        assert_eq!(sections[1].body, "four five");
        assert_eq!(sections[2].body, "");
    }

    #[test]
    fn plain_text_without_headings_is_one_section() {
        let sections = extract_sections("just a paragraph of prose", None);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, NO_HEADINGS_LABEL);
        assert_eq!(sections[0].level, HeadingLevel::None);
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(extract_sections("", None).is_empty());
        assert!(extract_sections("   \n ", None).is_empty());
    }

    #[test]
    fn html_sections_stop_at_next_heading() {
        let html = "<h2>Intro</h2><p>one two</p><p>three</p><h3>Sub</h3><p>four</p><div>skipped</div><h2>End</h2>";
        let sections = extract_sections("", Some(html));
        assert_eq!(sections.len(), 3);
        assert_eq!(sections[0].label, "Intro");
        assert_eq!(sections[0].level, HeadingLevel::H2);
        assert_eq!(sections[0].body, "one two three");
        assert_eq!(sections[1].label, "Sub");
        assert_eq!(sections[1].body, "four");
        assert_eq!(sections[2].body, "");
    }

    #[test]
    fn html_without_headings_is_one_section() {
        let sections = extract_sections("", Some("<p>hello there</p>"));
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].label, NO_HEADINGS_LABEL);
        assert_eq!(sections[0].body, "hello there");
    }
}
