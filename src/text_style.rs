//! Brand Text Styling
//!
//! Splits text into plain and highlighted runs wherever the brand name
//! appears (case-insensitive, original casing kept). Components render the
//! runs directly; [`style_document`] applies the same split to static markup
//! inside `[data-brand-scope]` regions.

use wasm_bindgen::JsCast;

/// Class on generated highlight spans; also marks text already processed
pub const HIGHLIGHT_CLASS: &str = "brand-highlight";

/// Attribute marking static regions the document pass may rewrite
pub const SCOPE_SELECTOR: &str = "[data-brand-scope]";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub highlighted: bool,
}

impl Segment {
    fn plain(text: &str) -> Self {
        Self { text: text.to_string(), highlighted: false }
    }

    fn highlight(text: &str) -> Self {
        Self { text: text.to_string(), highlighted: true }
    }
}

/// Split `text` around every occurrence of `needle`, ignoring case.
///
/// Matching is done on a lowercased copy, so `needle` should be something
/// whose lowercase form has the same byte length (plain ASCII brand names).
pub fn segments(text: &str, needle: &str) -> Vec<Segment> {
    let mut result = Vec::new();
    if needle.is_empty() || text.is_empty() {
        if !text.is_empty() {
            result.push(Segment::plain(text));
        }
        return result;
    }

    let haystack = text.to_ascii_lowercase();
    let needle = needle.to_ascii_lowercase();
    let mut cursor = 0;

    while let Some(offset) = haystack[cursor..].find(&needle) {
        let start = cursor + offset;
        let end = start + needle.len();
        if start > cursor {
            result.push(Segment::plain(&text[cursor..start]));
        }
        result.push(Segment::highlight(&text[start..end]));
        cursor = end;
    }

    if cursor < text.len() {
        result.push(Segment::plain(&text[cursor..]));
    }
    result
}

pub fn contains_needle(text: &str, needle: &str) -> bool {
    !needle.is_empty() && text.to_ascii_lowercase().contains(&needle.to_ascii_lowercase())
}

/// Wrap brand mentions in every `[data-brand-scope]` region.
/// Safe to run repeatedly: text already inside a highlight span is skipped.
pub fn style_document(needle: &str) -> usize {
    let Some(doc) = web_sys::window().and_then(|w| w.document()) else {
        return 0;
    };
    let Ok(scopes) = doc.query_selector_all(SCOPE_SELECTOR) else {
        return 0;
    };

    let mut wrapped = 0;
    for i in 0..scopes.length() {
        if let Some(scope) = scopes.get(i) {
            wrapped += style_subtree(&doc, &scope, needle);
        }
    }
    wrapped
}

fn style_subtree(doc: &web_sys::Document, node: &web_sys::Node, needle: &str) -> usize {
    if node.node_type() == web_sys::Node::TEXT_NODE {
        return wrap_text_node(doc, node, needle);
    }

    if let Some(el) = node.dyn_ref::<web_sys::Element>() {
        let tag = el.tag_name();
        if tag == "SCRIPT" || tag == "STYLE" || el.class_list().contains(HIGHLIGHT_CLASS) {
            return 0;
        }
    }

    // Snapshot children first; wrapping replaces nodes in place
    let children = node.child_nodes();
    let snapshot: Vec<web_sys::Node> = (0..children.length()).filter_map(|i| children.get(i)).collect();
    snapshot.iter().map(|child| style_subtree(doc, child, needle)).sum()
}

fn wrap_text_node(doc: &web_sys::Document, node: &web_sys::Node, needle: &str) -> usize {
    let text = node.text_content().unwrap_or_default();
    if !contains_needle(&text, needle) {
        return 0;
    }
    let Some(parent) = node.parent_node() else {
        return 0;
    };

    let fragment = doc.create_document_fragment();
    let mut count = 0;
    for segment in segments(&text, needle) {
        if segment.highlighted {
            let Ok(span) = doc.create_element("span") else {
                return 0;
            };
            span.set_class_name(HIGHLIGHT_CLASS);
            span.set_text_content(Some(&segment.text));
            let _ = fragment.append_child(&span);
            count += 1;
        } else {
            let _ = fragment.append_child(&doc.create_text_node(&segment.text));
        }
    }
    if parent.replace_child(&fragment, node).is_err() {
        return 0;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(segs: &[Segment]) -> String {
        segs.iter()
            .map(|s| if s.highlighted { format!("[{}]", s.text) } else { s.text.clone() })
            .collect()
    }

    #[test]
    fn test_single_match_keeps_case() {
        let segs = segments("Welcome to Adam International Hospital", "adam");
        assert_eq!(render(&segs), "Welcome to [Adam] International Hospital");
        assert_eq!(segs.len(), 3);
    }

    #[test]
    fn test_multiple_and_adjacent_matches() {
        assert_eq!(render(&segments("ADAMadam and Adam.", "adam")), "[ADAM][adam] and [Adam].");
    }

    #[test]
    fn test_match_at_edges() {
        let segs = segments("Adam", "adam");
        assert_eq!(segs, vec![Segment::highlight("Adam")]);
    }

    #[test]
    fn test_no_match_is_single_plain_run() {
        assert_eq!(segments("Fertility care", "adam"), vec![Segment::plain("Fertility care")]);
        assert!(segments("", "adam").is_empty());
    }

    #[test]
    fn test_non_ascii_text_is_preserved() {
        let segs = segments("مستشفى Adam الدولي", "adam");
        assert_eq!(render(&segs), "مستشفى [Adam] الدولي");
    }

    #[test]
    fn test_empty_needle() {
        assert_eq!(segments("Adam", ""), vec![Segment::plain("Adam")]);
        assert!(!contains_needle("Adam", ""));
    }
}
