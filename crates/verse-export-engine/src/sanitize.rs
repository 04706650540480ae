//! Extraction of exportable text from verse body markup.

use std::borrow::Cow;
use std::sync::OnceLock;

use quick_xml::{Reader, events::Event};
use regex::Regex;

/// Rewrites `<tag attrs/>` as `<tag attrs></tag>`. Existing open/close pairs are left alone.
pub fn repair_self_closing_tags(markup: &str) -> Cow<'_, str> {
    static SELF_CLOSING_TAG: OnceLock<Regex> = OnceLock::new();
    let re = SELF_CLOSING_TAG
        .get_or_init(|| Regex::new(r"<([a-z]+)(\s?[^>]*?)/>").expect("Invalid self-closing tag regex"));
    re.replace_all(markup, "<$1$2></$1>")
}

/// HTML elements that never have content or a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

fn is_void_element(name: &[u8]) -> bool {
    VOID_ELEMENTS
        .iter()
        .any(|void| name.eq_ignore_ascii_case(void.as_bytes()))
}

/// Turns verse markup into plain text, dropping annotation containers.
///
/// Every top-level node contributes its text content in document order,
/// except elements named like the excluded tag, whose whole subtree is
/// skipped. Parsing is best effort: a node that cannot be parsed contributes
/// nothing, and reading stops there.
#[derive(Debug, Clone)]
pub struct VerseSanitizer {
    excluded_tag: String,
}

impl Default for VerseSanitizer {
    fn default() -> Self {
        Self::new(Self::DEFAULT_EXCLUDED_TAG)
    }
}

impl VerseSanitizer {
    pub const DEFAULT_EXCLUDED_TAG: &'static str = "div";

    pub fn new(excluded_tag: impl Into<String>) -> Self {
        Self {
            excluded_tag: excluded_tag.into(),
        }
    }

    pub fn excluded_tag(&self) -> &str {
        &self.excluded_tag
    }

    pub fn sanitize(&self, markup: &str) -> String {
        let repaired = repair_self_closing_tags(markup);
        self.extract_text(&repaired)
    }

    fn extract_text(&self, markup: &str) -> String {
        let mut reader = Reader::from_str(markup);
        reader.config_mut().check_end_names = false;

        let mut out = String::new();
        // Text of the top-level element currently open
        let mut node_text = String::new();
        let mut depth = 0usize;
        let mut excluded = false;

        loop {
            match reader.read_event() {
                Ok(Event::Start(start)) => {
                    // `<br>` opens nothing; `</br>` from the self-closing repair closes nothing
                    if is_void_element(start.local_name().as_ref()) {
                        continue;
                    }
                    if depth == 0 {
                        excluded = self.is_excluded(start.local_name().as_ref());
                        node_text.clear();
                    }
                    depth += 1;
                }
                Ok(Event::End(end)) => {
                    // Stray closing tag at top level
                    if depth == 0 || is_void_element(end.local_name().as_ref()) {
                        continue;
                    }
                    depth -= 1;
                    if depth == 0 {
                        if !excluded {
                            out.push_str(&node_text);
                        }
                        node_text.clear();
                    }
                }
                Ok(Event::Text(text)) => {
                    let raw = String::from_utf8_lossy(&text);
                    let decoded = html_escape::decode_html_entities(&raw);
                    if depth == 0 {
                        out.push_str(&decoded);
                    } else if !excluded {
                        node_text.push_str(&decoded);
                    }
                }
                Ok(Event::CData(cdata)) => {
                    let raw = String::from_utf8_lossy(&cdata);
                    if depth == 0 {
                        out.push_str(&raw);
                    } else if !excluded {
                        node_text.push_str(&raw);
                    }
                }
                Ok(Event::Eof) => {
                    // Unclosed element at end of input still counts
                    if depth > 0 && !excluded {
                        out.push_str(&node_text);
                    }
                    break;
                }
                Ok(_) => {}
                Err(err) => {
                    log::debug!(
                        "Dropping unparseable verse markup at byte {}: {err}",
                        reader.buffer_position()
                    );
                    break;
                }
            }
        }

        out
    }

    fn is_excluded(&self, name: &[u8]) -> bool {
        name.eq_ignore_ascii_case(self.excluded_tag.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_excluded_container_is_dropped() {
        let sanitizer = VerseSanitizer::default();
        assert_eq!(
            sanitizer.sanitize("<span>A</span><div>B</div><span>C</span>"),
            "AC"
        );
    }

    #[test]
    fn test_excluded_container_drops_nested_text() {
        let sanitizer = VerseSanitizer::default();
        let markup = "<span>For God</span><div class=\"sword-markup\"><span>hidden <b>deep</b></span></div><span> so loved</span>";
        assert_eq!(sanitizer.sanitize(markup), "For God so loved");
    }

    #[test]
    fn test_nested_text_of_kept_nodes_is_included() {
        let sanitizer = VerseSanitizer::default();
        let markup = "<w lemma=\"strong:G2316\">God <i>is</i></w> love";
        assert_eq!(sanitizer.sanitize(markup), "God is love");
    }

    #[test]
    fn test_excluded_tag_is_case_insensitive() {
        let sanitizer = VerseSanitizer::default();
        assert_eq!(sanitizer.sanitize("<span>A</span><DIV>B</DIV>"), "A");
    }

    #[test]
    fn test_excluded_tag_is_configurable() {
        let sanitizer = VerseSanitizer::new("note");
        assert_eq!(
            sanitizer.sanitize("<div>kept</div><note>dropped</note>"),
            "kept"
        );
        assert_eq!(sanitizer.excluded_tag(), "note");
    }

    #[test]
    fn test_self_closing_tags_do_not_swallow_siblings() {
        let sanitizer = VerseSanitizer::default();
        assert_eq!(
            sanitizer.sanitize("<span>Jesus wept.</span><div class=\"x\"/><span> Amen</span>"),
            "Jesus wept. Amen"
        );
    }

    #[test]
    fn test_plain_text_passes_through() {
        let sanitizer = VerseSanitizer::default();
        assert_eq!(sanitizer.sanitize("In the beginning"), "In the beginning");
        assert_eq!(sanitizer.sanitize(""), "");
    }

    #[test]
    fn test_html_entities_are_decoded() {
        let sanitizer = VerseSanitizer::default();
        assert_eq!(
            sanitizer.sanitize("<span>Grace&nbsp;&amp; peace</span>"),
            "Grace\u{a0}& peace"
        );
    }

    #[test]
    fn test_unclosed_line_break_keeps_following_container_excluded() {
        let sanitizer = VerseSanitizer::default();
        assert_eq!(sanitizer.sanitize("<span>A</span><br><div>B</div>"), "A");
    }

    #[test]
    fn test_line_break_inside_kept_node() {
        let sanitizer = VerseSanitizer::default();
        assert_eq!(
            sanitizer.sanitize("<span>A<br>B</span><div>x</div>C"),
            "ABC"
        );
    }

    #[rstest]
    #[case::hr("<hr>")]
    #[case::img("<img src=\"x.png\">")]
    #[case::repaired_br("<br/>")]
    #[case::upper_case("<BR>")]
    fn test_void_elements_do_not_nest(#[case] void: &str) {
        let sanitizer = VerseSanitizer::default();
        let markup = format!("<span>In</span>{void}<div>note</div><span>the beginning</span>");
        assert_eq!(sanitizer.sanitize(&markup), "Inthe beginning");
    }

    #[test]
    fn test_unparseable_node_degrades_to_empty() {
        let sanitizer = VerseSanitizer::default();
        assert_eq!(sanitizer.sanitize("<span>ok</span><span <<broken"), "ok");
    }

    #[rstest]
    #[case::bare("<note/>", "<note></note>")]
    #[case::with_attributes("<div class=\"a\"/>", "<div class=\"a\"></div>")]
    #[case::with_space("<br />", "<br ></br>")]
    #[case::mixed("<span>x</span><milestone type=\"x\"/>", "<span>x</span><milestone type=\"x\"></milestone>")]
    fn test_repair_self_closing(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(repair_self_closing_tags(input), expected);
    }

    #[rstest]
    #[case("<span>A</span><div>B</div>")]
    #[case("<w lemma=\"x\">word</w> text")]
    #[case("no markup at all")]
    fn test_repair_leaves_well_formed_pairs_unchanged(#[case] input: &str) {
        let repaired = repair_self_closing_tags(input);
        assert!(matches!(repaired, Cow::Borrowed(_)));
        assert_eq!(repaired, input);
    }
}
