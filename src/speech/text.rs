//! Plain-text normalization before speaking
//!
//! Words often come from rendered HTML. The engine must hear the visible
//! text, never tags or raw entities.

use ego_tree::NodeRef;
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::node::Node;
use scraper::Html;

static WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip markup and decode entities, collapsing whitespace
///
/// `"<b>Thud</b>"` becomes `"Thud"` and `"Fish &amp; Chips"` becomes
/// `"Fish & Chips"`.
pub fn normalize_text(text: &str) -> String {
    let fragment = Html::parse_fragment(text);
    let mut output = String::new();
    for child in fragment.root_element().children() {
        append_text(child, &mut output);
    }
    WHITESPACE.replace_all(&output, " ").trim().to_string()
}

fn append_text(node: NodeRef<Node>, output: &mut String) {
    match node.value() {
        Node::Text(text) => output.push_str(text),
        Node::Element(element) => {
            let name = element.name();
            if matches!(name, "script" | "style" | "template") {
                return;
            }
            if name == "br" {
                output.push(' ');
                return;
            }
            // Block boundaries separate words
            let is_block = matches!(
                name,
                "p" | "div"
                    | "li"
                    | "ul"
                    | "ol"
                    | "blockquote"
                    | "pre"
                    | "section"
                    | "article"
                    | "h1"
                    | "h2"
                    | "h3"
                    | "h4"
                    | "h5"
                    | "h6"
                    | "td"
                    | "th"
                    | "tr"
            );
            if is_block {
                output.push(' ');
            }
            for child in node.children() {
                append_text(child, output);
            }
            if is_block {
                output.push(' ');
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(normalize_text("Gorgonzola"), "Gorgonzola");
        assert_eq!(normalize_text("Hello 世界"), "Hello 世界");
    }

    #[test]
    fn test_strips_tags() {
        assert_eq!(normalize_text("<b>Thud</b>"), "Thud");
        assert_eq!(normalize_text("<i>Sir</i> <b>Thud</b>"), "Sir Thud");
    }

    #[test]
    fn test_decodes_entities() {
        assert_eq!(normalize_text("Fish &amp; Chips"), "Fish & Chips");
        assert_eq!(normalize_text("&lt;b&gt;"), "<b>");
    }

    #[test]
    fn test_blocks_separate_words() {
        assert_eq!(normalize_text("<p>One</p><p>Two</p>"), "One Two");
        assert_eq!(normalize_text("Left<br>Right"), "Left Right");
    }

    #[test]
    fn test_skips_script_contents() {
        assert_eq!(normalize_text("<script>alert(1)</script>Hi"), "Hi");
    }

    #[test]
    fn test_collapses_whitespace() {
        assert_eq!(normalize_text("  spaced \n\t out  "), "spaced out");
        assert_eq!(normalize_text(""), "");
    }
}
