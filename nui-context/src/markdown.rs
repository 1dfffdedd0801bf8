//! Inline markdown to HTML conversion for option titles and descriptions.
//!
//! Only a small inline subset is supported: emphasis, strong emphasis,
//! strikethrough, inline code, links and line breaks. Block constructs are
//! flattened to their text and raw HTML is escaped, so the output is always
//! safe to inject with `dangerous_inner_html`.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Link schemes that are rendered as anchors.
const ALLOWED_SCHEMES: &[&str] = &["http", "https", "mailto"];

/// Escape special HTML characters in text content.
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Whether a link destination may be rendered as an anchor.
fn is_safe_link(dest: &str) -> bool {
    let Some((scheme, _)) = dest.split_once(':') else {
        // Relative paths and fragments.
        return true;
    };
    // A colon after a path or fragment delimiter is not a scheme separator.
    if scheme.contains(['/', '?', '#']) {
        return true;
    }
    ALLOWED_SCHEMES.iter().any(|allowed| scheme.eq_ignore_ascii_case(allowed))
}

fn is_block_end(tag: &TagEnd) -> bool {
    matches!(
        tag,
        TagEnd::Paragraph | TagEnd::Heading(_) | TagEnd::Item | TagEnd::CodeBlock | TagEnd::BlockQuote(_)
    )
}

/// Convert a markdown string into inline HTML.
#[must_use]
pub fn render_inline(md: &str) -> String {
    let parser = Parser::new_ext(md, Options::ENABLE_STRIKETHROUGH);

    let mut html = String::with_capacity(md.len() + 16);
    // Whether each open link was rendered as an anchor.
    let mut links: Vec<bool> = Vec::new();
    let mut pending_break = false;

    for event in parser {
        // Separate blocks lazily so there is no trailing break.
        let produces_output = matches!(
            event,
            Event::Text(_) | Event::Code(_) | Event::Html(_) | Event::InlineHtml(_) | Event::Start(_)
        );
        if pending_break && produces_output {
            html.push_str("<br />");
            pending_break = false;
        }

        match event {
            Event::Start(Tag::Emphasis) => html.push_str("<em>"),
            Event::End(TagEnd::Emphasis) => html.push_str("</em>"),
            Event::Start(Tag::Strong) => html.push_str("<strong>"),
            Event::End(TagEnd::Strong) => html.push_str("</strong>"),
            Event::Start(Tag::Strikethrough) => html.push_str("<del>"),
            Event::End(TagEnd::Strikethrough) => html.push_str("</del>"),
            Event::Start(Tag::Link { dest_url, .. }) => {
                let safe = is_safe_link(&dest_url);
                if safe {
                    html.push_str("<a href=\"");
                    html.push_str(&escape_html(&dest_url));
                    html.push_str("\">");
                }
                links.push(safe);
            }
            Event::End(TagEnd::Link) => {
                if links.pop().unwrap_or(false) {
                    html.push_str("</a>");
                }
            }
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => html.push_str(&escape_html(&text)),
            Event::Code(code) => {
                html.push_str("<code>");
                html.push_str(&escape_html(&code));
                html.push_str("</code>");
            }
            Event::SoftBreak => html.push(' '),
            Event::HardBreak => html.push_str("<br />"),
            Event::End(tag) if is_block_end(&tag) => pending_break = !html.is_empty(),
            _ => {}
        }
    }

    html
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input() {
        assert_eq!(render_inline(""), "");
    }

    #[test]
    fn plain_text_is_not_wrapped() {
        assert_eq!(render_inline("Give Item"), "Give Item");
    }

    #[test]
    fn bold_and_italic() {
        assert_eq!(
            render_inline("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn strikethrough() {
        assert_eq!(render_inline("~~gone~~"), "<del>gone</del>");
    }

    #[test]
    fn inline_code() {
        assert_eq!(render_inline("use `/me`"), "use <code>/me</code>");
    }

    #[test]
    fn link() {
        assert_eq!(
            render_inline("[docs](https://example.com)"),
            "<a href=\"https://example.com\">docs</a>"
        );
    }

    #[test]
    fn unsafe_link_keeps_text_only() {
        assert_eq!(render_inline("[x](javascript:alert(1))"), "x");
    }

    #[test]
    fn relative_link_allowed() {
        assert_eq!(render_inline("[a](#top)"), "<a href=\"#top\">a</a>");
        assert_eq!(render_inline("[b](docs/a:b)"), "<a href=\"docs/a:b\">b</a>");
    }

    #[test]
    fn link_schemes() {
        assert!(is_safe_link("HTTPS://example.com"));
        assert!(is_safe_link("mailto:crew@example.com"));
        assert!(is_safe_link("docs/page?at=10:30"));
        assert!(is_safe_link("#a:b"));
        assert!(!is_safe_link("javascript:void(0)"));
        assert!(!is_safe_link("data:text/html,hi"));
        assert!(!is_safe_link(":nothing"));
    }

    #[test]
    fn raw_html_is_escaped() {
        let result = render_inline("<b>hi</b>");
        assert!(!result.contains("<b>"));
        assert!(result.contains("&lt;b&gt;"));
    }

    #[test]
    fn paragraphs_joined_with_break() {
        assert_eq!(render_inline("first\n\nsecond"), "first<br />second");
    }

    #[test]
    fn soft_break_becomes_space() {
        assert_eq!(render_inline("one\ntwo"), "one two");
    }

    #[test]
    fn heading_flattened_to_text() {
        assert_eq!(render_inline("# Title"), "Title");
    }

    #[test]
    fn list_flattened_to_text() {
        assert_eq!(render_inline("- one\n- two"), "one<br />two");
    }

    #[test]
    fn escape_html_special_chars() {
        assert_eq!(escape_html("<b>&\"x\"</b>"), "&lt;b&gt;&amp;&quot;x&quot;&lt;/b&gt;");
    }
}
