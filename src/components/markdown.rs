//! Markdown Component
//!
//! Renders assistant messages (GitHub-flavored subset: tables,
//! strikethrough, task lists) to HTML.

use leptos::*;
use pulldown_cmark::{html, Options, Parser};

/// Render a markdown source string to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options);
    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}

/// Markdown block, used for assistant message bodies.
#[component]
pub fn Markdown(#[prop(into)] source: String) -> impl IntoView {
    let rendered = render_markdown(&source);

    view! {
        <div class="markdown-body max-w-none" inner_html=rendered></div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_emphasis_and_code() {
        let html = render_markdown("**bold** and `code`");
        assert!(html.contains("<strong>bold</strong>"));
        assert!(html.contains("<code>code</code>"));
    }

    #[test]
    fn renders_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(html.contains("<table>"));
    }

    #[test]
    fn plain_text_becomes_a_paragraph() {
        assert_eq!(render_markdown("gm"), "<p>gm</p>\n");
    }
}
