//! Markdown rendering via pulldown-cmark.

use pulldown_cmark::{html, Options, Parser};

/// Render one markdown document to an HTML fragment.
///
/// Tables, footnotes, and strikethrough are enabled on top of CommonMark.
pub fn render_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_paragraphs() {
        let out = render_html("# Title\n\nbody text\n");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<p>body text</p>"));
    }

    #[test]
    fn renders_tables() {
        let out = render_html("| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(out.contains("<table>"));
    }

    #[test]
    fn renders_strikethrough() {
        let out = render_html("~~gone~~");
        assert!(out.contains("<del>gone</del>"));
    }

    #[test]
    fn empty_input_renders_empty() {
        assert_eq!(render_html(""), "");
    }
}
