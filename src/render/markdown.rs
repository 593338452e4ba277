//! Prose renderer — normalized doc text to an HTML fragment via pulldown-cmark.

use pulldown_cmark::{html, Options, Parser};

fn options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_FOOTNOTES);
    options
}

/// Render Markdown to HTML. Blank input gives an empty string.
pub fn to_html(text: &str) -> String {
    let parser = Parser::new_ext(text, options());
    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
