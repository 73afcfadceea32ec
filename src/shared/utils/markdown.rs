use pulldown_cmark::{html, Options, Parser};

/// Render assistant markdown to HTML for `dangerous_inner_html`.
///
/// Raw HTML in the source is escaped by pulldown-cmark's parser since we
/// never enable the raw-HTML passthrough option.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(content, options);
    let mut out = String::with_capacity(content.len() * 2);
    html::push_html(&mut out, parser);
    out
}
