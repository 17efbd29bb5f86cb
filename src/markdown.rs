use maud::{Markup, PreEscaped};
use pulldown_cmark::{html, Options, Parser};

/// Renders trusted question markdown into HTML.
pub fn render_markdown(text: &str) -> Markup {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(text, options);

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    PreEscaped(out)
}
