use std::fmt::Write;

use crate::{Instructions, MessageView, Recipe, TRANSPORT_FAILURE_MESSAGE};

/// Renders the message area as an HTML fragment. Hidden renders as empty.
///
/// All backend-provided text is escaped before it is embedded.
pub fn render_message_html(message: &MessageView) -> String {
    match message {
        MessageView::Hidden => String::new(),
        MessageView::Recipe(recipe) => render_recipe(recipe),
        MessageView::BackendError(error) => format!("<p>Error: {}</p>", escape_html(error)),
        MessageView::TransportFailure => format!("<p>{TRANSPORT_FAILURE_MESSAGE}</p>"),
    }
}

fn render_recipe(recipe: &Recipe) -> String {
    let mut html = String::new();
    let _ = writeln!(html, "<h2>{}</h2>", escape_html(&recipe.name));
    let _ = writeln!(html, "<h4>{}</h4>", escape_html(&recipe.tagline));
    html.push_str("<h3>Ingredients:</h3>\n");
    push_list(&mut html, "ul", &recipe.ingredients);
    html.push_str("<h3>Instructions:</h3>\n");
    match &recipe.instructions {
        Instructions::Text(text) => {
            let _ = writeln!(html, "<p>{}</p>", escape_html(text));
        }
        Instructions::Steps(steps) => push_list(&mut html, "ol", steps),
    }
    html
}

fn push_list(html: &mut String, tag: &str, items: &[String]) {
    let _ = writeln!(html, "<{tag}>");
    for item in items {
        let _ = writeln!(html, "<li>{}</li>", escape_html(item));
    }
    let _ = writeln!(html, "</{tag}>");
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
