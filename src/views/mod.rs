//! Server-rendered HTML pages.
//!
//! Every value that came from a user or the database goes through [`escape`]
//! before it lands in markup.

mod flavors;
mod ingredients;
mod suggestions;

pub use flavors::{add_flavor, edit_flavor, list_flavors};
pub use ingredients::{IngredientFields, add_ingredient, edit_ingredient, list_ingredients};
pub use suggestions::{SuggestionFields, add_suggestion, list_suggestions};

use std::fmt::Write as _;

use crate::model::Rejection;

/// Banner shown above a form after a submission.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Notice {
    None,
    Success(&'static str),
    Error(Rejection),
}

/// HTML-escapes text for element content and quoted attribute values.
pub fn escape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&'  => out.push_str("&amp;"),
            '<'  => out.push_str("&lt;"),
            '>'  => out.push_str("&gt;"),
            '"'  => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _    => out.push(c),
        }
    }
    out
}

pub fn index() -> String {
    page("Flavor Shop", r#"
<ul>
  <li><a href="/add_flavor">Add a seasonal flavor</a> · <a href="/list_flavors">All flavors</a></li>
  <li><a href="/add_ingredient">Add an ingredient</a> · <a href="/list_ingredients">Ingredient inventory</a></li>
  <li><a href="/add_suggestion">Suggest a flavor</a> · <a href="/list_suggestions">Customer suggestions</a></li>
</ul>"#)
}

/// Wraps `body` in the shared document shell. `title` is escaped; `body` is
/// trusted markup.
fn page(title: &str, body: &str) -> String {
    let title = escape(title);
    format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<nav><a href="/">Home</a> | <a href="/list_flavors">Flavors</a> | <a href="/list_ingredients">Ingredients</a> | <a href="/list_suggestions">Suggestions</a></nav>
<h1>{title}</h1>
{body}
</body>
</html>
"#
    )
}

fn notice(out: &mut String, notice: Notice) {
    let _ = match notice {
        Notice::None => Ok(()),
        Notice::Success(message) => writeln!(out, r#"<p class="message">{}</p>"#, escape(message)),
        Notice::Error(rejection) => writeln!(out, r#"<p class="error">{}</p>"#, escape(&rejection.to_string())),
    };
}

/// A labelled text input, prefilled with `value`.
fn text_input(out: &mut String, label: &str, name: &str, value: &str) {
    let _ = writeln!(
        out,
        r#"<label>{label} <input type="text" name="{name}" value="{value}"></label><br>"#,
        label = escape(label),
        name = escape(name),
        value = escape(value),
    );
}

/// A `POST` button form, used for deletes.
fn post_button(action: &str, label: &str) -> String {
    format!(
        r#"<form method="post" action="{}" style="display:inline"><button type="submit">{}</button></form>"#,
        escape(action),
        escape(label),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(escape(r#"<b>"Rocky" & 'Road'</b>"#), "&lt;b&gt;&quot;Rocky&quot; &amp; &#39;Road&#39;&lt;/b&gt;");
    }

    #[test]
    fn index_links_every_page() {
        let html = index();
        for href in [
            "/add_flavor", "/list_flavors",
            "/add_ingredient", "/list_ingredients",
            "/add_suggestion", "/list_suggestions",
        ] {
            assert!(html.contains(&format!(r#"href="{href}""#)), "missing link to {href}");
        }
    }

    #[test]
    fn notices_render_their_message() {
        let mut out = String::new();
        notice(&mut out, Notice::Error(Rejection::NegativeStock));
        assert!(out.contains(r#"<p class="error">Stock cannot be negative</p>"#));

        let mut out = String::new();
        notice(&mut out, Notice::None);
        assert!(out.is_empty());
    }
}
