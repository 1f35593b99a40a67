use std::fmt::Write as _;

use super::{Notice, escape, notice, page, post_button, text_input};
use crate::model::{Suggestion, fields};

#[derive(Clone, Copy, Debug, Default)]
pub struct SuggestionFields<'a> {
    pub customer_name: &'a str,
    pub suggested_flavor: &'a str,
    pub allergy_concerns: &'a str,
}

pub fn add_suggestion(note: Notice, values: SuggestionFields<'_>) -> String {
    let mut body = String::new();
    notice(&mut body, note);
    body.push_str("<form method=\"post\" action=\"/add_suggestion\">\n");
    text_input(&mut body, "Your name", fields::CUSTOMER_NAME, values.customer_name);
    text_input(&mut body, "Flavor idea", fields::SUGGESTED_FLAVOR, values.suggested_flavor);
    text_input(&mut body, "Allergy concerns (optional)", fields::ALLERGY_CONCERNS, values.allergy_concerns);
    body.push_str("<button type=\"submit\">Send suggestion</button>\n</form>\n");
    page("Suggest a Flavor", &body)
}

pub fn list_suggestions(suggestions: &[Suggestion]) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>ID</th><th>Name</th><th>Flavor</th><th>Allergy concerns</th><th></th></tr>\n",
    );
    for s in suggestions {
        let _ = writeln!(
            body,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            s.id,
            escape(&s.customer_name),
            escape(&s.suggested_flavor),
            escape(s.allergy_concerns.as_deref().unwrap_or_default()),
            post_button(&format!("/delete_suggestion/{}", s.id), "Delete"),
        );
    }
    body.push_str("</table>\n<p><a href=\"/add_suggestion\">Suggest a flavor</a></p>\n");
    page("Customer Suggestions", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_allergy_note_renders_empty_cell() {
        let html = list_suggestions(&[Suggestion {
            id: 1,
            customer_name: "Ada".into(),
            suggested_flavor: "Yuzu".into(),
            allergy_concerns: None,
        }]);
        assert!(html.contains("<td>Ada</td><td>Yuzu</td><td></td>"));
    }
}
