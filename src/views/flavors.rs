use std::fmt::Write as _;

use super::{Notice, escape, notice, page, post_button, text_input};
use crate::model::{Flavor, fields};

/// The add form. `value` prefills the name field after a rejected submission.
pub fn add_flavor(note: Notice, value: &str) -> String {
    let mut body = String::new();
    notice(&mut body, note);
    body.push_str("<form method=\"post\" action=\"/add_flavor\">\n");
    text_input(&mut body, "Flavor", fields::FLAVOR, value);
    body.push_str("<button type=\"submit\">Add flavor</button>\n</form>\n");
    page("Add Seasonal Flavor", &body)
}

pub fn list_flavors(flavors: &[Flavor]) -> String {
    let mut body = String::from("<table>\n<tr><th>ID</th><th>Flavor</th><th></th></tr>\n");
    for flavor in flavors {
        let _ = writeln!(
            body,
            r#"<tr><td>{id}</td><td>{name}</td><td><a href="/update_flavor/{id}">Edit</a> {delete}</td></tr>"#,
            id = flavor.id,
            name = escape(&flavor.name),
            delete = post_button(&format!("/delete_flavor/{}", flavor.id), "Delete"),
        );
    }
    body.push_str("</table>\n<p><a href=\"/add_flavor\">Add a flavor</a></p>\n");
    page("Seasonal Flavors", &body)
}

/// The rename form for flavor `id`.
pub fn edit_flavor(id: i64, note: Notice, value: &str) -> String {
    let mut body = String::new();
    notice(&mut body, note);
    let _ = writeln!(body, r#"<form method="post" action="/update_flavor/{id}">"#);
    text_input(&mut body, "Flavor", fields::FLAVOR, value);
    body.push_str("<button type=\"submit\">Save</button>\n</form>\n");
    page("Update Flavor", &body)
}
