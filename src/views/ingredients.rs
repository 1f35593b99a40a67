use std::fmt::Write as _;

use super::{Notice, escape, notice, page, post_button, text_input};
use crate::model::{Ingredient, fields};

/// Raw field values to prefill, exactly as typed or as stored.
#[derive(Clone, Copy, Debug, Default)]
pub struct IngredientFields<'a> {
    pub name: &'a str,
    pub stock: &'a str,
}

fn ingredient_form(body: &mut String, action: &str, values: IngredientFields<'_>, submit: &str) {
    let _ = writeln!(body, r#"<form method="post" action="{}">"#, escape(action));
    text_input(body, "Ingredient", fields::INGREDIENT, values.name);
    text_input(body, "Stock", fields::STOCK, values.stock);
    let _ = writeln!(body, "<button type=\"submit\">{}</button>\n</form>", escape(submit));
}

pub fn add_ingredient(note: Notice, values: IngredientFields<'_>) -> String {
    let mut body = String::new();
    notice(&mut body, note);
    ingredient_form(&mut body, "/add_ingredient", values, "Add ingredient");
    page("Add Ingredient", &body)
}

pub fn list_ingredients(ingredients: &[Ingredient]) -> String {
    let mut body = String::from("<table>\n<tr><th>ID</th><th>Ingredient</th><th>Stock</th><th></th></tr>\n");
    for ingredient in ingredients {
        let _ = writeln!(
            body,
            r#"<tr><td>{id}</td><td>{name}</td><td>{stock}</td><td><a href="/update_ingredient/{id}">Edit</a> {delete}</td></tr>"#,
            id = ingredient.id,
            name = escape(&ingredient.name),
            stock = ingredient.stock,
            delete = post_button(&format!("/delete_ingredient/{}", ingredient.id), "Delete"),
        );
    }
    body.push_str("</table>\n<p><a href=\"/add_ingredient\">Add an ingredient</a></p>\n");
    page("Ingredient Inventory", &body)
}

pub fn edit_ingredient(id: i64, note: Notice, values: IngredientFields<'_>) -> String {
    let mut body = String::new();
    notice(&mut body, note);
    ingredient_form(&mut body, &format!("/update_ingredient/{id}"), values, "Save");
    page("Update Ingredient", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_shows_stock() {
        let html = list_ingredients(&[Ingredient { id: 2, name: "Cocoa".into(), stock: 0 }]);
        assert!(html.contains("<td>Cocoa</td><td>0</td>"));
        assert!(html.contains(r#"action="/delete_ingredient/2""#));
    }

    #[test]
    fn edit_prefills_both_fields() {
        let html = edit_ingredient(2, Notice::None, IngredientFields { name: "Cocoa", stock: "12" });
        assert!(html.contains(r#"name="ingredient" value="Cocoa""#));
        assert!(html.contains(r#"name="stock" value="12""#));
        assert!(html.contains(r#"action="/update_ingredient/2""#));
    }
}
