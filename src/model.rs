//! Shop records and the typed inputs parsed from submitted forms.
//!
//! Parsing a form yields either a ready-to-store input or a [`Rejection`]
//! naming what was wrong. Rendering the rejection is the views' job.

use thiserror::Error;

use crate::form::Form;

/// A seasonal flavor on offer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Flavor {
    pub id: i64,
    pub name: String,
}

/// A stock item and the quantity on hand. `stock` is never negative.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Ingredient {
    pub id: i64,
    pub name: String,
    pub stock: i64,
}

/// A customer's flavor idea.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Suggestion {
    pub id: i64,
    pub customer_name: String,
    /// Free text, not tied to any [`Flavor`].
    pub suggested_flavor: String,
    /// `None` when the field was not submitted at all.
    pub allergy_concerns: Option<String>,
}

/// Why a submitted form was turned away. `Display` is the message shown to staff.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum Rejection {
    #[error("Flavor name cannot be empty")]
    EmptyFlavorName,

    #[error("Flavor already exists")]
    DuplicateFlavor,

    #[error("Ingredient name and stock are required")]
    MissingIngredientFields,

    #[error("Stock must be a number")]
    StockNotANumber,

    #[error("Stock cannot be negative")]
    NegativeStock,

    #[error("Ingredient already exists")]
    DuplicateIngredient,

    #[error("Name and flavor are required")]
    MissingSuggestionFields,
}

// ── Form inputs ───────────────────────────────────────────────────────────────

/// Field names, shared with the rendered forms.
pub mod fields {
    pub const FLAVOR: &str = "flavor";
    pub const INGREDIENT: &str = "ingredient";
    pub const STOCK: &str = "stock";
    pub const CUSTOMER_NAME: &str = "name";
    pub const SUGGESTED_FLAVOR: &str = "flavor";
    pub const ALLERGY_CONCERNS: &str = "allergy_concerns";
}

/// A flavor name, as submitted to the add and rename forms.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FlavorInput {
    pub name: String,
}

impl FlavorInput {
    pub fn from_form(form: &Form) -> Result<Self, Rejection> {
        let name = form.filled(fields::FLAVOR).ok_or(Rejection::EmptyFlavorName)?;
        Ok(Self { name: name.to_owned() })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngredientInput {
    pub name: String,
    pub stock: i64,
}

impl IngredientInput {
    /// A missing `stock` field is a different rejection from an empty one:
    /// the former means the form was incomplete, the latter is not a number.
    pub fn from_form(form: &Form) -> Result<Self, Rejection> {
        let (Some(name), Some(stock)) = (form.filled(fields::INGREDIENT), form.get(fields::STOCK)) else {
            return Err(Rejection::MissingIngredientFields);
        };
        let stock: i64 = stock.trim().parse().map_err(|_| Rejection::StockNotANumber)?;
        if stock < 0 {
            return Err(Rejection::NegativeStock);
        }
        Ok(Self { name: name.to_owned(), stock })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SuggestionInput {
    pub customer_name: String,
    pub suggested_flavor: String,
    pub allergy_concerns: Option<String>,
}

impl SuggestionInput {
    pub fn from_form(form: &Form) -> Result<Self, Rejection> {
        let (Some(customer), Some(flavor)) =
            (form.filled(fields::CUSTOMER_NAME), form.filled(fields::SUGGESTED_FLAVOR))
        else {
            return Err(Rejection::MissingSuggestionFields);
        };
        Ok(Self {
            customer_name: customer.to_owned(),
            suggested_flavor: flavor.to_owned(),
            allergy_concerns: form.get(fields::ALLERGY_CONCERNS).map(str::to_owned),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn form(pairs: &[(&str, &str)]) -> Form {
        pairs.iter().copied().collect()
    }

    #[test]
    fn flavor_requires_a_name() {
        assert_eq!(FlavorInput::from_form(&form(&[])), Err(Rejection::EmptyFlavorName));
        assert_eq!(FlavorInput::from_form(&form(&[("flavor", "")])), Err(Rejection::EmptyFlavorName));
        assert_eq!(
            FlavorInput::from_form(&form(&[("flavor", "Mint")])),
            Ok(FlavorInput { name: "Mint".into() }),
        );
    }

    #[test]
    fn flavor_name_is_kept_verbatim() {
        let input = FlavorInput::from_form(&form(&[("flavor", " Mint ")])).expect("accepted");
        assert_eq!(input.name, " Mint ");
    }

    #[test]
    fn ingredient_stock_rules() {
        let parse = |stock: &str| IngredientInput::from_form(&form(&[("ingredient", "Milk"), ("stock", stock)]));

        assert_eq!(parse("0"), Ok(IngredientInput { name: "Milk".into(), stock: 0 }));
        assert_eq!(parse(" 12 "), Ok(IngredientInput { name: "Milk".into(), stock: 12 }));
        assert_eq!(parse("-1"), Err(Rejection::NegativeStock));
        assert_eq!(parse("abc"), Err(Rejection::StockNotANumber));
        assert_eq!(parse("1.5"), Err(Rejection::StockNotANumber));
        assert_eq!(parse(""), Err(Rejection::StockNotANumber));
    }

    #[test]
    fn ingredient_requires_name_and_stock_field() {
        assert_eq!(
            IngredientInput::from_form(&form(&[("ingredient", "Milk")])),
            Err(Rejection::MissingIngredientFields),
        );
        assert_eq!(
            IngredientInput::from_form(&form(&[("ingredient", ""), ("stock", "3")])),
            Err(Rejection::MissingIngredientFields),
        );
    }

    #[test]
    fn suggestion_keeps_allergy_field_as_given() {
        let absent = SuggestionInput::from_form(&form(&[("name", "Ada"), ("flavor", "Yuzu")])).expect("accepted");
        assert_eq!(absent.allergy_concerns, None);

        let empty = SuggestionInput::from_form(&form(&[("name", "Ada"), ("flavor", "Yuzu"), ("allergy_concerns", "")]))
            .expect("accepted");
        assert_eq!(empty.allergy_concerns, Some(String::new()));
    }

    #[test]
    fn suggestion_requires_name_and_flavor() {
        assert_eq!(
            SuggestionInput::from_form(&form(&[("name", "Ada")])),
            Err(Rejection::MissingSuggestionFields),
        );
        assert_eq!(
            SuggestionInput::from_form(&form(&[("name", ""), ("flavor", "Yuzu")])),
            Err(Rejection::MissingSuggestionFields),
        );
    }

    #[test]
    fn rejection_messages() {
        assert_eq!(Rejection::StockNotANumber.to_string(), "Stock must be a number");
        assert_eq!(Rejection::DuplicateFlavor.to_string(), "Flavor already exists");
    }
}
