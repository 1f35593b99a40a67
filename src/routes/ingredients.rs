use tracing::{debug, info, warn};

use super::{App, AppError, not_found, path_id};
use crate::form::Form;
use crate::model::{IngredientInput, Rejection, fields};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;
use crate::store::StoreError;
use crate::views::{self, IngredientFields, Notice};

const NOT_FOUND: &str = "Ingredient not found";
const ADDED: &str = "Ingredient added successfully";
const LIST: &str = "/list_ingredients";

fn submitted(form: &Form) -> IngredientFields<'_> {
    IngredientFields {
        name: form.get(fields::INGREDIENT).unwrap_or_default(),
        stock: form.get(fields::STOCK).unwrap_or_default(),
    }
}

pub(super) async fn add_form(_req: Request, _app: App) -> Response {
    Response::html(views::add_ingredient(Notice::None, IngredientFields::default()))
}

pub(super) async fn add(req: Request, app: App) -> Result<Response, AppError> {
    let form = req.form().await;

    let input = match IngredientInput::from_form(&form) {
        Ok(input) => input,
        Err(rejection) => {
            debug!(%rejection, "ingredient rejected");
            return Ok(Response::html(views::add_ingredient(Notice::Error(rejection), submitted(&form))));
        }
    };

    match app.run(move |store| store.ingredient_add(&input)).await {
        Ok(ingredient) => {
            info!(id = ingredient.id, name = %ingredient.name, stock = ingredient.stock, "ingredient added");
            Ok(Response::html(views::add_ingredient(Notice::Success(ADDED), IngredientFields::default())))
        }
        Err(AppError::Store(StoreError::Duplicate)) => Ok(Response::html(views::add_ingredient(
            Notice::Error(Rejection::DuplicateIngredient),
            submitted(&form),
        ))),
        Err(e) => Err(e),
    }
}

pub(super) async fn list(_req: Request, app: App) -> Result<Response, AppError> {
    let ingredients = app.run(|store| store.ingredient_list()).await?;
    Ok(Response::html(views::list_ingredients(&ingredients)))
}

pub(super) async fn delete(req: Request, app: App) -> Result<Response, AppError> {
    let Some(id) = path_id(&req) else { return Ok(Response::status(Status::NotFound)) };

    match app.run(move |store| store.ingredient_delete(id)).await {
        Ok(()) => {
            info!(id, "ingredient deleted");
            Ok(Response::redirect(LIST))
        }
        Err(AppError::Store(StoreError::UnknownId)) => Ok(not_found(NOT_FOUND)),
        Err(e) => Err(e),
    }
}

pub(super) async fn edit_form(req: Request, app: App) -> Result<Response, AppError> {
    let Some(id) = path_id(&req) else { return Ok(Response::status(Status::NotFound)) };

    let Some(ingredient) = app.run(move |store| store.ingredient_get(id)).await? else {
        return Ok(not_found(NOT_FOUND));
    };
    let stock = ingredient.stock.to_string();
    let values = IngredientFields { name: &ingredient.name, stock: &stock };
    Ok(Response::html(views::edit_ingredient(id, Notice::None, values)))
}

pub(super) async fn update(req: Request, app: App) -> Result<Response, AppError> {
    let Some(id) = path_id(&req) else { return Ok(Response::status(Status::NotFound)) };
    let form = req.form().await;

    let input = match IngredientInput::from_form(&form) {
        Ok(input) => input,
        Err(rejection) => {
            return Ok(Response::html(views::edit_ingredient(id, Notice::Error(rejection), submitted(&form))));
        }
    };

    match app.run(move |store| store.ingredient_update(id, &input)).await {
        Ok(ingredient) => {
            info!(id, name = %ingredient.name, stock = ingredient.stock, "ingredient updated");
            Ok(Response::redirect(LIST))
        }
        Err(AppError::Store(StoreError::Duplicate)) => Ok(Response::html(views::edit_ingredient(
            id,
            Notice::Error(Rejection::DuplicateIngredient),
            submitted(&form),
        ))),
        Err(AppError::Store(StoreError::UnknownId)) => {
            warn!(id, "update of unknown ingredient");
            Ok(not_found(NOT_FOUND))
        }
        Err(e) => Err(e),
    }
}
