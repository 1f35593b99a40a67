use tracing::{debug, info};

use super::{App, AppError, not_found, path_id};
use crate::model::{FlavorInput, Rejection, fields};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;
use crate::store::StoreError;
use crate::views::{self, Notice};

const NOT_FOUND: &str = "Flavor not found";
const ADDED: &str = "Flavor added successfully";
const LIST: &str = "/list_flavors";

pub(super) async fn add_form(_req: Request, _app: App) -> Response {
    Response::html(views::add_flavor(Notice::None, ""))
}

pub(super) async fn add(req: Request, app: App) -> Result<Response, AppError> {
    let form = req.form().await;
    let submitted = form.get(fields::FLAVOR).unwrap_or_default();

    let input = match FlavorInput::from_form(&form) {
        Ok(input) => input,
        Err(rejection) => return Ok(Response::html(views::add_flavor(Notice::Error(rejection), submitted))),
    };

    match app.run(move |store| store.flavor_add(&input.name)).await {
        Ok(flavor) => {
            info!(id = flavor.id, name = %flavor.name, "flavor added");
            Ok(Response::html(views::add_flavor(Notice::Success(ADDED), "")))
        }
        Err(AppError::Store(StoreError::Duplicate)) => {
            debug!(name = submitted, "flavor already exists");
            Ok(Response::html(views::add_flavor(Notice::Error(Rejection::DuplicateFlavor), submitted)))
        }
        Err(e) => Err(e),
    }
}

pub(super) async fn list(_req: Request, app: App) -> Result<Response, AppError> {
    let flavors = app.run(|store| store.flavor_list()).await?;
    Ok(Response::html(views::list_flavors(&flavors)))
}

pub(super) async fn delete(req: Request, app: App) -> Result<Response, AppError> {
    let Some(id) = path_id(&req) else { return Ok(Response::status(Status::NotFound)) };

    match app.run(move |store| store.flavor_delete(id)).await {
        Ok(()) => {
            info!(id, "flavor deleted");
            Ok(Response::redirect(LIST))
        }
        Err(AppError::Store(StoreError::UnknownId)) => {
            debug!(id, "delete of unknown flavor");
            Ok(not_found(NOT_FOUND))
        }
        Err(e) => Err(e),
    }
}

pub(super) async fn edit_form(req: Request, app: App) -> Result<Response, AppError> {
    let Some(id) = path_id(&req) else { return Ok(Response::status(Status::NotFound)) };

    match app.run(move |store| store.flavor_get(id)).await? {
        Some(flavor) => Ok(Response::html(views::edit_flavor(id, Notice::None, &flavor.name))),
        None => Ok(not_found(NOT_FOUND)),
    }
}

pub(super) async fn update(req: Request, app: App) -> Result<Response, AppError> {
    let Some(id) = path_id(&req) else { return Ok(Response::status(Status::NotFound)) };
    let form = req.form().await;
    let submitted = form.get(fields::FLAVOR).unwrap_or_default();

    let input = match FlavorInput::from_form(&form) {
        Ok(input) => input,
        Err(rejection) => return Ok(Response::html(views::edit_flavor(id, Notice::Error(rejection), submitted))),
    };

    match app.run(move |store| store.flavor_rename(id, &input.name)).await {
        Ok(flavor) => {
            info!(id, name = %flavor.name, "flavor renamed");
            Ok(Response::redirect(LIST))
        }
        Err(AppError::Store(StoreError::Duplicate)) => Ok(Response::html(views::edit_flavor(
            id,
            Notice::Error(Rejection::DuplicateFlavor),
            submitted,
        ))),
        Err(AppError::Store(StoreError::UnknownId)) => Ok(not_found(NOT_FOUND)),
        Err(e) => Err(e),
    }
}
