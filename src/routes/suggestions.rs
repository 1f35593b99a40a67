use tracing::info;

use super::{App, AppError, not_found, path_id};
use crate::form::Form;
use crate::model::{SuggestionInput, fields};
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;
use crate::store::StoreError;
use crate::views::{self, Notice, SuggestionFields};

const NOT_FOUND: &str = "Suggestion not found";
const ADDED: &str = "Suggestion added successfully";

fn submitted(form: &Form) -> SuggestionFields<'_> {
    SuggestionFields {
        customer_name: form.get(fields::CUSTOMER_NAME).unwrap_or_default(),
        suggested_flavor: form.get(fields::SUGGESTED_FLAVOR).unwrap_or_default(),
        allergy_concerns: form.get(fields::ALLERGY_CONCERNS).unwrap_or_default(),
    }
}

pub(super) async fn add_form(_req: Request, _app: App) -> Response {
    Response::html(views::add_suggestion(Notice::None, SuggestionFields::default()))
}

pub(super) async fn add(req: Request, app: App) -> Result<Response, AppError> {
    let form = req.form().await;

    let input = match SuggestionInput::from_form(&form) {
        Ok(input) => input,
        Err(rejection) => {
            return Ok(Response::html(views::add_suggestion(Notice::Error(rejection), submitted(&form))));
        }
    };

    let suggestion = app.run(move |store| store.suggestion_add(&input)).await?;
    info!(id = suggestion.id, flavor = %suggestion.suggested_flavor, "suggestion added");
    Ok(Response::html(views::add_suggestion(Notice::Success(ADDED), SuggestionFields::default())))
}

pub(super) async fn list(_req: Request, app: App) -> Result<Response, AppError> {
    let suggestions = app.run(|store| store.suggestion_list()).await?;
    Ok(Response::html(views::list_suggestions(&suggestions)))
}

pub(super) async fn delete(req: Request, app: App) -> Result<Response, AppError> {
    let Some(id) = path_id(&req) else { return Ok(Response::status(Status::NotFound)) };

    match app.run(move |store| store.suggestion_delete(id)).await {
        Ok(()) => {
            info!(id, "suggestion deleted");
            Ok(Response::redirect("/list_suggestions"))
        }
        Err(AppError::Store(StoreError::UnknownId)) => Ok(not_found(NOT_FOUND)),
        Err(e) => Err(e),
    }
}
