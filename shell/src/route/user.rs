use application::service::{CreateUserService, GetUserService};
use serde_json::Value;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::Handler;
use crate::request::{CreateUserRequest, GetUserRequest, UserTransformer};
use crate::response::UserPresenter;
use crate::route::json;

pub(super) fn add_user(handler: &Handler, req: CreateUserRequest) -> Result<Value, ErrorStatus> {
    Controller::new(UserTransformer, UserPresenter)
        .intake(req)
        .handle(|dto| handler.library().create_user(dto))
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn find_user(handler: &Handler, req: GetUserRequest) -> Result<Value, ErrorStatus> {
    Controller::new(UserTransformer, UserPresenter)
        .intake(req)
        .handle(|dto| handler.library().get_user(dto))
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn list_users(handler: &Handler) -> Result<Value, ErrorStatus> {
    Controller::new(UserTransformer, UserPresenter)
        .bypass(|| handler.library().get_all_users())
        .map_err(ErrorStatus::from)
        .and_then(json)
}
