use application::service::{CreateBookService, GetBookService, SearchBookService};
use serde_json::Value;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::Handler;
use crate::request::{BookTransformer, CreateBookRequest, GetBookRequest, SearchBookRequest};
use crate::response::BookPresenter;
use crate::route::json;

pub(super) fn add_book(handler: &Handler, req: CreateBookRequest) -> Result<Value, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .intake(req)
        .handle(|dto| handler.library().create_book(dto))
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn find_book(handler: &Handler, req: GetBookRequest) -> Result<Value, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .intake(req)
        .handle(|dto| handler.library().get_book(dto))
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn list_books(handler: &Handler) -> Result<Value, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .bypass(|| handler.library().get_all_books())
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn search(handler: &Handler, req: SearchBookRequest) -> Result<Value, ErrorStatus> {
    Controller::new(BookTransformer, BookPresenter)
        .intake(req)
        .handle(|dto| handler.library().search_books(dto))
        .map_err(ErrorStatus::from)
        .and_then(json)
}
