use application::service::{GetRentService, RentService, ReturnService};
use kernel::interface::clock::{Clock, DependOnClock};
use serde_json::Value;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::Handler;
use crate::request::{GetRentRequest, IssueRequest, OverdueRequest, RentTransformer, ReturnRequest};
use crate::response::RentPresenter;
use crate::route::json;

pub(super) fn issue_book(handler: &Handler, req: IssueRequest) -> Result<Value, ErrorStatus> {
    Controller::new(RentTransformer, RentPresenter)
        .intake(req)
        .handle(|dto| handler.library().rent_book(dto))
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn return_book(handler: &Handler, req: ReturnRequest) -> Result<Value, ErrorStatus> {
    Controller::new(RentTransformer, RentPresenter)
        .intake(req)
        .handle(|dto| handler.library().return_book(dto))
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn find_rent(handler: &Handler, req: GetRentRequest) -> Result<Value, ErrorStatus> {
    Controller::new(RentTransformer, RentPresenter)
        .intake(req)
        .handle(|dto| handler.library().get_rent(dto))
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn list_active(handler: &Handler) -> Result<Value, ErrorStatus> {
    Controller::new(RentTransformer, RentPresenter)
        .bypass(|| handler.library().get_active_rents())
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn list_overdue(handler: &Handler, req: OverdueRequest) -> Result<Value, ErrorStatus> {
    let library = handler.library();
    Controller::new(RentTransformer, RentPresenter)
        .try_intake(req)?
        .handle(|today| {
            let today = today.unwrap_or_else(|| library.clock().today());
            library.get_overdue_rents(today)
        })
        .map_err(ErrorStatus::from)
        .and_then(json)
}

pub(super) fn history(handler: &Handler) -> Result<Value, ErrorStatus> {
    Controller::new(RentTransformer, RentPresenter)
        .bypass(|| handler.library().get_rent_history())
        .map_err(ErrorStatus::from)
        .and_then(json)
}
