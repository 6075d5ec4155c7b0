use application::service::ReportService;
use serde_json::Value;

use crate::controller::Controller;
use crate::error::ErrorStatus;
use crate::handler::Handler;
use crate::response::ReportPresenter;
use crate::route::json;

pub(super) fn report(handler: &Handler) -> Result<Value, ErrorStatus> {
    Controller::new((), ReportPresenter)
        .bypass(|| handler.library().report())
        .map_err(ErrorStatus::from)
        .and_then(json)
}
