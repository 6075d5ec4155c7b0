use error_stack::{AttachmentKind, FrameKind, Report};
use kernel::KernelError;
use serde::Serialize;
use std::process::{ExitCode, Termination};

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        self.0.report()
    }
}

#[derive(Debug)]
pub struct ErrorStatus(Report<KernelError>);

impl From<Report<KernelError>> for ErrorStatus {
    fn from(e: Report<KernelError>) -> Self {
        ErrorStatus(e)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Validation,
    NotFound,
    Unavailable,
    AlreadyReturned,
    Internal,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorStatus {
    pub fn into_response(self) -> ErrorResponse {
        let kind = match self.0.current_context() {
            KernelError::Validation => ErrorKind::Validation,
            KernelError::NotFound => ErrorKind::NotFound,
            KernelError::Unavailable => ErrorKind::Unavailable,
            KernelError::AlreadyReturned => ErrorKind::AlreadyReturned,
            KernelError::Internal => {
                tracing::error!(error = ?self.0, "Unexpected error happened");
                ErrorKind::Internal
            }
        };
        ErrorResponse {
            kind,
            message: describe(&self.0),
        }
    }
}

/// Top context followed by every printable attachment, outermost first.
fn describe(report: &Report<KernelError>) -> String {
    let details = report
        .frames()
        .filter_map(|frame| match frame.kind() {
            FrameKind::Attachment(AttachmentKind::Printable(printable)) => {
                Some(printable.to_string())
            }
            _ => None,
        })
        .collect::<Vec<_>>();
    if details.is_empty() {
        report.current_context().to_string()
    } else {
        format!("{}: {}", report.current_context(), details.join("; "))
    }
}
