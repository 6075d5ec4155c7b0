use error_stack::Report;
use uuid::Uuid;

use kernel::KernelError;

/// Rejects empty and whitespace-only form input.
pub(crate) fn require_text(
    field: &'static str,
    value: String,
) -> error_stack::Result<String, KernelError> {
    if value.trim().is_empty() {
        return Err(Report::new(KernelError::Validation)
            .attach_printable(format!("`{field}` is required")));
    }
    Ok(value)
}

pub(crate) fn require_id(
    field: &'static str,
    value: Option<Uuid>,
) -> error_stack::Result<Uuid, KernelError> {
    value.ok_or_else(|| {
        Report::new(KernelError::Validation).attach_printable(format!("`{field}` is required"))
    })
}

pub(crate) fn not_found(kind: &'static str, id: &Uuid) -> Report<KernelError> {
    Report::new(KernelError::NotFound).attach_printable(format!("no {kind} with id {id}"))
}
