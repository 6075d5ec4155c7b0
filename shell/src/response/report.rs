use application::transfer::ReportDto;
use serde::Serialize;

use crate::controller::Exhaust;

#[derive(Debug, Serialize)]
pub struct ReportResponse {
    total_books: usize,
    available_copies: u64,
    borrowed_copies: u64,
    total_users: usize,
    overdue_count: usize,
    total_transactions: usize,
}

pub struct ReportPresenter;

impl Exhaust<ReportDto> for ReportPresenter {
    type To = ReportResponse;
    fn emit(&self, input: ReportDto) -> Self::To {
        ReportResponse {
            total_books: input.total_books,
            available_copies: input.available_copies,
            borrowed_copies: input.borrowed_copies,
            total_users: input.total_users,
            overdue_count: input.overdue_count,
            total_transactions: input.total_transactions,
        }
    }
}
