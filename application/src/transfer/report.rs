#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct ReportDto {
    pub total_books: usize,
    pub available_copies: u64,
    pub borrowed_copies: u64,
    pub total_users: usize,
    pub overdue_count: usize,
    pub total_transactions: usize,
}
