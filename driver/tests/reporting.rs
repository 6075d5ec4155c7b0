use application::service::{
    CreateBookService, CreateUserService, GetRentService, ReportService, RentService,
    ReturnService,
};
use application::transfer::{
    CreateBookDto, CreateRentDto, CreateUserDto, ReportDto, ReturnRentDto,
};
use driver::clock::LocalClock;
use driver::module::LibraryModule;
use kernel::KernelError;
use time::macros::date;

#[test]
fn report_tracks_every_mutation() -> error_stack::Result<(), KernelError> {
    let module = LibraryModule::new(LocalClock::Fixed(date!(2024 - 01 - 01)));
    assert_eq!(module.report()?, ReportDto::default());

    let dune = module.create_book(CreateBookDto {
        title: "Dune".into(),
        author: "Frank Herbert".into(),
        isbn: "9780441013593".into(),
        category: "fiction".into(),
        copies: "2".into(),
        year: "1965".into(),
    })?;
    module.create_book(CreateBookDto {
        title: "Cosmos".into(),
        author: "Carl Sagan".into(),
        isbn: "9780345539434".into(),
        category: "science".into(),
        copies: "1".into(),
        year: String::new(),
    })?;
    let ada = module.create_user(CreateUserDto {
        name: "Ada".into(),
        email: "ada@example.com".into(),
        phone: "555-0100".into(),
        kind: "faculty".into(),
    })?;

    let late = module.rent_book(CreateRentDto {
        user_id: Some(ada.id),
        book_id: Some(dune.id),
        due_date: "2020-01-01".into(),
    })?;
    module.rent_book(CreateRentDto {
        user_id: Some(ada.id),
        book_id: Some(dune.id),
        due_date: "2099-01-01".into(),
    })?;

    assert_eq!(
        module.report()?,
        ReportDto {
            total_books: 2,
            available_copies: 1,
            borrowed_copies: 2,
            total_users: 1,
            overdue_count: 1,
            total_transactions: 2,
        }
    );

    module.return_book(ReturnRentDto { id: late.id })?;
    let report = module.report()?;
    assert_eq!(report.overdue_count, 0);
    assert_eq!(report.available_copies, 2);
    assert_eq!(report.borrowed_copies, 1);
    assert_eq!(report.total_transactions, 2);

    let history = module
        .get_rent_history()?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    let labels = history
        .iter()
        .map(|row| row.status.as_str())
        .collect::<Vec<_>>();
    assert_eq!(labels, vec!["Returned", "Not Returned"]);
    assert_eq!(history[0].id, late.id);
    Ok(())
}
