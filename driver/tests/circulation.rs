use std::thread;

use application::service::{
    CreateBookService, CreateUserService, GetBookService, GetRentService, RentService,
    ReportService, ReturnService,
};
use application::transfer::{
    BookDto, CreateBookDto, CreateRentDto, CreateUserDto, GetBookDto, GetRentDto, RentDto,
    ReturnRentDto, UserDto,
};
use driver::clock::LocalClock;
use driver::module::LibraryModule;
use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::update::{DependOnRentModifier, RentModifier};
use kernel::prelude::entity::{BookId, Rent, RentDueDate, RentId, UserId};
use kernel::KernelError;
use time::macros::date;
use uuid::Uuid;

fn module() -> LibraryModule {
    LibraryModule::new(LocalClock::Fixed(date!(2024 - 01 - 01)))
}

fn book(
    module: &LibraryModule,
    title: &str,
    copies: u32,
) -> error_stack::Result<BookDto, KernelError> {
    module.create_book(CreateBookDto {
        title: title.into(),
        author: "Frank Herbert".into(),
        isbn: "9780441013593".into(),
        category: "fiction".into(),
        copies: copies.to_string(),
        year: "1965".into(),
    })
}

fn member(module: &LibraryModule, name: &str) -> error_stack::Result<UserDto, KernelError> {
    module.create_user(CreateUserDto {
        name: name.into(),
        email: format!("{name}@example.com"),
        phone: "555-0100".into(),
        kind: "student".into(),
    })
}

fn issue(
    module: &LibraryModule,
    user: &UserDto,
    book: &BookDto,
    due_date: &str,
) -> error_stack::Result<RentDto, KernelError> {
    module.rent_book(CreateRentDto {
        user_id: Some(user.id),
        book_id: Some(book.id),
        due_date: due_date.into(),
    })
}

fn available(module: &LibraryModule, book: &BookDto) -> error_stack::Result<u32, KernelError> {
    let found = module.get_book(GetBookDto { id: book.id })?;
    Ok(found.map(|book| book.available).unwrap_or_default())
}

#[test]
fn dune_scenario() -> error_stack::Result<(), KernelError> {
    let module = module();
    let dune = book(&module, "Dune", 2)?;
    let user1 = member(&module, "ada")?;
    let user2 = member(&module, "grace")?;
    let user3 = member(&module, "linus")?;
    assert_eq!(available(&module, &dune)?, 2);

    let tx1 = issue(&module, &user1, &dune, "2099-01-01")?;
    assert!(!tx1.returned);
    assert_eq!(available(&module, &dune)?, 1);

    issue(&module, &user2, &dune, "2099-01-01")?;
    assert_eq!(available(&module, &dune)?, 0);

    let error = issue(&module, &user3, &dune, "2099-01-01").unwrap_err();
    assert_eq!(error.current_context(), &KernelError::Unavailable);
    assert_eq!(module.get_rent_history()?.len(), 2);

    let returned = module.return_book(ReturnRentDto { id: tx1.id })?;
    assert!(returned.returned);
    assert_eq!(available(&module, &dune)?, 1);
    let stored = module.get_rent(GetRentDto { id: tx1.id })?;
    assert_eq!(stored.map(|rent| rent.returned), Some(true));
    Ok(())
}

#[test]
fn issue_then_return_restores_availability() -> error_stack::Result<(), KernelError> {
    let module = module();
    let dune = book(&module, "Dune", 3)?;
    let ada = member(&module, "ada")?;

    let rent = issue(&module, &ada, &dune, "2099-01-01")?;
    assert_eq!(available(&module, &dune)?, 2);
    module.return_book(ReturnRentDto { id: rent.id })?;
    assert_eq!(available(&module, &dune)?, 3);
    Ok(())
}

#[test]
fn double_return_is_refused() -> error_stack::Result<(), KernelError> {
    let module = module();
    let dune = book(&module, "Dune", 1)?;
    let ada = member(&module, "ada")?;
    let rent = issue(&module, &ada, &dune, "2099-01-01")?;

    module.return_book(ReturnRentDto { id: rent.id })?;
    let error = module.return_book(ReturnRentDto { id: rent.id }).unwrap_err();
    assert_eq!(error.current_context(), &KernelError::AlreadyReturned);
    assert_eq!(available(&module, &dune)?, 1);
    Ok(())
}

#[test]
fn issue_validates_inputs_and_references() -> error_stack::Result<(), KernelError> {
    let module = module();
    let dune = book(&module, "Dune", 1)?;
    let ada = member(&module, "ada")?;

    let missing_user = module
        .rent_book(CreateRentDto {
            user_id: None,
            book_id: Some(dune.id),
            due_date: "2099-01-01".into(),
        })
        .unwrap_err();
    assert_eq!(missing_user.current_context(), &KernelError::Validation);

    for due_date in ["", "next week"] {
        let error = issue(&module, &ada, &dune, due_date).unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Validation);
    }

    let ghost_book = module
        .rent_book(CreateRentDto {
            user_id: Some(ada.id),
            book_id: Some(Uuid::new_v4()),
            due_date: "2099-01-01".into(),
        })
        .unwrap_err();
    assert_eq!(ghost_book.current_context(), &KernelError::NotFound);

    let ghost_user = module
        .rent_book(CreateRentDto {
            user_id: Some(Uuid::new_v4()),
            book_id: Some(dune.id),
            due_date: "2099-01-01".into(),
        })
        .unwrap_err();
    assert_eq!(ghost_user.current_context(), &KernelError::NotFound);

    assert_eq!(available(&module, &dune)?, 1);
    assert!(module.get_rent_history()?.is_empty());
    Ok(())
}

#[test]
fn return_unknown_rent_is_not_found() {
    let module = module();
    let error = module
        .return_book(ReturnRentDto { id: Uuid::new_v4() })
        .unwrap_err();
    assert_eq!(error.current_context(), &KernelError::NotFound);
}

#[test]
fn overdue_rent_leaves_the_list_once_returned() -> error_stack::Result<(), KernelError> {
    let module = module();
    let dune = book(&module, "Dune", 2)?;
    let ada = member(&module, "ada")?;
    let late = issue(&module, &ada, &dune, "2020-01-01")?;
    issue(&module, &ada, &dune, "2099-01-01")?;

    let today = date!(2024 - 01 - 01);
    let overdue = module
        .get_overdue_rents(today)?
        .into_iter()
        .collect::<Result<Vec<_>, _>>()?;
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].id, late.id);
    assert_eq!(overdue[0].book_title, "Dune");
    assert_eq!(overdue[0].user_name, "ada");
    assert_eq!(module.get_active_rents()?.len(), 2);

    module.return_book(ReturnRentDto { id: late.id })?;
    assert!(module.get_overdue_rents(today)?.is_empty());
    assert_eq!(module.get_active_rents()?.len(), 1);
    Ok(())
}

#[test]
fn dangling_rent_is_reported_per_row() -> error_stack::Result<(), KernelError> {
    let module = module();
    let dune = book(&module, "Dune", 1)?;
    let ada = member(&module, "ada")?;
    let kept = issue(&module, &ada, &dune, "2099-01-01")?;

    let mut con = module.database_connection().transact()?;
    let stray = Rent::new(
        RentId::new(Uuid::new_v4()),
        UserId::new(Uuid::new_v4()),
        BookId::new(Uuid::new_v4()),
        RentDueDate::new(date!(2020 - 01 - 01)),
    );
    module.rent_modifier().create(&mut con, &stray)?;
    con.commit()?;

    let active = module.get_active_rents()?;
    assert_eq!(active.len(), 2);
    assert_eq!(active[0].as_ref().map(|row| row.id).ok(), Some(kept.id));
    let error = active[1].as_ref().unwrap_err();
    assert_eq!(error.current_context(), &KernelError::NotFound);
    Ok(())
}

#[test]
fn return_skips_restock_when_book_is_gone() -> error_stack::Result<(), KernelError> {
    let module = module();
    let dune = book(&module, "Dune", 2)?;
    let ada = member(&module, "ada")?;
    issue(&module, &ada, &dune, "2099-01-01")?;
    let before = module.report()?;

    let mut con = module.database_connection().transact()?;
    let orphan = Rent::new(
        RentId::new(Uuid::new_v4()),
        UserId::new(ada.id),
        BookId::new(Uuid::new_v4()),
        RentDueDate::new(date!(2099 - 01 - 01)),
    );
    module.rent_modifier().create(&mut con, &orphan)?;
    con.commit()?;

    let returned = module.return_book(ReturnRentDto {
        id: *orphan.id().as_ref(),
    })?;
    assert!(returned.returned);

    let stored = module.get_rent(GetRentDto {
        id: *orphan.id().as_ref(),
    })?;
    assert_eq!(stored.map(|rent| rent.returned), Some(true));

    let after = module.report()?;
    assert_eq!(after.available_copies, before.available_copies);
    assert_eq!(after.borrowed_copies, before.borrowed_copies);
    assert_eq!(available(&module, &dune)?, 1);
    Ok(())
}

#[test]
fn concurrent_issues_never_oversell() -> error_stack::Result<(), KernelError> {
    let module = module();
    let dune = book(&module, "Dune", 3)?;
    let ada = member(&module, "ada")?;

    let workers = (0..10)
        .map(|_| {
            let module = module.clone();
            let ada = ada.clone();
            let dune = dune.clone();
            thread::spawn(move || issue(&module, &ada, &dune, "2099-01-01").is_ok())
        })
        .collect::<Vec<_>>();
    let issued = workers
        .into_iter()
        .map(|worker| worker.join().expect("worker panicked"))
        .filter(|ok| *ok)
        .count();

    assert_eq!(issued, 3);
    assert_eq!(available(&module, &dune)?, 0);
    Ok(())
}
