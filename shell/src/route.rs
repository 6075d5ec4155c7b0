use std::io::{BufRead, Write};

use error_stack::{Report, ResultExt};
use kernel::KernelError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ErrorStatus;
use crate::handler::Handler;
use crate::request::{
    CreateBookRequest, CreateUserRequest, GetBookRequest, GetRentRequest, GetUserRequest,
    IssueRequest, OverdueRequest, ReturnRequest, SearchBookRequest,
};
use crate::response::Reply;

mod book;
mod rent;
mod report;
mod user;

/// One console line, tagged by `op`.
#[derive(Debug, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    AddBook(CreateBookRequest),
    FindBook(GetBookRequest),
    ListBooks,
    Search(SearchBookRequest),
    AddUser(CreateUserRequest),
    FindUser(GetUserRequest),
    ListUsers,
    IssueBook(IssueRequest),
    ReturnBook(ReturnRequest),
    FindRent(GetRentRequest),
    ListActive,
    ListOverdue(OverdueRequest),
    History,
    Report,
}

/// Answers every line of `input` with one reply line on `output`.
///
/// Only I/O failures end the loop; a bad line gets an error reply.
pub fn serve<R: BufRead, W: Write>(
    handler: &Handler,
    mut input: R,
    mut output: W,
) -> error_stack::Result<(), KernelError> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to read input")?;
        if read == 0 {
            return Ok(());
        }
        let reply = match std::str::from_utf8(&buf) {
            Ok(line) if line.trim().is_empty() => continue,
            Ok(line) => dispatch(handler, line),
            Err(error) => {
                let report = Report::new(error)
                    .change_context(KernelError::Validation)
                    .attach_printable("line is not valid UTF-8");
                Reply::Error(ErrorStatus::from(report).into_response())
            }
        };
        serde_json::to_writer(&mut output, &reply)
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to write reply")?;
        writeln!(output)
            .and_then(|_| output.flush())
            .change_context_lazy(|| KernelError::Internal)
            .attach_printable_lazy(|| "Failed to write reply")?;
    }
}

/// Parses and runs one line. Failures become error replies.
pub fn dispatch(handler: &Handler, line: &str) -> Reply {
    let routed = serde_json::from_str::<Command>(line)
        .map_err(|error| {
            let detail = format!("line is not a valid command: {error}");
            Report::new(error)
                .change_context(KernelError::Validation)
                .attach_printable(detail)
        })
        .map_err(ErrorStatus::from)
        .and_then(|command| route(handler, command));
    match routed {
        Ok(data) => Reply::Ok { data },
        Err(status) => Reply::Error(status.into_response()),
    }
}

pub fn route(handler: &Handler, command: Command) -> Result<Value, ErrorStatus> {
    tracing::debug!(?command, "routing");
    match command {
        Command::AddBook(req) => book::add_book(handler, req),
        Command::FindBook(req) => book::find_book(handler, req),
        Command::ListBooks => book::list_books(handler),
        Command::Search(req) => book::search(handler, req),
        Command::AddUser(req) => user::add_user(handler, req),
        Command::FindUser(req) => user::find_user(handler, req),
        Command::ListUsers => user::list_users(handler),
        Command::IssueBook(req) => rent::issue_book(handler, req),
        Command::ReturnBook(req) => rent::return_book(handler, req),
        Command::FindRent(req) => rent::find_rent(handler, req),
        Command::ListActive => rent::list_active(handler),
        Command::ListOverdue(req) => rent::list_overdue(handler, req),
        Command::History => rent::history(handler),
        Command::Report => report::report(handler),
    }
}

fn json<T: Serialize>(response: T) -> Result<Value, ErrorStatus> {
    serde_json::to_value(response)
        .map_err(Report::new)
        .change_context(KernelError::Internal)
        .attach_printable("Failed to serialize reply")
        .map_err(ErrorStatus::from)
}

#[cfg(test)]
mod test {
    use driver::clock::LocalClock;
    use driver::module::LibraryModule;
    use serde_json::{json, Value};
    use time::macros::date;

    use crate::handler::Handler;
    use crate::route::{dispatch, serve};

    fn handler() -> Handler {
        Handler::new(LibraryModule::new(LocalClock::Fixed(date!(2024 - 03 - 10))))
    }

    fn send(handler: &Handler, line: Value) -> Value {
        serde_json::to_value(dispatch(handler, &line.to_string())).unwrap()
    }

    #[test]
    fn issue_and_return_over_the_console() {
        let handler = handler();
        let book = send(
            &handler,
            json!({
                "op": "add_book",
                "title": "Dune",
                "author": "Frank Herbert",
                "isbn": "9780441013593",
                "category": "Sci-Fi",
                "copies": 2,
                "year": "1965"
            }),
        );
        assert_eq!(book["status"], "ok");
        assert_eq!(book["data"]["available"], 2);
        assert_eq!(book["data"]["status"], "available");
        let book_id = book["data"]["id"].clone();

        let user = send(
            &handler,
            json!({
                "op": "add_user",
                "name": "Ann",
                "email": "ann@x.org",
                "phone": "555",
                "type": "Student"
            }),
        );
        assert_eq!(user["data"]["type"], "Student");
        let user_id = user["data"]["id"].clone();

        let rent = send(
            &handler,
            json!({"op":"issue_book","user_id":user_id,"book_id":book_id,"due_date":"2024-03-01"}),
        );
        assert_eq!(rent["status"], "ok");
        assert_eq!(rent["data"]["returned"], false);
        let rent_id = rent["data"]["id"].clone();

        let overdue = send(&handler, json!({"op":"list_overdue"}));
        assert_eq!(overdue["data"]["rows"].as_array().unwrap().len(), 1);
        let early = send(&handler, json!({"op":"list_overdue","today":"2024-02-01"}));
        assert!(early["data"]["rows"].as_array().unwrap().is_empty());

        let report = send(&handler, json!({"op":"report"}));
        assert_eq!(report["data"]["borrowed_copies"], 1);
        assert_eq!(report["data"]["overdue_count"], 1);

        let returned = send(&handler, json!({"op":"return_book","id":rent_id}));
        assert_eq!(returned["data"]["returned"], true);
        let again = send(&handler, json!({"op":"return_book","id":rent_id}));
        assert_eq!(again["status"], "error");
        assert_eq!(again["kind"], "already_returned");

        let history = send(&handler, json!({"op":"history"}));
        assert_eq!(history["data"]["rows"][0]["status"], "Returned");
        assert!(history["data"]["warnings"].as_array().unwrap().is_empty());
    }

    #[test]
    fn errors_become_replies() {
        let handler = handler();
        let garbage = serde_json::to_value(dispatch(&handler, "not json")).unwrap();
        assert_eq!(garbage["status"], "error");
        assert_eq!(garbage["kind"], "validation");

        let unknown = send(&handler, json!({"op":"delete_book"}));
        assert_eq!(unknown["kind"], "validation");

        let missing = send(
            &handler,
            json!({
                "op": "add_book",
                "title": "Dune",
                "author": "",
                "isbn": "1",
                "category": "SF",
                "copies": 1
            }),
        );
        assert_eq!(missing["kind"], "validation");

        let nobody = send(
            &handler,
            json!({"op":"find_book","id":"6f1c2a36-4b9e-4f5e-9a7e-3c1d2b4a5e6f"}),
        );
        assert_eq!(nobody["status"], "ok");
        assert!(nobody["data"].is_null());

        let ghost = send(
            &handler,
            json!({"op":"return_book","id":"6f1c2a36-4b9e-4f5e-9a7e-3c1d2b4a5e6f"}),
        );
        assert_eq!(ghost["kind"], "not_found");
    }

    #[test]
    fn parse_errors_name_the_bad_input() {
        let handler = handler();
        let unknown = send(&handler, json!({"op":"delete_book"}));
        let message = unknown["message"].as_str().unwrap();
        assert!(message.contains("unknown variant"));
        assert!(message.contains("delete_book"));

        let bad_id = send(
            &handler,
            json!({"op":"issue_book","user_id":"nobody","book_id":null,"due_date":"2099-01-01"}),
        );
        assert_eq!(bad_id["kind"], "validation");
        let message = bad_id["message"].as_str().unwrap();
        assert!(message.contains("UUID"));
        assert!(!message.contains("unknown variant"));
    }

    #[test]
    fn invalid_utf8_line_does_not_stop_the_loop() {
        let handler = handler();
        let mut input = Vec::new();
        input.extend_from_slice(b"\xff\xfe\n");
        input.extend_from_slice(b"\n");
        input.extend_from_slice(br#"{"op":"list_books"}"#);
        input.extend_from_slice(b"\n");
        let mut output = Vec::new();

        serve(&handler, input.as_slice(), &mut output).unwrap();

        let replies = String::from_utf8(output).unwrap();
        let replies = replies
            .lines()
            .map(|line| serde_json::from_str::<Value>(line).unwrap())
            .collect::<Vec<_>>();
        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["status"], "error");
        assert_eq!(replies[0]["kind"], "validation");
        assert_eq!(replies[1]["status"], "ok");
        assert_eq!(replies[1]["data"], json!([]));
    }
}
