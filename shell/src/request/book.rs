use application::transfer::{CreateBookDto, GetBookDto, SearchBookDto};
use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::controller::Intake;

#[derive(Debug, Deserialize)]
pub struct CreateBookRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    author: String,
    #[serde(default)]
    isbn: String,
    #[serde(default)]
    category: String,
    /// Either a JSON number or the text typed into a form.
    #[serde(default)]
    copies: Value,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
pub struct GetBookRequest {
    id: Uuid,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchBookRequest {
    query: String,
    category: Option<String>,
    status: Option<String>,
}

pub struct BookTransformer;

impl Intake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    fn emit(&self, input: CreateBookRequest) -> Self::To {
        let copies = match input.copies {
            Value::Null => String::new(),
            Value::String(text) => text,
            other => other.to_string(),
        };
        CreateBookDto {
            title: input.title,
            author: input.author,
            isbn: input.isbn,
            category: input.category,
            copies,
            year: input.year,
        }
    }
}

impl Intake<GetBookRequest> for BookTransformer {
    type To = GetBookDto;
    fn emit(&self, input: GetBookRequest) -> Self::To {
        GetBookDto { id: input.id }
    }
}

impl Intake<SearchBookRequest> for BookTransformer {
    type To = SearchBookDto;
    fn emit(&self, input: SearchBookRequest) -> Self::To {
        // A blank select box means "any".
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());
        SearchBookDto {
            query: input.query,
            category: non_blank(input.category),
            status: non_blank(input.status),
        }
    }
}
