use error_stack::Report;
use serde::{Deserialize, Serialize};

use crate::KernelError;

/// Owned and shelved copies of one book. `available` never exceeds `copies`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct BookStock {
    copies: u32,
    available: u32,
}

impl BookStock {
    pub fn new(copies: impl Into<u32>) -> Self {
        let copies = copies.into();
        Self {
            copies,
            available: copies,
        }
    }

    /// Parses a copy count typed by a librarian.
    pub fn parse(copies: &str) -> error_stack::Result<Self, KernelError> {
        let copies = copies.trim().parse::<u32>().map_err(|error| {
            Report::new(error)
                .change_context(KernelError::Validation)
                .attach_printable(format!(
                    "copies must be a non-negative integer, got {copies:?}"
                ))
        })?;
        Ok(Self::new(copies))
    }

    pub fn copies(&self) -> u32 {
        self.copies
    }

    pub fn available(&self) -> u32 {
        self.available
    }

    pub fn borrowed(&self) -> u32 {
        self.copies - self.available
    }

    pub fn status(&self) -> BookStatus {
        if self.available == self.copies {
            BookStatus::Available
        } else if self.available == 0 {
            BookStatus::Borrowed
        } else {
            BookStatus::Partial
        }
    }

    pub(in crate::entity) fn take_one(&mut self) -> error_stack::Result<(), KernelError> {
        if self.available == 0 {
            return Err(Report::new(KernelError::Unavailable)
                .attach_printable(format!("all {} copies are out", self.copies)));
        }
        self.available -= 1;
        Ok(())
    }

    pub(in crate::entity) fn put_back(&mut self) -> error_stack::Result<(), KernelError> {
        if self.available >= self.copies {
            return Err(Report::new(KernelError::Internal).attach_printable(format!(
                "available copies would exceed the {} owned",
                self.copies
            )));
        }
        self.available += 1;
        Ok(())
    }
}

/// Shelf status used to narrow catalog searches.
///
/// A book without copies counts as `Available`, so every book has exactly one status.
/// It is never `Borrowed`, even though it has nothing on the shelf.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    Available,
    Borrowed,
    Partial,
}

impl BookStatus {
    pub fn parse(status: &str) -> error_stack::Result<Self, KernelError> {
        match status.trim() {
            "available" => Ok(Self::Available),
            "borrowed" => Ok(Self::Borrowed),
            "partial" => Ok(Self::Partial),
            other => Err(Report::new(KernelError::Validation)
                .attach_printable(format!("unknown book status {other:?}"))),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::entity::{BookStatus, BookStock};
    use crate::KernelError;

    #[test]
    fn parse_copies() {
        assert_eq!(BookStock::parse(" 3 ").map(|s| s.available()).ok(), Some(3));
        assert_eq!(BookStock::parse("0").map(|s| s.copies()).ok(), Some(0));

        for bad in ["", "-1", "two", "1.5"] {
            let error = BookStock::parse(bad).unwrap_err();
            assert_eq!(error.current_context(), &KernelError::Validation);
        }
    }

    #[test]
    fn take_and_put_back_stay_in_bounds() {
        let mut stock = BookStock::new(1u32);
        assert_eq!(stock.status(), BookStatus::Available);

        stock.take_one().unwrap();
        assert_eq!(stock.available(), 0);
        assert_eq!(stock.borrowed(), 1);
        assert_eq!(stock.status(), BookStatus::Borrowed);

        let error = stock.take_one().unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Unavailable);
        assert_eq!(stock.available(), 0);

        stock.put_back().unwrap();
        let error = stock.put_back().unwrap_err();
        assert_eq!(error.current_context(), &KernelError::Internal);
        assert_eq!(stock.available(), 1);
    }

    #[test]
    fn status_partitions_stock() {
        let mut stock = BookStock::new(3u32);
        stock.take_one().unwrap();
        assert_eq!(stock.status(), BookStatus::Partial);

        assert_eq!(BookStock::new(0u32).status(), BookStatus::Available);
        assert_eq!(BookStatus::parse("partial").ok(), Some(BookStatus::Partial));
        assert!(BookStatus::parse("lost").is_err());
    }
}
