// src/models/page.rs

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Fixed number of items per page for every listing.
pub const PAGE_SIZE: i64 = 10;

/// Query parameters for paged listings.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    /// Zero-based page number (default: 0).
    pub page: Option<i64>,
}

impl PageParams {
    pub fn number(&self) -> Result<i64, AppError> {
        match self.page.unwrap_or(0) {
            n if n < 0 => Err(AppError::BadRequest(
                "Page index must not be less than zero".to_string(),
            )),
            n => Ok(n),
        }
    }
}

/// A bounded slice of an ordered result set.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub number: i64,
    pub size: i64,
    pub total_elements: i64,
    pub total_pages: i64,
    pub first: bool,
    pub last: bool,
    pub empty: bool,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, number: i64, total_elements: i64) -> Self {
        let total_pages = (total_elements + PAGE_SIZE - 1) / PAGE_SIZE;
        Self {
            empty: content.is_empty(),
            content,
            number,
            size: PAGE_SIZE,
            total_elements,
            total_pages,
            first: number == 0,
            last: number.saturating_add(1) >= total_pages,
        }
    }

    /// Row offset of page `number`. Pages past `i64::MAX` rows clamp there
    /// and simply come back empty.
    pub fn offset(number: i64) -> i64 {
        number.saturating_mul(PAGE_SIZE)
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            content: self.content.into_iter().map(f).collect(),
            number: self.number,
            size: self.size,
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            first: self.first,
            last: self.last,
            empty: self.empty,
        }
    }
}
