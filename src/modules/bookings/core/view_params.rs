// Parameters of one admin bookings view.
//
// Purpose
// - Carry everything the view engine needs besides the records themselves.
// - Parse the textual form used by query strings and GraphQL arguments.
//
// Boundaries
// - No input or output. The caller owns the parameters and passes them on every recomputation.

use std::fmt;
use std::num::NonZeroUsize;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub const DEFAULT_PAGE_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParamsError {
    #[error("unknown status filter: {0}")]
    UnknownStatusFilter(String),

    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),

    #[error("invalid page size: {0}")]
    InvalidPageSize(String),

    #[error("invalid page number: {0}")]
    InvalidPageNumber(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    InProgress,
    Completed,
    Reject,
}

impl FromStr for StatusFilter {
    type Err = ParamsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "inprogress" => Ok(StatusFilter::InProgress),
            "completed" => Ok(StatusFilter::Completed),
            "reject" => Ok(StatusFilter::Reject),
            _ => Err(ParamsError::UnknownStatusFilter(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl FromStr for SortOrder {
    type Err = ParamsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            _ => Err(ParamsError::UnknownSortOrder(value.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSize {
    All,
    Limit(NonZeroUsize),
}

impl Default for PageSize {
    fn default() -> Self {
        PageSize::Limit(DEFAULT_PAGE_SIZE)
    }
}

impl FromStr for PageSize {
    type Err = ParamsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("all") {
            return Ok(PageSize::All);
        }
        trimmed
            .parse::<NonZeroUsize>()
            .map(PageSize::Limit)
            .map_err(|_| ParamsError::InvalidPageSize(value.to_string()))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::All => f.write_str("ALL"),
            PageSize::Limit(size) => write!(f, "{size}"),
        }
    }
}

/// Page numbers below 1 clamp to the first page.
pub fn parse_page_number(value: &str) -> Result<usize, ParamsError> {
    let number = value
        .trim()
        .parse::<i64>()
        .map_err(|_| ParamsError::InvalidPageNumber(value.to_string()))?;
    Ok(clamp_page_number(number))
}

pub fn clamp_page_number(number: i64) -> usize {
    usize::try_from(number.max(1)).unwrap_or(usize::MAX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewParams {
    pub status_filter: StatusFilter,
    pub sort_order: SortOrder,
    pub search_query: String,
    pub page_size: PageSize,
    pub page_number: usize,
}

impl Default for ViewParams {
    fn default() -> Self {
        Self {
            status_filter: StatusFilter::default(),
            sort_order: SortOrder::default(),
            search_query: String::new(),
            page_size: PageSize::default(),
            page_number: 1,
        }
    }
}
