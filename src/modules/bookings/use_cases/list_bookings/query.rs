// Textual form of a bookings view request, as received by the inbound adapters.
//
// Purpose
// - Turn optional query string or GraphQL arguments into validated ViewParams.
//
// Defaults
// - status all, newest first, no search, the configured page size, first page.

use crate::modules::bookings::core::view_params::{
    PageSize, ParamsError, SortOrder, StatusFilter, ViewParams, parse_page_number,
};
use serde::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListBookingsQuery {
    pub status: Option<String>,
    pub sort: Option<String>,
    pub search: Option<String>,
    pub page_size: Option<String>,
    pub page: Option<String>,
}

impl ListBookingsQuery {
    pub fn into_params(self, default_page_size: PageSize) -> Result<ViewParams, ParamsError> {
        Ok(ViewParams {
            status_filter: self
                .status
                .as_deref()
                .map(str::parse::<StatusFilter>)
                .transpose()?
                .unwrap_or_default(),
            sort_order: self
                .sort
                .as_deref()
                .map(str::parse::<SortOrder>)
                .transpose()?
                .unwrap_or_default(),
            search_query: self.search.unwrap_or_default(),
            page_size: self
                .page_size
                .as_deref()
                .map(str::parse::<PageSize>)
                .transpose()?
                .unwrap_or(default_page_size),
            page_number: self
                .page
                .as_deref()
                .map(parse_page_number)
                .transpose()?
                .unwrap_or(1),
        })
    }
}
