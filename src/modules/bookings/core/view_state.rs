// Reducer owning the admin list's view parameters between recomputations.
//
// Purpose
// - Fold user interactions (filter, sort, search, page changes) into the next ViewParams.
//
// Rules
// - Changing the filter, the search text or the page size returns to the first page.
// - Changing the sort order keeps the current page.
// - Page navigation never goes below page 1 nor past the last known page.

use crate::modules::bookings::core::view_params::{PageSize, SortOrder, StatusFilter, ViewParams};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SetStatusFilter(StatusFilter),
    SetSortOrder(SortOrder),
    SetSearchQuery(String),
    SetPageSize(PageSize),
    GoToPage(usize),
    NextPage { total_pages: usize },
    PreviousPage,
    Reset,
}

pub fn reduce(params: ViewParams, action: ViewAction) -> ViewParams {
    match action {
        ViewAction::SetStatusFilter(status_filter) => ViewParams {
            status_filter,
            page_number: 1,
            ..params
        },
        ViewAction::SetSortOrder(sort_order) => ViewParams { sort_order, ..params },
        ViewAction::SetSearchQuery(search_query) => ViewParams {
            search_query,
            page_number: 1,
            ..params
        },
        ViewAction::SetPageSize(page_size) => ViewParams {
            page_size,
            page_number: 1,
            ..params
        },
        ViewAction::GoToPage(page_number) => ViewParams {
            page_number: page_number.max(1),
            ..params
        },
        ViewAction::NextPage { total_pages } => {
            let page_number = params.page_number.saturating_add(1).min(total_pages.max(1));
            ViewParams { page_number, ..params }
        }
        ViewAction::PreviousPage => {
            let page_number = params.page_number.saturating_sub(1).max(1);
            ViewParams { page_number, ..params }
        }
        ViewAction::Reset => ViewParams::default(),
    }
}
