use crate::modules::bookings::core::view_params::PageSize;
use crate::modules::bookings::use_cases::list_bookings::handler::ListBookingsHandler;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub list_bookings: Arc<ListBookingsHandler>,
    pub default_page_size: PageSize,
}
