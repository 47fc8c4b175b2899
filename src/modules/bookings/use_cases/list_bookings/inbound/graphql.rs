use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::bookings::core::booking::BookingRecord;
use crate::modules::bookings::core::view::BookingView;
use crate::modules::bookings::core::view_params::{ViewParams, clamp_page_number};
use crate::modules::bookings::use_cases::list_bookings::query::ListBookingsQuery;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlBooking {
    pub id: i64,
    pub booking_id: String,
    pub worker_id: Option<String>,
    pub user_id: Option<String>,
    pub status: i64,
    pub status_label: String,
    pub payment_status: i64,
    pub booking_time: i64,
    pub created_at: i64,
    pub contact_number: Option<String>,
    pub work_location: Option<String>,
    pub description: Option<String>,
    pub worker_name: Option<String>,
    pub worker_mobile: Option<String>,
    pub customer_name: Option<String>,
    pub customer_mobile: Option<String>,
}

impl From<BookingRecord> for GqlBooking {
    fn from(r: BookingRecord) -> Self {
        Self {
            id: r.id,
            booking_id: r.booking_id,
            worker_id: r.worker_id,
            user_id: r.user_id,
            status: r.status.code(),
            status_label: r.status.label().to_string(),
            payment_status: r.payment_status,
            booking_time: r.booking_time,
            created_at: r.created_at,
            contact_number: r.contact_number,
            work_location: r.work_location,
            description: r.description,
            worker_name: r.worker_name,
            worker_mobile: r.worker_mobile,
            customer_name: r.customer_name,
            customer_mobile: r.customer_mobile,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlBookingPage {
    pub page: Vec<GqlBooking>,
    pub total_count: u64,
    pub total_pages: u64,
    pub page_number: u64,
}

impl From<BookingView> for GqlBookingPage {
    fn from(v: BookingView) -> Self {
        Self {
            page: v.page.into_iter().map(Into::into).collect(),
            total_count: saturating_u64(v.total_count),
            total_pages: saturating_u64(v.total_pages),
            page_number: saturating_u64(v.page_number),
        }
    }
}

fn saturating_u64(count: usize) -> u64 {
    u64::try_from(count).unwrap_or(u64::MAX)
}

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn bookings(
        &self,
        context: &Context<'_>,
        status: Option<String>,
        sort: Option<String>,
        search: Option<String>,
        page_size: Option<String>,
        page: Option<i64>,
    ) -> GqlResult<GqlBookingPage> {
        let state = context.data_unchecked::<AppState>();
        let query = ListBookingsQuery {
            status,
            sort,
            search,
            page_size,
            page: None,
        };
        let params = ViewParams {
            page_number: page.map(clamp_page_number).unwrap_or(1),
            ..query.into_params(state.default_page_size)?
        };
        let view = state.list_bookings.handle(&params).await?;
        Ok(view.into())
    }
}
