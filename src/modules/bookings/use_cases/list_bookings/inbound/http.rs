use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Serialize;

use crate::modules::bookings::use_cases::list_bookings::handler::ApplicationError;
use crate::modules::bookings::use_cases::list_bookings::query::ListBookingsQuery;
use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
}

pub async fn handle(
    State(state): State<AppState>,
    Query(query): Query<ListBookingsQuery>,
) -> impl IntoResponse {
    let params = match query.into_params(state.default_page_size) {
        Ok(params) => params,
        Err(error) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody {
                    error: error.to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.list_bookings.handle(&params).await {
        Ok(view) => Json(view).into_response(),
        Err(ApplicationError::Feed(error)) => {
            tracing::error!(%error, "bookings feed failed");
            StatusCode::BAD_GATEWAY.into_response()
        }
    }
}
