use axum::{Extension, Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::bookings::use_cases::list_bookings::inbound::http as list_http;
use crate::shell::graphql::{self, AppSchema};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema: AppSchema = graphql::schema(state.clone());
    Router::new()
        .route("/bookings", get(list_http::handle))
        .route("/gql", get(graphql::graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
