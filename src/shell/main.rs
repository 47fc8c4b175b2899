use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use booking_views::modules::bookings::adapters::outbound::booking_feed_http::HttpBookingFeed;
use booking_views::modules::bookings::adapters::outbound::booking_feed_in_memory::InMemoryBookingFeed;
use booking_views::modules::bookings::use_cases::list_bookings::handler::ListBookingsHandler;
use booking_views::modules::bookings::use_cases::list_bookings::queries_port::BookingFeed;
use booking_views::shell::config::{Config, FeedSource};
use booking_views::shell::http::router;
use booking_views::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = Config::from_env()?;

    let feed: Arc<dyn BookingFeed> = match &config.feed {
        FeedSource::Http { url } => {
            tracing::info!(%url, "using HTTP bookings feed");
            Arc::new(HttpBookingFeed::new(url.clone())?)
        }
        FeedSource::InMemory { seed_path: Some(path) } => {
            Arc::new(InMemoryBookingFeed::from_seed_file(path).await?)
        }
        FeedSource::InMemory { seed_path: None } => {
            tracing::warn!("no BOOKINGS_FEED_URL or BOOKINGS_SEED_PATH, serving an empty feed");
            Arc::new(InMemoryBookingFeed::new())
        }
    };

    let state = AppState {
        list_bookings: Arc::new(ListBookingsHandler::new(feed)),
        default_page_size: config.default_page_size,
    };

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("REST endpoint: http://{}/bookings", config.bind_addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", config.bind_addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
