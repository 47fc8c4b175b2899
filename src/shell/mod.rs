// Composition root for the bookings bounded context.
//
// Responsibilities
// - Read config from environment.
// - Pick the bookings feed implementation (HTTP backend or in memory).
// - Wire the feed into the list bookings handler and expose it over REST and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
