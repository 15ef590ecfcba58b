// Composition root for the activities service.
//
// - Read config from the environment.
// - Instantiate the in memory activity store seeded with the catalog.
// - Wire the store into the use case handlers and expose them over HTTP and GraphQL.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
