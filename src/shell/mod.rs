// Composition root for the quiz bounded context.
//
// Responsibilities:
// - Read config from environment.
// - Instantiate the in-memory progress store and seed it.
// - Wire the store into use case handlers and the credential resolver.
// - Expose the HTTP router with the authentication gate on protected routes.

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod state;
