//! emotion-ai is a terminal client for a remote emotion-classification API.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`api`] defines the `/analyze` wire payloads and the HTTP call itself.
//! - [`core`] owns the emotion model, configuration, and the application
//!   state together with the action reducer that mutates it.
//! - [`ui`] renders the terminal interface and runs the event loop that turns
//!   key presses into actions and actions into background requests.
//! - [`cli`] parses arguments and routes to the interactive UI or the
//!   one-shot commands.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod cli;
pub mod core;
pub mod ui;
pub mod utils;
