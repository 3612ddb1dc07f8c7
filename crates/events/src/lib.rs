//! Event bus for the generation console.
//!
//! - [`EventBus`] — in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`ConsoleEvent`] — the event envelope, with typed constructors for the
//!   run lifecycle and result overlay changes.

pub mod bus;

pub use bus::{ConsoleEvent, EventBus};
