//! User-facing messages.
//!
//! Text is kept apart from the code that emits it: commands pick a
//! [`Message`] variant and hand it to one of the `msg_*` macros.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
