//! Runtime module - executes commands against the platform
//!
//! - `app` - the synchronous message/command loop
//! - `host` - the trait a UI shell implements

pub mod app;
pub mod host;

pub use app::App;
pub use host::Host;
