//! HTTP request handlers for API endpoints.

pub mod add;
pub mod fallback;
pub mod resolve;

pub use add::add_handler;
pub use fallback::no_handler;
pub use resolve::resolve_handler;
