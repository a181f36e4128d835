//! Command implementations.

pub mod classify;
pub mod extract;
pub mod resolve;

pub use self::classify::execute_classify;
pub use self::extract::execute_extract;
pub use self::resolve::execute_resolve;
