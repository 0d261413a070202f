//! Request-level helpers shared by the controllers.

pub mod link;
pub mod pagination;
