pub mod corpus;
pub mod format;
pub mod handlers;
pub mod render;
pub mod selector;
