pub mod format;
pub mod messages;
pub mod types;
pub mod validation;
