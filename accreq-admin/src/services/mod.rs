pub mod email;
pub mod store;
pub mod templates;
