mod account_request;
mod account_request_id;
mod account_request_status;

pub use account_request::*;
pub use account_request_id::*;
pub use account_request_status::*;
