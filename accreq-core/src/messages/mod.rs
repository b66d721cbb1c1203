pub mod account_request_data;
pub mod account_request_update;
