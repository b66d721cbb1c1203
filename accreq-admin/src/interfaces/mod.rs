mod email;
mod store;

pub use email::*;
pub use store::*;
