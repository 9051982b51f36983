mod accounts;
mod error;
mod service;

pub use accounts::*;
pub use error::*;
pub use service::*;
