pub mod error;
mod notifier;
mod service;

pub use error::*;
pub use notifier::*;
pub use service::*;
