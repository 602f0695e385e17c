mod expense;
mod filter;
mod ledger;
mod money;
mod notification;
mod theme;

pub use expense::*;
pub use filter::*;
pub use ledger::*;
pub use money::*;
pub use notification::*;
pub use theme::*;
