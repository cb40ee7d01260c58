//! bw-domain
//!
//! Pure domain models (Category, Transaction, CategoryLimit, Notification, etc.).
//! No I/O, no CLI, no storage. Only data types, period arithmetic and ledger queries.

pub mod category;
pub mod common;
pub mod ledger;
pub mod limit;
pub mod notification;
pub mod period;
pub mod planning;
pub mod summary;
pub mod transaction;

pub use category::*;
pub use common::*;
pub use ledger::*;
pub use limit::*;
pub use notification::*;
pub use period::*;
pub use planning::*;
pub use summary::*;
pub use transaction::*;
