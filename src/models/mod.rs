pub mod alert;
pub mod category;
pub mod limits;
pub mod transaction;

pub use alert::{Alert, Channel, NotificationState};
pub use category::Category;
pub use limits::{CategoryLimits, DEFAULT_LIMIT};
pub use transaction::{NewTransaction, Transaction, TxType};
