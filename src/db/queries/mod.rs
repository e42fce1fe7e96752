pub mod limits;
pub mod notifications;
pub mod transactions;
