pub mod anomaly;
pub mod auth;
pub mod breaks;
pub mod gaps;
pub mod lifecycle;
