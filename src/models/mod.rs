pub mod break_time;
pub mod duration;
pub mod identity;
pub mod page;
pub mod session;
pub mod task;
pub mod user;
