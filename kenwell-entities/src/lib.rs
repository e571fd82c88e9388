pub mod event;
pub mod id;
pub mod session;
pub mod time;
pub mod user;

#[cfg(feature = "builders")]
pub mod builders;
