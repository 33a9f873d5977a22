pub mod account;
pub mod vocation;
