pub mod account;
pub mod vocation;

pub use account::PostgresAccountRepository;
pub use vocation::PostgresVocationRepository;
