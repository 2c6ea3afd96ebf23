pub mod add;
pub mod auth;
pub mod backup;
pub mod context;
pub mod del;
pub mod edit;
pub mod eligibility;
pub mod entry;
pub mod log;
