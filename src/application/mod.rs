pub mod import;
pub mod query;
pub mod search;
pub mod trade;
