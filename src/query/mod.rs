pub mod filter;
pub mod page;
