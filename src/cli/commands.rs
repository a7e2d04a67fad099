pub mod add;
pub mod config;
pub mod db;
pub mod del;
pub mod directory;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod show;
pub mod stats;
