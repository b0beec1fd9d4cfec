pub mod config;
pub mod data_storage;
pub mod dates;
pub mod entry;
pub mod export;
pub mod filter;
pub mod master;
pub mod messages;
pub mod report;
pub mod view;
