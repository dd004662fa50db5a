pub mod add;
pub mod config;
pub mod del;
pub mod edit;
pub mod grid;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod stats;
pub mod status;
