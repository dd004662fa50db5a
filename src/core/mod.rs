pub mod add;
pub mod del;
pub mod grid;
pub mod import;
pub mod list;
pub mod log;
pub mod pagination;
pub mod sort;
pub mod status;
pub mod validate;
