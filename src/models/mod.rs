pub mod catalog;
pub mod entry;
pub mod settlement;
pub mod summary;
