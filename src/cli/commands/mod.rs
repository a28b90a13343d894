pub mod add;
pub mod backup;
pub mod catalog;
pub mod config;
pub mod db;
pub mod dues;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod settle;
pub mod summary;
