pub mod add;
pub mod backup;
pub mod due;
pub mod export;
pub mod log;
pub mod settle;
pub mod summary;
