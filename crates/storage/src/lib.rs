#![forbid(unsafe_code)]

pub mod history_blob;
pub mod repository;
pub mod slots;
pub mod sqlite;
