pub mod catalog;
pub mod engine;
pub mod error;
pub mod gateway;
pub mod profile;
pub mod reader;
pub mod tables;
