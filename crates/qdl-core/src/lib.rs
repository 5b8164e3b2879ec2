pub mod config;
pub mod logging;

pub mod document;
pub mod error;
pub mod fetch;
pub mod job;
pub mod output;
pub mod select;
