pub mod analyzers;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod records;
pub mod season;
