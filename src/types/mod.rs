pub mod config;
pub mod person;
pub mod report;
pub mod scoring;
