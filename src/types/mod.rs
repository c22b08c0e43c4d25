pub mod config;
pub mod funding;
pub mod scoring;
pub mod tracker;
