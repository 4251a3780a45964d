pub mod app;
pub mod config;
pub mod emotion;
pub mod samples;
