pub mod chart;
pub mod config;
pub mod document;
pub mod session;
