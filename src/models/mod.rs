//! Display models for terminal output

pub mod display;
