//! State management

pub mod dashboard;
