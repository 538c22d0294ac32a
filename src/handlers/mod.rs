//! HTTP handlers

pub mod health;
pub mod predict;
pub mod recommend;
pub mod predictions;
pub mod reports;
pub mod dashboard;
