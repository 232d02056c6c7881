//! Core library for calzik, a band management tool.
//!
//! This crate holds everything but the command line:
//! - `model` entities and `state` stores for members, events, contacts,
//!   invoices, notifications, ideas and documents
//! - `availability` and `dashboard` summaries computed from the stores
//! - `invoice` amount derivation and numbering, and the `overdue` reminder rule
//! - `store` persistence and the `workspace` that saves after each change

pub mod auth;
pub mod availability;
pub mod calzik;
pub mod config;
pub mod constants;
pub mod dashboard;
pub mod date_range;
pub mod error;
pub mod invoice;
pub mod model;
pub mod overdue;
pub mod seed;
pub mod state;
pub mod store;
pub mod workspace;

pub use calzik::Calzik;
pub use error::{CalzikError, CalzikResult};
pub use workspace::{Workspace, WorkspaceSettings};
