//! Payroll calculation and payrun orchestration engine.
//!
//! This crate converts raw time entries into billable hours, applies
//! progressive tax and superannuation rules, aggregates the results into a
//! payrun, and drives the partially-failable process of persisting
//! payslips, consuming timesheets, and issuing one payment transfer per
//! employee.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod gateway;
pub mod models;
pub mod payrun;
pub mod store;
