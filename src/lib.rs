//! Payslip Computation Engine
//!
//! This crate converts a monthly salary rate, attendance facts and deduction
//! inputs into a fully itemized payslip, and exposes the calculation over a
//! small HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
