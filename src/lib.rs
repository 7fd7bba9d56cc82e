//! Staff ledger: attendance, salary and finance reporting core.
//!
//! This crate reconstructs employee attendance from stored sick and vacation
//! exceptions, applies pro-rata sick-day salary deductions, converts amounts
//! between USD, IDR and SEK, and rolls up company income and expenses per
//! month in a chosen display currency.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod source;
