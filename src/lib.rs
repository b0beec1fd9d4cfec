//! Work-status analytics and reporting for construction projects.
//!
//! Daily work entries, project/personnel/status master data, five analytic
//! report calculators and generic filtered listings, with CSV, JSON and
//! Excel export.

pub mod commands;
pub mod db;
pub mod libs;
