//! # Domain Models
//!
//! Pure site types with a single dependency (`serde`): the tool catalog records, the lead
//! payload and the site configuration. No I/O, networking or heavy logic, just data and small
//! helpers.

pub mod config;
pub mod constants;
pub mod lead;
pub mod tool;
