//! Core domain logic for problint
//!
//! This module contains the rule engine with no I/O dependencies.
//! All output goes through the [`ports::IssueLogger`] trait.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Issue, TestResult, SharedData, items)
//! - `services/` - Rule registry, per-item runner, execution driver
//! - `ports/` - Trait definitions for output sinks

pub mod models;
pub mod ports;
pub mod services;
