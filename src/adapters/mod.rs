//! Adapter implementations for port traits and document loading
//!
//! This module contains the code that does I/O:
//!
//! - `logger/` - [`IssueLogger`](crate::core::ports::IssueLogger) sinks
//! - `documents/` - Task, solution and input discovery and parsing

pub mod documents;
pub mod logger;
