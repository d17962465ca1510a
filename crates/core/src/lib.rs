// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ag-core: Shared library for the AfriGuard Verify client toolkit
//!
//! This crate provides the data model served by the verification API, the
//! list filters, verdict labelling, and the queue wire format used by both
//! the `agv` CLI and the queue simulator.

pub mod case;
pub mod detection;
pub mod error;
pub mod feedback;
pub mod filter;
pub mod protocol;
pub mod queue;
pub mod stats;
pub mod timestamp;
pub mod user;
pub mod verdict;

pub use case::{Case, CaseDetails, CaseStatus, MediaType};
pub use detection::{DetectionResult, HealthStatus};
pub use error::{Error, Result};
pub use feedback::{Feedback, NewFeedback, Rating};
pub use filter::{CaseFilter, DateRange, FeedbackFilter};
pub use protocol::ErrorEnvelope;
pub use queue::{QueueItem, QueueStatus};
pub use stats::{ChartPoint, DashboardStats};
pub use user::{LoginRequest, LoginResponse, User};
