// ABOUTME: Core data models for the Nutrikit analytics engine
// ABOUTME: Re-exports BodyProfile, MealEntry, DailyDataPoint and the dense TimeSeries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

//! # Data Models
//!
//! Core data structures consumed by the analytics engine. Every model here is
//! request-scoped: constructed from caller-supplied data at the start of a
//! computation and discarded at the end. The engine holds no state across
//! calls.
//!
//! ## Design Principles
//!
//! - **Closed enumerations**: category inputs (sex, activity level, goal,
//!   metric) are closed variants, so unknown values fail at the boundary
//!   instead of being silently coerced
//! - **Gap-inclusive series**: [`TimeSeries`] is a dense, date-indexed array
//!   with explicit zero-fill, making the "gaps count as zero intake" modeling
//!   choice structural rather than incidental
//! - **Serializable**: all models support JSON serialization; derived-output
//!   field names are a compatibility surface for existing downstream clients

// Domain modules
mod nutrition;
mod profile;

// Re-export all public types for convenience
// Profile domain
pub use profile::{ActivityLevel, BodyProfile, GoalType, Sex};

// Nutrition domain
pub use nutrition::{DailyDataPoint, MealEntry, MealType, Metric, TimeSeries};
