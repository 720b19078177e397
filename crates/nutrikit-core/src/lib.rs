// ABOUTME: Core types and models for the Nutrikit nutrition analytics engine
// ABOUTME: Foundation crate with error handling and the domain data model
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Nutrikit Contributors

#![deny(unsafe_code)]

//! # Nutrikit Core
//!
//! Foundation crate providing shared types for the Nutrikit nutrition
//! analytics engine. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and the
//!   `AppResult` alias
//! - **models**: Domain data models (body profile, meal entries, daily data
//!   points, dense time series)

/// Unified error handling system with standard error codes
pub mod errors;

/// Core data models (`BodyProfile`, `MealEntry`, `DailyDataPoint`, `TimeSeries`)
pub mod models;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{
    ActivityLevel, BodyProfile, DailyDataPoint, GoalType, MealEntry, MealType, Metric, Sex,
    TimeSeries,
};
