//! Core library for calorie
//!
//! This crate implements the **Functional Core** of the calorie application,
//! following the Functional Core - Imperative Shell architectural pattern.
//!
//! # Architecture Overview
//!
//! The calorie project uses a two-crate architecture to enforce separation of concerns:
//!
//! - **`calorie_core`** (this crate): Pure transformation functions with zero I/O
//! - **`calorie`**: HTTP access, the food store and the CLI (the Imperative Shell)
//!
//! All functions in this crate are deterministic and free of I/O, so they are
//! tested with plain fixture data.
//!
//! # Module Organization
//!
//! - [`food`]: Data model shared with the food API
//! - [`processor`]: Weight-adjusted calories, portions and display names
//! - [`view`]: Search state, category selection and the filtered food list
//! - [`queries`]: Paths and query-string parameters for each API call
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use calorie_core::processor::process_food_data;
//!
//! let processed = process_food_data(&item);
//! assert_eq!(processed.actual_portion, "330g");
//! ```

pub mod food;
pub mod processor;
pub mod queries;
pub mod view;
