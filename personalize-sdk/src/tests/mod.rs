//! Unit tests for the Personalize SDK
//!
//! This module contains tests for the model, the client and its supporting
//! components.

pub mod model_tests;
