//! # Service Model
//!
//! Request, result and nested configuration records of the control-plane
//! API, grouped by resource. Every type is declared with
//! [`typed_record_rs::record!`] and shares its accessors, rendering,
//! equality and validation behavior.

pub mod algorithm;
pub mod batch_inference;
pub mod campaign;
pub mod constraints;
pub mod dataset;
pub mod event_tracker;
pub mod filter;
pub mod recipe;
pub mod solution;

pub use algorithm::*;
pub use batch_inference::*;
pub use campaign::*;
pub use dataset::*;
pub use event_tracker::*;
pub use filter::*;
pub use recipe::*;
pub use solution::*;

typed_record_rs::record! {
    /// Output of operations that return no data, such as the `Delete*` calls
    pub struct EmptyResult {}
}
