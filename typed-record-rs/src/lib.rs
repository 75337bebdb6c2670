//! # Typed Record Runtime
//!
//! Shared machinery behind every request, result and configuration shape of
//! the service model. A record is declared once with [`record!`] and gets:
//!
//! - Optional fields with getters, setters and fluent `with_*` builders
//! - A field-descriptor table describing names, wire names, kinds and constraints
//! - A deterministic `{name: value,...}` rendering through `Display`
//! - Structural equality and a platform-stable hash
//! - Serde support where absent fields are omitted from the JSON body
//! - Opt-in constraint validation with dotted field paths
//!
//! Enumerated strings are declared with [`string_enum!`].

mod describe;
mod errors;
mod field;
mod hash;
mod map;
mod record;
mod timestamp;
mod validate;
mod wire;
pub mod enums;
pub mod macros;
pub mod validators;

pub use describe::{Describe, Describer};
pub use errors::{CompositeError, RecordError, RecordResult, ValidationError, ValidationResult};
pub use field::{Constraints, FieldDescriptor, FieldKind, FieldType};
pub use hash::{string_hash, HashAccumulator, StructuralHash};
pub use map::insert_unique;
pub use record::Record;
pub use timestamp::Timestamp;
pub use validate::validate_fields;
pub use wire::{non_finite_paths, wire_value};

// Used from macro expansions in downstream crates.
#[doc(hidden)]
pub use once_cell;
#[doc(hidden)]
pub use paste;
#[doc(hidden)]
pub use serde_json;

/// Re-export commonly used items for convenience
pub mod prelude {
    pub use crate::{
        record, string_enum, Constraints, Describe, FieldDescriptor, FieldKind, FieldType,
        Record, RecordError, StructuralHash, Timestamp, ValidationError,
    };
}

/// Version of the record runtime
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Multiplier used when folding field hashes together.
pub const HASH_PRIME: i32 = 31;
