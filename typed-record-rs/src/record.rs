//! The record trait
//!
//! Implemented by [`record!`](crate::record) for every declared shape. Typed
//! accessors are generated per field; the methods here work by field name
//! through the descriptor table, converting one field at a time to or from
//! JSON.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::errors::{RecordError, RecordResult, ValidationError, ValidationResult};
use crate::field::FieldDescriptor;
use crate::hash::StructuralHash;
use crate::validate::validate_fields;
use crate::wire::{non_finite_paths, wire_value};

/// A typed data record with optional fields
pub trait Record:
    Default + Clone + PartialEq + fmt::Debug + fmt::Display + Serialize + DeserializeOwned + StructuralHash
{
    /// Name of the record type
    const TYPE_NAME: &'static str;

    /// Field descriptors in declaration order
    fn fields() -> &'static [FieldDescriptor];

    /// Look up a descriptor by Rust or wire name
    fn descriptor(name: &str) -> Option<&'static FieldDescriptor> {
        Self::fields().iter().find(|d| d.matches(name))
    }

    /// Read a field as JSON; `Ok(None)` when it is absent
    fn get_field(&self, name: &str) -> RecordResult<Option<Value>> {
        let descriptor = Self::descriptor(name).ok_or_else(|| unknown::<Self>(name))?;
        self.read_field(descriptor.name)
    }

    /// Replace a field from its JSON form; `Value::Null` clears it
    ///
    /// Only the named field changes. A value that does not decode as the
    /// field's type leaves the record untouched.
    fn set_field(&mut self, name: &str, value: Value) -> RecordResult<()> {
        let descriptor = Self::descriptor(name).ok_or_else(|| unknown::<Self>(name))?;
        let value = if value.is_null() { None } else { Some(value) };
        self.write_field(descriptor.name, value)
    }

    /// Make a field absent
    fn clear_field(&mut self, name: &str) -> RecordResult<()> {
        self.set_field(name, Value::Null)
    }

    /// Wire names of the fields that are currently present
    fn present_fields(&self) -> Vec<&'static str> {
        Self::fields()
            .iter()
            .filter(|d| self.has_field(d.name))
            .map(|d| d.wire_name)
            .collect()
    }

    /// Check every present field against its declared constraints
    ///
    /// Non-finite doubles are reported alongside constraint violations.
    fn validate(&self) -> ValidationResult<()> {
        let value = serde_json::to_value(self).map_err(|e| {
            ValidationError::InvalidType(format!("{} is not serializable: {}", Self::TYPE_NAME, e))
        })?;

        let mut errors: Vec<ValidationError> = non_finite_paths(&value, "")
            .into_iter()
            .map(|path| ValidationError::InvalidType(format!("{}: non-finite number", path)))
            .collect();
        if let Err(e) = validate_fields(Self::TYPE_NAME, Self::fields(), &value, None) {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::composite_at(errors, Self::TYPE_NAME))
        }
    }

    /// Consume the record, returning it only if it validates
    fn validated(self) -> Result<Self, ValidationError> {
        self.validate()?;
        Ok(self)
    }

    /// Equality over field values, same as `==`
    fn structural_equals(&self, other: &Self) -> bool {
        self == other
    }

    /// `{field: value,...}` rendering of the present fields
    fn describe(&self) -> String {
        self.to_string()
    }

    /// JSON body of the record; fails on a NaN or infinite double
    fn to_json(&self) -> RecordResult<String> {
        let value = wire_value(Self::TYPE_NAME, "", self)?;
        Ok(serde_json::to_string(&value)?)
    }

    fn from_json(json: &str) -> RecordResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[doc(hidden)]
    fn read_field(&self, field: &str) -> RecordResult<Option<Value>>;

    #[doc(hidden)]
    fn write_field(&mut self, field: &str, value: Option<Value>) -> RecordResult<()>;

    #[doc(hidden)]
    fn has_field(&self, field: &str) -> bool;
}

fn unknown<R: Record>(name: &str) -> RecordError {
    RecordError::UnknownField {
        record: R::TYPE_NAME,
        field: name.to_string(),
    }
}
