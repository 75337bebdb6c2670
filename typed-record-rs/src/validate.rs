//! Descriptor-driven validation
//!
//! Walks a record's JSON form against its descriptor table. Absent and null
//! members are skipped; every violation found is reported, not just the first.

use serde_json::Value;

use crate::errors::{ValidationError, ValidationResult};
use crate::field::{Constraints, FieldDescriptor, FieldKind};
use crate::validators::{self, run_all};

/// Validate the JSON form of a record against its field descriptors
///
/// `path` is the dotted location of the record inside its parent, if any.
pub fn validate_fields(
    type_name: &str,
    fields: &[FieldDescriptor],
    value: &Value,
    path: Option<&str>,
) -> ValidationResult<()> {
    let Value::Object(obj) = value else {
        return Err(ValidationError::InvalidType(format!(
            "{}: expected object, got {}",
            path.unwrap_or(type_name),
            json_type(value)
        )));
    };

    let mut errors = Vec::new();

    for descriptor in fields {
        let member = match obj.get(descriptor.wire_name) {
            None | Some(Value::Null) => continue,
            Some(member) => member,
        };

        let field_path = match path {
            Some(p) => format!("{}.{}", p, descriptor.wire_name),
            None => descriptor.wire_name.to_string(),
        };

        if let Err(err) =
            validate_value(&descriptor.kind, &descriptor.constraints, member, &field_path)
        {
            errors.push(err);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::composite_at(errors, path.unwrap_or(type_name)))
    }
}

fn validate_value(
    kind: &FieldKind,
    constraints: &Constraints,
    value: &Value,
    path: &str,
) -> ValidationResult<()> {
    match (kind, value) {
        (FieldKind::String, Value::String(s)) => validate_string(s, constraints, path),
        (FieldKind::Enum(allowed), Value::String(s)) => {
            validators::one_of(s, allowed).map_err(|e| at(path, e))
        }
        (FieldKind::Integer | FieldKind::Long | FieldKind::Double, Value::Number(n)) => {
            let number = n.as_f64().unwrap_or(f64::NAN);
            validators::bounded(number, constraints.min, constraints.max).map_err(|e| at(path, e))
        }
        (FieldKind::Boolean, Value::Bool(_)) => Ok(()),
        (FieldKind::Timestamp, Value::Number(_) | Value::String(_)) => Ok(()),
        (FieldKind::List(element), Value::Array(items)) => {
            let mut errors = Vec::new();

            if let Err(e) =
                validators::item_count(items.len(), constraints.min_length, constraints.max_length)
            {
                errors.push(at(path, e));
            }

            let each = constraints.each.unwrap_or(&Constraints::NONE);
            for (idx, item) in items.iter().enumerate() {
                if item.is_null() {
                    continue;
                }
                let item_path = format!("{}[{}]", path, idx);
                if let Err(e) = validate_value(element, each, item, &item_path) {
                    errors.push(e);
                }
            }

            finish(errors, path)
        }
        (FieldKind::Map(element), Value::Object(entries)) => {
            let mut errors = Vec::new();

            if let Err(e) = validators::item_count(
                entries.len(),
                constraints.min_length,
                constraints.max_length,
            ) {
                errors.push(at(path, e));
            }

            let each = constraints.each.unwrap_or(&Constraints::NONE);
            for (key, entry) in entries {
                if entry.is_null() {
                    continue;
                }
                let entry_path = format!("{}.{}", path, key);
                if let Err(e) = validate_value(element, each, entry, &entry_path) {
                    errors.push(e);
                }
            }

            finish(errors, path)
        }
        (FieldKind::Record { type_name, fields }, nested) => {
            validate_fields(type_name, fields, nested, Some(path))
        }
        (kind, other) => Err(ValidationError::InvalidType(format!(
            "{}: expected {}, got {}",
            path,
            kind.label(),
            json_type(other)
        ))),
    }
}

fn validate_string(s: &str, constraints: &Constraints, path: &str) -> ValidationResult<()> {
    let min = |s: &str| match constraints.min_length {
        Some(n) => validators::min_length(s, n),
        None => Ok(()),
    };
    let max = |s: &str| match constraints.max_length {
        Some(n) => validators::max_length(s, n),
        None => Ok(()),
    };
    let pattern = |s: &str| match constraints.pattern {
        Some(p) => validators::matches_pattern(s, p),
        None => Ok(()),
    };

    let checks: [&dyn Fn(&str) -> ValidationResult<()>; 3] = [&min, &max, &pattern];
    let errors = run_all(s, &checks)
        .into_iter()
        .map(|e| at(path, e))
        .collect();

    finish(errors, path)
}

fn finish(errors: Vec<ValidationError>, path: &str) -> ValidationResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::composite_at(errors, path))
    }
}

// Prefix a leaf error with the field path it was found at
fn at(path: &str, err: ValidationError) -> ValidationError {
    match err {
        ValidationError::TooLong(m) => ValidationError::TooLong(format!("{}: {}", path, m)),
        ValidationError::TooShort(m) => ValidationError::TooShort(format!("{}: {}", path, m)),
        ValidationError::OutOfRange(m) => ValidationError::OutOfRange(format!("{}: {}", path, m)),
        ValidationError::PatternMismatch(m) => {
            ValidationError::PatternMismatch(format!("{}: {}", path, m))
        }
        ValidationError::NotAllowed(m) => ValidationError::NotAllowed(format!("{}: {}", path, m)),
        ValidationError::InvalidType(m) => {
            ValidationError::InvalidType(format!("{}: {}", path, m))
        }
        ValidationError::InvalidPattern(m) => {
            ValidationError::InvalidPattern(format!("{}: {}", path, m))
        }
        composite @ ValidationError::Composite(_) => composite,
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
