//! Field descriptors
//!
//! Every record carries a table of [`FieldDescriptor`]s in declaration
//! order. The table drives dynamic access, validation and documentation;
//! typed accessors never consult it.

use std::collections::BTreeMap;

/// Semantic type of a field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    /// UTF-8 string
    String,
    /// 32-bit integer
    Integer,
    /// 64-bit integer
    Long,
    /// 64-bit float
    Double,
    /// Boolean flag
    Boolean,
    /// Point in time, epoch seconds on the wire
    Timestamp,
    /// Enumerated string with its known values
    Enum(&'static [&'static str]),
    /// Ordered list of elements
    List(Box<FieldKind>),
    /// String-keyed map of values
    Map(Box<FieldKind>),
    /// Nested record
    Record {
        type_name: &'static str,
        fields: &'static [FieldDescriptor],
    },
}

impl FieldKind {
    /// Short name used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            FieldKind::String => "string",
            FieldKind::Integer => "integer",
            FieldKind::Long => "long",
            FieldKind::Double => "double",
            FieldKind::Boolean => "boolean",
            FieldKind::Timestamp => "timestamp",
            FieldKind::Enum(_) => "enum",
            FieldKind::List(_) => "list",
            FieldKind::Map(_) => "map",
            FieldKind::Record { type_name, .. } => *type_name,
        }
    }
}

/// Declared constraints of a field
///
/// Lengths count characters for strings and entries for lists and maps.
/// Numeric bounds are inclusive. Patterns must match the whole value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constraints {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub pattern: Option<&'static str>,
    pub each: Option<&'static Constraints>,
}

impl Constraints {
    /// No constraints at all
    pub const NONE: Constraints = Constraints::new();

    pub const fn new() -> Self {
        Self {
            min_length: None,
            max_length: None,
            min: None,
            max: None,
            pattern: None,
            each: None,
        }
    }

    /// Inclusive length range
    pub const fn length(mut self, min: usize, max: usize) -> Self {
        self.min_length = Some(min);
        self.max_length = Some(max);
        self
    }

    pub const fn min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub const fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Inclusive numeric range
    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub const fn pattern(mut self, pattern: &'static str) -> Self {
        self.pattern = Some(pattern);
        self
    }

    /// Constraints applied to every list element or map value
    pub const fn each(mut self, each: &'static Constraints) -> Self {
        self.each = Some(each);
        self
    }

    /// True when nothing is constrained
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

impl Default for Constraints {
    fn default() -> Self {
        Self::NONE
    }
}

/// Schema entry for one field of a record
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    /// Rust identifier of the field
    pub name: &'static str,
    /// JSON member name used on the wire and by `describe`
    pub wire_name: &'static str,
    /// Semantic type
    pub kind: FieldKind,
    /// Declared constraints
    pub constraints: Constraints,
}

impl FieldDescriptor {
    pub fn new(
        name: &'static str,
        wire_name: &'static str,
        kind: FieldKind,
        constraints: Constraints,
    ) -> Self {
        Self {
            name,
            wire_name,
            kind,
            constraints,
        }
    }

    /// Whether `name` refers to this field, by Rust or wire name
    pub fn matches(&self, name: &str) -> bool {
        self.name == name || self.wire_name == name
    }
}

/// Maps a Rust field type to its [`FieldKind`]
pub trait FieldType {
    fn kind() -> FieldKind;
}

macro_rules! scalar_field_type {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl FieldType for $ty {
                fn kind() -> FieldKind {
                    FieldKind::$kind
                }
            }
        )*
    };
}

scalar_field_type! {
    String => String,
    i32 => Integer,
    i64 => Long,
    f64 => Double,
    bool => Boolean,
}

impl<T: FieldType> FieldType for Vec<T> {
    fn kind() -> FieldKind {
        FieldKind::List(Box::new(T::kind()))
    }
}

impl<V: FieldType> FieldType for BTreeMap<String, V> {
    fn kind() -> FieldKind {
        FieldKind::Map(Box::new(V::kind()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: Constraints = Constraints::new().length(1, 63).pattern("[a-z]+");
    const NAMES: Constraints = Constraints::new().max_length(10).each(&NAME);

    #[test]
    fn test_const_builders() {
        assert_eq!(NAME.min_length, Some(1));
        assert_eq!(NAME.max_length, Some(63));
        assert_eq!(NAME.pattern, Some("[a-z]+"));
        assert_eq!(NAMES.each, Some(&NAME));
        assert!(Constraints::NONE.is_empty());
        assert!(!NAME.is_empty());
    }

    #[test]
    fn test_nested_kinds() {
        assert_eq!(
            <Vec<String>>::kind(),
            FieldKind::List(Box::new(FieldKind::String))
        );
        assert_eq!(
            <BTreeMap<String, f64>>::kind(),
            FieldKind::Map(Box::new(FieldKind::Double))
        );
        assert_eq!(<Vec<Vec<i32>>>::kind().label(), "list");
    }

    #[test]
    fn test_descriptor_matching() {
        let descriptor =
            FieldDescriptor::new("campaign_arn", "campaignArn", FieldKind::String, NAME);
        assert!(descriptor.matches("campaign_arn"));
        assert!(descriptor.matches("campaignArn"));
        assert!(!descriptor.matches("CampaignArn"));
    }
}
