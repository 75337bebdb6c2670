//! Human-readable rendering of records
//!
//! Produces `{field1: value1,field2: value2}` with only the fields that are
//! present, in declaration order. Diagnostics only; this is not a wire format.

use std::collections::BTreeMap;
use std::fmt;

/// Renders a field value inside a record description
pub trait Describe {
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Describe for String {
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Describe for str {
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl Describe for i32 {
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Describe for i64 {
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Describe for bool {
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

impl Describe for f64 {
    // Debug keeps the fractional part: 1.0 rather than 1
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl<T: Describe> Describe for Vec<T> {
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (idx, item) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            item.describe_to(f)?;
        }
        f.write_str("]")
    }
}

impl<V: Describe> Describe for BTreeMap<String, V> {
    fn describe_to(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (idx, (key, value)) in self.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}=", key)?;
            value.describe_to(f)?;
        }
        f.write_str("}")
    }
}

/// Writes the braces and separators of a record description
pub struct Describer<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    started: bool,
}

impl<'a, 'b> Describer<'a, 'b> {
    pub fn new(f: &'a mut fmt::Formatter<'b>) -> Self {
        Self { f, started: false }
    }

    /// Write `name: value` if the field is present
    pub fn field<T: Describe + ?Sized>(&mut self, name: &str, value: Option<&T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };

        self.f.write_str(if self.started { "," } else { "{" })?;
        self.started = true;

        write!(self.f, "{}: ", name)?;
        value.describe_to(self.f)
    }

    pub fn finish(self) -> fmt::Result {
        if !self.started {
            self.f.write_str("{")?;
        }
        self.f.write_str("}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Probe {
        name: Option<String>,
        tags: Option<Vec<String>>,
        weights: Option<BTreeMap<String, f64>>,
    }

    impl fmt::Display for Probe {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            let mut out = Describer::new(f);
            out.field("name", self.name.as_ref())?;
            out.field("tags", self.tags.as_ref())?;
            out.field("weights", self.weights.as_ref())?;
            out.finish()
        }
    }

    #[test]
    fn test_only_present_fields() {
        let probe = Probe {
            name: Some("x".to_string()),
            tags: None,
            weights: None,
        };
        assert_eq!(probe.to_string(), "{name: x}");
    }

    #[test]
    fn test_empty_record() {
        let probe = Probe {
            name: None,
            tags: None,
            weights: None,
        };
        assert_eq!(probe.to_string(), "{}");
    }

    #[test]
    fn test_collections() {
        let mut weights = BTreeMap::new();
        weights.insert("b".to_string(), 2.0);
        weights.insert("a".to_string(), 0.5);

        let probe = Probe {
            name: None,
            tags: Some(vec!["t1".to_string(), "t2".to_string()]),
            weights: Some(weights),
        };
        assert_eq!(probe.to_string(), "{tags: [t1, t2],weights: {a=0.5, b=2.0}}");
    }
}
