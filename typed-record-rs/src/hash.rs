//! Structural hashing
//!
//! Hashes start at 1 and fold each field in with a multiplier of 31, so a
//! value hashes the same in every process and on every platform. All
//! arithmetic wraps on `i32` overflow.

use std::collections::BTreeMap;

use crate::HASH_PRIME;

/// Value hash consistent with structural equality
pub trait StructuralHash {
    fn structural_hash(&self) -> i32;
}

/// Polynomial hash over UTF-16 code units
pub fn string_hash(s: &str) -> i32 {
    s.encode_utf16()
        .fold(0i32, |h, unit| h.wrapping_mul(HASH_PRIME).wrapping_add(i32::from(unit)))
}

fn fold_long(value: i64) -> i32 {
    (value ^ ((value as u64) >> 32) as i64) as i32
}

impl StructuralHash for String {
    fn structural_hash(&self) -> i32 {
        string_hash(self)
    }
}

impl StructuralHash for str {
    fn structural_hash(&self) -> i32 {
        string_hash(self)
    }
}

impl StructuralHash for i32 {
    fn structural_hash(&self) -> i32 {
        *self
    }
}

impl StructuralHash for i64 {
    fn structural_hash(&self) -> i32 {
        fold_long(*self)
    }
}

impl StructuralHash for f64 {
    fn structural_hash(&self) -> i32 {
        // -0.0 == 0.0, so both must hash alike; NaN uses the canonical bits
        let bits = if *self == 0.0 {
            0
        } else if self.is_nan() {
            0x7ff8_0000_0000_0000
        } else {
            self.to_bits() as i64
        };
        fold_long(bits)
    }
}

impl StructuralHash for bool {
    fn structural_hash(&self) -> i32 {
        if *self {
            1231
        } else {
            1237
        }
    }
}

impl<T: StructuralHash> StructuralHash for Vec<T> {
    fn structural_hash(&self) -> i32 {
        self.iter().fold(1i32, |h, item| {
            h.wrapping_mul(HASH_PRIME).wrapping_add(item.structural_hash())
        })
    }
}

impl<V: StructuralHash> StructuralHash for BTreeMap<String, V> {
    fn structural_hash(&self) -> i32 {
        self.iter().fold(0i32, |h, (key, value)| {
            h.wrapping_add(key.structural_hash() ^ value.structural_hash())
        })
    }
}

/// Folds per-field hashes in declaration order
///
/// Starts at 1; every field contributes `31 * h + hash`, with an absent
/// field contributing 0.
#[derive(Debug, Clone, Copy)]
pub struct HashAccumulator {
    value: i32,
}

impl Default for HashAccumulator {
    fn default() -> Self {
        Self { value: 1 }
    }
}

impl HashAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold in one field
    pub fn field<T: StructuralHash + ?Sized>(&mut self, value: Option<&T>) -> &mut Self {
        let hash = value.map_or(0, StructuralHash::structural_hash);
        self.value = self.value.wrapping_mul(HASH_PRIME).wrapping_add(hash);
        self
    }

    pub fn finish(&self) -> i32 {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("", 0 ; "empty string")]
    #[test_case("a", 97 ; "single char")]
    #[test_case("abc", 96354 ; "three chars")]
    #[test_case("FULL", 2169487 ; "enum value")]
    fn test_string_hash(input: &str, expected: i32) {
        assert_eq!(string_hash(input), expected);
    }

    #[test]
    fn test_scalar_hashes() {
        assert_eq!(true.structural_hash(), 1231);
        assert_eq!(false.structural_hash(), 1237);
        assert_eq!(42i32.structural_hash(), 42);
        assert_eq!(1.0f64.structural_hash(), 1_072_693_248);
        assert_eq!(0.0f64.structural_hash(), (-0.0f64).structural_hash());
        assert_eq!((1i64 << 32).structural_hash(), 1);
    }

    #[test]
    fn test_collection_hashes() {
        let list = vec!["a".to_string(), "b".to_string()];
        // 31 * (31 * 1 + 97) + 98
        assert_eq!(list.structural_hash(), 4066);
        assert_eq!(Vec::<String>::new().structural_hash(), 1);

        let mut map = BTreeMap::new();
        map.insert("a".to_string(), "b".to_string());
        assert_eq!(map.structural_hash(), 97 ^ 98);
    }

    #[test]
    fn test_accumulator() {
        let mut acc = HashAccumulator::new();
        acc.field(Some("x")).field::<String>(None).field(Some(&7i32));
        // ((1 * 31 + 120) * 31 + 0) * 31 + 7
        assert_eq!(acc.finish(), 145_118);
        assert_eq!(HashAccumulator::new().finish(), 1);
    }
}
