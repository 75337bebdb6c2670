//! Enumerated string fields
//!
//! Values the service may add later are kept in an `Unknown` variant, so a
//! response never fails to decode because of a new enum member.

/// Declares an enumerated string type
///
/// ```ignore
/// string_enum! {
///     /// How a solution version is trained
///     pub enum TrainingMode {
///         Full = "FULL",
///         Update = "UPDATE",
///     }
/// }
/// ```
#[macro_export]
macro_rules! string_enum {
    (
        $(#[$($meta:tt)*])*
        pub enum $name:ident {
            $( $(#[$($vmeta:tt)*])* $variant:ident = $value:literal ),+ $(,)?
        }
    ) => {
        $(#[$($meta)*])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $( $(#[$($vmeta)*])* $variant, )+
            /// A value this client does not recognise
            Unknown(::std::string::String),
        }

        impl $name {
            /// Every value this client recognises
            pub const VALUES: &'static [&'static str] = &[$($value),+];

            pub fn as_str(&self) -> &str {
                match self {
                    $( Self::$variant => $value, )+
                    Self::Unknown(value) => value.as_str(),
                }
            }

            pub fn values() -> &'static [&'static str] {
                Self::VALUES
            }

            pub fn is_known(&self) -> bool {
                !matches!(self, Self::Unknown(_))
            }
        }

        impl ::std::convert::From<&str> for $name {
            fn from(value: &str) -> Self {
                match value {
                    $( $value => Self::$variant, )+
                    other => Self::Unknown(other.to_string()),
                }
            }
        }

        impl ::std::convert::From<::std::string::String> for $name {
            fn from(value: ::std::string::String) -> Self {
                Self::from(value.as_str())
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::convert::Infallible;

            fn from_str(value: &str) -> ::std::result::Result<Self, Self::Err> {
                Ok(Self::from(value))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> ::std::result::Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> ::std::result::Result<Self, D::Error> {
                let value = <::std::string::String as ::serde::Deserialize>::deserialize(deserializer)?;
                Ok(Self::from(value))
            }
        }

        impl $crate::Describe for $name {
            fn describe_to(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $crate::StructuralHash for $name {
            fn structural_hash(&self) -> i32 {
                $crate::string_hash(self.as_str())
            }
        }

        impl $crate::FieldType for $name {
            fn kind() -> $crate::FieldKind {
                $crate::FieldKind::Enum(Self::VALUES)
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::prelude::*;
    use test_case::test_case;

    string_enum! {
        /// Probe enumeration
        pub enum Mode {
            Full = "FULL",
            Update = "UPDATE",
        }
    }

    #[test_case("FULL", Mode::Full ; "full")]
    #[test_case("UPDATE", Mode::Update ; "update")]
    #[test_case("PARTIAL", Mode::Unknown("PARTIAL".to_string()) ; "unknown value kept")]
    fn test_from_str(input: &str, expected: Mode) {
        let mode: Mode = input.parse().unwrap();
        assert_eq!(mode, expected);
        assert_eq!(mode.as_str(), input);
    }

    #[test]
    fn test_serde_as_plain_string() {
        assert_eq!(serde_json::to_string(&Mode::Update).unwrap(), "\"UPDATE\"");
        let mode: Mode = serde_json::from_str("\"NEW_MODE\"").unwrap();
        assert!(!mode.is_known());
        assert_eq!(mode.to_string(), "NEW_MODE");
    }

    #[test]
    fn test_hash_and_kind() {
        assert_eq!(Mode::Full.structural_hash(), 2_169_487);
        assert_eq!(Mode::values(), &["FULL", "UPDATE"]);
        assert_eq!(Mode::kind(), FieldKind::Enum(&["FULL", "UPDATE"]));
    }

    record! {
        pub struct Holder {
            mode: Mode = "trainingMode",
        }
    }

    #[test]
    fn test_enum_field_in_record() {
        let holder = Holder::new().with_mode("FULL");
        assert_eq!(holder.mode(), Some(&Mode::Full));
        assert_eq!(holder.describe(), "{trainingMode: FULL}");
        assert!(Holder::new().with_mode("PARTIAL").validate().is_err());
    }
}
