//! Record declaration macro
//!
//! ```ignore
//! record! {
//!     /// Describes a campaign
//!     pub struct CampaignSummary {
//!         name: String = "name" [NAME],
//!         campaign_arn: String = "campaignArn" [ARN],
//!         status: String = "status",
//!         tags: [String] = "tags",
//!         params: {String} = "params" [PARAMETER_MAP],
//!     }
//! }
//! ```
//!
//! `field: T` declares a scalar, `field: [T]` an ordered list and
//! `field: {T}` a string-keyed map. The literal is the JSON member name and
//! the optional bracketed expression the field's [`Constraints`](crate::Constraints).
//! Every field line ends with a comma.
//!
//! The invoking crate must depend on `serde` for the generated derives.

#[macro_export]
macro_rules! record {
    (
        $(#[$($meta:tt)*])*
        pub struct $name:ident {
            $($body:tt)*
        }
    ) => {
        $crate::record!(@munch ($(#[$($meta)*])* $name) [] $($body)*);
    };

    // list field
    (@munch $header:tt [$($acc:tt)*]
        $(#[$($fmeta:tt)*])*
        $field:ident : [$elem:ty] = $wire:literal $([$($c:tt)*])?,
        $($rest:tt)*
    ) => {
        $crate::record!(@munch $header [$($acc)*
            (($(#[$($fmeta)*])*) list $field, $wire, ::std::vec::Vec<$elem>, $elem, [$($($c)*)?])
        ] $($rest)*);
    };

    // map field
    (@munch $header:tt [$($acc:tt)*]
        $(#[$($fmeta:tt)*])*
        $field:ident : {$elem:ty} = $wire:literal $([$($c:tt)*])?,
        $($rest:tt)*
    ) => {
        $crate::record!(@munch $header [$($acc)*
            (($(#[$($fmeta)*])*) map $field, $wire,
                ::std::collections::BTreeMap<::std::string::String, $elem>, $elem, [$($($c)*)?])
        ] $($rest)*);
    };

    // scalar field
    (@munch $header:tt [$($acc:tt)*]
        $(#[$($fmeta:tt)*])*
        $field:ident : $ty:ty = $wire:literal $([$($c:tt)*])?,
        $($rest:tt)*
    ) => {
        $crate::record!(@munch $header [$($acc)*
            (($(#[$($fmeta)*])*) scalar $field, $wire, $ty, $ty, [$($($c)*)?])
        ] $($rest)*);
    };

    (@munch ($(#[$($meta:tt)*])* $name:ident) [$(
        (($(#[$($fmeta:tt)*])*) $kind:ident $field:ident, $wire:literal, $ty:ty, $elem:ty, [$($c:tt)*])
    )*]) => {
        $(#[$($meta)*])*
        #[derive(Clone, Debug, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        pub struct $name {
            $(
                $(#[$($fmeta)*])*
                #[serde(rename = $wire, default, skip_serializing_if = "Option::is_none")]
                $field: ::std::option::Option<$ty>,
            )*
        }

        impl $name {
            /// Creates a record with every field absent
            pub fn new() -> Self {
                Self::default()
            }

            $( $crate::record!(@accessors $kind $name $field, $wire, $ty, $elem); )*
        }

        impl $crate::Record for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn fields() -> &'static [$crate::FieldDescriptor] {
                static FIELDS: $crate::once_cell::sync::Lazy<::std::vec::Vec<$crate::FieldDescriptor>> =
                    $crate::once_cell::sync::Lazy::new(|| {
                        ::std::vec![$(
                            $crate::FieldDescriptor::new(
                                stringify!($field),
                                $wire,
                                <$ty as $crate::FieldType>::kind(),
                                $crate::record!(@constraints $($c)*),
                            ),
                        )*]
                    });
                FIELDS.as_slice()
            }

            #[allow(unused_variables)]
            fn read_field(
                &self,
                field: &str,
            ) -> $crate::RecordResult<::std::option::Option<$crate::serde_json::Value>> {
                $(
                    if field == stringify!($field) {
                        return match self.$field.as_ref() {
                            ::std::option::Option::Some(value) => {
                                $crate::wire_value(stringify!($name), $wire, value)
                                    .map(::std::option::Option::Some)
                            }
                            ::std::option::Option::None => ::std::result::Result::Ok(::std::option::Option::None),
                        };
                    }
                )*
                ::std::result::Result::Err($crate::RecordError::UnknownField {
                    record: stringify!($name),
                    field: field.to_string(),
                })
            }

            #[allow(unused_variables)]
            fn write_field(
                &mut self,
                field: &str,
                value: ::std::option::Option<$crate::serde_json::Value>,
            ) -> $crate::RecordResult<()> {
                $(
                    if field == stringify!($field) {
                        self.$field = match value {
                            ::std::option::Option::Some(value) => ::std::option::Option::Some(
                                $crate::serde_json::from_value::<$ty>(value)?,
                            ),
                            ::std::option::Option::None => ::std::option::Option::None,
                        };
                        return ::std::result::Result::Ok(());
                    }
                )*
                ::std::result::Result::Err($crate::RecordError::UnknownField {
                    record: stringify!($name),
                    field: field.to_string(),
                })
            }

            #[allow(unused_variables)]
            fn has_field(&self, field: &str) -> bool {
                $(
                    if field == stringify!($field) {
                        return self.$field.is_some();
                    }
                )*
                false
            }
        }

        impl ::std::fmt::Display for $name {
            #[allow(unused_mut)]
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                let mut out = $crate::Describer::new(f);
                $( out.field($wire, self.$field.as_ref())?; )*
                out.finish()
            }
        }

        impl $crate::Describe for $name {
            fn describe_to(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::fmt::Display::fmt(self, f)
            }
        }

        impl $crate::StructuralHash for $name {
            #[allow(unused_mut)]
            fn structural_hash(&self) -> i32 {
                let mut acc = $crate::HashAccumulator::new();
                $( acc.field(self.$field.as_ref()); )*
                acc.finish()
            }
        }

        impl ::std::hash::Hash for $name {
            fn hash<H: ::std::hash::Hasher>(&self, state: &mut H) {
                state.write_i32($crate::StructuralHash::structural_hash(self));
            }
        }

        impl $crate::FieldType for $name {
            fn kind() -> $crate::FieldKind {
                $crate::FieldKind::Record {
                    type_name: stringify!($name),
                    fields: <$name as $crate::Record>::fields(),
                }
            }
        }
    };

    (@constraints) => {
        $crate::Constraints::NONE
    };
    (@constraints $($c:tt)+) => {
        $($c)+
    };

    (@accessors scalar $name:ident $field:ident, $wire:literal, $ty:ty, $elem:ty) => {
        $crate::paste::paste! {
            pub fn $field(&self) -> ::std::option::Option<&$ty> {
                self.$field.as_ref()
            }

            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                self.$field = value;
            }

            pub fn [<with_ $field>](mut self, value: impl ::std::convert::Into<$ty>) -> Self {
                self.$field = ::std::option::Option::Some(value.into());
                self
            }
        }
    };

    (@accessors list $name:ident $field:ident, $wire:literal, $ty:ty, $elem:ty) => {
        $crate::paste::paste! {
            pub fn $field(&self) -> ::std::option::Option<&[$elem]> {
                self.$field.as_deref()
            }

            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                self.$field = value;
            }

            /// Replaces the whole list
            pub fn [<with_ $field>]<I>(mut self, items: I) -> Self
            where
                I: ::std::iter::IntoIterator,
                I::Item: ::std::convert::Into<$elem>,
            {
                self.$field = ::std::option::Option::Some(
                    items.into_iter().map(::std::convert::Into::into).collect(),
                );
                self
            }

            /// Appends one element, starting the list if it is absent
            pub fn [<append_ $field>](mut self, item: impl ::std::convert::Into<$elem>) -> Self {
                self.$field
                    .get_or_insert_with(::std::vec::Vec::new)
                    .push(item.into());
                self
            }
        }
    };

    (@accessors map $name:ident $field:ident, $wire:literal, $ty:ty, $elem:ty) => {
        $crate::paste::paste! {
            pub fn $field(&self) -> ::std::option::Option<&$ty> {
                self.$field.as_ref()
            }

            pub fn [<set_ $field>](&mut self, value: ::std::option::Option<$ty>) {
                self.$field = value;
            }

            /// Replaces the whole map
            pub fn [<with_ $field>]<I, K, V>(mut self, entries: I) -> Self
            where
                I: ::std::iter::IntoIterator<Item = (K, V)>,
                K: ::std::convert::Into<::std::string::String>,
                V: ::std::convert::Into<$elem>,
            {
                self.$field = ::std::option::Option::Some(
                    entries
                        .into_iter()
                        .map(|(k, v)| (k.into(), v.into()))
                        .collect(),
                );
                self
            }

            /// Adds one entry; a key that is already present is rejected
            pub fn [<add_ $field _entry>](
                &mut self,
                key: impl ::std::convert::Into<::std::string::String>,
                value: impl ::std::convert::Into<$elem>,
            ) -> ::std::result::Result<&mut Self, $crate::RecordError> {
                let map = self.$field.get_or_insert_with(::std::default::Default::default);
                $crate::insert_unique(stringify!($name), $wire, map, key.into(), value.into())?;
                ::std::result::Result::Ok(self)
            }

            /// Makes the map absent
            pub fn [<clear_ $field _entries>](&mut self) -> &mut Self {
                self.$field = ::std::option::Option::None;
                self
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;
    use std::collections::BTreeMap;
    use std::hash::{Hash, Hasher};

    use chrono::TimeZone;
    use proptest::prelude::*;
    use serde_json::json;

    use crate::prelude::*;
    use crate::HashAccumulator;

    const NAME: Constraints = Constraints::new()
        .length(1, 63)
        .pattern(r"[a-zA-Z0-9][a-zA-Z0-9\-_]*");
    const VALUE: Constraints = Constraints::new().max_length(8);
    const PARAMS: Constraints = Constraints::new().max_length(3).each(&VALUE);

    record! {
        /// Nested probe
        pub struct Limits {
            max_results: i32 = "maxResults" [Constraints::new().range(1.0, 100.0)],
            weight: f64 = "weight",
        }
    }

    record! {
        /// Probe record covering every field shape
        pub struct Probe {
            /// Resource name
            name: String = "name" [NAME],
            enabled: bool = "isEnabled",
            limits: Limits = "limits",
            tags: [String] = "tags" [Constraints::new().max_length(2)],
            params: {String} = "params" [PARAMS],
        }
    }

    record! {
        pub struct Empty {}
    }

    record! {
        pub struct Stamped {
            name: String = "name",
            created: Timestamp = "createdAt",
        }
    }

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_new_record_is_empty() {
        let probe = Probe::new();
        assert!(probe.name().is_none());
        assert!(probe.tags().is_none());
        assert!(probe.present_fields().is_empty());
        assert_eq!(probe.describe(), "{}");
        assert_eq!(probe.to_json().unwrap(), "{}");
    }

    #[test]
    fn test_describe_only_present_fields() {
        let probe = Probe::new().with_name("x");
        assert_eq!(probe.describe(), "{name: x}");

        let probe = probe
            .with_enabled(true)
            .with_limits(Limits::new().with_max_results(10));
        assert_eq!(
            probe.to_string(),
            "{name: x,isEnabled: true,limits: {maxResults: 10}}"
        );
    }

    #[test]
    fn test_append_then_replace_list() {
        let probe = Probe::new().append_tags("a").append_tags("b");
        assert_eq!(probe.tags(), Some(&["a".to_string(), "b".to_string()][..]));

        let probe = probe.with_tags(vec!["c"]);
        assert_eq!(probe.tags(), Some(&["c".to_string()][..]));

        let mut probe = probe;
        probe.set_tags(None);
        assert!(probe.tags().is_none());
    }

    #[test]
    fn test_duplicate_map_key_is_rejected() {
        let mut probe = Probe::new();
        probe
            .add_params_entry("a", "1")
            .unwrap()
            .add_params_entry("b", "2")
            .unwrap();

        let err = probe.add_params_entry("a", "3").unwrap_err();
        assert!(err.is_duplicate_key());
        assert_eq!(err.to_string(), "Duplicated keys (a) are provided for Probe.params");
        assert_eq!(probe.params().and_then(|m| m.get("a")).map(String::as_str), Some("1"));

        probe.clear_params_entries();
        assert!(probe.params().is_none());
        assert!(probe.add_params_entry("a", "4").is_ok());
    }

    #[test]
    fn test_absent_differs_from_empty() {
        let absent = Probe::new();
        let empty = Probe::new().with_name("");
        assert_ne!(absent, empty);
        // "" hashes to 0, the same as an absent field
        assert_eq!(absent.structural_hash(), empty.structural_hash());
        assert_eq!(empty.describe(), "{name: }");
    }

    #[test]
    fn test_hash_recipe() {
        let probe = Probe::new().with_name("x").with_enabled(false);

        let mut acc = HashAccumulator::new();
        acc.field(Some("x"))
            .field(Some(&false))
            .field::<Limits>(None)
            .field::<Vec<String>>(None)
            .field::<BTreeMap<String, String>>(None);

        assert_eq!(probe.structural_hash(), acc.finish());
        assert_eq!(Empty::new().structural_hash(), 1);
    }

    #[test]
    fn test_wire_names_and_omission() {
        let probe = Probe::new()
            .with_enabled(true)
            .with_limits(Limits::new().with_weight(1.5));

        let value: serde_json::Value = serde_json::from_str(&probe.to_json().unwrap()).unwrap();
        assert_eq!(value, json!({"isEnabled": true, "limits": {"weight": 1.5}}));

        let back = Probe::from_json(r#"{"isEnabled":true,"limits":{"weight":1.5},"extra":1}"#).unwrap();
        assert_eq!(back, probe);
    }

    #[test]
    fn test_dynamic_access() {
        let mut probe = Probe::new();
        probe.set_field("name", json!("dyn")).unwrap();
        probe.set_field("isEnabled", json!(true)).unwrap();

        assert_eq!(probe.name().map(String::as_str), Some("dyn"));
        assert_eq!(probe.get_field("enabled").unwrap(), Some(json!(true)));
        assert_eq!(probe.present_fields(), vec!["name", "isEnabled"]);

        probe.clear_field("name").unwrap();
        assert_eq!(probe.get_field("name").unwrap(), None);

        assert!(matches!(
            probe.get_field("nope"),
            Err(RecordError::UnknownField { .. })
        ));
        assert!(matches!(
            probe.set_field("isEnabled", json!("yes")),
            Err(RecordError::Serialization(_))
        ));
    }

    #[test]
    fn test_set_field_only_touches_named_field() {
        let mut limits = Limits::new().with_weight(f64::NAN);
        assert_eq!(limits.present_fields(), vec!["weight"]);

        limits.set_field("maxResults", json!(5)).unwrap();
        assert_eq!(limits.max_results(), Some(&5));
        assert!(limits.weight().map_or(false, |w| w.is_nan()));
        assert_eq!(limits.present_fields(), vec!["maxResults", "weight"]);

        // A value of the wrong type leaves the record as it was
        assert!(limits.set_field("maxResults", json!("many")).is_err());
        assert_eq!(limits.max_results(), Some(&5));
    }

    #[test]
    fn test_non_finite_double_has_no_wire_form() {
        let probe = Probe::new()
            .with_name("ok-name")
            .with_limits(Limits::new().with_weight(f64::INFINITY));

        match probe.to_json() {
            Err(RecordError::NonFinite { record, path }) => {
                assert_eq!(record, "Probe");
                assert_eq!(path, "limits.weight");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(matches!(
            probe.get_field("limits"),
            Err(RecordError::NonFinite { .. })
        ));

        let err = probe.validate().unwrap_err();
        assert_eq!(err.count(), 1);
        assert!(err.to_string().contains("limits.weight: non-finite number"));

        let finite = Probe::new().with_limits(Limits::new().with_weight(-0.5));
        assert_eq!(finite.to_json().unwrap(), r#"{"limits":{"weight":-0.5}}"#);
    }

    #[test]
    fn test_timestamp_field_survives_round_trips() {
        let created = Timestamp::new(chrono::Utc.timestamp_nanos(1_588_291_200_123_456_789));
        let mut stamped = Stamped::new().with_created(created);

        let back = Stamped::from_json(&stamped.to_json().unwrap()).unwrap();
        assert_eq!(back, stamped);

        stamped.set_field("name", json!("x")).unwrap();
        assert_eq!(stamped.created(), Some(&created));
        assert_eq!(stamped.describe(), "{name: x,createdAt: 2020-05-01T00:00:00.123Z}");
        assert_eq!(stamped.get_field("created").unwrap(), Some(json!(1_588_291_200.123)));
    }

    #[test]
    fn test_descriptors() {
        let fields = Probe::fields();
        assert_eq!(fields.len(), 5);
        assert_eq!(fields[0].wire_name, "name");
        assert_eq!(fields[0].constraints, NAME);
        assert_eq!(fields[1].kind, FieldKind::Boolean);
        assert_eq!(fields[2].kind.label(), "Limits");
        assert_eq!(fields[3].kind, FieldKind::List(Box::new(FieldKind::String)));
        assert_eq!(Probe::descriptor("isEnabled").map(|d| d.name), Some("enabled"));
        assert!(Empty::fields().is_empty());
    }

    #[test]
    fn test_validation_paths() {
        let probe = Probe::new()
            .with_name("ok-name")
            .with_limits(Limits::new().with_max_results(0))
            .with_tags(vec!["a", "b", "c"]);

        let err = probe.clone().validated().unwrap_err();
        let messages: Vec<String> = err.leaves().iter().map(|e| e.to_string()).collect();
        assert_eq!(err.count(), 2, "{:?}", messages);
        assert!(messages.iter().any(|m| m.contains("limits.maxResults")));
        assert!(messages.iter().any(|m| m.contains("tags")));

        assert!(Probe::new().with_name("ok-name").validate().is_ok());
        assert!(Probe::new().with_name("bad name").validate().is_err());
    }

    fn arb_probe() -> impl Strategy<Value = Probe> {
        (
            proptest::option::of("[a-z]{0,6}"),
            proptest::option::of(any::<bool>()),
            proptest::option::of(proptest::collection::vec("[a-z]{1,3}", 0..3)),
            proptest::option::of(proptest::collection::btree_map("[a-z]{1,3}", "[a-z]{0,3}", 0..3)),
        )
            .prop_map(|(name, enabled, tags, params)| {
                let mut probe = Probe::new();
                probe.set_name(name);
                probe.set_enabled(enabled);
                probe.set_tags(tags);
                probe.set_params(params);
                probe
            })
    }

    proptest! {
        #[test]
        fn prop_clone_is_equal_with_equal_hash(probe in arb_probe()) {
            let copy = probe.clone();
            prop_assert!(probe.structural_equals(&copy));
            prop_assert_eq!(probe.structural_hash(), copy.structural_hash());
            prop_assert_eq!(hash_of(&probe), hash_of(&copy));
        }

        #[test]
        fn prop_json_preserves_equality(probe in arb_probe()) {
            let back = Probe::from_json(&probe.to_json().unwrap()).unwrap();
            prop_assert_eq!(&back, &probe);
            prop_assert_eq!(back.describe(), probe.describe());
        }

        #[test]
        fn prop_equal_records_hash_alike(a in arb_probe(), b in arb_probe()) {
            if a == b {
                prop_assert_eq!(a.structural_hash(), b.structural_hash());
            }
        }
    }
}
