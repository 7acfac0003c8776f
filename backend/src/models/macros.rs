/// Defines a newtype record identifier around `i64` and generates:
/// - derives (Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)
/// - `Display` and `FromStr` (so ids can be taken straight from path/query strings)
/// - `From<i64> for $name` and `From<$name> for i64`
///
/// Ids serialize transparently, so `ShipId(7)` is `7` on the wire.
///
/// Usage:
///   define_id_type!(ShipId, "ship");
#[macro_export]
macro_rules! define_id_type {
    ($name:ident, $entity:literal) => {
        #[derive(
            Debug,
            Default,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// Entity name used in error messages and log lines.
            pub const ENTITY: &'static str = $entity;

            pub fn new(value: i64) -> Self {
                $name(value)
            }

            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                ::std::write!(f, "{}", self.0)
            }
        }

        impl ::std::str::FromStr for $name {
            type Err = ::std::string::String;

            fn from_str(s: &str) -> ::std::result::Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map($name)
                    .map_err(|_| ::std::format!("invalid {} id '{}'", $entity, s))
            }
        }

        impl ::std::convert::From<i64> for $name {
            fn from(v: i64) -> Self {
                $name(v)
            }
        }

        impl ::std::convert::From<$name> for i64 {
            fn from(v: $name) -> Self {
                v.0
            }
        }
    };
}
