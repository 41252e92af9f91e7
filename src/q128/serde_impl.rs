use super::Q128;
use core::fmt;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Serialize as the auto-precision decimal string; 39 fractional places
/// are enough to round-trip any value bit-exactly.
impl Serialize for Q128 {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Deserialize from a decimal (or `0x`-prefixed hexadecimal) string.
impl<'de> Deserialize<'de> for Q128 {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct V;
        impl de::Visitor<'_> for V {
            type Value = Q128;
            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("fixed-point decimal string")
            }
            fn visit_str<E: de::Error>(self, s: &str) -> Result<Self::Value, E> {
                s.parse().map_err(E::custom)
            }
        }
        deserializer.deserialize_str(V)
    }
}
