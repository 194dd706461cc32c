//! `size_gb` is an integer number of GiB, or `MAX` for all available capacity.

use std::fmt;

use serde::{de, Deserializer, Serializer};

use crate::constants::LOGICAL_DISK_SIZE_MAX;

pub(super) fn serialize<S>(size_gb: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if *size_gb == 0 {
        serializer.serialize_str(LOGICAL_DISK_SIZE_MAX)
    } else {
        serializer.serialize_u64(*size_gb)
    }
}

pub(super) fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    struct SizeVisitor;

    impl<'de> de::Visitor<'de> for SizeVisitor {
        type Value = u64;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            write!(f, "a size in GiB or \"{LOGICAL_DISK_SIZE_MAX}\"")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
            u64::try_from(v).map_err(|_| E::custom(format!("invalid logical disk size: {v}")))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
            if v == LOGICAL_DISK_SIZE_MAX {
                Ok(0)
            } else {
                Err(E::custom(format!("invalid logical disk size: {v}")))
            }
        }
    }

    deserializer.deserialize_any(SizeVisitor)
}
