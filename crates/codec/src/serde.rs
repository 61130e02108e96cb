//! Serde support for [`IntFormat`].
//!
//! Human-readable formats use the compact string form (`"u48le"`), binary
//! formats the packed tag byte from [`IntFormat::to_tag`].

use std::str::FromStr;

use serde::de;
use serde::{Deserialize, Serialize};

use crate::format::IntFormat;

impl Serialize for IntFormat {
    fn serialize<S: serde::Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        if s.is_human_readable() {
            s.serialize_str(&self.to_string())
        } else {
            s.serialize_u8(self.to_tag())
        }
    }
}

impl<'de> Deserialize<'de> for IntFormat {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        if d.is_human_readable() {
            struct StrVisitor;

            impl de::Visitor<'_> for StrVisitor {
                type Value = IntFormat;

                fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, "an int format string like \"u48le\"")
                }

                fn visit_str<E: de::Error>(self, v: &str) -> Result<IntFormat, E> {
                    IntFormat::from_str(v).map_err(E::custom)
                }
            }

            d.deserialize_str(StrVisitor)
        } else {
            let tag = u8::deserialize(d)?;
            IntFormat::from_tag(tag).map_err(de::Error::custom)
        }
    }
}
