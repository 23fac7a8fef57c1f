use serde::de::{self, IgnoredAny, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::entities::LocationId;

/// A road segment between two locations. On the wire a road is the array
/// `[start, end, category, name]`; the name may be empty or omitted.
#[derive(Clone, Debug, PartialEq)]
pub struct Road {
    pub start: LocationId,
    pub end: LocationId,
    pub category: String,
    pub name: Option<String>,
}

impl Road {
    pub fn new(start: impl Into<String>, end: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
            category: category.into(),
            name: None,
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.is_empty() { None } else { Some(name) };
        self
    }

    pub fn describe(&self) -> String {
        match &self.name {
            Some(name) => format!("road `{}` ({} -> {})", name, self.start, self.end),
            None => format!("road {} -> {}", self.start, self.end),
        }
    }
}

impl Serialize for Road {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.name.as_deref().unwrap_or("");
        (&self.start, &self.end, &self.category, name).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Road {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_seq(RoadVisitor)
    }
}

struct RoadVisitor;

impl<'de> Visitor<'de> for RoadVisitor {
    type Value = Road;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a [start, end, category, name] array")
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Road, A::Error> {
        let start: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(0, &self))?;
        let end: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(1, &self))?;
        let category: String = seq
            .next_element()?
            .ok_or_else(|| de::Error::invalid_length(2, &self))?;
        let name: Option<Option<String>> = seq.next_element()?;

        if seq.next_element::<IgnoredAny>()?.is_some() {
            return Err(de::Error::invalid_length(5, &self));
        }

        Ok(Road {
            start,
            end,
            category,
            name: name.flatten().filter(|name| !name.is_empty()),
        })
    }
}
