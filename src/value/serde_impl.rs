//! Serde support for [`Value`] and [`Map`].
//!
//! Values serialize to the natural JSON shapes (null, bool, number,
//! string, array, object). Deserialization accepts any self-describing
//! format; JSON objects become [`Map`]s with their key order preserved.

use super::{Map, Value};

impl serde::Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Self::Null => serializer.serialize_unit(),
            Self::Bool(inner) => serializer.serialize_bool(*inner),
            Self::Int(inner) => serializer.serialize_i64(*inner),
            Self::Float(inner) => serializer.serialize_f64(*inner),
            Self::Str(inner) => serializer.serialize_str(inner),
            Self::Seq(items) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(entries) => entries.serialize(serializer),
        }
    }
}

impl serde::Serialize for Map {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct ValueVisitor;

impl<'de> serde::de::Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("any dashkit value")
    }

    fn visit_unit<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_none<E>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Value, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(Self)
    }

    fn visit_bool<E>(self, inner: bool) -> Result<Value, E> {
        Ok(Value::Bool(inner))
    }

    fn visit_i64<E>(self, inner: i64) -> Result<Value, E> {
        Ok(Value::Int(inner))
    }

    fn visit_u64<E>(self, inner: u64) -> Result<Value, E>
    where
        E: serde::de::Error,
    {
        i64::try_from(inner)
            .map(Value::Int)
            .map_err(|_| E::custom("integer out of range for i64"))
    }

    fn visit_f64<E>(self, inner: f64) -> Result<Value, E> {
        Ok(Value::Float(inner))
    }

    fn visit_str<E>(self, inner: &str) -> Result<Value, E> {
        Ok(Value::Str(inner.to_string()))
    }

    fn visit_string<E>(self, inner: String) -> Result<Value, E> {
        Ok(Value::Str(inner))
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut items = Vec::with_capacity(capacity);
        while let Some(item) = seq.next_element()? {
            items.push(item);
        }
        Ok(Value::Seq(items))
    }

    fn visit_map<A>(self, mut access: A) -> Result<Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut entries = Map::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((key, value)) = access.next_entry::<String, Value>()? {
            entries.insert(key, value);
        }
        Ok(Value::Map(entries))
    }
}

impl<'de> serde::Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_any(ValueVisitor)
    }
}

impl<'de> serde::Deserialize<'de> for Map {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Map(entries) => Ok(entries),
            _ => Err(serde::de::Error::custom("expected a map")),
        }
    }
}
