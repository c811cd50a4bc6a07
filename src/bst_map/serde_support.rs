//! `serde` support, enabled by the `serde` feature.
//!
//! Entries are written in pre-order. Deserializing inserts them in the order
//! read, which rebuilds the same tree shape rather than the chain that sorted
//! input would produce.

use core::fmt;
use core::marker::PhantomData;

use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};
use serde::ser::{Serialize, SerializeMap, Serializer};

use super::BstMap;

impl<K: Serialize, V: Serialize> Serialize for BstMap<K, V> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.raw.pre_order() {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

struct BstMapVisitor<K, V> {
    marker: PhantomData<fn() -> BstMap<K, V>>,
}

impl<'de, K, V> Visitor<'de> for BstMapVisitor<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    type Value = BstMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        // Length prefixes come from the input, so they never size the arena.
        let mut map = BstMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.insert(key, value);
        }
        Ok(map)
    }
}

impl<'de, K, V> Deserialize<'de> for BstMap<K, V>
where
    K: Deserialize<'de> + Ord,
    V: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(BstMapVisitor { marker: PhantomData })
    }
}
