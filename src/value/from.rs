//! Conversions from Rust types into [`Value`].
//!
//! These are what the [`values!`][crate::values] macro falls back to for any
//! expression that is not a nested map or list literal.

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use crate::Value;

macro_rules! impl_from {
    ($($ty:ty => |$v:ident| $conv:expr),+ $(,)?) => {
        $(
            impl From<$ty> for Value {
                #[inline]
                fn from($v: $ty) -> Self {
                    $conv
                }
            }
        )+
    };
}

impl_from! {
    () => |_v| Value::None,
    bool => |v| Value::Bool(v),
    u8 => |v| Value::Integer(i64::from(v)),
    u16 => |v| Value::Integer(i64::from(v)),
    u32 => |v| Value::Integer(i64::from(v)),
    i8 => |v| Value::Integer(i64::from(v)),
    i16 => |v| Value::Integer(i64::from(v)),
    i32 => |v| Value::Integer(i64::from(v)),
    i64 => |v| Value::Integer(v),
    f32 => |v| Value::Float(f64::from(v)),
    f64 => |v| Value::Float(v),
    char => |v| Value::String(String::from(v)),
    String => |v| Value::String(v),
    &String => |v| Value::String(v.clone()),
    &str => |v| Value::String(v.to_owned()),
    Cow<'_, str> => |v| Value::String(v.into_owned()),
}

impl<V> From<Option<V>> for Value
where
    V: Into<Value>,
{
    /// `None` becomes the absent marker [`Value::None`].
    fn from(opt: Option<V>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}

impl<V> From<Vec<V>> for Value
where
    V: Into<Value>,
{
    fn from(list: Vec<V>) -> Self {
        list.into_iter().collect()
    }
}

impl<V, const N: usize> From<[V; N]> for Value
where
    V: Into<Value>,
{
    fn from(list: [V; N]) -> Self {
        list.into_iter().collect()
    }
}

impl<V> FromIterator<V> for Value
where
    V: Into<Value>,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = V>,
    {
        Value::List(iter.into_iter().map(Into::into).collect())
    }
}

fn map_from<K, V, I>(entries: I) -> Value
where
    K: Into<String>,
    V: Into<Value>,
    I: IntoIterator<Item = (K, V)>,
{
    Value::Map(
        entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect(),
    )
}

impl<K, V> From<BTreeMap<K, V>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: BTreeMap<K, V>) -> Self {
        map_from(map)
    }
}

impl<K, V> From<HashMap<K, V>> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: HashMap<K, V>) -> Self {
        map_from(map)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Value
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from(map: [(K, V); N]) -> Self {
        map_from(map)
    }
}
