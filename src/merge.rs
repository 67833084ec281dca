//! Deep merging of [`Value`] maps.
//!
//! Layers are combined left to right, later layers taking precedence. For
//! each key in the incoming layer:
//!
//! - [`Value::None`] is the absent marker and is skipped, the existing value
//!   (if any) is retained.
//! - **Maps** on both sides are merged recursively.
//! - **Lists** on both sides are concatenated, existing elements first.
//! - Anything else replaces the existing value.
//!
//! Because lists concatenate, merging a map with itself is not idempotent:
//! every merge appends another copy of each list.

use crate::value::Map;
use crate::Value;

/// Merge any number of maps into a new map.
///
/// None of the inputs are modified, the result shares no structure with
/// them. Merging zero maps returns an empty map.
///
/// # Examples
///
/// ```
/// use fillin::{merge, values};
///
/// let a = values! { a: 1, nested: { x: 1 }, list: [1] };
/// let b = values! { b: 2, nested: { y: 2 }, list: [2] };
///
/// let merged = merge::merge([&a, &b]);
/// assert_eq!(merged, values! { a: 1, b: 2, nested: { x: 1, y: 2 }, list: [1, 2] });
/// ```
pub fn merge<'a, I>(layers: I) -> Map<String, Value>
where
    I: IntoIterator<Item = &'a Map<String, Value>>,
{
    layers.into_iter().fold(Map::new(), |mut acc, layer| {
        merge_into(&mut acc, layer);
        acc
    })
}

/// Merge `upper` into `lower` in place.
///
/// This is a single step of [`merge`].
pub fn merge_into(lower: &mut Map<String, Value>, upper: &Map<String, Value>) {
    for (key, next) in upper {
        if next.is_none() {
            continue;
        }
        match lower.get_mut(key) {
            Some(prev) => merge_value(prev, next),
            None => {
                lower.insert(key.clone(), next.clone());
            }
        }
    }
}

fn merge_value(prev: &mut Value, next: &Value) {
    match (prev, next) {
        (Value::Map(prev), Value::Map(next)) => merge_into(prev, next),
        (Value::List(prev), Value::List(next)) => prev.extend(next.iter().cloned()),
        (prev, next) => *prev = next.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values;

    #[test]
    fn merge_empty() {
        let none: [&Map<String, Value>; 0] = [];
        assert_eq!(merge(none), Map::new());
        assert_eq!(merge([&Map::new(), &values! { foo: 1 }]), values! { foo: 1 });
    }

    #[test]
    fn merge_flat() {
        let a = values! { foo: 1 };
        let b = values! { bar: 2 };
        assert_eq!(merge([&a, &b]), values! { foo: 1, bar: 2 });
    }

    #[test]
    fn merge_overwrites_scalars() {
        let a = values! { foo: 1 };
        let b = values! { foo: 2 };
        assert_eq!(merge([&a, &b]), values! { foo: 2 });
    }

    #[test]
    fn merge_nested_maps() {
        let a = values! { nested: { foo: 1, bar: 2 } };
        let b = values! { nested: { bar: 3, baz: 4 } };
        assert_eq!(
            merge([&a, &b]),
            values! { nested: { foo: 1, bar: 3, baz: 4 } }
        );
    }

    #[test]
    fn merge_concatenates_lists() {
        let a = values! { items: [1, 2] };
        let b = values! { items: [3, 4] };
        assert_eq!(merge([&a, &b]), values! { items: [1, 2, 3, 4] });
    }

    #[test]
    fn merge_type_mismatch_replaces() {
        let a = values! { items: "not-a-list" };
        let b = values! { items: [1, 2] };
        assert_eq!(merge([&a, &b]), values! { items: [1, 2] });

        let a = values! { items: { x: 1 } };
        let b = values! { items: [1] };
        assert_eq!(merge([&a, &b]), values! { items: [1] });
    }

    #[test]
    fn merge_skips_none() {
        let a = values! { foo: 1, bar: 2 };
        let b = values! { foo: None };
        assert_eq!(merge([&a, &b]), values! { foo: 1, bar: 2 });

        // a missing key is not inserted either
        let c = values! { baz: None };
        assert_eq!(merge([&a, &c]), values! { foo: 1, bar: 2 });
    }

    #[test]
    fn merge_in_sequence() {
        let a = values! { foo: 1 };
        let b = values! { bar: 2 };
        let c = values! { foo: 3 };
        assert_eq!(merge([&a, &b, &c]), values! { foo: 3, bar: 2 });
    }

    #[test]
    fn merge_does_not_mutate_inputs() {
        let a = values! { nested: { foo: 1 }, arr: [1] };
        let b = values! { nested: { bar: 2 }, arr: [2] };

        let result = merge([&a, &b]);

        assert_eq!(a, values! { nested: { foo: 1 }, arr: [1] });
        assert_eq!(b, values! { nested: { bar: 2 }, arr: [2] });
        assert_eq!(result, values! { nested: { foo: 1, bar: 2 }, arr: [1, 2] });
    }

    #[test]
    fn merge_self_is_not_idempotent_for_lists() {
        let a = values! { n: 1, list: [1] };
        let once = merge([&a, &a]);
        let twice = merge([&once, &a]);
        assert_eq!(once, values! { n: 1, list: [1, 1] });
        assert_eq!(twice, values! { n: 1, list: [1, 1, 1] });
    }
}
