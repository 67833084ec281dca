/// Convenient macro for constructing a [`Values`][crate::Values] record.
///
/// Keys are bare identifiers or parenthesized expressions that convert into
/// a `String`, e.g. `("user_id-1"): 42` for keys that are not valid Rust
/// identifiers. Values are either nested `{ ... }` maps, `[ ... ]` lists,
/// `None`, or any expression that implements `Into<Value>`.
///
/// # Examples
///
/// ```
/// let values = fillin::values! {
///     name: "John",
///     age: 30,
///     ("user_id-1"): 42,
///     tags: ["a", "b"],
///     nested: { x: 1 },
///     nickname: None,
/// };
/// assert_eq!(values.len(), 6);
/// ```
#[macro_export]
macro_rules! values {
    () => {
        $crate::Values::new()
    };

    ($($tt:tt)+) => {{
        let mut map = $crate::Values::new();
        $crate::_value!(@map map () ($($tt)+) ($($tt)+));
        map
    }};
}

// Based on `serde_json::json!`.
#[macro_export]
#[doc(hidden)]
macro_rules! _value {
    //////////////////////////////////////////////////////////////////////////
    // TT muncher for the inside of a list [...].
    //
    // Must be invoked as: _value!(@list [] $($tt)*)
    //////////////////////////////////////////////////////////////////////////

    (@list [$($elems:expr,)*]) => {
        $crate::_value_vec![$($elems,)*]
    };

    (@list [$($elems:expr),*]) => {
        $crate::_value_vec![$($elems),*]
    };

    (@list [$($elems:expr,)*] None $($rest:tt)*) => {
        $crate::_value!(@list [$($elems,)* $crate::_value!(None)] $($rest)*)
    };

    (@list [$($elems:expr,)*] [$($list:tt)*] $($rest:tt)*) => {
        $crate::_value!(@list [$($elems,)* $crate::_value!([$($list)*])] $($rest)*)
    };

    (@list [$($elems:expr,)*] {$($map:tt)*} $($rest:tt)*) => {
        $crate::_value!(@list [$($elems,)* $crate::_value!({$($map)*})] $($rest)*)
    };

    (@list [$($elems:expr,)*] $next:expr, $($rest:tt)*) => {
        $crate::_value!(@list [$($elems,)* $crate::_value!($next),] $($rest)*)
    };

    (@list [$($elems:expr,)*] $last:expr) => {
        $crate::_value!(@list [$($elems,)* $crate::_value!($last)])
    };

    (@list [$($elems:expr),*] , $($rest:tt)*) => {
        $crate::_value!(@list [$($elems,)*] $($rest)*)
    };

    (@list [$($elems:expr),*] $unexpected:tt $($rest:tt)*) => {
        $crate::_value_unexpected!($unexpected)
    };

    //////////////////////////////////////////////////////////////////////////
    // TT muncher for the inside of a map {...}. Each entry is inserted into
    // the given map variable.
    //
    // Must be invoked as: _value!(@map $map () ($($tt)*) ($($tt)*))
    //
    // The second copy of the tokens is only used to point errors at the
    // offending token.
    //////////////////////////////////////////////////////////////////////////

    (@map $map:ident () () ()) => {};

    (@map $map:ident [$($key:tt)+] ($value:expr) , $($rest:tt)*) => {
        let _ = $map.insert($crate::_value_key!($($key)+), $value);
        $crate::_value!(@map $map () ($($rest)*) ($($rest)*));
    };

    (@map $map:ident [$($key:tt)+] ($value:expr) $unexpected:tt $($rest:tt)*) => {
        $crate::_value_unexpected!($unexpected);
    };

    (@map $map:ident [$($key:tt)+] ($value:expr)) => {
        let _ = $map.insert($crate::_value_key!($($key)+), $value);
    };

    (@map $map:ident ($($key:tt)+) (: None $($rest:tt)*) $copy:tt) => {
        $crate::_value!(@map $map [$($key)+] ($crate::_value!(None)) $($rest)*);
    };

    (@map $map:ident ($($key:tt)+) (: [$($list:tt)*] $($rest:tt)*) $copy:tt) => {
        $crate::_value!(@map $map [$($key)+] ($crate::_value!([$($list)*])) $($rest)*);
    };

    (@map $map:ident ($($key:tt)+) (: {$($inner:tt)*} $($rest:tt)*) $copy:tt) => {
        $crate::_value!(@map $map [$($key)+] ($crate::_value!({$($inner)*})) $($rest)*);
    };

    (@map $map:ident ($($key:tt)+) (: $value:expr , $($rest:tt)*) $copy:tt) => {
        $crate::_value!(@map $map [$($key)+] ($crate::_value!($value)) , $($rest)*);
    };

    (@map $map:ident ($($key:tt)+) (: $value:expr) $copy:tt) => {
        $crate::_value!(@map $map [$($key)+] ($crate::_value!($value)));
    };

    // Missing value for the last entry.
    (@map $map:ident ($($key:tt)+) (:) $copy:tt) => {
        // "unexpected end of macro invocation"
        $crate::_value!();
    };

    // Missing colon and value for the last entry.
    (@map $map:ident ($($key:tt)+) () $copy:tt) => {
        // "unexpected end of macro invocation"
        $crate::_value!();
    };

    (@map $map:ident () (: $($rest:tt)*) ($colon:tt $($copy:tt)*)) => {
        // "no rules expected the token `:`"
        $crate::_value_unexpected!($colon);
    };

    (@map $map:ident ($($key:tt)*) (, $($rest:tt)*) ($comma:tt $($copy:tt)*)) => {
        // "no rules expected the token `,`"
        $crate::_value_unexpected!($comma);
    };

    // Munch a token into the current key.
    (@map $map:ident ($($key:tt)*) ($tt:tt $($rest:tt)*) $copy:tt) => {
        $crate::_value!(@map $map ($($key)* $tt) ($($rest)*) ($($rest)*));
    };

    //////////////////////////////////////////////////////////////////////////
    // A single value.
    //////////////////////////////////////////////////////////////////////////

    (None) => {
        $crate::Value::None
    };

    ([]) => {
        $crate::Value::List($crate::_value_vec![])
    };

    ([ $($tt:tt)+ ]) => {
        $crate::Value::List($crate::_value!(@list [] $($tt)+))
    };

    ({}) => {
        $crate::Value::Map($crate::Values::new())
    };

    ({ $($tt:tt)+ }) => {
        $crate::Value::Map($crate::values!($($tt)+))
    };

    ($other:expr) => {
        $crate::Value::from($other)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! _value_key {
    ($key:ident) => {
        ::std::string::String::from(stringify!($key))
    };

    (($key:expr)) => {
        ::std::string::String::from($key)
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! _value_vec {
    ($($content:tt)*) => {
        ::std::vec![$($content)*]
    };
}

#[macro_export]
#[doc(hidden)]
macro_rules! _value_unexpected {
    () => {};
}
