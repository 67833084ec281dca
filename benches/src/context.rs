use fillin::{Value, Values};
use rand::Rng;

/// Returns a template with `n` placeholders named `key0` to `key{n-1}`,
/// separated by some raw text.
pub fn source(n: usize) -> String {
    let mut s = String::new();
    for i in 0..n {
        s.push_str("lorem ipsum dolor [key");
        s.push_str(&i.to_string());
        s.push_str("] sit amet ");
    }
    s
}

/// Returns random values for the placeholders in [`source`].
///
/// Roughly one in four keys is left without a value.
pub fn random(n: usize) -> Values {
    let mut rng = rand::thread_rng();
    (0..n)
        .filter_map(|i| {
            if rng.gen_ratio(1, 4) {
                return None;
            }
            let value = if rng.gen_bool(0.5) {
                Value::Integer(rng.gen_range(0..1000))
            } else {
                Value::String((0..20).map(|_| rng.gen_range('a'..='z')).collect())
            };
            Some((format!("key{i}"), value))
        })
        .collect()
}
