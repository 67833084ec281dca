#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use serde::Serialize;

#[derive(Debug, Serialize, Arbitrary)]
#[serde(untagged)]
enum Value {
    None,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(BTreeMap<String, Value>),
}

fuzz_target!(|data: (&str, Option<String>, BTreeMap<String, Value>)| {
    let (source, replace_empty, values) = data;

    let mut options = fillin::Options::builder();
    if let Some(replacement) = replace_empty {
        options.replace_empty(replacement);
    }
    let template = fillin::TemplateString::with_options(source, options);

    let values = match fillin::to_value(&values) {
        Ok(fillin::Value::Map(values)) => values,
        _ => return,
    };

    let direct = template.render_from(&values);
    let compiled = template.compile().render_from(&values);
    assert_eq!(direct, compiled);

    let mut buf = Vec::new();
    template.render_to_writer(&mut buf, &values).unwrap();
    assert_eq!(String::from_utf8(buf).unwrap(), direct);
});
