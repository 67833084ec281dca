#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let template = fillin::TemplateString::new(data);
    for key in template.compile().placeholders() {
        assert!(!key.is_empty());
        assert!(key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-'));
    }
});
