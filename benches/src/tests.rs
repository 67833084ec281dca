use fillin::values;

use crate::context;
use crate::{Engine, Fillin, Naive, RegexEngine};

fn render<'a, E: Engine<'a>>(source: &'a str, values: &fillin::Values) -> String {
    E::new(source).render(values)
}

#[test]
fn engines_agree_on_plain_templates() {
    let source = context::source(50);
    let values = context::random(50);
    let expected = render::<Fillin>(&source, &values);
    assert_eq!(render::<RegexEngine>(&source, &values), expected);
    assert_eq!(render::<Naive>(&source, &values), expected);
}

#[test]
fn regex_agrees_on_escapes() {
    let values = values! { a: "A", b: "B" };
    for source in [r"\[a] [a]", "[a][b]", r"[[a]] \\[b] x\]"] {
        assert_eq!(
            render::<RegexEngine>(source, &values),
            render::<Fillin>(source, &values),
            "source: {source}"
        );
    }
}
