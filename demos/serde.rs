use serde::Serialize;

#[derive(Serialize)]
struct Context {
    name: String,
    unread: u32,
    labels: Vec<&'static str>,
}

fn main() -> fillin::Result<()> {
    let ctx = Context {
        name: "John Smith".into(),
        unread: 3,
        labels: vec!["inbox", "work"],
    };

    let output = fillin::TemplateString::new("Hello [name]! [unread] unread in [labels].")
        .render(ctx)?;

    println!("{output}");

    Ok(())
}
