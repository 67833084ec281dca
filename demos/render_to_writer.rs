use std::io;

fn main() -> fillin::Result<()> {
    let mut stdout = io::BufWriter::new(io::stdout());

    let values = fillin::values! { name: "John Smith" };

    fillin::TemplateString::new("Hello [name]! Use \\[name] to insert a name.\n")
        .render_to_writer(&mut stdout, &values)?;

    Ok(())
}
