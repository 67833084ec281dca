fn main() {
    let template = fillin::TemplateString::new("Hello [name]!");

    let out = template.render_from(&fillin::values! { name: "World" });

    println!("{out}");
}
