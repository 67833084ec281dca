//! Builds options from a user config file layered over the defaults, then
//! renders the same template with and without values.

use fillin::{values, Options, TemplateString};

fn main() -> fillin::Result<()> {
    // Typically read from disk.
    let user: serde_json::Value = serde_json::json!({ "replace_empty": "<unset>" });

    let options = Options::from_serde(&user)?;

    let template = TemplateString::with_options("[greeting], [name]!", options)
        .with_defaults(values! { greeting: "Hello" });

    println!("{}", template.render_from(&values! { name: "World" }));
    println!("{}", template.render_from(&values! {}));

    Ok(())
}
