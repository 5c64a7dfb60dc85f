pub mod document;
pub mod records;
pub mod world;

use minijinja::Environment;

/// Build the template environment shared by all WIT emitters.
///
/// Block tags swallow their own line, and the trailing newline of each
/// template is kept so the emitted document ends with exactly one.
fn environment() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_template("records.wit.j2", include_str!("../../templates/records.wit.j2"))?;
    env.add_template("world.wit.j2", include_str!("../../templates/world.wit.j2"))?;
    Ok(env)
}
