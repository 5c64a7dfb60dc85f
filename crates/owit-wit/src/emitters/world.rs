use log::debug;
use minijinja::context;
use owit_core::ir::{WitFunction, WitWorld};

use crate::error::WitError;

/// Emit the `world <name> { ... }` block with one `export` line per function.
pub fn emit_world(world: &WitWorld) -> Result<String, WitError> {
    let env = super::environment()?;
    let tmpl = env.get_template("world.wit.j2")?;

    debug!(
        "rendering world {} with {} function(s)",
        world.name,
        world.functions.len()
    );
    let functions: Vec<minijinja::Value> = world.functions.iter().map(function_to_ctx).collect();

    Ok(tmpl.render(context! {
        name => world.name.clone(),
        functions => functions,
    })?)
}

/// Parameters and the return clause are pre-joined so the template line
/// stays free of block tags.
fn function_to_ctx(function: &WitFunction) -> minijinja::Value {
    let params = function
        .params
        .iter()
        .map(|p| format!("{}: {}", p.name, p.ty))
        .collect::<Vec<_>>()
        .join(", ");
    let returns = function
        .returns
        .as_ref()
        .map(|ty| format!(" -> {ty}"))
        .unwrap_or_default();

    context! {
        name => function.name.clone(),
        params => params,
        returns => returns,
    }
}

#[cfg(test)]
mod tests {
    use owit_core::ir::{HttpMethod, WitField, WitPrimitive, WitType};

    use super::*;

    fn function(name: &str, params: Vec<WitField>, returns: Option<WitType>) -> WitFunction {
        WitFunction {
            name: name.to_string(),
            method: HttpMethod::Get,
            path: "/".to_string(),
            params,
            returns,
        }
    }

    #[test]
    fn test_world_with_functions() {
        let world = WitWorld {
            name: "myapi".to_string(),
            functions: vec![
                function("GetPerson", vec![], Some(WitType::Named("Person".to_string()))),
                function(
                    "CreatePerson",
                    vec![
                        WitField::new("name", WitPrimitive::String),
                        WitField::new("age", WitPrimitive::I32),
                    ],
                    Some(WitType::Named("Person".to_string())),
                ),
                function("DeletePerson", vec![], None),
            ],
        };

        insta::assert_snapshot!(emit_world(&world).unwrap(), @r"
        world myapi {
            export GetPerson: func() -> Person
            export CreatePerson: func(name: string, age: i32) -> Person
            export DeletePerson: func()
        }
        ");
    }

    #[test]
    fn test_no_trailing_arrow_without_return() {
        let world = WitWorld {
            name: "api".to_string(),
            functions: vec![function("PostPing", vec![], None)],
        };
        assert_eq!(
            emit_world(&world).unwrap(),
            "world api {\n    export PostPing: func()\n}\n"
        );
    }

    #[test]
    fn test_empty_world() {
        let world = WitWorld {
            name: "empty".to_string(),
            functions: Vec::new(),
        };
        assert_eq!(emit_world(&world).unwrap(), "world empty {\n}\n");
    }
}
