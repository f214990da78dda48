use anyhow::{anyhow, Context, Result};

use bactwin::infrastructure::serializer::to_pretty_json;
use bactwin::CompileUseCase;

use crate::cli::SourceArgs;

pub fn cmd_show(source: &SourceArgs, name: &str, property: bool, json: bool) -> Result<()> {
    let (ctx, warnings) = super::load_context(source)?;
    super::report_warnings("show", &warnings, json)?;

    let use_case = CompileUseCase::new(ctx.repository(), ctx.sink()).with_locale(ctx.locale.clone());
    let resolved = use_case
        .resolve()
        .with_context(|| format!("failed to resolve definitions in {}", ctx.root.display()))?;

    let (kind, collection) = if property {
        ("property", &resolved.properties)
    } else {
        ("object", &resolved.objects)
    };
    let definition = collection
        .get(name)
        .ok_or_else(|| anyhow!("unknown {} '{}'", kind, name))?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "definition",
            "command": "show",
            "kind": kind,
            "name": name,
            "definition": definition,
        }))?;
    } else {
        println!("{}", to_pretty_json(definition, ctx.indent)?);
    }
    Ok(())
}
