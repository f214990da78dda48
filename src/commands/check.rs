use anyhow::{Context, Result};

use bactwin::CompileUseCase;

use crate::cli::SourceArgs;

pub fn cmd_check(source: &SourceArgs, json: bool) -> Result<()> {
    let (ctx, warnings) = super::load_context(source)?;
    super::report_warnings("check", &warnings, json)?;

    let use_case = CompileUseCase::new(ctx.repository(), ctx.sink())
        .with_locale(ctx.locale.clone())
        .with_indent(ctx.indent);
    let (result, _documents) = use_case
        .render()
        .with_context(|| format!("definitions in {} do not resolve", ctx.root.display()))?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "check",
            "success": true,
            "properties": result.property_count,
            "objects": result.object_count,
        }))?;
    } else {
        print!(
            "{}",
            crate::ui::output::render_summary("Definitions resolve cleanly", &result, ctx.locale())
        );
    }
    Ok(())
}
