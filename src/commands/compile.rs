use std::path::PathBuf;

use anyhow::{Context, Result};

use bactwin::CompileUseCase;

use crate::cli::SourceArgs;

pub fn cmd_compile(source: &SourceArgs, output: Option<PathBuf>, json: bool) -> Result<()> {
    let (ctx, warnings) = super::load_context(source)?;
    let ctx = ctx.with_output_dir(output);
    super::report_warnings("compile", &warnings, json)?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "compile",
            "root": ctx.root,
            "locale": ctx.locale,
            "output": ctx.output_dir,
        }))?;
    }

    let use_case = CompileUseCase::new(ctx.repository(), ctx.sink())
        .with_locale(ctx.locale.clone())
        .with_indent(ctx.indent);
    let result = use_case
        .compile()
        .with_context(|| format!("failed to compile definitions in {}", ctx.root.display()))?;

    if json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "compile",
            "success": true,
            "properties": result.property_count,
            "objects": result.object_count,
            "written": result.written,
        }))?;
    } else {
        print!(
            "{}",
            crate::ui::output::render_summary("Compiled definitions", &result, ctx.locale())
        );
    }
    Ok(())
}
