//! JSON document rendering
//!
//! Renders the resolved definitions into the two documents consumed by the
//! renderer: properties in resolution order, objects sorted by `order`.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::domain::entities::ResolvedDefinitions;
use crate::domain::ports::CompiledDocuments;
use crate::domain::services::sort_by_order;
use crate::error::BactwinResult;

/// Default indentation of the rendered documents.
pub const DEFAULT_INDENT: usize = 4;

/// Render both documents in memory.
pub fn render_documents(
    resolved: ResolvedDefinitions,
    indent: usize,
) -> BactwinResult<CompiledDocuments> {
    let properties = to_pretty_json(&resolved.properties, indent)?;
    let objects = sort_by_order(resolved.objects)?;
    let objects = to_pretty_json(&objects, indent)?;
    Ok(CompiledDocuments {
        properties,
        objects,
    })
}

/// Pretty-print `value` with `indent` spaces per level.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T, indent: usize) -> BactwinResult<String> {
    let indent = " ".repeat(indent);
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    value.serialize(&mut serializer)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}
