//! Compile use case
//!
//! Load → normalize → expand → merge → cross-link → render → publish.
//! Every stage must succeed before the sink sees anything.

use std::path::PathBuf;

use serde::Serialize;
use tracing::info;

use crate::domain::entities::{ResolvedDefinitions, ScopeKind};
use crate::domain::ports::{CompiledDocuments, DefinitionRepository, DocumentSink};
use crate::domain::services::{resolve_objects, resolve_scope};
use crate::error::BactwinResult;
use crate::infrastructure::render_documents;

/// Summary of one compile (or check) run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CompileResult {
    /// Number of resolved property definitions
    pub property_count: usize,
    /// Number of resolved objects
    pub object_count: usize,
    /// Files written; empty for a check
    pub written: Vec<PathBuf>,
}

pub struct CompileUseCase<R, S>
where
    R: DefinitionRepository,
    S: DocumentSink,
{
    repository: R,
    sink: S,
    locale: Option<String>,
    indent: usize,
}

impl<R, S> CompileUseCase<R, S>
where
    R: DefinitionRepository,
    S: DocumentSink,
{
    pub fn new(repository: R, sink: S) -> Self {
        Self {
            repository,
            sink,
            locale: None,
            indent: crate::infrastructure::serializer::DEFAULT_INDENT,
        }
    }

    pub fn with_locale(mut self, locale: Option<String>) -> Self {
        self.locale = locale;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Resolve both scopes without rendering.
    ///
    /// Objects are loaded only once the properties scope has resolved.
    pub fn resolve(&self) -> BactwinResult<ResolvedDefinitions> {
        let locale = self.locale.as_deref();
        let properties = self.repository.load_scope(ScopeKind::Properties)?;
        let properties = resolve_scope(&properties, locale)?;

        let objects = self.repository.load_scope(ScopeKind::Objects)?;
        let objects = resolve_objects(&properties, objects, locale)?;

        Ok(ResolvedDefinitions {
            properties,
            objects,
        })
    }

    /// Resolve and render in memory; nothing is published.
    pub fn render(&self) -> BactwinResult<(CompileResult, CompiledDocuments)> {
        let resolved = self.resolve()?;
        let result = CompileResult {
            property_count: resolved.properties.len(),
            object_count: resolved.objects.len(),
            written: Vec::new(),
        };
        let documents = render_documents(resolved, self.indent)?;
        Ok((result, documents))
    }

    /// Resolve, render and publish both documents.
    pub fn compile(&self) -> BactwinResult<CompileResult> {
        let (mut result, documents) = self.render()?;
        result.written = self.sink.publish(&documents)?;
        info!(
            "compiled {} properties and {} objects",
            result.property_count, result.object_count
        );
        Ok(result)
    }
}
