//! Application Layer
//!
//! Runs the resolution pipeline against concrete ports. Resolution rules
//! live in `domain::services`; this layer only sequences load, resolve,
//! render and publish, and decides what a command gets back.
//!
//! - `CompileUseCase` - load both scopes, resolve, render, publish
//! - `ResolveContext` - settings fixed for one run (root, locale, output)

pub mod compile;
pub mod context;

pub use compile::{CompileResult, CompileUseCase};
pub use context::ResolveContext;
