//! Domain Layer
//!
//! The definition resolution engine: pure logic over parsed definition
//! trees, without I/O.
//!
//! ## Structure
//!
//! - `entities/` - Definitions, scopes and the resolved output pair
//! - `ports/` - Loading and publishing boundaries
//! - `services/` - Merge, normalization, base expansion, scope resolution,
//!   cross-linking and output ordering
//!
//! Loading files and writing documents lives in `infrastructure`.

pub mod entities;
pub mod ports;
pub mod services;
