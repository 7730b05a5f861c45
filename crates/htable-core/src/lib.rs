//! # htable-core
//!
//! Core library for rendering sortable HTML tables.
//!
//! This crate provides the table model used by `htable-cli`, and can be
//! embedded in any web stack that hands it the request's query parameters.
//!
//! ## Quick Start
//!
//! ```rust
//! use htable_core::prelude::*;
//!
//! let params = QueryParams::from_query_string("page=2&sort=name&order=desc");
//! let mut table: Table = Table::new(params);
//! table.add_column("name", "Name", Handler::field(), true);
//! table.add_column("full", "Full name", Handler::fields(["first", "last"]), false);
//! table.set_empty_text("No people yet");
//!
//! let html = table.render();
//! assert!(html.contains("<td colspan=\"3\">No people yet</td>"));
//! assert!(html.contains("?page=2&amp;sort=name&amp;order=asc"));
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │          Core Layer                 │  Render and config services
//! ├─────────────────────────────────────┤
//! │          Table Layer                │  Columns, sort state, HTML output
//! ├─────────────────────────────────────┤
//! │     Query / Display Layer           │  Parameter snapshot, encoding, escaping
//! ├─────────────────────────────────────┤
//! │  Storage Layer    │  Utils Layer    │  TOML config/layouts, row loading
//! └─────────────────────────────────────┘
//! ```

pub use error::AppError;

/// Prelude module for convenient imports.
///
/// ```rust
/// use htable_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::Result;
    pub use crate::error::{AppError, TableError};

    pub use crate::query::{QueryEncoder, QueryParams, UrlEncoder};
    pub use crate::table::{Cell, Column, Handler, Record, Row, SortOrder, Table, TableBuilder};

    pub use crate::core::services::config_service::ConfigService;
    pub use crate::core::services::render_service::RenderService;
    pub use crate::storage::config::Config;
    pub use crate::storage::layout::Layout;
}

/// Business logic layer - services built on the table model.
///
/// - [`core::services::config_service`]: Configuration management
/// - [`core::services::render_service`]: Layout + rows + parameters into HTML
pub mod core;

/// Table layer - columns, rows, sort state and HTML rendering.
pub mod table;

/// Query parameter snapshot and query-string encoding.
pub mod query;

/// HTML escaping and tag assembly.
pub mod display;

/// Storage layer - configuration and column layouts.
///
/// - [`storage::config`]: TOML configuration of table defaults
/// - [`storage::layout`]: TOML column declarations
pub mod storage;

/// Utilities layer - row loading and validation.
pub mod utils;

/// Error handling - hierarchical error system.
pub mod error;

/// Convenient Result type alias using [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
