//! Provider Helpers
//!
//! Small, framework-agnostic helpers for writing infrastructure providers.
//!
//! # Overview
//!
//! The crate provides:
//!
//! - **Typed accessors**: read string, integer, list and set attributes from
//!   any [`ResourceData`], with zero values on a miss
//! - **Resource data**: the [`ResourceData`] trait, implemented for JSON state
//!   documents and for schema-backed flatmap state ([`FlatmapData`])
//! - **Composite IDs**: [`parse_composite_id`] and [`build_composite_id`] for
//!   IDs that encode several fields, e.g. `region:bucket`
//! - **Collection helpers**: [`contains_string`] and [`does_not_contain_string`]
//! - **Diagnostics**: [`errs_from_diags`] folds a diagnostics list into one error
//! - **Logging**: integration with `tracing` for structured logging
//!
//! # Quick Start
//!
//! ```
//! use tf_provider_helpers::{
//!     errs_from_diags, get_string_value, parse_composite_id,
//!     data::FlatmapData,
//!     diagnostics::Diagnostic,
//!     schema::{Attribute, Schema},
//! };
//! use serde_json::json;
//!
//! fn import(id: &str) -> Result<FlatmapData, tf_provider_helpers::HelperError> {
//!     let parts = parse_composite_id(id, 2, &[])?;
//!
//!     let schema = Schema::new()
//!         .with_attribute("region", Attribute::optional_string())
//!         .with_attribute("bucket", Attribute::optional_string());
//!     let mut data = FlatmapData::new(schema);
//!     data.set("region", json!(parts[0]))?;
//!     data.set("bucket", json!(parts[1]))?;
//!
//!     let diags: Vec<Diagnostic> = Vec::new();
//!     errs_from_diags(&diags)?;
//!     Ok(data)
//! }
//!
//! let data = import("us-east-1:logs").unwrap();
//! assert_eq!(get_string_value(&data, "bucket"), "logs");
//! assert!(import("logs").is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod accessors;
pub mod collections;
pub mod data;
pub mod diagnostics;
pub mod error;
pub mod id;
pub mod logging;
pub mod schema;
pub mod testing;

// Re-export main types at crate root
pub use accessors::{
    get_int_value, get_list_value_as_int_slice, get_list_value_as_string_slice,
    get_set_value_as_int_slice, get_set_value_as_string_slice, get_string_value,
};
pub use collections::{contains_string, does_not_contain_string};
pub use data::{FlatmapData, ResourceData};
pub use diagnostics::{errs_from_diags, has_errors, Diagnostic, DiagnosticEntry, DiagnosticSeverity};
pub use error::HelperError;
pub use id::{build_composite_id, parse_composite_id, CompositeIdCodec, DEFAULT_SEPARATOR};
pub use logging::{init_logging, init_logging_with_default, try_init_logging};

// Re-export commonly used external types
pub use serde_json;
pub use tracing;
