//! # apiguide-core - Content Catalog and Core Types
//!
//! Foundation crate for the API Guide. Provides the content catalog, section
//! definitions, error handling and logging setup.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Catalog (`catalog`)
//! - [`Catalog`] - All static content, built in or loaded from JSON
//! - [`ApiType`], [`HttpMethodSpec`], [`StatusCodeGroup`], [`BestPractice`]
//! - [`Scenario`] - Status lab outcomes
//! - [`JsonLine`] - Annotated JSON listing
//!
//! ### Types (`types`)
//! - [`Section`] - Pages of the guide in display order
//! - [`NavItem`] - Navigation bar entries
//! - [`IconRef`], [`ColorTag`] - Symbolic presentation references
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context

pub mod catalog;
pub mod error;
pub mod logging;
pub mod types;

/// Prelude for common imports used throughout all API Guide crates
pub mod prelude {
    pub use super::error::{Error, Result, ResultExt};
    pub use tracing::{debug, error, info, instrument, trace, warn};
}

pub use catalog::{
    ApiType, BestPractice, Catalog, HttpMethodSpec, JsonLine, Scenario, StatusCodeGroup,
    StatusExample,
};
pub use error::{Error, Result, ResultExt};
pub use types::{ColorTag, IconRef, NavItem, Section};
