//! # rsql-builder
//!
//! Turns filter expression trees into RSQL query strings ready to be sent
//! as a URL query parameter.
//!
//! ## Quick Example
//!
//! ```rust
//! use rsql_builder::prelude::*;
//!
//! let filter = and([
//!     eq("status", "active"),
//!     or([eq("role", "admin"), eq("role", "owner")]),
//! ]);
//!
//! assert_eq!(build_readable(&filter), "status==active;(role==admin,role==owner)");
//! assert_eq!(
//!     build(&filter),
//!     "status%3D%3Dactive%3B(role%3D%3Dadmin%2Crole%3D%3Downer)"
//! );
//! ```
//!
//! ## Symbology
//!
//! | Symbol   | Meaning                     |
//! |----------|-----------------------------|
//! | `;`      | AND                         |
//! | `,`      | OR                          |
//! | `()`     | Grouping / value lists      |
//! | `==`     | Equal                       |
//! | `!=`     | Not equal                   |
//! | `=gt=`   | Greater than (also `=ge=`, `=lt=`, `=le=`) |
//! | `=in=`   | One of a value list         |
//! | `''`     | Null or empty string        |

pub mod ast;
pub mod config;
pub mod encoder;
pub mod error;
pub mod transpiler;
pub mod validator;

pub mod prelude {
    pub use crate::ast::builders::*;
    pub use crate::ast::*;
    pub use crate::encoder::UrlEncoder;
    pub use crate::error::*;
    pub use crate::transpiler::ToRsql;
    pub use crate::{build, build_readable, try_build, try_build_readable};
}

use crate::ast::Expression;
use crate::error::RsqlResult;
use crate::transpiler::ToRsql;

/// Render an expression as readable (not URL-encoded) RSQL.
///
/// Never fails; malformed trees give malformed output.
///
/// ```
/// use rsql_builder::{ast::builders::*, build_readable};
///
/// assert_eq!(build_readable(&eq("name", "John Doe")), "name=='John Doe'");
/// ```
pub fn build_readable(expr: &Expression) -> String {
    let rsql = expr.to_rsql();
    tracing::trace!(rsql = %rsql, "rendered readable rsql");
    rsql
}

/// Render an expression as URL-encoded RSQL.
pub fn build(expr: &Expression) -> String {
    let encoded = encoder::encode(&build_readable(expr));
    tracing::trace!(encoded = %encoded, "encoded rsql");
    encoded
}

/// Like [`build_readable`], but rejects empty selectors, operators and
/// operand lists first.
pub fn try_build_readable(expr: &Expression) -> RsqlResult<String> {
    if let Err(e) = validator::validate(expr) {
        tracing::debug!(error = %e, "rejected expression");
        return Err(e);
    }
    Ok(build_readable(expr))
}

/// Like [`build`], but rejects empty selectors, operators and operand lists
/// first.
pub fn try_build(expr: &Expression) -> RsqlResult<String> {
    try_build_readable(expr).map(|rsql| encoder::encode(&rsql))
}
