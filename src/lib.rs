//! Error annotation and classification.
//!
//! `errlink` lets calling code wrap an underlying failure with contextual
//! text, a call-site location, free-form key/value tags and categorical
//! type labels, while keeping the original failure recoverable and the
//! accumulated context traversable.
//!
//! Every wrap point becomes one [`Link`] in an ordered [`Chain`]. The
//! chain itself implements [`std::error::Error`], so it composes with the
//! standard single-level wrapping convention (`Error::source`): a chain
//! can be wrapped by other libraries' context layers, and the traversal
//! functions in this crate will find it again further down.
//!
//! # Examples
//!
//! ```
//! use errlink::{has_type, lookup_tag, wrap};
//!
//! let err = std::io::Error::other("connection reset");
//! let err = wrap(err, "fetch profile")
//!     .with_tag("user_id", 42)
//!     .with_types(["Transient"]);
//!
//! assert!(has_type(&err, "Transient"));
//! assert_eq!(
//!     lookup_tag(&err, "user_id").and_then(|v| v.as_i64()),
//!     Some(42),
//! );
//!
//! // one line per wrap point, oldest first
//! let rendered = err.to_string();
//! let mut lines = rendered.lines();
//! assert!(lines.next().is_some_and(|l| l.ends_with("error=connection reset")));
//! assert!(
//!     lines
//!         .next()
//!         .is_some_and(|l| l.ends_with("error=fetch profile user_id=42 types=Transient"))
//! );
//! ```
//!
//! The original failure stays reachable by identity:
//!
//! ```
//! use errlink::{cause, wrap};
//!
//! let err = wrap(std::io::Error::other("boom"), "load config");
//! let err = wrap(err, "start server");
//!
//! let root = cause(&err);
//! assert!(root.downcast_ref::<std::io::Error>().is_some());
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg, doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

mod chain;
mod format;
mod frame;
mod helper;
mod join;
mod macros;
mod tag;
mod traverse;

pub use chain::{Chain, Link, new, wrap, wrap_at};
pub use format::{default_format, register_formatter};
pub use frame::Frame;
pub use helper::{Helper, register_helper};
pub use join::{Joined, join};
pub use tag::{Tag, TagValue};
pub use traverse::{cause, downcast_ref, has_type, is, lookup_tag};

/// Alias for a type-erased error type.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;
