#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` holds the pieces of the diagnostics stack shared by the decoder
//! crates and the `adsec` binary:
//!
//! - the tracing targets every decode event is emitted under
//!   ([`ACL_TARGET`], [`ACE_TARGET`], [`SD_TARGET`]);
//! - [`VerbosityConfig`], which maps the number of `-v` flags to a filter
//!   directive;
//! - with the `tracing` feature, [`init_tracing`] and
//!   [`init_tracing_with_filter`], which install a `tracing-subscriber`
//!   formatter writing to standard error;
//! - the [`trace_acl!`], [`trace_ace!`] and [`trace_sd!`] macros, thin
//!   wrappers around `tracing::debug!` with the matching target.
//!
//! # Examples
//!
//! ```
//! use logging::{LogLevel, VerbosityConfig};
//!
//! let config = VerbosityConfig::from_verbose_level(2);
//! assert_eq!(config.level(), LogLevel::Debug);
//! assert_eq!(config.directive(), "warn,adsec=debug");
//! ```

mod tracing_macros;
mod verbosity;

#[cfg(feature = "tracing")]
mod tracing_bridge;

#[cfg(feature = "tracing")]
pub use tracing_bridge::{init_tracing, init_tracing_with_filter};
pub use verbosity::{LogLevel, VerbosityConfig};

/// Prefix shared by every target below; filter on it to select all decode events.
pub const TARGET_PREFIX: &str = "adsec";

/// Target for ACL header and per-entry events.
pub const ACL_TARGET: &str = "adsec::acl";

/// Target for events inside a single ACE (object flags, application data).
pub const ACE_TARGET: &str = "adsec::ace";

/// Target for security descriptor header and component events.
pub const SD_TARGET: &str = "adsec::sd";
