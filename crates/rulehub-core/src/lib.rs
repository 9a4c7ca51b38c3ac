//! # rulehub-core
//!
//! Core crate for the RuleHub demo driver. Contains the demo catalog
//! model, the dispatcher/pacer, and the unified error system.
//!
//! This crate has **no** internal dependencies on other RuleHub crates.

pub mod catalog;
pub mod dispatch;
pub mod error;

pub use catalog::{Catalog, CatalogBuilder, DemoGroup, DemoHook, hook};
pub use dispatch::{AckSource, Dispatcher, StdinAck};
pub use error::{DemoError, DemoResult, ErrorKind};
