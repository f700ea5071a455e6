//! Role-scoped navigation tables.
//!
//! # Responsibility
//! - Map each role to its ordered menu entry list.
//! - Expose stable entry discriminants for icon lookup and active-route
//!   highlighting in the presentation layer.
//!
//! # Invariants
//! - Entry order is part of the contract and never changes between calls.
//! - Anonymous visitors get the minimal public set; this is the only
//!   fallback in the role dispatch.

mod table;

pub use table::{entries_for, IconTag, NavEntry, NavItemId};
