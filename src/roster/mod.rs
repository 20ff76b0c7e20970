//! Roster representation
//!
//! A [`RosterSnapshot`] is the whole league as read from the store at one
//! point in time; its [`PlayerRegistry`] enforces id uniqueness and
//! provides lookup and standings order.

pub mod registry;
pub mod snapshot;

pub use registry::PlayerRegistry;
pub use snapshot::{RosterSnapshot, VersionToken};
