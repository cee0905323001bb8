//! Miscellaneous nodes
//!
//! Group plumbing and other nodes without a domain of their own.

mod group_input;

pub use group_input::{GroupInputBehavior, GroupInputNode};
