//! Production implementations of the trait abstractions.
//!
//! This module provides the "real" implementation of [`crate::traits::LogSource`]
//! that talks to an actual chain. Test code uses the fakes in
//! [`crate::testing`] instead.

mod alloy;

pub use self::alloy::AlloyLogSource;
