//! Shared test utilities for linguaspark integration tests
//!
//! Each test gets its own temporary data directory so runs never touch the
//! real config or stored state.

pub mod assertions;
pub mod home;
