//! Gateway implementations for external service providers.

pub mod identity;
