//! Codec operations that panic on failure.
//!
//! The panic message is the same `"<tag>: <cause>"` text the fallible
//! operations return, and the panic location is the caller's.

crate::policy::policy_functions!(crate::policy::Abort);
