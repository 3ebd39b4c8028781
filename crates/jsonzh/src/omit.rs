//! Codec operations that silently return the default value on failure.

crate::policy::policy_functions!(crate::policy::Discard);
