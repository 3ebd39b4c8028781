//! Codec operations that log a warning on failure and return the default value.

crate::policy::policy_functions!(crate::policy::Soft);
