//! Typed JSON encode/decode with stage-tagged errors.
//!
//! The crate-root functions return [`CodecError`] on failure. The [`must`],
//! [`soft`] and [`omit`] modules expose the same operations with a different
//! [`policy::FailurePolicy`].

mod error;
mod locale;

pub mod codec;
pub mod must;
pub mod omit;
pub mod policy;
pub mod soft;

pub use codec::{Codec, decode, decode_from_text, encode, encode_to_text};
pub use error::{CodecError, Stage};
pub use locale::{LOCALE_ENV, Locale, UnknownLocale};
pub use serde_json::error::Category;
