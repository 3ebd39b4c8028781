use serde::{Serialize, de::DeserializeOwned};

use crate::{CodecError, Locale, Stage};

/// JSON encode/decode facade that tags every failure with its stage.
///
/// The value is plain configuration; it holds no buffers and every call is
/// independent, so one `Codec` can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Codec {
    /// Language of the stage tags.
    locale: Locale,
    /// Emit indented JSON instead of the compact form.
    pretty: bool,
}

impl Codec {
    /// Creates a compact-output codec tagging errors in `locale`.
    pub const fn new(locale: Locale) -> Self {
        Self {
            locale,
            pretty: false,
        }
    }

    /// Creates a codec whose locale comes from `JSONZH_LOCALE`.
    pub fn from_env() -> Self {
        Self::new(Locale::from_env())
    }

    /// Switches between indented and compact output.
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn is_pretty(&self) -> bool {
        self.pretty
    }

    /// Serializes `value` to JSON bytes.
    ///
    /// Object keys follow field declaration order. Fields skipped through
    /// `skip_serializing_if` are absent from the output.
    #[track_caller]
    pub fn encode<V: Serialize + ?Sized>(&self, value: &V) -> Result<Vec<u8>, CodecError> {
        let encoded = if self.pretty {
            serde_json::to_vec_pretty(value)
        } else {
            serde_json::to_vec(value)
        };

        match encoded {
            Ok(bytes) => Ok(bytes),
            Err(err) => Err(CodecError::json(Stage::Encode, self.locale, err)),
        }
    }

    /// Deserializes JSON bytes into a new `T`.
    ///
    /// Unknown input fields are ignored. Missing fields fall back to their
    /// default only when `T` opts in with `#[serde(default)]`.
    #[track_caller]
    pub fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, CodecError> {
        match serde_json::from_slice(bytes) {
            Ok(value) => Ok(value),
            Err(err) => Err(CodecError::json(Stage::Decode, self.locale, err)),
        }
    }

    /// Serializes `value` to a JSON string.
    ///
    /// A failure from [`Codec::encode`] is wrapped once more with the encode tag.
    #[track_caller]
    pub fn encode_to_text<V: Serialize + ?Sized>(&self, value: &V) -> Result<String, CodecError> {
        let bytes = match self.encode(value) {
            Ok(bytes) => bytes,
            Err(err) => return Err(err.rewrap(self.locale)),
        };

        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(err) => Err(CodecError::json(
                Stage::Encode,
                self.locale,
                <serde_json::Error as serde::ser::Error>::custom(err),
            )),
        }
    }

    /// Deserializes a JSON string into a new `T`.
    ///
    /// A failure from [`Codec::decode`] is wrapped once more with the decode
    /// tag. Empty text is passed through and fails as an unexpected end of input.
    #[track_caller]
    pub fn decode_from_text<T: DeserializeOwned>(&self, text: &str) -> Result<T, CodecError> {
        match self.decode(text.as_bytes()) {
            Ok(value) => Ok(value),
            Err(err) => Err(err.rewrap(self.locale)),
        }
    }
}

/// Serializes `value` to JSON bytes with the default codec.
#[doc(alias = "编码")]
#[doc(alias = "M编码")]
#[track_caller]
pub fn encode<V: Serialize + ?Sized>(value: &V) -> Result<Vec<u8>, CodecError> {
    Codec::default().encode(value)
}

/// Deserializes JSON bytes into a new `T` with the default codec.
#[doc(alias = "解码")]
#[doc(alias = "U解码")]
#[track_caller]
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, CodecError> {
    Codec::default().decode(bytes)
}

/// Serializes `value` to a JSON string with the default codec.
#[doc(alias = "M编码s")]
#[track_caller]
pub fn encode_to_text<V: Serialize + ?Sized>(value: &V) -> Result<String, CodecError> {
    Codec::default().encode_to_text(value)
}

/// Deserializes a JSON string into a new `T` with the default codec.
#[doc(alias = "U解码s")]
#[track_caller]
pub fn decode_from_text<T: DeserializeOwned>(text: &str) -> Result<T, CodecError> {
    Codec::default().decode_from_text(text)
}
