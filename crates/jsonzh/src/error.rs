use std::{fmt, panic::Location};

use serde_json::error::Category;
use thiserror::Error;

use crate::Locale;

/// Codec step that produced a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Value to JSON.
    Encode,
    /// JSON to value.
    Decode,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Encode => "encode",
            Stage::Decode => "decode",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Encode or decode failure annotated with a stage tag and a capture point.
///
/// Displays as `"<tag>: <cause>"`. Each codec layer that rewraps an error adds
/// one more tag, so text operations display as `"<tag>: <tag>: <cause>"`.
#[derive(Debug, Error)]
#[error("{tag}: {cause}")]
pub struct CodecError {
    stage: Stage,
    tag: &'static str,
    #[source]
    cause: Cause,
    location: &'static Location<'static>,
}

#[derive(Debug, Error)]
enum Cause {
    #[error(transparent)]
    Json(serde_json::Error),
    #[error(transparent)]
    Layer(Box<CodecError>),
}

impl CodecError {
    #[track_caller]
    pub(crate) fn json(stage: Stage, locale: Locale, err: serde_json::Error) -> Self {
        Self::new(stage, locale, Cause::Json(err))
    }

    /// Wraps `self` in one more layer carrying the same stage.
    #[track_caller]
    pub(crate) fn rewrap(self, locale: Locale) -> Self {
        Self::new(self.stage, locale, Cause::Layer(Box::new(self)))
    }

    #[track_caller]
    fn new(stage: Stage, locale: Locale, cause: Cause) -> Self {
        let err = Self {
            stage,
            tag: locale.tag(stage),
            cause,
            location: Location::caller(),
        };
        tracing::debug!(
            stage = %stage,
            depth = err.depth(),
            location = %err.location,
            error = %err,
            "json codec failure"
        );
        err
    }

    /// Returns which codec step failed.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Returns the tag this layer prefixes to the message.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns the call site that produced this layer.
    pub fn location(&self) -> &'static Location<'static> {
        self.location
    }

    /// Returns the wrapped codec error when this layer rewraps another one.
    pub fn inner(&self) -> Option<&CodecError> {
        match &self.cause {
            Cause::Json(_) => None,
            Cause::Layer(inner) => Some(inner),
        }
    }

    /// Number of tagged layers, 1 for a direct serializer failure.
    pub fn depth(&self) -> usize {
        let mut depth = 1;
        let mut current = self;
        while let Some(inner) = current.inner() {
            depth += 1;
            current = inner;
        }
        depth
    }

    /// Returns the serializer failure at the bottom of the layer stack.
    pub fn json_error(&self) -> &serde_json::Error {
        match &self.cause {
            Cause::Json(err) => err,
            Cause::Layer(inner) => inner.json_error(),
        }
    }

    /// Consumes the layers and returns the serializer failure.
    pub fn into_json_error(self) -> serde_json::Error {
        match self.cause {
            Cause::Json(err) => err,
            Cause::Layer(inner) => inner.into_json_error(),
        }
    }

    /// Serializer classification of the underlying failure.
    pub fn category(&self) -> Category {
        self.json_error().classify()
    }

    /// One-based input line of a decode failure; zero when unknown.
    pub fn line(&self) -> usize {
        self.json_error().line()
    }

    /// One-based input column of a decode failure; zero when unknown.
    pub fn column(&self) -> usize {
        self.json_error().column()
    }

    /// True when the input ended before a complete value was read.
    pub fn is_eof(&self) -> bool {
        self.json_error().is_eof()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::{CodecError, Stage};
    use crate::Locale;

    fn syntax_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{invalid").expect_err("input is malformed")
    }

    #[test]
    fn single_layer_display_and_source() {
        let err = CodecError::json(Stage::Decode, Locale::English, syntax_error());
        let cause = syntax_error().to_string();

        assert_eq!(err.to_string(), format!("decode error: {cause}"));
        assert_eq!(err.depth(), 1);
        assert!(err.inner().is_none());
        assert_eq!(
            err.source().expect("source should be present").to_string(),
            cause
        );
    }

    #[test]
    fn rewrap_keeps_stage_and_nests() {
        let err = CodecError::json(Stage::Encode, Locale::Chinese, syntax_error())
            .rewrap(Locale::Chinese);

        assert_eq!(err.stage(), Stage::Encode);
        assert_eq!(err.depth(), 2);
        assert!(err.to_string().starts_with("编码错误: 编码错误: "));
        assert_eq!(err.line(), 1);
        assert_eq!(
            err.source().expect("outer source").to_string(),
            err.inner().expect("inner layer").to_string()
        );
    }

    #[test]
    fn location_points_at_constructor_caller() {
        let line = line!() + 1;
        let err = CodecError::json(Stage::Decode, Locale::English, syntax_error());
        assert_eq!(err.location().file(), file!());
        assert_eq!(err.location().line(), line);
    }
}
