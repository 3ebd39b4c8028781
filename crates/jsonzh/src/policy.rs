//! Failure policies shared by the strategy variants.
//!
//! Each variant module (`must`, `soft`, `omit`) is the same four codec
//! operations instantiated with one [`FailurePolicy`].

use serde::{Serialize, de::DeserializeOwned};

use crate::{Codec, CodecError};

/// Decides what a codec failure producing `T` turns into at the call site.
///
/// Only the defaulting policies require `T: Default`.
pub trait FailurePolicy<T> {
    /// What callers receive.
    type Output;

    /// Converts a codec result into the policy's output.
    fn settle(result: Result<T, CodecError>) -> Self::Output;
}

/// Returns the error to the caller unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Propagate;

/// Panics with the wrapped error message.
#[derive(Debug, Clone, Copy, Default)]
pub struct Abort;

/// Logs a warning and falls back to the default value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Soft;

/// Drops the error and falls back to the default value.
#[derive(Debug, Clone, Copy, Default)]
pub struct Discard;

impl<T> FailurePolicy<T> for Propagate {
    type Output = Result<T, CodecError>;

    fn settle(result: Result<T, CodecError>) -> Self::Output {
        result
    }
}

impl<T> FailurePolicy<T> for Abort {
    type Output = T;

    #[track_caller]
    fn settle(result: Result<T, CodecError>) -> Self::Output {
        match result {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T: Default> FailurePolicy<T> for Soft {
    type Output = T;

    fn settle(result: Result<T, CodecError>) -> Self::Output {
        match result {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(
                    stage = %err.stage(),
                    location = %err.location(),
                    error = %err,
                    "json codec failure replaced with default value"
                );
                T::default()
            }
        }
    }
}

impl<T: Default> FailurePolicy<T> for Discard {
    type Output = T;

    fn settle(result: Result<T, CodecError>) -> Self::Output {
        result.unwrap_or_default()
    }
}

#[track_caller]
pub fn encode<P, V>(codec: &Codec, value: &V) -> P::Output
where
    P: FailurePolicy<Vec<u8>>,
    V: Serialize + ?Sized,
{
    P::settle(codec.encode(value))
}

#[track_caller]
pub fn decode<P, T>(codec: &Codec, bytes: &[u8]) -> P::Output
where
    P: FailurePolicy<T>,
    T: DeserializeOwned,
{
    P::settle(codec.decode(bytes))
}

#[track_caller]
pub fn encode_to_text<P, V>(codec: &Codec, value: &V) -> P::Output
where
    P: FailurePolicy<String>,
    V: Serialize + ?Sized,
{
    P::settle(codec.encode_to_text(value))
}

#[track_caller]
pub fn decode_from_text<P, T>(codec: &Codec, text: &str) -> P::Output
where
    P: FailurePolicy<T>,
    T: DeserializeOwned,
{
    P::settle(codec.decode_from_text(text))
}

/// Stamps out the four default-codec operations for one policy.
macro_rules! policy_functions {
    ($policy:ty) => {
        /// Serializes `value` to JSON bytes.
        #[track_caller]
        pub fn encode<V: ::serde::Serialize + ?Sized>(
            value: &V,
        ) -> <$policy as $crate::policy::FailurePolicy<Vec<u8>>>::Output {
            $crate::policy::encode::<$policy, V>(&$crate::Codec::default(), value)
        }

        /// Deserializes JSON bytes into a new `T`.
        #[track_caller]
        pub fn decode<T>(bytes: &[u8]) -> <$policy as $crate::policy::FailurePolicy<T>>::Output
        where
            T: ::serde::de::DeserializeOwned,
            $policy: $crate::policy::FailurePolicy<T>,
        {
            $crate::policy::decode::<$policy, T>(&$crate::Codec::default(), bytes)
        }

        /// Serializes `value` to a JSON string.
        #[track_caller]
        pub fn encode_to_text<V: ::serde::Serialize + ?Sized>(
            value: &V,
        ) -> <$policy as $crate::policy::FailurePolicy<String>>::Output {
            $crate::policy::encode_to_text::<$policy, V>(&$crate::Codec::default(), value)
        }

        /// Deserializes a JSON string into a new `T`.
        #[track_caller]
        pub fn decode_from_text<T>(
            text: &str,
        ) -> <$policy as $crate::policy::FailurePolicy<T>>::Output
        where
            T: ::serde::de::DeserializeOwned,
            $policy: $crate::policy::FailurePolicy<T>,
        {
            $crate::policy::decode_from_text::<$policy, T>(&$crate::Codec::default(), text)
        }
    };
}

pub(crate) use policy_functions;
