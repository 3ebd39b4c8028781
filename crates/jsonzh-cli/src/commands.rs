use std::{
    fs,
    io::{self, Read},
    path::Path,
};

use jsonzh::{Codec, CodecError};
use serde_json::Value;

use crate::CliError;

/// Reads the whole document from `path`, or from stdin when absent.
pub fn read_input(path: Option<&Path>) -> Result<String, CliError> {
    match path {
        Some(path) => fs::read_to_string(path).map_err(|source| CliError::Read {
            path: path.display().to_string(),
            source,
        }),
        None => {
            let mut input = String::new();
            io::stdin().lock().read_to_string(&mut input)?;
            Ok(input)
        }
    }
}

/// Parses `input` as an arbitrary JSON document.
pub fn check(codec: &Codec, input: &str) -> Result<(), CodecError> {
    codec.decode_from_text::<Value>(input).map(|_| ())
}

/// Parses `input` and re-encodes it with the codec's layout, keeping key order.
pub fn normalize(codec: &Codec, input: &str) -> Result<String, CodecError> {
    let value: Value = codec.decode_from_text(input)?;
    codec.encode_to_text(&value)
}

#[cfg(test)]
mod tests {
    use jsonzh::{Category, Codec, Locale};

    use super::{check, normalize};

    #[test]
    fn check_accepts_any_document() {
        let codec = Codec::default();
        check(&codec, r#"{"a":[1,2,{"b":null}]}"#).expect("object should parse");
        check(&codec, "42").expect("scalar should parse");
    }

    #[test]
    fn check_reports_position_of_syntax_errors() {
        let err = check(&Codec::default(), "{\n  \"a\": trux\n}").expect_err("bad literal");

        assert_eq!(err.category(), Category::Syntax);
        assert_eq!(err.line(), 2);
        assert!(err.to_string().starts_with("decode error: decode error: "));
    }

    #[test]
    fn normalize_keeps_key_order() {
        let input = "{ \"name\" : \"Laptop\",\n \"id\": 1001 }";

        let compact = normalize(&Codec::default(), input).expect("normalize should succeed");
        assert_eq!(compact, r#"{"name":"Laptop","id":1001}"#);

        let pretty =
            normalize(&Codec::default().pretty(true), input).expect("normalize should succeed");
        assert_eq!(pretty, "{\n  \"name\": \"Laptop\",\n  \"id\": 1001\n}");
    }

    #[test]
    fn normalize_uses_codec_locale() {
        let err = normalize(&Codec::new(Locale::Chinese), "").expect_err("empty input");
        assert!(err.is_eof());
        assert!(err.to_string().starts_with("解码错误: 解码错误: "));
    }
}
