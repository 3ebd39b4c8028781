use jsonzh::{
    Codec,
    policy::{self, Abort},
};
use serde::{Deserialize, Serialize};

use crate::CliError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    pub age: u32,
    pub status: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub mode: String,
}

/// Byte round trip through the fallible operations.
pub fn person(codec: &Codec) -> Result<(), CliError> {
    let person = Person {
        name: "Alice".to_string(),
        age: 25,
        status: "Active".to_string(),
    };

    let data = codec.encode(&person)?;
    println!("JSON bytes: {}", String::from_utf8_lossy(&data));

    let decoded: Person = codec.decode(&data)?;
    println!(
        "Decoded: Name={}, Age={}, Status={}",
        decoded.name, decoded.age, decoded.status
    );
    Ok(())
}

/// Text round trip through the fallible operations.
pub fn product(codec: &Codec) -> Result<(), CliError> {
    let product = Product {
        id: 1001,
        name: "Laptop".to_string(),
        price: 5999.99,
    };

    let text = codec.encode_to_text(&product)?;
    println!("JSON string: {text}");

    let decoded: Product = codec.decode_from_text(&text)?;
    println!(
        "Decoded: ID={}, Name={}, Price={:.2}",
        decoded.id, decoded.name, decoded.price
    );
    Ok(())
}

/// Byte round trip through the panicking operations.
pub fn config(codec: &Codec) -> Result<(), CliError> {
    let config = Config {
        host: "localhost".to_string(),
        port: 8080,
        mode: "production".to_string(),
    };

    let data = policy::encode::<Abort, _>(codec, &config);
    println!("JSON bytes: {}", String::from_utf8_lossy(&data));

    let decoded: Config = policy::decode::<Abort, _>(codec, &data);
    println!(
        "Decoded: Host={}, Port={}, Mode={}",
        decoded.host, decoded.port, decoded.mode
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use jsonzh::{
        Codec, Locale, decode, encode_to_text,
        policy::{self, Abort},
    };

    use super::{Config, Person, Product, config};

    #[test]
    fn person_encodes_in_field_order() {
        let person = Person {
            name: "Alice".to_string(),
            age: 25,
            status: "Active".to_string(),
        };
        let bytes = Codec::default().encode(&person).expect("encode should succeed");
        assert_eq!(bytes, br#"{"name":"Alice","age":25,"status":"Active"}"#);
    }

    #[test]
    fn product_price_survives_text_round_trip() {
        let product = Product {
            id: 1001,
            name: "Laptop".to_string(),
            price: 5999.99,
        };
        let text = encode_to_text(&product).expect("encode should succeed");
        assert_eq!(text, r#"{"id":1001,"name":"Laptop","price":5999.99}"#);

        let decoded: Product = decode(text.as_bytes()).expect("decode should succeed");
        assert_eq!(decoded, product);
    }

    #[test]
    fn config_demo_round_trips_with_a_configured_codec() {
        config(&Codec::new(Locale::Chinese)).expect("demo should succeed");

        let sample = Config {
            host: "localhost".to_string(),
            port: 8080,
            mode: "production".to_string(),
        };
        let codec = Codec::default().pretty(true);
        let data = policy::encode::<Abort, _>(&codec, &sample);
        assert!(data.starts_with(b"{\n  \"host\""));
    }
}
