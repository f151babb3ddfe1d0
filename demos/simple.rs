//! Basic record encoding and decoding.
//!
//! Run with: cargo run --example simple

use serde::{Deserialize, Serialize};
use std::error::Error;
use text_parameters::{from_str, to_string};

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Transfer {
    #[serde(rename = "packet-received")]
    received: u64,
    #[serde(rename = "transfer-time")]
    time: f64,
    #[serde(rename = "Extra")]
    extra: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let transfer = Transfer {
        received: 1024,
        time: 12.345,
        extra: "extra-field".to_string(),
    };

    // Encode to text parameters
    let text = to_string(&transfer)?;
    println!("Encoded:\n{}", text);

    // Decode back into the record
    let transfer_back: Transfer = from_str(&text)?;
    assert_eq!(transfer, transfer_back);
    println!("✓ Round-trip successful");

    // Missing parameters decode to zero values
    let partial: Transfer = from_str("packet-received: 7")?;
    println!("Partial body decoded as: {:?}", partial);

    Ok(())
}
