//! Customizing marshal output with MarshalOptions.
//!
//! Run with: cargo run --example custom_options

use serde::Serialize;
use std::error::Error;
use text_parameters::{to_string, to_string_with_options, EmptyValue, KeyOrder, MarshalOptions};

#[derive(Debug, Serialize)]
struct Request {
    #[serde(rename = "Method")]
    method: String,
    #[serde(rename = "Content-Length")]
    content_length: u64,
    #[serde(rename = "Comment")]
    comment: String,
}

fn main() -> Result<(), Box<dyn Error>> {
    let request = Request {
        method: "DESCRIBE".to_string(),
        content_length: 0,
        comment: String::new(),
    };

    // Default: sorted names, empty values as bare names
    println!("Default:\n{}", to_string(&request)?);

    // Declaration order instead of sorted order
    let options = MarshalOptions::new().with_key_order(KeyOrder::Insertion);
    println!("Insertion order:\n{}", to_string_with_options(&request, &options)?);

    // Keep the separator on empty values
    let options = MarshalOptions::new().with_empty_values(EmptyValue::Separator);
    println!("With separator:\n{}", to_string_with_options(&request, &options)?);

    Ok(())
}
