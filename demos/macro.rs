//! Building parameter maps with the params! macro.
//!
//! Run with: cargo run --example macro

use std::error::Error;
use text_parameters::{from_params, marshal, params};

fn main() -> Result<(), Box<dyn Error>> {
    let session = params! {
        "Received" => 10,
        "Time" => 0.3838,
        "Money" => 1980,
        "Note" => "",
    };

    println!("Map literal:\n{}", marshal(&session));

    // Values become plain strings; typing happens when a record is decoded.
    #[derive(Debug, serde::Deserialize)]
    #[allow(dead_code)]
    struct Session {
        #[serde(rename = "Received")]
        received: i32,
        #[serde(rename = "Time")]
        time: f64,
        #[serde(rename = "Money")]
        money: u32,
    }

    let decoded: Session = from_params(&session)?;
    println!("Decoded: {:?}", decoded);

    Ok(())
}
