//! Telling error categories apart.
//!
//! Run with: cargo run --example error_handling

use serde::Deserialize;
use text_parameters::{from_str, Category, Error};

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Limits {
    #[serde(rename = "max-conn")]
    max_conn: u32,
    ratio: f64,
}

fn describe(body: &str) {
    match from_str::<Limits>(body) {
        Ok(limits) => println!("{body:?}\n  ok: {limits:?}"),
        Err(err) => {
            let kind = match err.category() {
                Category::Format => "malformed body",
                Category::FieldType => "value does not fit its field",
                Category::Usage => "record cannot be coded",
                Category::Io => "stream failure",
                Category::Custom => "other",
            };
            println!("{body:?}\n  {kind}: {err}");
        }
    }
}

fn main() {
    describe("max-conn: 64\nratio: 0.5");
    describe("max conn: 64");
    describe("max-conn: -1");
    describe("ratio: half");

    if let Err(Error::StructPointer { found }) = from_str::<u32>("max-conn: 64") {
        println!("decoding into a bare {found} is refused");
    }
}
