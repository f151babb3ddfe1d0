//! Working with raw parameter maps, without any record type.
//!
//! Run with: cargo run --example untyped_map

use std::error::Error;
use text_parameters::{marshal, unmarshal, ParameterMap};

fn main() -> Result<(), Box<dyn Error>> {
    let body = "foo   :    gold\nbar:           silver\nbaz\nF:oo: 3\n";

    let mut params = unmarshal(body.as_bytes())?;
    println!("Parsed {} parameters", params.len());
    for (name, value) in params.iter() {
        println!("  {name:?} => {value:?}");
    }

    params.set("qux", "bronze");
    params.delete("baz");
    println!("\nAbsent names read as empty: {:?}", params.get("baz"));

    println!("\nMarshaled:\n{}", marshal(&params));

    let reparsed: ParameterMap = params.to_string().parse()?;
    assert_eq!(params, reparsed);
    println!("✓ Round-trip successful");

    Ok(())
}
