//! Constructs a few containers and reads them back out.
//!
//! Run with `cargo run --example basic`.

use optres::container::{Error, Optional, Outcome};

fn main() {
    let value = 12345;
    let fallback = 123;

    let success: Outcome<i32> = Outcome::ok(value);
    println!("{}", success.unwrap_or(fallback)); // 12345

    let absent: Optional<i32> = Optional::none();
    println!("{}", absent.unwrap_or(fallback)); // 123

    let failure: Outcome<i32> = Outcome::err(Error::msg("connection reset"));
    let message = failure.map_or_else(|error| format!("failed: {error}"), |n| n.to_string());
    println!("{message}"); // failed: connection reset
}
