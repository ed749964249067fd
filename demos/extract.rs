//! Parse a region descriptor and print the resulting mask as ASCII art.
//!
//! Usage: `cargo run --example extract -- "circle(0,0,8);-box(0,0,6,4,30)"`
//! With the `tracing` feature enabled, set `RUST_LOG=debug` for
//! parse/extent/crop traces.

use regmask::{MaskExtent, extract};

const SAMPLE: &str = "\
global color=green
image
annulus(0,0,9,5)
-box(0,0,6,4,30)
";

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let text = std::env::args()
        .nth(1)
        .unwrap_or_else(|| SAMPLE.to_string());
    let mask = extract(&text, MaskExtent::FitRegions)?;

    let extent = mask.extent();
    println!(
        "x {}..={}  y {}..={}  ({} pixels set)",
        extent.x.lo,
        extent.x.hi,
        extent.y.lo,
        extent.y.hi,
        mask.area()
    );
    println!("{mask}");
    Ok(())
}
