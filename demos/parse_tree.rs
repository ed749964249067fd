//! Dump the parse tree of a single descriptor line.
//!
//! Usage: `cargo run --example parse_tree -- "-ellipse(40,40,20,10,30) # color=red"`

use pest::Parser;
use regmask::{RegionParser, Rule};

fn main() {
    let line = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "circle(100,100,20) # color=green".to_string());
    pest_ascii_tree::print_ascii_tree(RegionParser::parse(Rule::line, &line));
}
