//! Generate one puzzle and print it as JSON.
//!
//! ```text
//! cargo run -p letragrama-bench --example quickstart -- 42
//! ```

use letragrama_bench::{reference_clues, reference_profile, SPANGRAM};
use letragrama_engine::Generator;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let seed = std::env::args()
        .nth(1)
        .map(|s| s.parse::<u64>())
        .transpose()?
        .unwrap_or(0);

    let mut generator = Generator::new(reference_profile(seed))?;
    let report = generator.locate_all(SPANGRAM, reference_clues())?;
    println!("{}\n", generator.board());
    if !report.is_complete() {
        eprintln!("unplaced: {}", report.unplaced.join(", "));
    }

    let exported = generator.export("Cielo", "quickstart")?;
    println!("{}", exported.to_json_pretty()?);
    Ok(())
}
