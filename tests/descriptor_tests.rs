//! Data-driven parser tests: each `tests/descriptors/*.reg` fixture is
//! parsed and its canonical dump compared against the paired `.expected`
//! file.

use datatest_stable::Utf8Path;

fn test_descriptor_file(path: &Utf8Path) -> datatest_stable::Result<()> {
    let source = std::fs::read_to_string(path)?;
    let expected = std::fs::read_to_string(path.with_extension("expected"))?;

    let actual = regmask::parse_regions(&source).to_string();
    if actual.trim_end() != expected.trim_end() {
        return Err(format!(
            "canonical dump mismatch for {path}\n--- expected ---\n{expected}\n--- actual ---\n{actual}"
        )
        .into());
    }
    Ok(())
}

datatest_stable::harness! {
    { test = test_descriptor_file, root = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/descriptors"), pattern = r"\.reg$" },
}
