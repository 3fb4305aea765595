use anyhow::{Context, Result};
use carddb::carddb::CardRepository;
use schemars::schema_for;
use std::path::Path;

//The rendering layer generates its types from this schema
pub fn write_types(path: &Path) -> Result<()> {
    let schema = schema_for!(CardRepository);
    let out = serde_json::to_string_pretty(&schema)?;
    std::fs::write(path, out)
        .with_context(|| format!("couldn't write schema to {}", path.display()))?;
    Ok(())
}
