//! Example generating TypeScript declarations from saved listings.
//!
//! Run with: `cargo run --example generate -- schemas.json [custom_attributes.json]`

use anyhow::{Context, bail};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use typesmith::prelude::*;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = std::env::args().skip(1);
    let Some(schema_path) = args.next().map(PathBuf::from) else {
        bail!("usage: generate <schemas.json> [custom_attributes.json]");
    };
    let attribute_path = args.next().map(PathBuf::from);

    let schema_json = std::fs::read_to_string(&schema_path)
        .with_context(|| format!("reading {}", schema_path.display()))?;
    let schemas = parse_schemas(&schema_json)?;

    let custom_attributes = match &attribute_path {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            parse_custom_attributes(&json)?
        }
        None => Vec::new(),
    };

    let ir = SchemaIr::from_schemas(&schemas);
    let config = GeneratorBuilder::new()
        .banner(Banner::new("Entity API"))
        .build();
    let output = Generator::with_config(&ir, &custom_attributes, config).generate()?;

    for error in &output.errors {
        tracing::warn!("{}", error);
    }
    print!("{}", output.code);

    Ok(())
}
