//! propkit - prints one key from a bundled properties resource
//!
//! The binary in `main.rs` is a thin shell around [`run`], which takes the
//! parsed command line and the stream to print to.

pub mod bundle;
pub mod cli;

use std::io::Write;

use anyhow::Context;
use propkit_core::{
    ConfigFormat, DirectoryResources, LookupRequest, ResourceSource, load_properties,
};

use crate::cli::Cli;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Executes one invocation.
///
/// Nothing is written to `out` unless loading succeeds, so a failed run
/// leaves standard output empty.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    let source = resource_source(cli);
    tracing::debug!(location = %source.location(), resource = %cli.resource, "Resolved resource source");

    if cli.list {
        let map = load_properties(source.as_ref(), &cli.resource)
            .with_context(|| format!("failed to load resource '{}'", cli.resource))?;
        let text = ConfigFormat::from(cli.format)
            .serializer()
            .serialize(&map)
            .context("failed to render properties")?;
        out.write_all(text.as_bytes())?;
    } else {
        let mut builder = LookupRequest::builder()
            .resource(&cli.resource)
            .key(&cli.key);
        if let Some(default) = &cli.default_value {
            builder = builder.default_value(default);
        }
        let request = builder.build()?;

        let value = request
            .execute(source.as_ref())
            .with_context(|| format!("failed to load resource '{}'", cli.resource))?;
        writeln!(out, "{}", value.unwrap_or_default())?;
    }

    out.flush()?;
    Ok(())
}

fn resource_source(cli: &Cli) -> Box<dyn ResourceSource> {
    match &cli.root {
        Some(root) => Box::new(DirectoryResources::new(root)),
        None => Box::new(bundle::BUNDLED),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn run_args(args: &[&str]) -> (anyhow::Result<()>, String) {
        let cli = Cli::try_parse_from(std::iter::once("propkit").chain(args.iter().copied()))
            .unwrap();
        let mut out = Vec::new();
        let result = run(&cli, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn version_is_defined() {
        assert!(!version().is_empty());
    }

    #[test]
    fn test_default_invocation_prints_bundled_value() {
        let (result, out) = run_args(&[]);

        assert!(result.is_ok());
        assert_eq!(out, "Hello from the bundled configuration\n");
    }

    #[test]
    fn test_absent_key_prints_blank_line() {
        let (result, out) = run_args(&["--key", "missing"]);

        assert!(result.is_ok());
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_absent_key_with_default() {
        let (result, out) = run_args(&["--key", "missing", "--default", "fallback"]);

        assert!(result.is_ok());
        assert_eq!(out, "fallback\n");
    }

    #[test]
    fn test_missing_resource_writes_nothing() {
        let (result, out) = run_args(&["--resource", "config/missing.properties"]);

        let err = result.unwrap_err();
        assert!(out.is_empty());
        assert!(format!("{err:#}").contains("config/missing.properties"));
        assert!(
            err.downcast_ref::<propkit_core::PropkitError>()
                .is_some_and(|e| e.is_not_found())
        );
    }

    #[test]
    fn test_list_bundled() {
        let (result, out) = run_args(&["--list"]);

        assert!(result.is_ok());
        assert!(out.contains("a=Hello from the bundled configuration\n"));
        assert!(out.contains("b=2\n"));
    }
}
