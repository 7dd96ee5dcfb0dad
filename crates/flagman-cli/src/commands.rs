use std::path::Path;

use anyhow::Context;
use tracing::{debug, info, warn};

use flagman_diff::{compare_with, CompareOptions};
use flagman_types::Manifest;

use crate::cli::*;
use crate::config::FlagmanConfig;
use crate::render;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    let config = FlagmanConfig::load(cli.config.as_deref())?;
    match cli.command {
        Command::Compare(args) => cmd_compare(args, &config),
    }
}

fn cmd_compare(args: CompareArgs, config: &FlagmanConfig) -> anyhow::Result<()> {
    let output = args
        .output
        .or(config.compare.output)
        .unwrap_or(OutputFormat::Tree);

    let mut options = CompareOptions::new();
    options.ignore_patterns.extend(config.compare.ignore.iter().cloned());
    options.ignore_patterns.extend(args.ignore);
    let ignore = options.compile();
    debug!(patterns = ?options.ignore_patterns, "compiled ignore patterns");

    let source = load_manifest(&args.manifest).context("loading source manifest")?;
    let target = load_manifest(&args.against).context("loading target manifest")?;

    let diff = compare_with(&source, &target, &ignore)?;
    info!(
        source = %args.manifest.display(),
        target = %args.against.display(),
        changes = diff.len(),
        "compared manifests"
    );

    if diff.is_empty() {
        println!("No differences found between the manifests.");
        return Ok(());
    }

    let text = match output {
        OutputFormat::Flat => render::render_flat(&diff),
        OutputFormat::Tree => render::render_tree(&diff, &ignore),
        OutputFormat::Json => render::render_json(&diff)?,
        OutputFormat::Yaml => render::render_yaml(&diff)?,
    };
    print!("{text}");
    if !text.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn load_manifest(path: &Path) -> anyhow::Result<Manifest> {
    let bytes = std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let manifest =
        Manifest::from_json_slice(&bytes).with_context(|| format!("parsing {}", path.display()))?;

    // Compare runs on unvalidated manifests; surface odd types without failing.
    for key in manifest.keys() {
        if let Err(err) = manifest.flag_type(key) {
            warn!(manifest = %path.display(), flag = key, "{err}");
        }
    }
    Ok(manifest)
}
