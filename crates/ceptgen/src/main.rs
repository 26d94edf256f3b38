use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use ceptgen_codegen::convert_recording;
use ceptgen_common::diagnostics::Diagnostics;
use clap::Parser;

#[derive(Parser)]
#[command(
    name = "ceptgen",
    version,
    about = "Export Chrome DevTools recordings as CodeceptJS scenarios"
)]
struct Args {
    /// Recording JSON files exported from the DevTools Recorder panel
    #[arg(required = true)]
    recordings: Vec<PathBuf>,

    /// Directory the generated test files are written to
    #[arg(short, long, default_value = "tests")]
    output: PathBuf,

    /// Print generated code to stdout instead of writing files
    #[arg(long)]
    dry_run: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Log to stderr so generated code can be piped from stdout in dry runs.
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    for path in &args.recordings {
        convert_file(path, &args)?;
    }

    Ok(())
}

fn convert_file(path: &Path, args: &Args) -> anyhow::Result<()> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read recording {}", path.display()))?;

    let mut diags = Diagnostics::new();
    let script = convert_recording(&content, &mut diags)
        .with_context(|| format!("failed to convert recording {}", path.display()))?;

    for warning in diags.warnings() {
        tracing::warn!("{}: {warning}", path.display());
    }

    let Some(script) = script else {
        return Ok(());
    };

    if args.dry_run {
        print!("{script}");
        return Ok(());
    }

    fs::create_dir_all(&args.output)
        .with_context(|| format!("failed to create output directory {}", args.output.display()))?;
    let out_path = args.output.join(output_file_name(path));
    fs::write(&out_path, &script)
        .with_context(|| format!("failed to write {}", out_path.display()))?;
    tracing::info!("wrote {}", out_path.display());

    Ok(())
}

/// `login.json` becomes `login_test.js`, matching the CodeceptJS test file
/// naming convention.
fn output_file_name(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("recording");
    PathBuf::from(format!("{stem}_test.js"))
}
