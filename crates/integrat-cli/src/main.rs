use std::path::PathBuf;

use anyhow::bail;
use clap::Parser;

use integrat_cli::report;

#[derive(Parser)]
#[command(
    name = "integrat-validate",
    about = "Validate integrat.yaml plugin manifests"
)]
struct Cli {
    /// Manifest files to validate (defaults to ./integrat.yaml)
    files: Vec<PathBuf>,
    /// Emit one JSON object per file instead of the human report
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let files = if cli.files.is_empty() {
        let default = PathBuf::from("integrat.yaml");
        if !default.exists() {
            bail!("no input files and no integrat.yaml in the current directory");
        }
        vec![default]
    } else {
        cli.files
    };

    let mut has_errors = false;
    for path in &files {
        match report::validate_file(path) {
            Ok(validation) => {
                if cli.json {
                    let json = report::render_json(path, &validation);
                    println!("{}", serde_json::to_string_pretty(&json)?);
                } else {
                    print!("{}", report::render_human(path, &validation));
                }
                if !validation.is_ok() {
                    has_errors = true;
                }
            }
            Err(e) => {
                eprintln!("✗ {}: {e:#}", path.display());
                has_errors = true;
            }
        }
    }

    if has_errors {
        std::process::exit(1);
    }
    Ok(())
}
