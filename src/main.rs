use std::path::PathBuf;

use clap::Parser;
use crd_convert::{
    ConvertOptions,
    convert::{self, DEFAULT_DEST, DEFAULT_SRC},
    telemetry,
};
use tracing::info;

/// Split CustomResourceDefinition files into one file per version
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Source directory holding CRD YAML files
    #[arg(short, long, default_value = DEFAULT_SRC)]
    src: PathBuf,

    /// Destination directory for <group>/<kind>/<version>.yaml
    #[arg(short, long, default_value = DEFAULT_DEST)]
    dest: PathBuf,

    /// Log filter as an EnvFilter directive (e.g. `debug`, `crd_convert=info`), written to stderr
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl From<Args> for ConvertOptions {
    fn from(args: Args) -> Self {
        Self {
            src: args.src,
            dest: args.dest,
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    telemetry::init(&args.log_level)?;
    let opts = ConvertOptions::from(args);
    let summary = convert::convert(&opts)?;
    info!(
        "Wrote {} file(s), skipped {} file(s) without versions",
        summary.written.len(),
        summary.skipped.len()
    );
    Ok(())
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(args) {
        println!("Error: {err}");
        std::process::exit(1);
    }
    println!("Convert Finished");
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults_match_convert_options() {
        let args = Args::try_parse_from(["convert-gen"]).expect("parse");
        assert_eq!(args.log_level, "warn");
        assert_eq!(ConvertOptions::from(args), ConvertOptions::default());
    }

    #[test]
    fn flags_override_paths() {
        let args = Args::try_parse_from(["convert-gen", "--src", "crds", "-d", "out"]).expect("parse");
        let opts = ConvertOptions::from(args);
        assert_eq!(opts.src, PathBuf::from("crds"));
        assert_eq!(opts.dest, PathBuf::from("out"));
    }
}
