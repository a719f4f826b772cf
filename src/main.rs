//! qpropgen: generate QML property-based headers and implementation.
//!
//! ```bash
//! qpropgen -d src/generated person.yaml
//! ```
//!
//! Reads one YAML class definition and writes the matching `.h`/`.cpp` pair.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use qpropgen::{ClassDefinition, Generator};

/// Generate QML property-based headers and implementation
#[derive(Parser, Debug)]
#[command(name = "qpropgen", version)]
struct Cli {
    /// Path to the class definition file
    class_definition: PathBuf,

    /// generate files in DIR
    #[arg(short, long, value_name = "DIR", default_value = ".")]
    directory: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let definition = ClassDefinition::load(&cli.class_definition)?;
    Generator::new().generate(&definition, &cli.directory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directory_defaults_to_current_dir() {
        let cli = Cli::parse_from(["qpropgen", "person.yaml"]);
        assert_eq!(cli.class_definition, PathBuf::from("person.yaml"));
        assert_eq!(cli.directory, PathBuf::from("."));
    }

    #[test]
    fn directory_accepts_short_and_long_forms() {
        let short = Cli::parse_from(["qpropgen", "-d", "out", "person.yaml"]);
        assert_eq!(short.directory, PathBuf::from("out"));

        let long = Cli::parse_from(["qpropgen", "--directory", "out", "person.yaml"]);
        assert_eq!(long.directory, PathBuf::from("out"));
    }

    #[test]
    fn definition_path_is_required() {
        assert!(Cli::try_parse_from(["qpropgen"]).is_err());
    }
}
