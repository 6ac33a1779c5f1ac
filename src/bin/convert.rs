#![allow(unused)]
#[path = "../common/mod.rs"]
mod common;
#[path = "../config/mod.rs"]
mod config;
#[path = "../file_storage/mod.rs"]
mod file_storage;
#[path = "../logger.rs"]
mod logger;

use std::path::PathBuf;

use color_eyre::eyre::Result;
use common::errors::ConfigError;
use dotenv::dotenv;

const USAGE: &str = "convert /path/to/svg /path/to/output_dir [size...]";

#[derive(Debug, PartialEq, Eq)]
struct Args {
    file_path: PathBuf,
    output_dir: PathBuf,
    sizes: Vec<u32>,
}

/// Parses `<in-svg> <out-dir> [size...]`, sizes default to 16, 48 and 128
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let file_path = args.next().ok_or(ConfigError::MissingArgument("in-svg"))?;
    let output_dir = args.next().ok_or(ConfigError::MissingArgument("out-dir"))?;

    let mut sizes = args.map(|arg| config::parse_size(&arg)).collect::<Result<Vec<_>>>()?;
    if sizes.is_empty() {
        sizes = config::DEFAULT_SIZES.to_vec();
    }

    Ok(Args { file_path: PathBuf::from(file_path), output_dir: PathBuf::from(output_dir), sizes })
}

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();
    logger::init();

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", USAGE);
            return Err(e);
        }
    };

    println!("{} {}", args.file_path.display(), args.output_dir.display());

    file_storage::convert_svg_to_png(&args.file_path, &args.output_dir, &args.sizes)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> impl Iterator<Item = String> {
        values.iter().map(|v| (*v).to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn explicit_sizes_keep_their_order() {
        let parsed = parse_args(args(&["icon.svg", "out", "128", "16", "16"])).unwrap();

        assert_eq!(
            parsed,
            Args {
                file_path: PathBuf::from("icon.svg"),
                output_dir: PathBuf::from("out"),
                sizes: vec![128, 16, 16],
            }
        );
    }

    #[test]
    fn sizes_default_when_omitted() {
        let parsed = parse_args(args(&["icon.svg", "out"])).unwrap();
        assert_eq!(parsed.sizes, vec![16, 48, 128]);
    }

    #[test]
    fn missing_paths_are_reported() {
        let err = parse_args(args(&[])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingArgument("in-svg"))
        ));

        let err = parse_args(args(&["icon.svg"])).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::MissingArgument("out-dir"))
        ));
    }

    #[test]
    fn bad_sizes_are_rejected() {
        for bad in ["0", "-1", "big"] {
            let err = parse_args(args(&["icon.svg", "out", "16", bad])).unwrap_err();
            assert!(
                matches!(err.downcast_ref::<ConfigError>(), Some(ConfigError::InvalidSize(_))),
                "{bad}"
            );
        }
    }
}
