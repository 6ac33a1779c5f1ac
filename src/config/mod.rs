use std::{
    env::{self, VarError},
    path::{Path, PathBuf},
};

use color_eyre::eyre::{bail, ensure, eyre, Result, WrapErr};

use crate::common::errors::ConfigError;

pub const DEFAULT_SIZES: [u32; 3] = [16, 48, 128];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub sizes: Vec<u32>,
}

impl Settings {
    /// `<base>/icons/icon.svg` rendered into `<base>/icons/` at the default sizes
    pub fn with_base(base: &Path) -> Self {
        let output_dir = base.join("icons");

        Self { input: output_dir.join("icon.svg"), output_dir, sizes: DEFAULT_SIZES.to_vec() }
    }

    /// Applies overrides on top of the defaults for `base`. Sizes are parsed with
    /// [`parse_sizes`].
    pub fn resolve(
        base: &Path,
        input: Option<PathBuf>,
        output_dir: Option<PathBuf>,
        sizes: Option<&str>,
    ) -> Result<Self> {
        let mut settings = Self::with_base(base);

        if let Some(input) = input {
            settings.input = input;
        }
        if let Some(output_dir) = output_dir {
            settings.output_dir = output_dir;
        }
        if let Some(sizes) = sizes {
            settings.sizes = parse_sizes(sizes)?;
        }

        Ok(settings)
    }

    /// Reads `ICON_BASE_DIR`, `ICON_INPUT`, `ICON_OUTPUT_DIR` and `ICON_SIZES`,
    /// falling back to the directory of the running program and the defaults.
    pub fn from_env() -> Result<Self> {
        let base = match env::var_os("ICON_BASE_DIR") {
            Some(base) => PathBuf::from(base),
            None => program_dir()?,
        };
        let sizes = sizes_var(env::var("ICON_SIZES"))?;

        Self::resolve(
            &base,
            env::var_os("ICON_INPUT").map(PathBuf::from),
            env::var_os("ICON_OUTPUT_DIR").map(PathBuf::from),
            sizes.as_deref(),
        )
    }
}

/// Directory containing the running executable
pub fn program_dir() -> Result<PathBuf> {
    let exe = env::current_exe().wrap_err("Couldn't locate the running program")?;

    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| eyre!("{} has no parent directory", exe.display()))
}

fn sizes_var(value: Result<String, VarError>) -> Result<Option<String>> {
    match value {
        Ok(sizes) => Ok(Some(sizes)),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(_)) => bail!(ConfigError::NotUnicode("ICON_SIZES")),
    }
}

pub fn parse_size(value: &str) -> Result<u32> {
    let value = value.trim();

    match value.parse::<u32>() {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(ConfigError::InvalidSize(value.to_string()).into()),
    }
}

/// Parses a comma separated list such as `16, 48,128`
pub fn parse_sizes(value: &str) -> Result<Vec<u32>> {
    let sizes = value
        .split(',')
        .filter(|part| !part.trim().is_empty())
        .map(parse_size)
        .collect::<Result<Vec<_>>>()?;

    ensure!(!sizes.is_empty(), ConfigError::EmptySizes);

    Ok(sizes)
}
