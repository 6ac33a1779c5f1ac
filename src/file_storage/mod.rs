pub mod errors;
pub mod local;
pub mod svg_to_png;

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, WrapErr};

use self::svg_to_png::Icon;

/// Name of the bitmap written for a given size
pub fn icon_file_name(size: u32) -> String {
    format!("icon{}.png", size)
}

pub fn icon_path(output_dir: &Path, size: u32) -> PathBuf {
    output_dir.join(icon_file_name(size))
}

/// Renders the SVG at `svg_path` once per size into `output_dir/icon<size>.png`.
///
/// Sizes are handled in order and repeated sizes overwrite the same file.
/// Files written before a failure are left in place.
pub fn convert_svg_to_png(
    svg_path: &Path,
    output_dir: &Path,
    sizes: &[u32],
) -> Result<Vec<PathBuf>> {
    local::ensure_dir(output_dir)?;

    let svg_data = std::fs::read(svg_path)
        .wrap_err_with(|| format!("Couldn't read {}", svg_path.display()))?;

    let icon = Icon::from_data(&svg_data)
        .wrap_err_with(|| format!("Couldn't parse {}", svg_path.display()))?;

    let mut generated = Vec::with_capacity(sizes.len());

    for &size in sizes {
        let output_path = icon_path(output_dir, size);
        let png_data = icon.render_png(size)?;

        local::write_file(&output_path, &png_data)?;

        log::info!("wrote {} bytes to {}", png_data.len(), output_path.display());
        println!("Generated {}", output_path.display());

        generated.push(output_path);
    }

    Ok(generated)
}
