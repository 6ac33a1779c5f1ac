use color_eyre::eyre::{bail, ensure, Result};
use resvg::{tiny_skia, usvg};

use super::errors::RenderError;

/// A parsed SVG document that can be rasterized at any square size
pub struct Icon {
    rtree: usvg::Tree,
}

impl Icon {
    /// Parses raw SVG (or SVGZ) bytes
    pub fn from_data(svg_data: &[u8]) -> Result<Self> {
        let convert_options = usvg::Options::default();
        let rtree = usvg::Tree::from_data(svg_data, &convert_options)?;

        log::debug!("parsed svg with size {:?}", rtree.size);

        Ok(Self { rtree })
    }

    /// Renders the icon into a `size` x `size` pixmap
    pub fn render(&self, size: u32) -> Result<tiny_skia::Pixmap> {
        ensure!(size != 0, RenderError::InvalidSize(size));

        let mut pixmap = if let Some(result) = tiny_skia::Pixmap::new(size, size) {
            result
        } else {
            bail!(RenderError::InvalidSize(size))
        };

        // Fits inside the square, keeping the aspect ratio
        let rendered = resvg::render(
            &self.rtree,
            usvg::FitTo::Size(size, size),
            tiny_skia::Transform::default(),
            pixmap.as_mut(),
        );

        if rendered.is_none() {
            bail!(RenderError::Unhandled)
        }

        Ok(pixmap)
    }

    /// Renders the icon and encodes it as PNG
    pub fn render_png(&self, size: u32) -> Result<Vec<u8>> {
        let pixmap = self.render(size)?;
        log::debug!("rendered {}x{} pixmap", pixmap.width(), pixmap.height());

        Ok(pixmap.encode_png()?)
    }
}
