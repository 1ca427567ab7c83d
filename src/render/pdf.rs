//! SVG -> PDF conversion.
//!
//! Frames are drawn once as SVG and converted to a single-page vector PDF
//! with `usvg` + `svg2pdf`.

use usvg::fontdb;

use crate::error::AppError;
use crate::plot::PlotFrame;
use crate::render::svg::SvgRenderer;
use crate::render::{FrameRenderer, OutputFormat};

/// Face embedded in every PDF; Plotters asks for the generic `sans-serif`.
static DEJAVU_SANS: &[u8] = include_bytes!("../../fonts/DejaVuSans.ttf");
const SANS_FAMILY: &str = "DejaVu Sans";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PdfRenderer {
    pub svg: SvgRenderer,
}

impl PdfRenderer {
    pub fn new(svg: SvgRenderer) -> Self {
        Self { svg }
    }
}

impl FrameRenderer for PdfRenderer {
    fn format(&self) -> OutputFormat {
        OutputFormat::Pdf
    }

    fn render(&self, frame: &PlotFrame) -> Result<Vec<u8>, AppError> {
        let svg = self.svg.render_svg(frame)?;
        svg_to_pdf(&svg)
    }
}

/// Parse options with the bundled face loaded and `sans-serif` mapped to it.
fn parse_options() -> usvg::Options<'static> {
    let mut opt = usvg::Options::default();
    let db = opt.fontdb_mut();
    db.load_font_data(DEJAVU_SANS.to_vec());
    db.set_sans_serif_family(SANS_FAMILY);
    opt
}

/// Convert an SVG document to PDF bytes.
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>, AppError> {
    let opt = parse_options();
    let tree = usvg::Tree::from_str(svg, &opt)
        .map_err(|e| AppError::render(format!("Failed to parse frame SVG: {e}")))?;

    svg2pdf::to_pdf(&tree, svg2pdf::ConversionOptions::default(), svg2pdf::PageOptions::default())
        .map_err(|e| AppError::render(format!("PDF conversion failed: {e}")))
}
