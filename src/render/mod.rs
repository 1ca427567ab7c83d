//! Frame rendering and artifact output.
//!
//! The pipeline only sees `FrameRenderer`; the concrete backend (Plotters SVG,
//! optionally converted to PDF) is chosen from the output path.

use std::path::Path;

use crate::error::AppError;
use crate::plot::PlotFrame;

pub mod pdf;
pub mod svg;

pub use pdf::PdfRenderer;
pub use svg::SvgRenderer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pdf,
    Svg,
}

impl OutputFormat {
    /// Infer the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self, AppError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("pdf") => Ok(OutputFormat::Pdf),
            Some("svg") => Ok(OutputFormat::Svg),
            _ => Err(AppError::render(format!(
                "Unsupported output '{}': use a .pdf or .svg extension.",
                path.display()
            ))),
        }
    }
}

/// Turns a finished frame into file bytes.
pub trait FrameRenderer {
    fn format(&self) -> OutputFormat;

    fn render(&self, frame: &PlotFrame) -> Result<Vec<u8>, AppError>;
}

/// Pick the renderer matching `path`'s extension.
pub fn renderer_for_path(path: &Path, svg: SvgRenderer) -> Result<Box<dyn FrameRenderer>, AppError> {
    Ok(match OutputFormat::from_path(path)? {
        OutputFormat::Pdf => Box::new(PdfRenderer::new(svg)),
        OutputFormat::Svg => Box::new(svg),
    })
}

/// Render `frame` and write it to `path`, replacing any existing file.
///
/// Returns the number of bytes written.
pub fn save_frame(frame: &PlotFrame, renderer: &dyn FrameRenderer, path: &Path) -> Result<usize, AppError> {
    let bytes = renderer.render(frame)?;
    std::fs::write(path, &bytes)
        .map_err(|e| AppError::io(format!("Failed to write '{}': {e}", path.display())))?;

    tracing::info!(
        path = %path.display(),
        format = ?renderer.format(),
        bytes = bytes.len(),
        curves = frame.curves().len(),
        "frame saved"
    );
    Ok(bytes.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::build_frame;
    use crate::domain::RenderConfig;

    #[test]
    fn format_from_extension() {
        assert_eq!(OutputFormat::from_path(Path::new("gaussians.pdf")).unwrap(), OutputFormat::Pdf);
        assert_eq!(OutputFormat::from_path(Path::new("out/G.SVG")).unwrap(), OutputFormat::Svg);
        assert!(OutputFormat::from_path(Path::new("gaussians.png")).is_err());
        assert!(OutputFormat::from_path(Path::new("gaussians")).is_err());
    }

    #[test]
    fn save_overwrites_with_identical_output() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gaussians.svg");
        std::fs::write(&path, b"stale contents that are much longer than nothing").unwrap();

        let frame = build_frame(&RenderConfig::default()).unwrap().frame;
        let renderer = renderer_for_path(&path, SvgRenderer::default()).unwrap();

        let first = save_frame(&frame, renderer.as_ref(), &path).unwrap();
        let first_bytes = std::fs::read(&path).unwrap();
        assert_eq!(first, first_bytes.len());

        save_frame(&frame, renderer.as_ref(), &path).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), first_bytes);
    }

    #[test]
    fn pdf_file_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gaussians.pdf");
        let frame = build_frame(&RenderConfig::default()).unwrap().frame;
        let renderer = renderer_for_path(&path, SvgRenderer::default()).unwrap();
        assert_eq!(renderer.format(), OutputFormat::Pdf);

        save_frame(&frame, renderer.as_ref(), &path).unwrap();
        let meta = std::fs::metadata(&path).unwrap();
        assert!(meta.len() > 0);
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope").join("gaussians.svg");
        let frame = build_frame(&RenderConfig::default()).unwrap().frame;
        let err = save_frame(&frame, &SvgRenderer::default(), &path).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
