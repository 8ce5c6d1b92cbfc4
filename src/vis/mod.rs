//! Chart construction and rendering
//!
//! Drawing steps build an explicit [`Chart`] value instead of mutating a
//! global "current figure". A chart renders to the terminal with
//! [`Chart::render_text`]; with the `visualization` feature it can also be
//! written as PNG or SVG through plotters.

pub mod chart;
pub mod format;
#[cfg(feature = "visualization")]
pub mod plotters;
pub mod text;

pub use self::chart::{Axis, Chart, ChartKind, DataSeries, LegendPosition, Scale};
pub use self::format::{TickFormat, MILLIONS_THRESHOLD};
pub use self::text::TextSize;

impl Chart {
    /// Terminal rendering on a `width` x `height` character grid
    pub fn render_text(&self, width: usize, height: usize) -> String {
        text::render(self, TextSize { width, height })
    }

    /// Write the chart to `path` as PNG, or SVG for a `.svg` extension
    #[cfg(feature = "visualization")]
    pub fn save<P: AsRef<std::path::Path>>(
        &self,
        path: P,
        width: u32,
        height: u32,
    ) -> crate::error::Result<()> {
        self::plotters::save_chart(self, path, width, height)
    }
}
