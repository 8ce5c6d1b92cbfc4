//! PNG and SVG output of a [`Chart`] through plotters

use std::ops::Range;
use std::path::Path;

use plotters::coord::ranged1d::{AsRangedCoord, ValueFormatter};
use plotters::coord::Shift;
use plotters::prelude::*;

use super::chart::{Chart, ChartKind, LegendPosition, Scale};
use crate::error::{Error, Result};

const PALETTE: [(u8, u8, u8); 6] = [
    (0, 123, 255),
    (255, 99, 71),
    (46, 204, 113),
    (255, 193, 7),
    (142, 68, 173),
    (52, 152, 219),
];

/// Draw `chart` to `path`; `.svg` selects SVG output, anything else PNG
pub fn save_chart<P: AsRef<Path>>(chart: &Chart, path: P, width: u32, height: u32) -> Result<()> {
    let path = path.as_ref();
    let svg = path
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("svg"));

    if svg {
        let root = SVGBackend::new(path, (width, height)).into_drawing_area();
        draw(&root, chart)?;
        root.present()?;
    } else {
        let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
        draw(&root, chart)?;
        root.present()?;
    }

    log::debug!("chart written to {}", path.display());
    Ok(())
}

fn draw<DB>(root: &DrawingArea<DB, Shift>, chart: &Chart) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
{
    let (x_lo, x_hi) = chart
        .x_range()
        .ok_or_else(|| Error::Visualization("no data to plot".to_string()))?;
    let (y_lo, y_hi) = chart
        .y_range()
        .ok_or_else(|| Error::Visualization("no data to plot".to_string()))?;

    root.fill(&WHITE)?;

    let y_margin = ((y_hi - y_lo) * 0.05).max(f64::EPSILON);
    let y_spec = (y_lo - y_margin)..(y_hi + y_margin);

    match chart.x_axis().scale {
        Scale::Linear => {
            let x_margin = ((x_hi - x_lo) * 0.05).max(f64::EPSILON);
            draw_with(root, chart, (x_lo - x_margin)..(x_hi + x_margin), y_spec)
        }
        Scale::Log => draw_with(root, chart, (x_lo * 0.9..x_hi * 1.1).log_scale(), y_spec),
    }
}

fn draw_with<DB, X>(
    root: &DrawingArea<DB, Shift>,
    chart: &Chart,
    x_spec: X,
    y_spec: Range<f64>,
) -> Result<()>
where
    DB: DrawingBackend,
    DB::ErrorType: 'static,
    X: AsRangedCoord<Value = f64>,
    X::CoordDescType: ValueFormatter<f64>,
{
    let mut builder = ChartBuilder::on(root);
    builder
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60);
    if let Some(title) = chart.get_title() {
        builder.caption(title, ("sans-serif", 30).into_font());
    }
    let mut ctx = builder.build_cartesian_2d(x_spec, y_spec)?;

    let x_format = chart.x_axis().format;
    let y_format = chart.y_axis().format;
    let x_desc = chart.x_axis().label.clone().unwrap_or_default();
    let y_desc = chart.y_axis().label.clone().unwrap_or_default();
    ctx.configure_mesh()
        .x_labels(10)
        .y_labels(10)
        .x_label_formatter(&|v| x_format.format(*v))
        .y_label_formatter(&|v| y_format.format(*v))
        .x_desc(x_desc)
        .y_desc(y_desc)
        .draw()?;

    for (i, series) in chart.series().iter().enumerate() {
        let (r, g, b) = PALETTE[i % PALETTE.len()];
        let color = RGBColor(r, g, b);
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .copied()
            .filter(|&(x, y)| chart.is_drawable(x, y))
            .collect();

        match chart.kind() {
            ChartKind::Line => {
                ctx.draw_series(LineSeries::new(points, color))?
                    .label(series.name.clone())
                    .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
            }
            ChartKind::Scatter => {
                ctx.draw_series(
                    points
                        .into_iter()
                        .map(move |(x, y)| Circle::new((x, y), 3, color.filled())),
                )?
                .label(series.name.clone())
                .legend(move |(x, y)| Circle::new((x + 10, y), 3, color.filled()));
            }
        }
    }

    let position = match chart.legend_position() {
        LegendPosition::Hidden => return Ok(()),
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
    };
    ctx.configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(position)
        .draw()?;

    Ok(())
}
