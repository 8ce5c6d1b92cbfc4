//! Terminal rendering of a [`Chart`]

use super::chart::{Chart, ChartKind, LegendPosition, Scale};

const MARKERS: [char; 6] = ['●', '○', '◆', '▲', '■', '×'];
const LINE_CHAR: char = '·';

/// Size of the plotting grid in characters
#[derive(Debug, Clone, Copy)]
pub struct TextSize {
    pub width: usize,
    pub height: usize,
}

impl Default for TextSize {
    fn default() -> Self {
        TextSize {
            width: 60,
            height: 16,
        }
    }
}

/// Marker drawn for the series at position `i`
pub fn marker(i: usize) -> char {
    MARKERS[i % MARKERS.len()]
}

pub fn render(chart: &Chart, size: TextSize) -> String {
    let (x_range, y_range) = match (chart.x_range(), chart.y_range()) {
        (Some(x), Some(y)) if !chart.is_empty() => (x, y),
        _ => return String::from("No data to display"),
    };

    let width = size.width.max(2);
    let height = size.height.max(2);
    let x_map = AxisMap::new(x_range, chart.x_axis().scale, width);
    let y_map = AxisMap::new(y_range, Scale::Linear, height);

    let mut grid = vec![vec![' '; width]; height];
    for (i, series) in chart.series().iter().enumerate() {
        let cells: Vec<(usize, usize)> = series
            .points
            .iter()
            .filter(|&&(x, y)| chart.is_drawable(x, y))
            .map(|&(x, y)| (x_map.cell(x), y_map.cell(y)))
            .collect();

        if chart.kind() == ChartKind::Line {
            for pair in cells.windows(2) {
                connect(&mut grid, pair[0], pair[1]);
            }
        }
        for &(col, row) in &cells {
            grid[row][col] = marker(i);
        }
    }

    let y_format = chart.y_axis().format;
    let y_labels: Vec<String> = (0..height)
        .map(|row| {
            if row == 0 || row == height - 1 || row % 4 == 0 {
                y_format.format(y_map.value(row))
            } else {
                String::new()
            }
        })
        .collect();
    let gutter = y_labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let full_width = gutter + 2 + width;

    let mut output = String::new();
    if let Some(title) = chart.get_title() {
        output.push_str(&format!("{:^w$}\n\n", title, w = full_width));
    }
    if let Some(label) = &chart.y_axis().label {
        output.push_str(label);
        output.push('\n');
    }

    let legend = legend_lines(chart, full_width);
    if matches!(
        chart.legend_position(),
        LegendPosition::UpperLeft | LegendPosition::UpperRight
    ) {
        output.push_str(&legend);
    }

    for row in (0..height).rev() {
        output.push_str(&format!("{:>g$} │", y_labels[row], g = gutter));
        output.extend(grid[row].iter());
        output.push('\n');
    }
    output.push_str(&format!("{:>g$} └", "", g = gutter));
    output.extend(std::iter::repeat('─').take(width));
    output.push('\n');
    output.push_str(&x_tick_line(chart, &x_map, gutter + 2, width));
    output.push('\n');

    if let Some(label) = &chart.x_axis().label {
        output.push_str(&format!("{:^w$}\n", label, w = full_width));
    }

    if matches!(
        chart.legend_position(),
        LegendPosition::LowerLeft | LegendPosition::LowerRight
    ) {
        output.push_str(&legend);
    }

    output
}

/// Linear or logarithmic mapping between data values and grid cells
struct AxisMap {
    lo: f64,
    span: f64,
    log: bool,
    cells: usize,
}

impl AxisMap {
    fn new((lo, hi): (f64, f64), scale: Scale, cells: usize) -> Self {
        let log = scale == Scale::Log;
        let (lo, hi) = if log { (lo.log10(), hi.log10()) } else { (lo, hi) };
        let span = if (hi - lo).abs() < f64::EPSILON {
            1.0
        } else {
            hi - lo
        };
        AxisMap {
            lo,
            span,
            log,
            cells,
        }
    }

    fn cell(&self, value: f64) -> usize {
        let v = if self.log { value.log10() } else { value };
        let pos = ((v - self.lo) / self.span * (self.cells - 1) as f64).round();
        (pos.max(0.0) as usize).min(self.cells - 1)
    }

    fn value(&self, cell: usize) -> f64 {
        let v = self.lo + cell as f64 / (self.cells - 1) as f64 * self.span;
        if self.log {
            10f64.powf(v)
        } else {
            v
        }
    }
}

fn connect(grid: &mut [Vec<char>], (c0, r0): (usize, usize), (c1, r1): (usize, usize)) {
    let steps = c0.abs_diff(c1).max(r0.abs_diff(r1));
    for s in 1..steps {
        let t = s as f64 / steps as f64;
        let col = (c0 as f64 + (c1 as f64 - c0 as f64) * t).round() as usize;
        let row = (r0 as f64 + (r1 as f64 - r0 as f64) * t).round() as usize;
        if grid[row][col] == ' ' {
            grid[row][col] = LINE_CHAR;
        }
    }
}

/// Tick labels under the x axis, either at the explicit ticks or at both ends
fn x_tick_line(chart: &Chart, x_map: &AxisMap, offset: usize, width: usize) -> String {
    let format = chart.x_axis().format;
    let ticks: Vec<f64> = match &chart.x_axis().ticks {
        Some(ticks) => ticks.clone(),
        None => vec![x_map.value(0), x_map.value(width - 1)],
    };

    let mut line: Vec<char> = vec![' '; offset + width + 8];
    let mut next_free = 0;
    for tick in ticks {
        if chart.x_axis().scale == Scale::Log && tick <= 0.0 {
            continue;
        }
        let label: Vec<char> = format.format(tick).chars().collect();
        let center = offset + x_map.cell(tick);
        let start = center
            .saturating_sub(label.len() / 2)
            .min(line.len() - label.len().min(line.len()))
            .max(next_free);
        if start + label.len() > line.len() {
            continue;
        }
        line[start..start + label.len()].copy_from_slice(&label);
        next_free = start + label.len() + 1;
    }

    line.into_iter().collect::<String>().trim_end().to_string()
}

fn legend_lines(chart: &Chart, full_width: usize) -> String {
    let right = matches!(
        chart.legend_position(),
        LegendPosition::UpperRight | LegendPosition::LowerRight
    );
    let mut out = String::new();
    for (i, series) in chart.series().iter().enumerate() {
        let entry = format!("{} {}", marker(i), series.name);
        if right {
            out.push_str(&format!("{:>w$}\n", entry, w = full_width));
        } else {
            out.push_str(&entry);
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vis::TickFormat;

    #[test]
    fn test_empty_chart() {
        assert_eq!(render(&Chart::line(), TextSize::default()), "No data to display");
    }

    #[test]
    fn test_line_render_contains_parts() {
        let chart = Chart::line()
            .title("Germany Life Expectancy Projections")
            .x_label("Year")
            .y_label("Life Expectancy")
            .with_series("Germany", vec![(1990.0, 75.0), (2000.0, 78.0), (2010.0, 80.0)]);
        let out = render(&chart, TextSize::default());
        assert!(out.contains("Germany Life Expectancy Projections"));
        assert!(out.contains("Year"));
        assert!(out.contains("Life Expectancy"));
        assert!(out.contains('●'));
        assert!(out.contains("1990"));
        assert!(out.contains("2010"));
        assert!(out.contains("80"));
    }

    #[test]
    fn test_y_labels_use_axis_format() {
        let chart = Chart::line()
            .with_series("a", vec![(1.0, 1_000_000.0), (2.0, 3_000_000.0)])
            .auto_y_format();
        let out = render(&chart, TextSize::default());
        assert!(out.contains("3M"));
        assert!(!out.contains("3000k"));
    }

    #[test]
    fn test_log_scale_ticks() {
        let chart = Chart::scatter()
            .x_scale(Scale::Log)
            .x_ticks(vec![300.0, 1_000.0, 10_000.0])
            .x_format(TickFormat::CompactThousands)
            .with_series("1900", vec![(400.0, 30.0), (5_000.0, 50.0)]);
        let out = render(&chart, TextSize::default());
        assert!(out.contains("300"));
        assert!(out.contains("1k"));
        assert!(out.contains("10k"));
    }

    #[test]
    fn test_legend_marks_each_series() {
        let chart = Chart::line()
            .legend(LegendPosition::LowerRight)
            .with_series("Germany", vec![(1.0, 1.0), (2.0, 2.0)])
            .with_series("Netherlands", vec![(1.0, 2.0), (2.0, 1.0)]);
        let out = render(&chart, TextSize::default());
        assert!(out.contains("● Germany"));
        assert!(out.contains("○ Netherlands"));
    }

    #[test]
    fn test_axis_map_round_trip() {
        let map = AxisMap::new((0.0, 10.0), Scale::Linear, 11);
        assert_eq!(map.cell(5.0), 5);
        assert_eq!(map.value(10), 10.0);
        let log = AxisMap::new((10.0, 1_000.0), Scale::Log, 3);
        assert_eq!(log.cell(100.0), 1);
    }
}
