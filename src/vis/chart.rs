//! Explicit chart context
//!
//! A [`Chart`] holds everything a drawing step needs. Builder methods consume
//! the chart and return the updated one, so several charts can be assembled
//! side by side and inspected in tests before anything is rendered.

use super::format::TickFormat;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Line,
    Scatter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scale {
    #[default]
    Linear,
    /// Base-10 logarithmic; non-positive values are not drawn
    Log,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LegendPosition {
    #[default]
    UpperRight,
    UpperLeft,
    LowerRight,
    LowerLeft,
    Hidden,
}

/// One axis: label, scale, explicit ticks and label format
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Axis {
    pub label: Option<String>,
    pub scale: Scale,
    /// Fixed tick positions; `None` lets the renderer choose
    pub ticks: Option<Vec<f64>>,
    pub format: TickFormat,
}

/// A named set of `(x, y)` points
#[derive(Debug, Clone, PartialEq)]
pub struct DataSeries {
    pub name: String,
    pub points: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    kind: ChartKind,
    title: Option<String>,
    x_axis: Axis,
    y_axis: Axis,
    series: Vec<DataSeries>,
    legend: LegendPosition,
}

impl Chart {
    pub fn new(kind: ChartKind) -> Self {
        Chart {
            kind,
            title: None,
            x_axis: Axis::default(),
            y_axis: Axis::default(),
            series: Vec::new(),
            legend: LegendPosition::default(),
        }
    }

    pub fn line() -> Self {
        Self::new(ChartKind::Line)
    }

    pub fn scatter() -> Self {
        Self::new(ChartKind::Scatter)
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_axis.label = Some(label.into());
        self
    }

    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_axis.label = Some(label.into());
        self
    }

    pub fn x_scale(mut self, scale: Scale) -> Self {
        self.x_axis.scale = scale;
        self
    }

    pub fn x_ticks(mut self, ticks: Vec<f64>) -> Self {
        self.x_axis.ticks = Some(ticks);
        self
    }

    pub fn x_format(mut self, format: TickFormat) -> Self {
        self.x_axis.format = format;
        self
    }

    pub fn y_format(mut self, format: TickFormat) -> Self {
        self.y_axis.format = format;
        self
    }

    pub fn legend(mut self, position: LegendPosition) -> Self {
        self.legend = position;
        self
    }

    pub fn with_series(mut self, name: impl Into<String>, points: Vec<(f64, f64)>) -> Self {
        self.series.push(DataSeries {
            name: name.into(),
            points,
        });
        self
    }

    /// Pick the y format from the largest value over every series
    pub fn auto_y_format(self) -> Self {
        let format = TickFormat::for_max(self.y_max().unwrap_or(0.0));
        self.y_format(format)
    }

    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    pub fn get_title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn x_axis(&self) -> &Axis {
        &self.x_axis
    }

    pub fn y_axis(&self) -> &Axis {
        &self.y_axis
    }

    pub fn series(&self) -> &[DataSeries] {
        &self.series
    }

    pub fn legend_position(&self) -> LegendPosition {
        self.legend
    }

    /// True when no series has a drawable point
    pub fn is_empty(&self) -> bool {
        self.drawable_points().next().is_none()
    }

    pub fn y_max(&self) -> Option<f64> {
        self.drawable_points()
            .map(|(_, y)| y)
            .fold(None, |acc, y| Some(acc.map_or(y, |m: f64| m.max(y))))
    }

    /// `(min, max)` over drawable x values and explicit x ticks
    pub fn x_range(&self) -> Option<(f64, f64)> {
        let ticks = self.x_axis.ticks.iter().flatten().copied();
        let xs = self.drawable_points().map(|(x, _)| x).chain(ticks);
        min_max(xs.filter(|x| self.x_axis.scale == Scale::Linear || *x > 0.0))
    }

    pub fn y_range(&self) -> Option<(f64, f64)> {
        min_max(self.drawable_points().map(|(_, y)| y))
    }

    /// Finite points that fit the x scale
    pub fn drawable_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.series
            .iter()
            .flat_map(|s| s.points.iter().copied())
            .filter(move |&(x, y)| self.is_drawable(x, y))
    }

    pub(crate) fn is_drawable(&self, x: f64, y: f64) -> bool {
        x.is_finite() && y.is_finite() && (self.x_axis.scale == Scale::Linear || x > 0.0)
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}
