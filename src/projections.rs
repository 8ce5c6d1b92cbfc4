//! Chart-building steps for the indicator datasets
//!
//! Each step takes the possibly-absent tables produced by
//! [`load`](crate::io::load), reports any failure as one diagnostic and
//! returns `None`. An upstream failure therefore shows up again downstream as
//! its own diagnostic rather than stopping the run.

use crate::config::OutputConfig;
use crate::dataframe::{KEY_COLUMN, LEFT_SUFFIX, RIGHT_SUFFIX};
use crate::diagnostic::{absorb, DiagnosticSink};
use crate::error::{Error, Result};
use crate::vis::{Chart, LegendPosition, Scale, TickFormat};
use crate::DataFrame;

/// Fixed GDP axis ticks of the scatter chart
pub const GDP_TICKS: [f64; 3] = [300.0, 1_000.0, 10_000.0];

/// Life expectancy over the years for one country
pub fn life_expectancy_chart(
    table: Option<&DataFrame>,
    country: &str,
    sink: &mut dyn DiagnosticSink,
) -> Option<Chart> {
    absorb("create_plot", try_life_expectancy_chart(table, country), sink)
}

fn try_life_expectancy_chart(table: Option<&DataFrame>, country: &str) -> Result<Chart> {
    let table = require_table(table, "first")?;
    let row = table.set_index(KEY_COLUMN)?.loc(country)?;
    let points = row.to_numeric()?.points()?;

    Ok(Chart::line()
        .title(format!("{} Life Expectancy Projections", country))
        .x_label("Year")
        .y_label("Life Expectancy")
        .legend(LegendPosition::Hidden)
        .with_series(country, points))
}

/// Population over the years, one line per country.
///
/// Cells like `"83.8M"` are expanded. The y tick format is picked once from
/// the largest value over all plotted countries.
pub fn population_chart(
    table: Option<&DataFrame>,
    countries: &[&str],
    sink: &mut dyn DiagnosticSink,
) -> Option<Chart> {
    absorb("create_plot", try_population_chart(table, countries), sink)
}

fn try_population_chart(table: Option<&DataFrame>, countries: &[&str]) -> Result<Chart> {
    let table = require_table(table, "first")?;
    if countries.is_empty() {
        return Err(Error::ContractViolation(
            "second argument must list at least one country".to_string(),
        ));
    }

    let indexed = table.set_index(KEY_COLUMN)?;
    let mut chart = Chart::line()
        .title("Population Projections")
        .x_label("Year")
        .y_label("Population")
        .legend(LegendPosition::LowerRight);

    for country in countries {
        let points = indexed.loc(country)?.to_magnitudes()?.points()?;
        chart = chart.with_series(*country, points);
    }

    Ok(chart.auto_y_format())
}

/// Scatter of GDP per capita against life expectancy in `year`
pub fn gdp_life_chart(
    gdp: Option<&DataFrame>,
    life: Option<&DataFrame>,
    year: i32,
    sink: &mut dyn DiagnosticSink,
) -> Option<Chart> {
    absorb("create_plot", try_gdp_life_chart(gdp, life, year), sink)
}

fn try_gdp_life_chart(gdp: Option<&DataFrame>, life: Option<&DataFrame>, year: i32) -> Result<Chart> {
    let gdp = require_table(gdp, "first")?;
    let life = require_table(life, "second")?;
    let merged = gdp.merge_at_year(life, year)?;

    let x_col = format!("{}{}", year, LEFT_SUFFIX);
    let y_col = format!("{}{}", year, RIGHT_SUFFIX);
    let mut points = Vec::with_capacity(merged.row_count());
    for pos in 0..merged.row_count() {
        let row = merged.row(pos)?;
        let x = row.get(&x_col).map(|v| v.to_f64_magnitude()).transpose()?;
        let y = row.get(&y_col).map(|v| v.to_f64_magnitude()).transpose()?;
        if let (Some(x), Some(y)) = (x, y) {
            points.push((x, y));
        }
    }

    Ok(Chart::scatter()
        .title(year.to_string())
        .x_label("Gross Domestic Product")
        .y_label("Life Expectancy")
        .x_scale(Scale::Log)
        .x_ticks(GDP_TICKS.to_vec())
        .x_format(TickFormat::CompactThousands)
        .legend(LegendPosition::Hidden)
        .with_series(year.to_string(), points))
}

/// Print `chart` to stdout and, with the `visualization` feature, save it as
/// `<name>.png` in the output directory. Nothing is shown for an absent chart.
pub fn present(
    chart: Option<&Chart>,
    name: &str,
    output: &OutputConfig,
    sink: &mut dyn DiagnosticSink,
) {
    let Some(chart) = chart else {
        log::debug!("no chart to show for {}", name);
        return;
    };
    println!("{}", chart.render_text(output.text_width, output.text_height));

    #[cfg(feature = "visualization")]
    {
        let path = output.dir.join(format!("{}.png", name));
        if absorb("show", chart.save(&path, output.width, output.height), sink).is_some() {
            log::info!("saved {}", path.display());
        }
    }
    #[cfg(not(feature = "visualization"))]
    let _ = sink;
}

fn require_table<'a>(table: Option<&'a DataFrame>, position: &str) -> Result<&'a DataFrame> {
    table.ok_or_else(|| Error::ContractViolation(format!("{} argument must be a table", position)))
}
