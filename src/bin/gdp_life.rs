//! GDP per capita against life expectancy for a single year

use gapplot::config::PlotsConfig;
use gapplot::projections::{gdp_life_chart, present};
use gapplot::{load, logging, StderrSink};
use tracing::info;

fn main() {
    logging::init();
    let mut sink = StderrSink;
    let config = PlotsConfig::discover(&mut sink);
    let job = &config.gdp_life;

    info!(year = job.year, "gdp {} vs life {}", job.gdp_path, job.life_path);

    // Both loads run even if the first fails; the chart step reports again
    let gdp = load(&job.gdp_path, &mut sink);
    let life = load(&job.life_path, &mut sink);
    let chart = gdp_life_chart(gdp.as_ref(), life.as_ref(), job.year, &mut sink);
    present(chart.as_ref(), "gdp_life", &config.output, &mut sink);
}
