//! Life expectancy projections for one country

use gapplot::config::PlotsConfig;
use gapplot::projections::{life_expectancy_chart, present};
use gapplot::{load, logging, StderrSink};
use tracing::info;

fn main() {
    logging::init();
    let mut sink = StderrSink;
    let config = PlotsConfig::discover(&mut sink);
    let job = &config.life_expectancy;

    info!(path = %job.path, country = %job.country, "life expectancy");
    let table = load(&job.path, &mut sink);
    let chart = life_expectancy_chart(table.as_ref(), &job.country, &mut sink);
    present(chart.as_ref(), "life_expectancy", &config.output, &mut sink);
}
