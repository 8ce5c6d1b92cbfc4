//! Population projections for several countries on one chart

use gapplot::config::PlotsConfig;
use gapplot::projections::{population_chart, present};
use gapplot::{load, logging, StderrSink};
use tracing::info;

fn main() {
    logging::init();
    let mut sink = StderrSink;
    let config = PlotsConfig::discover(&mut sink);
    let job = &config.population;

    info!(path = %job.path, "population for {} countries", job.countries.len());
    let table = load(&job.path, &mut sink);
    let countries: Vec<&str> = job.countries.iter().map(String::as_str).collect();
    let chart = population_chart(table.as_ref(), &countries, &mut sink);
    present(chart.as_ref(), "population", &config.output, &mut sink);
}
