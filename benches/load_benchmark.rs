//! Loading and conversion benchmarks
//!
//! Tables are generated in the Gapminder layout: a `country` column followed
//! by one column per year holding magnitude strings.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gapplot::dataframe::KEY_COLUMN;
use gapplot::io::read_csv_from_reader;
use gapplot::parse_magnitude;

/// CSV text with `n_countries` rows and `n_years` year columns
fn create_population_csv(n_countries: usize, n_years: usize) -> String {
    let mut text = String::from(KEY_COLUMN);
    for year in 0..n_years {
        text.push_str(&format!(",{}", 1800 + year));
    }
    text.push('\n');

    for c in 0..n_countries {
        text.push_str(&format!("country_{}", c));
        for year in 0..n_years {
            let value = (c * 7 + year) % 900 + 100;
            if value % 2 == 0 {
                text.push_str(&format!(",{}.{}M", value / 10, value % 10));
            } else {
                text.push_str(&format!(",{}k", value));
            }
        }
        text.push('\n');
    }
    text
}

fn bench_read_csv(c: &mut Criterion) {
    let mut group = c.benchmark_group("read_csv");

    for &n_countries in &[50, 200] {
        let text = create_population_csv(n_countries, 300);
        group.bench_with_input(BenchmarkId::from_parameter(n_countries), &text, |b, text| {
            b.iter(|| read_csv_from_reader(black_box(text.as_bytes())).unwrap());
        });
    }

    group.finish();
}

fn bench_population_row(c: &mut Criterion) {
    let df = read_csv_from_reader(create_population_csv(200, 300).as_bytes()).unwrap();
    let indexed = df.set_index(KEY_COLUMN).unwrap();

    c.bench_function("loc_to_magnitudes", |b| {
        b.iter(|| {
            indexed
                .loc(black_box("country_150"))
                .unwrap()
                .to_magnitudes()
                .unwrap()
        });
    });
}

fn bench_parse_magnitude(c: &mut Criterion) {
    let inputs = ["83.8M", "300k", "1.2k", "17.1M", "999k"];

    c.bench_function("parse_magnitude", |b| {
        b.iter(|| {
            for s in &inputs {
                black_box(parse_magnitude(black_box(s)).unwrap());
            }
        });
    });
}

criterion_group!(
    benches,
    bench_read_csv,
    bench_population_row,
    bench_parse_magnitude
);
criterion_main!(benches);
