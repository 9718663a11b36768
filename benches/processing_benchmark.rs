use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use weather_map::models::{ColorScale, TimeAxis, WeatherRecord, YearMonth};
use weather_map::processors::filter_records;
use weather_map::readers::WeatherReader;
use weather_map::render::{FeaturePanel, MapView, PanelState, TileLayer};

// Create test data for benchmarking: one record per station per month
fn create_test_records(station_count: usize, months: u32) -> Vec<WeatherRecord> {
    let mut records = Vec::with_capacity(station_count * months as usize);

    for slider in 0..months {
        let ym = TimeAxis::TIMELAPSE.year_month(slider);
        for station in 0..station_count {
            records.push(WeatherRecord {
                year: ym.year,
                month: ym.month,
                latitude: 45.5 + (station as f64) * 0.001,
                longitude: -124.0 + (station as f64) * 0.002,
                precipitation: (station % 40) as f64 * 0.01,
                elevation: 100.0 + station as f64,
                temperature: 10.0,
                station_id: format!("72{:04}", station),
            });
        }
    }

    records
}

fn create_test_csv(records: &[WeatherRecord]) -> String {
    let mut csv = String::from("USAF,YEAR,MONTH,LAT,LON,ELEV(M),PRCP,TEMP\n");
    for r in records {
        csv.push_str(&format!(
            "{},{},{},{},{},{},{},{}\n",
            r.station_id, r.year, r.month, r.latitude, r.longitude, r.elevation, r.precipitation, r.temperature
        ));
    }
    csv
}

fn benchmark_time_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("time_filter");

    for months in [12, 240] {
        let records = create_test_records(250, months);
        group.bench_with_input(BenchmarkId::new("records", records.len()), &records, |b, records| {
            b.iter(|| filter_records(black_box(records), YearMonth::new(2000, 6)))
        });
    }

    group.finish();
}

fn benchmark_render(c: &mut Criterion) {
    let records = create_test_records(1000, 1);
    let mut state = PanelState::new(
        FeaturePanel::new("map", MapView::default()),
        &TileLayer::default(),
        ColorScale::PREDICTED,
    );

    c.bench_function("render_layer_1000", |b| {
        b.iter(|| state.render(black_box(&records)).unwrap())
    });
}

fn benchmark_csv_load(c: &mut Criterion) {
    let csv = create_test_csv(&create_test_records(250, 24));
    let reader = WeatherReader::new();

    c.bench_function("csv_load_6000_rows", |b| {
        b.iter(|| {
            reader
                .read_weather_bytes(black_box(csv.as_bytes()), std::path::Path::new("bench.csv"))
                .unwrap()
        })
    });
}

criterion_group!(benches, benchmark_time_filter, benchmark_render, benchmark_csv_load);
criterion_main!(benches);
