// benches/access_patterns.rs

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rle_bitmap::{BitmapConfig, Codec, RleBitmap};

const WIDTH: usize = 4_096;
const HEIGHT: usize = 1_024;

/// Bitmap with a diagonal band, mostly blank like a coverage mask.
fn create_bitmap(cache: usize) -> RleBitmap {
    let config = BitmapConfig::new(WIDTH, HEIGHT).with_cache_max_items(cache);
    let mut bm = RleBitmap::with_config(config).unwrap();
    for y in 0..HEIGHT {
        for x in (y * 4)..(y * 4 + 64).min(WIDTH) {
            bm.set(x, y, true).unwrap();
        }
    }
    bm.flush_changes().unwrap();
    bm
}

fn bench_row_scan(c: &mut Criterion) {
    let caches = vec![1, 51, 1_024];

    let mut group = c.benchmark_group("row_scan");
    for cache in caches {
        let mut bm = create_bitmap(cache);

        group.bench_with_input(BenchmarkId::from_parameter(cache), &cache, |b, _| {
            b.iter(|| {
                let mut ones = 0;
                for y in 0..HEIGHT {
                    for x in (0..WIDTH).step_by(64) {
                        ones += black_box(bm.get(x, y).unwrap()) as usize;
                    }
                }
                ones
            });
        });
    }
    group.finish();
}

fn bench_column_scan(c: &mut Criterion) {
    let caches = vec![1, 51, 1_024];

    // Column order defeats a small cache: every access is a miss.
    let mut group = c.benchmark_group("column_scan");
    for cache in caches {
        let mut bm = create_bitmap(cache);

        group.bench_with_input(BenchmarkId::from_parameter(cache), &cache, |b, _| {
            b.iter(|| {
                let mut ones = 0;
                for x in (0..WIDTH).step_by(256) {
                    for y in 0..HEIGHT {
                        ones += black_box(bm.get(x, y).unwrap()) as usize;
                    }
                }
                ones
            });
        });
    }
    group.finish();
}

fn bench_write_back(c: &mut Criterion) {
    let caches = vec![1, 51];

    let mut group = c.benchmark_group("write_back");
    for cache in caches {
        let mut bm = create_bitmap(cache);

        group.bench_with_input(BenchmarkId::from_parameter(cache), &cache, |b, _| {
            b.iter(|| {
                for y in 0..HEIGHT {
                    bm.toggle(y % WIDTH, y).unwrap();
                }
                bm.flush_changes().unwrap()
            });
        });
    }
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let codec = Codec::default();
    let sparse: Vec<bool> = (0..WIDTH).map(|x| x % 1_000 == 0).collect();
    let dense: Vec<bool> = (0..WIDTH).map(|x| x % 3 == 0).collect();

    let mut group = c.benchmark_group("codec");
    for (name, row) in [("sparse", &sparse), ("dense", &dense)] {
        let runs = codec.encode(row);

        group.bench_with_input(BenchmarkId::new("encode", name), row, |b, row| {
            b.iter(|| codec.encode(black_box(row)));
        });

        group.bench_with_input(BenchmarkId::new("decode", name), &runs, |b, runs| {
            b.iter(|| codec.decode(black_box(runs)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_row_scan,
    bench_column_scan,
    bench_write_back,
    bench_codec
);
criterion_main!(benches);
