use criterion::{criterion_group, criterion_main, Criterion};

use autopush_cache::{AssetCache, CacheConfig};

/// A cache that has learned 100 pages with 20 assets each, half promoted.
fn build_warm_cache() -> AssetCache {
    let cache = AssetCache::new(CacheConfig::new(0, 0.8, 0.2, 1)).unwrap();
    for page in 0..100 {
        let root = format!("/page{page}.html");
        for load in 0..10 {
            cache.record_request_path("warm", &root, false);
            for asset in 0..20 {
                // Even assets follow every load; odd ones only every third.
                if asset % 2 == 0 || load % 3 == 0 {
                    cache.record_request_path("warm", &format!("/asset{asset}.js"), true);
                }
            }
        }
    }
    cache
}

fn bench_record_page_load(c: &mut Criterion) {
    let cache = build_warm_cache();
    c.bench_function("record_page_load_20_assets", |b| {
        b.iter(|| {
            cache.record_request_path("bench", "/page7.html", false);
            for asset in 0..20 {
                cache.record_request_path("bench", &format!("/asset{asset}.js"), true);
            }
        });
    });
}

fn bench_query_known_page(c: &mut Criterion) {
    let cache = build_warm_cache();
    c.bench_function("query_known_page", |b| {
        b.iter(|| cache.get_assets_for_path("/page42.html"));
    });
}

fn bench_query_unknown_page(c: &mut Criterion) {
    let cache = build_warm_cache();
    c.bench_function("query_unknown_page", |b| {
        b.iter(|| cache.get_assets_for_path("/not-a-page.html"));
    });
}

criterion_group!(
    benches,
    bench_record_page_load,
    bench_query_known_page,
    bench_query_unknown_page
);
criterion_main!(benches);
