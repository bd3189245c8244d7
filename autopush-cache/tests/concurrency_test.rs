//! Many connections recording and querying the same cache at once.

use autopush_cache::{AssetCache, CacheConfig};
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn concurrent_connections_count_exactly() {
    let cache = Arc::new(AssetCache::new(CacheConfig::new(0, 0.8, 0.2, 1)).unwrap());
    let connections = 16;
    let page_loads = 250;
    let barrier = Arc::new(Barrier::new(connections));

    let handles: Vec<_> = (0..connections)
        .map(|i| {
            let c = Arc::clone(&cache);
            let b = Arc::clone(&barrier);
            thread::spawn(move || {
                let session = format!("conn-{i}");
                b.wait();
                for _ in 0..page_loads {
                    c.record_request_path(&session, "/index.html", false);
                    c.get_assets_for_path("/index.html");
                    c.record_request_path(&session, "/style.css", true);
                    c.record_request_path(&session, "/app.js", true);
                }
                c.on_session_closed(&session);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    let total = (connections * page_loads) as u64;
    let snapshot = cache.snapshot("/index.html").unwrap();
    assert_eq!(snapshot.root_count, total);
    assert_eq!(snapshot.child("/style.css").unwrap().count, total);
    assert_eq!(snapshot.child("/app.js").unwrap().count, total);
    assert_eq!(cache.session_count(), 0);
    assert_eq!(cache.root_count(), 1);

    let assets = cache.get_assets_for_path("/index.html");
    assert_eq!(assets.len(), 2);
    assert!(assets.contains(&"/style.css".to_string()));
    assert!(assets.contains(&"/app.js".to_string()));

    let metrics = cache.metrics();
    assert_eq!(metrics.primary_requests, total);
    assert_eq!(metrics.attributed_assets, total * 2);
    assert_eq!(metrics.sessions_closed, connections as u64);
}

#[test]
fn concurrent_first_requests_for_new_page() {
    let cache = Arc::new(AssetCache::new(CacheConfig::new(0, 0.8, 0.2, 1)).unwrap());
    let connections = 32;
    let barrier = Arc::new(Barrier::new(connections));

    let handles: Vec<_> = (0..connections)
        .map(|i| {
            let c = Arc::clone(&cache);
            let b = Arc::clone(&barrier);
            thread::spawn(move || {
                b.wait();
                c.record_request_path(&format!("conn-{i}"), "/brand-new.html", false);
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(cache.root_count(), 1);
    assert_eq!(
        cache.snapshot("/brand-new.html").unwrap().root_count,
        connections as u64
    );
}
