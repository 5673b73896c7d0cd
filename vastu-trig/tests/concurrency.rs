//! Shared cache used from several threads.

mod common;

use std::sync::Arc;
use std::thread;

use vastu_trig::{SharedTrigTableCache, SinCosTable};

#[test]
fn test_threads_share_one_table_per_geometry() {
    common::init_logging();
    let cache = Arc::new(SharedTrigTableCache::new());
    let geometries = common::distinct_geometries(4);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let cache = Arc::clone(&cache);
            let geometries = geometries.clone();
            thread::spawn(move || {
                for _ in 0..50 {
                    for geometry in &geometries {
                        let table = cache.get(geometry);
                        assert_eq!(table.ray_count(), geometry.ray_count());
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let stats = cache.stats();
    assert_eq!(stats.misses, 4);
    assert_eq!(stats.hits, 8 * 50 * 4 - 4);
    assert_eq!(stats.entries, 4);
}

#[test]
fn test_handles_survive_concurrent_flushes() {
    let cache = Arc::new(SharedTrigTableCache::with_capacity(2));
    let geometries = common::distinct_geometries(10);

    let handles: Vec<_> = (0..4)
        .map(|t| {
            let cache = Arc::clone(&cache);
            let geometries = geometries.clone();
            thread::spawn(move || {
                for i in 0..200 {
                    let geometry = geometries[(i + t) % geometries.len()];
                    let table = cache.get(&geometry);
                    // Other threads flush constantly; the handle must stay intact
                    assert_eq!(*table, SinCosTable::compute(&geometry));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(cache.len() <= 2);
    assert!(cache.stats().flushes > 0);
}
