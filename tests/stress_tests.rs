//! Stress tests for shared registries
//!
//! These tests verify:
//! - Counters stay unique and gap-free under concurrent emission
//! - Per-logger counters are unaffected by other threads
//! - Threshold changes from another thread never corrupt state

use brolog::core::registry::Registry;
use brolog::core::severity::Severity;
use brolog::printers::MemoryPrinter;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

const THREADS: usize = 8;
const MESSAGES_PER_THREAD: usize = 500;

fn shared_registry() -> (Arc<Registry>, MemoryPrinter) {
    let printer = MemoryPrinter::new();
    let registry = Registry::builder()
        .threshold(Severity::Debug)
        .printer(printer.clone())
        .build()
        .expect("Failed to build registry");
    (Arc::new(registry), printer)
}

/// Every allowed message gets a distinct global counter in 1..=N
#[test]
fn test_concurrent_counters_are_unique() {
    let (registry, printer) = shared_registry();

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let logger = registry.logger(format!("worker-{}", t));
                for i in 0..MESSAGES_PER_THREAD {
                    logger.info(["message", &i.to_string()]).unwrap();
                }
                logger.message_count()
            })
        })
        .collect();

    for handle in handles {
        let local = handle.join().expect("Worker panicked");
        assert_eq!(local, MESSAGES_PER_THREAD as u64);
    }

    let total = (THREADS * MESSAGES_PER_THREAD) as u64;
    assert_eq!(registry.message_count(), total);

    let records = printer.records();
    assert_eq!(records.len(), total as usize);

    let counters: HashSet<u64> = records.iter().map(|r| r.global_counter).collect();
    assert_eq!(counters.len(), total as usize, "Duplicate global counters");
    assert_eq!(counters.iter().min(), Some(&1));
    assert_eq!(counters.iter().max(), Some(&total));
}

/// A logger shared between threads still counts every message once
#[test]
fn test_shared_logger_local_counter() {
    let (registry, printer) = shared_registry();
    let logger = Arc::new(registry.logger("shared"));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let logger = Arc::clone(&logger);
            std::thread::spawn(move || {
                for _ in 0..MESSAGES_PER_THREAD {
                    logger.debug(["tick"]).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("Worker panicked");
    }

    let total = (THREADS * MESSAGES_PER_THREAD) as u64;
    assert_eq!(logger.message_count(), total);

    let locals: HashSet<u64> = printer.records().iter().map(|r| r.local_counter).collect();
    assert_eq!(locals.len(), total as usize, "Duplicate local counters");
}

/// Toggling the global threshold while workers emit keeps counts consistent
#[test]
fn test_threshold_toggling_under_load() {
    let (registry, printer) = shared_registry();
    let stop = Arc::new(AtomicBool::new(false));

    let toggler = {
        let registry = Arc::clone(&registry);
        let stop = Arc::clone(&stop);
        std::thread::spawn(move || {
            let mut off = false;
            while !stop.load(Ordering::Relaxed) {
                if off {
                    registry.set_debug();
                } else {
                    registry.off();
                }
                off = !off;
                std::thread::yield_now();
            }
            registry.set_debug();
        })
    };

    let workers: Vec<_> = (0..THREADS)
        .map(|t| {
            let registry = Arc::clone(&registry);
            std::thread::spawn(move || {
                let logger = registry.logger(format!("worker-{}", t));
                let mut allowed = 0u64;
                for _ in 0..MESSAGES_PER_THREAD {
                    if logger.warn(["maybe"]).unwrap().is_some() {
                        allowed += 1;
                    }
                }
                assert_eq!(logger.message_count(), allowed);
                allowed
            })
        })
        .collect();

    let allowed: u64 = workers
        .into_iter()
        .map(|h| h.join().expect("Worker panicked"))
        .sum();
    stop.store(true, Ordering::Relaxed);
    toggler.join().expect("Toggler panicked");

    assert_eq!(registry.message_count(), allowed);
    assert_eq!(printer.len() as u64, allowed);
}
