//! Lazy instance example for pattern-registry.
//!
//! Demonstrates:
//! - Concurrent first access constructing exactly one instance
//! - Retrying after a failed construction
//! - Trace callbacks alongside `tracing` output
//!
//! Run with: `RUST_LOG=debug cargo run --example lazy_instance`

use pattern_registry::{define_instance, InstanceCell, Singleton};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

static ATTEMPTS: AtomicUsize = AtomicUsize::new(0);

/// Connection pool that fails on its first attempt to come up.
#[derive(Debug)]
pub struct ConnectionPool {
    size: usize,
}

fn connect() -> Result<ConnectionPool, String> {
    let attempt = ATTEMPTS.fetch_add(1, Ordering::SeqCst) + 1;
    thread::sleep(Duration::from_millis(50));
    if attempt == 1 {
        return Err(format!("database not ready (attempt {attempt})"));
    }
    Ok(ConnectionPool { size: 16 })
}

define_instance!(pool, ConnectionPool, connect);

/// Application settings, built on first access through the trait.
#[derive(Debug)]
struct Settings {
    name: &'static str,
}

impl Singleton for Settings {
    type Error = std::convert::Infallible;

    fn cell() -> &'static InstanceCell<Self> {
        static CELL: InstanceCell<Settings> = InstanceCell::new();
        &CELL
    }

    fn construct() -> Result<Self, Self::Error> {
        Ok(Settings { name: "demo" })
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== pattern-registry: Lazy Instance ===\n");

    pool::set_trace_callback(|event| println!("   [trace] {event}"));

    // -------------------------------------------------------------------------
    // 1. First access fails; nothing is published
    // -------------------------------------------------------------------------
    println!("1. First access...");
    match pool::get_instance() {
        Ok(_) => println!("   unexpectedly connected"),
        Err(err) => println!("   error: {err}"),
    }
    println!("   initialized: {}", pool::is_initialized());

    // -------------------------------------------------------------------------
    // 2. Eight threads race; exactly one constructs
    // -------------------------------------------------------------------------
    println!("\n2. Racing 8 threads...");
    let handles: Vec<_> = (0..8).map(|_| thread::spawn(pool::get_instance)).collect();

    let pools: Vec<Arc<ConnectionPool>> = handles
        .into_iter()
        .filter_map(|h| h.join().ok().and_then(Result::ok))
        .collect();

    let shared = pools.iter().all(|p| Arc::ptr_eq(p, &pools[0]));
    println!("   {} handles, all identical: {shared}", pools.len());
    println!("   pool size: {}", pools[0].size);
    println!("   constructor attempts: {}", ATTEMPTS.load(Ordering::SeqCst));

    pool::clear_trace_callback();

    // -------------------------------------------------------------------------
    // 3. Trait-based singleton
    // -------------------------------------------------------------------------
    println!("\n3. Trait-based singleton...");
    match Settings::instance() {
        Ok(settings) => println!("   settings: {}", settings.name),
        Err(err) => println!("   error: {err}"),
    }

    println!("\n=== Done ===");
}
