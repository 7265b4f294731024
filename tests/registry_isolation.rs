//! Integration tests for registry isolation and multiple registries.
//!
//! Every `define_registry!` invocation owns its own static, so the same type can have
//! one instance per registry without interference.

use pattern_registry::{define_registry, InstanceRegistry};
use std::sync::Arc;

#[test]
fn test_multiple_isolated_registries() {
    define_registry!(database);
    define_registry!(cache);
    define_registry!(config);

    database::get_or_init(|| "postgresql://localhost".to_string());
    cache::get_or_init(|| "redis://localhost".to_string());
    config::get_or_init(|| "app_config".to_string());

    let db: Arc<String> = database::get().unwrap();
    let cache_val: Arc<String> = cache::get().unwrap();
    let cfg: Arc<String> = config::get().unwrap();

    assert_eq!(&**db, "postgresql://localhost");
    assert_eq!(&**cache_val, "redis://localhost");
    assert_eq!(&**cfg, "app_config");
}

#[test]
fn test_same_type_different_registries() {
    define_registry!(reg_a);
    define_registry!(reg_b);

    let a: Arc<i32> = reg_a::get_or_init(|| 100);
    let b: Arc<i32> = reg_b::get_or_init(|| 200);

    assert_eq!(*a, 100);
    assert_eq!(*b, 200);
    assert!(!Arc::ptr_eq(&a, &b));
}

#[test]
fn test_registry_does_not_leak_between_instances() {
    define_registry!(isolated_a);
    define_registry!(isolated_b);

    isolated_a::get_or_init(|| "only in A".to_string());

    assert!(isolated_a::contains::<String>());
    assert!(!isolated_b::contains::<String>());
    assert!(isolated_b::get::<String>().is_none());
}

#[test]
fn test_failed_construction_is_isolated() {
    define_registry!(flaky_a);
    define_registry!(flaky_b);

    let err = flaky_a::get_or_try_init(|| Err::<u64, _>("timeout")).unwrap_err();
    assert_eq!(err.type_name(), "u64");

    let b: Arc<u64> = flaky_b::get_or_try_init(|| Ok::<_, std::io::Error>(9)).unwrap();
    assert_eq!(*b, 9);
    assert!(!flaky_a::contains::<u64>());
}

#[test]
fn test_registry_scoping() {
    mod module_a {
        use pattern_registry::define_registry;
        define_registry!(scoped);

        pub fn get_value() -> String {
            scoped::get_or_init(|| "module A".to_string()).to_string()
        }
    }

    mod module_b {
        use pattern_registry::define_registry;
        define_registry!(scoped);

        pub fn get_value() -> String {
            scoped::get_or_init(|| "module B".to_string()).to_string()
        }
    }

    assert_eq!(module_a::get_value(), "module A");
    assert_eq!(module_b::get_value(), "module B");
}

#[test]
fn test_owned_registries_are_independent() {
    let first = InstanceRegistry::new();
    let second = InstanceRegistry::new();

    let a: Arc<Vec<u8>> = first.get_or_init(|| vec![1]);
    let b: Arc<Vec<u8>> = second.get_or_init(|| vec![2]);

    assert_eq!(*a, [1]);
    assert_eq!(*b, [2]);
}

#[test]
fn test_owned_registry_reset_is_local() {
    let mut first = InstanceRegistry::new();
    let second = InstanceRegistry::new();

    first.get_or_init(|| 1u8);
    second.get_or_init(|| 2u8);

    first.reset();

    assert!(!first.contains::<u8>());
    assert!(second.contains::<u8>());
}

#[test]
fn test_registry_with_tracing_isolation() {
    define_registry!(traced_a);
    define_registry!(traced_b);

    let events = Arc::new(std::sync::Mutex::new(Vec::new()));
    let events_clone = events.clone();

    traced_a::set_trace_callback(move |event| {
        events_clone.lock().unwrap().push(format!("{}", event));
    });

    traced_a::get_or_init(|| 1i32);
    traced_b::get_or_init(|| 2i32);

    // Only traced_a should have events: construct + constructed
    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert!(captured[0].contains("construct"));
}
