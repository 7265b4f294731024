//! Integration tests for tracing and event monitoring.
//!
//! Shows how trace callbacks observe construction, lookups and failures, which is
//! useful for debugging and logging.
//!
//! NOTE: Tests touching the process-wide factory registry use #[serial].

use pattern_registry::{
    define_instance, define_registry, global_factories, FactoryRegistry, InstanceCell,
    RegistryEvent, ThemeId,
};
use serial_test::serial;
use std::sync::{Arc, Mutex};

fn collector() -> (
    Arc<Mutex<Vec<String>>>,
    impl Fn(&RegistryEvent) + Send + Sync + 'static,
) {
    let events = Arc::new(Mutex::new(Vec::new()));
    let events_clone = events.clone();
    (events, move |event: &RegistryEvent| {
        events_clone.lock().unwrap().push(format!("{}", event));
    })
}

#[test]
fn test_basic_tracing() {
    define_registry!(traced1);

    let (events, callback) = collector();
    traced1::set_trace_callback(callback);

    traced1::get_or_init(|| 42i32);
    let _ = traced1::get::<i32>();
    let _ = traced1::contains::<i32>();

    let captured = events.lock().unwrap();
    assert_eq!(
        captured.as_slice(),
        [
            "construct { type_name: i32 }",
            "constructed { type_name: i32 }",
            "get { type_name: i32, found: true }",
            "contains { type_name: i32, found: true }",
        ]
    );
}

#[test]
fn test_trace_failed_construction() {
    define_registry!(traced2);

    let (events, callback) = collector();
    traced2::set_trace_callback(callback);

    let _ = traced2::get_or_try_init(|| Err::<u32, _>("refused"));

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0], "construct { type_name: u32 }");
    assert_eq!(
        captured[1],
        "construction failed { type_name: u32, reason: failed to construct instance of u32: refused }"
    );

    traced2::clear_trace_callback();
}

#[test]
fn test_trace_get_found_and_not_found() {
    define_registry!(traced3);

    let (events, callback) = collector();
    traced3::set_trace_callback(callback);

    traced3::get_or_init(|| 123i64);
    let _ = traced3::get::<i64>();
    let _ = traced3::get::<f32>();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 4);
    assert!(captured[2].contains("found: true"));
    assert!(captured[3].contains("found: false"));

    traced3::clear_trace_callback();
}

#[test]
fn test_fast_path_emits_nothing() {
    define_registry!(traced4);

    traced4::get_or_init(|| 1u8);

    let (events, callback) = collector();
    traced4::set_trace_callback(callback);

    for _ in 0..5 {
        traced4::get_or_init(|| 2u8);
    }

    assert!(events.lock().unwrap().is_empty());
    traced4::clear_trace_callback();
}

#[test]
fn test_clear_trace_callback() {
    define_registry!(traced5);

    let (events, callback) = collector();
    traced5::set_trace_callback(callback);

    let _ = traced5::contains::<u8>();
    traced5::clear_trace_callback();

    traced5::get_or_init(|| 2u8);
    let _ = traced5::get::<u8>();

    assert_eq!(events.lock().unwrap().len(), 1);
}

#[test]
fn test_trace_callback_replacement() {
    define_registry!(traced6);

    let (events1, callback1) = collector();
    let (events2, callback2) = collector();

    traced6::set_trace_callback(callback1);
    let _ = traced6::contains::<usize>();

    traced6::set_trace_callback(callback2);
    let _ = traced6::contains::<usize>();

    assert_eq!(events1.lock().unwrap().len(), 1);
    assert_eq!(events2.lock().unwrap().len(), 1);

    traced6::clear_trace_callback();
}

#[test]
fn test_callback_can_use_different_registry() {
    define_registry!(main_registry);
    define_registry!(log_registry);

    let (events, callback) = collector();

    // Using a different registry inside the callback is safe.
    main_registry::set_trace_callback(move |event| {
        callback(event);
        log_registry::get_or_init(|| format!("first event: {}", event));
    });

    let value: Arc<i32> = main_registry::get_or_init(|| 42);
    assert_eq!(*value, 42);

    let captured = events.lock().unwrap();
    assert!(captured[0].contains("construct"));

    let first_log: Arc<String> = log_registry::get().unwrap();
    assert_eq!(&*first_log, "first event: construct { type_name: i32 }");

    main_registry::clear_trace_callback();
}

#[derive(Debug)]
pub struct Banner(String);

define_instance!(banner, Banner, || Ok::<_, std::fmt::Error>(Banner(
    "welcome".to_string()
)));

#[test]
fn test_define_instance_tracing() {
    let (events, callback) = collector();
    banner::set_trace_callback(callback);

    let _ = banner::get_instance().unwrap();
    let _ = banner::get();

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 3);
    assert!(captured[0].starts_with("construct"));
    assert!(captured[1].starts_with("constructed"));
    assert!(captured[2].contains("found: true"));

    banner::clear_trace_callback();
}

#[test]
fn test_owned_cell_reset_event() {
    let mut cell = InstanceCell::new();
    let (events, callback) = collector();
    cell.set_trace_callback(callback);

    cell.get_or_init(|| 5u16);
    cell.take();

    let captured = events.lock().unwrap();
    assert_eq!(captured.last().map(String::as_str), Some("reset {}"));
}

#[test]
fn test_factory_registry_events() {
    let mut registry = FactoryRegistry::new();
    let (events, callback) = collector();
    registry.set_trace_callback(callback);

    registry
        .register(pattern_registry::themes::ItalianFactory)
        .unwrap();
    let _ = registry.get_factory("italian");
    let _ = registry.get_factory("french");

    let captured = events.lock().unwrap();
    assert_eq!(
        captured.as_slice(),
        [
            "register { theme: italian }",
            "lookup { theme: italian, found: true }",
            "lookup { theme: french, found: false }",
        ]
    );
}

#[test]
#[serial]
fn test_global_factory_lookup_events() {
    let (events, callback) = collector();
    global_factories().set_trace_callback(callback);

    let _ = pattern_registry::get_factory("american");
    let _ = pattern_registry::get_factory("martian");

    global_factories().clear_trace_callback();
    let _ = pattern_registry::get_factory("italian");

    let captured = events.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(
        captured[0],
        RegistryEvent::Lookup {
            theme: ThemeId::AMERICAN.to_string(),
            found: true
        }
        .to_string()
    );
    assert!(captured[1].contains("found: false"));
}
