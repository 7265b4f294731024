//! Theme families example for pattern-registry.
//!
//! Demonstrates:
//! - Selecting a factory by theme at startup
//! - Client code written against the abstract traits only
//! - Adding a theme without touching the built-in ones
//!
//! Run with: `cargo run --example theme_families -- italian`

use pattern_registry::{
    Beverage, FactoryRegistry, FamilyFactory, PrimaryItem, Product, SideItem, ThemeId,
};

#[derive(Debug)]
struct Taco;

impl Product for Taco {
    fn theme(&self) -> ThemeId {
        ThemeId::from_static("mexican")
    }
    fn name(&self) -> &'static str {
        "MexicanBurger"
    }
}

impl PrimaryItem for Taco {
    fn prepare(&self) -> String {
        "folding carnitas into a corn tortilla".to_string()
    }
}

#[derive(Debug)]
struct Nachos;

impl Product for Nachos {
    fn theme(&self) -> ThemeId {
        ThemeId::from_static("mexican")
    }
    fn name(&self) -> &'static str {
        "MexicanFries"
    }
}

impl SideItem for Nachos {
    fn serve(&self) -> String {
        "serving nachos with salsa verde".to_string()
    }
}

#[derive(Debug)]
struct Horchata;

impl Product for Horchata {
    fn theme(&self) -> ThemeId {
        ThemeId::from_static("mexican")
    }
    fn name(&self) -> &'static str {
        "MexicanDrink"
    }
}

impl Beverage for Horchata {
    fn pour(&self) -> String {
        "pouring cinnamon horchata".to_string()
    }
}

#[derive(Debug)]
struct MexicanFactory;

impl FamilyFactory for MexicanFactory {
    fn theme(&self) -> ThemeId {
        ThemeId::from_static("mexican")
    }
    fn create_primary(&self) -> Box<dyn PrimaryItem> {
        Box::new(Taco)
    }
    fn create_side(&self) -> Box<dyn SideItem> {
        Box::new(Nachos)
    }
    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(Horchata)
    }
}

/// Client code: only the abstract factory is named.
fn serve_meal(factory: &dyn FamilyFactory) {
    let family = factory.create_family();
    println!("   [{}]", family.theme());
    println!("   {:<16} {}", family.primary().name(), family.primary().prepare());
    println!("   {:<16} {}", family.side().name(), family.side().serve());
    println!("   {:<16} {}", family.beverage().name(), family.beverage().pour());
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("=== pattern-registry: Theme Families ===\n");

    let mut factories = FactoryRegistry::with_builtin_themes();
    if let Err(err) = factories.register(MexicanFactory) {
        eprintln!("registration failed: {err}");
        return;
    }
    factories.set_trace_callback(|event| println!("   [trace] {event}"));

    let requested: Vec<String> = std::env::args().skip(1).collect();
    let themes: Vec<String> = if requested.is_empty() {
        factories.themes().iter().map(ToString::to_string).collect()
    } else {
        requested
    };

    for theme in &themes {
        println!("Serving theme `{theme}`...");
        match factories.get_factory(theme) {
            Ok(factory) => serve_meal(factory.as_ref()),
            Err(err) => println!("   error: {err}"),
        }
        println!();
    }

    println!("=== Done ===");
}
