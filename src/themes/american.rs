use crate::{Beverage, FamilyFactory, PrimaryItem, Product, SideItem, ThemeId};

/// Factory for the american theme.
///
/// Registered under [`ThemeId::AMERICAN`] by
/// [`FactoryRegistry::with_builtin_themes`](crate::FactoryRegistry::with_builtin_themes).
#[derive(Debug, Clone, Copy, Default)]
pub struct AmericanFactory;

impl FamilyFactory for AmericanFactory {
    fn theme(&self) -> ThemeId {
        ThemeId::AMERICAN
    }

    fn create_primary(&self) -> Box<dyn PrimaryItem> {
        Box::new(AmericanBurger)
    }

    fn create_side(&self) -> Box<dyn SideItem> {
        Box::new(AmericanFries)
    }

    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(AmericanDrink)
    }
}

/// American primary item: a beef burger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmericanBurger;

impl Product for AmericanBurger {
    fn theme(&self) -> ThemeId {
        ThemeId::AMERICAN
    }

    fn name(&self) -> &'static str {
        "AmericanBurger"
    }
}

impl PrimaryItem for AmericanBurger {
    fn prepare(&self) -> String {
        "grilling a beef patty with cheddar and pickles".to_string()
    }
}

/// American side item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmericanFries;

impl Product for AmericanFries {
    fn theme(&self) -> ThemeId {
        ThemeId::AMERICAN
    }

    fn name(&self) -> &'static str {
        "AmericanFries"
    }
}

impl SideItem for AmericanFries {
    fn serve(&self) -> String {
        "serving shoestring fries with ketchup".to_string()
    }
}

/// American beverage: a cola.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmericanDrink;

impl Product for AmericanDrink {
    fn theme(&self) -> ThemeId {
        ThemeId::AMERICAN
    }

    fn name(&self) -> &'static str {
        "AmericanDrink"
    }
}

impl Beverage for AmericanDrink {
    fn pour(&self) -> String {
        "pouring a large cola over ice".to_string()
    }
}
