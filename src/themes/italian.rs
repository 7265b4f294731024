use crate::{Beverage, FamilyFactory, PrimaryItem, Product, SideItem, ThemeId};

/// Factory for the italian theme.
///
/// Registered under [`ThemeId::ITALIAN`] by
/// [`FactoryRegistry::with_builtin_themes`](crate::FactoryRegistry::with_builtin_themes).
#[derive(Debug, Clone, Copy, Default)]
pub struct ItalianFactory;

impl FamilyFactory for ItalianFactory {
    fn theme(&self) -> ThemeId {
        ThemeId::ITALIAN
    }

    fn create_primary(&self) -> Box<dyn PrimaryItem> {
        Box::new(ItalianBurger)
    }

    fn create_side(&self) -> Box<dyn SideItem> {
        Box::new(ItalianFries)
    }

    fn create_beverage(&self) -> Box<dyn Beverage> {
        Box::new(ItalianDrink)
    }
}

/// Italian primary item: a veal burger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItalianBurger;

impl Product for ItalianBurger {
    fn theme(&self) -> ThemeId {
        ThemeId::ITALIAN
    }

    fn name(&self) -> &'static str {
        "ItalianBurger"
    }
}

impl PrimaryItem for ItalianBurger {
    fn prepare(&self) -> String {
        "searing a veal patty with mozzarella and basil".to_string()
    }
}

/// Italian side item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItalianFries;

impl Product for ItalianFries {
    fn theme(&self) -> ThemeId {
        ThemeId::ITALIAN
    }

    fn name(&self) -> &'static str {
        "ItalianFries"
    }
}

impl SideItem for ItalianFries {
    fn serve(&self) -> String {
        "serving rosemary fries with parmesan".to_string()
    }
}

/// Italian beverage: a chinotto.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItalianDrink;

impl Product for ItalianDrink {
    fn theme(&self) -> ThemeId {
        ThemeId::ITALIAN
    }

    fn name(&self) -> &'static str {
        "ItalianDrink"
    }
}

impl Beverage for ItalianDrink {
    fn pour(&self) -> String {
        "pouring a chilled chinotto".to_string()
    }
}
