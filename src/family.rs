//! Product roles and the abstract family factory.
//!
//! A family is one product per role (primary item, side item, beverage), all built by
//! the same [`FamilyFactory`] and therefore all tagged with the same [`ThemeId`].
//! Client code only names these traits, never a concrete theme's types.

use std::borrow::{Borrow, Cow};
use std::fmt;

/// Identifier of a theme, the key a [`FamilyFactory`] is registered under.
///
/// Matching is exact and case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ThemeId(Cow<'static, str>);

impl ThemeId {
    /// The built-in american theme.
    pub const AMERICAN: ThemeId = ThemeId::from_static("american");
    /// The built-in italian theme.
    pub const ITALIAN: ThemeId = ThemeId::from_static("italian");

    /// Usable in `const` contexts.
    pub const fn from_static(id: &'static str) -> Self {
        Self(Cow::Borrowed(id))
    }

    pub fn new(id: impl Into<Cow<'static, str>>) -> Self {
        Self(id.into())
    }

    /// The theme as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for ThemeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&'static str> for ThemeId {
    fn from(id: &'static str) -> Self {
        Self::from_static(id)
    }
}

impl From<String> for ThemeId {
    fn from(id: String) -> Self {
        Self(Cow::Owned(id))
    }
}

/// Capabilities shared by every product role.
pub trait Product: fmt::Debug + Send + Sync {
    /// Theme of the factory that built this product.
    fn theme(&self) -> ThemeId;

    /// Concrete product name, e.g. `"AmericanBurger"`.
    fn name(&self) -> &'static str;
}

/// Primary-item role.
pub trait PrimaryItem: Product {
    fn prepare(&self) -> String;
}

/// Side-item role.
pub trait SideItem: Product {
    fn serve(&self) -> String;
}

/// Beverage role.
pub trait Beverage: Product {
    fn pour(&self) -> String;
}

/// Builds one consistent product family.
///
/// Every product returned by one factory carries [`FamilyFactory::theme`]. A new theme
/// is added by implementing this trait and registering the factory in a
/// [`FactoryRegistry`](crate::FactoryRegistry); nothing existing changes.
pub trait FamilyFactory: fmt::Debug + Send + Sync {
    fn theme(&self) -> ThemeId;

    fn create_primary(&self) -> Box<dyn PrimaryItem>;

    fn create_side(&self) -> Box<dyn SideItem>;

    fn create_beverage(&self) -> Box<dyn Beverage>;

    /// Builds one product per role.
    fn create_family(&self) -> Family {
        Family {
            theme: self.theme(),
            primary: self.create_primary(),
            side: self.create_side(),
            beverage: self.create_beverage(),
        }
    }
}

/// One product per role, all from the same factory.
#[derive(Debug)]
pub struct Family {
    theme: ThemeId,
    primary: Box<dyn PrimaryItem>,
    side: Box<dyn SideItem>,
    beverage: Box<dyn Beverage>,
}

impl Family {
    /// Theme of the factory that built the family.
    pub fn theme(&self) -> &ThemeId {
        &self.theme
    }

    /// The primary item.
    pub fn primary(&self) -> &dyn PrimaryItem {
        self.primary.as_ref()
    }

    /// The side item.
    pub fn side(&self) -> &dyn SideItem {
        self.side.as_ref()
    }

    /// The beverage.
    pub fn beverage(&self) -> &dyn Beverage {
        self.beverage.as_ref()
    }

    /// Splits the family into its products, in role order.
    ///
    /// The products are detached from the family afterwards; nothing ties them to one
    /// theme any more.
    pub fn into_parts(self) -> (Box<dyn PrimaryItem>, Box<dyn SideItem>, Box<dyn Beverage>) {
        (self.primary, self.side, self.beverage)
    }

    /// Whether every product carries the family's theme.
    pub fn is_consistent(&self) -> bool {
        [
            self.primary.theme(),
            self.side.theme(),
            self.beverage.theme(),
        ]
        .iter()
        .all(|theme| *theme == self.theme)
    }

    /// Product names in role order.
    pub fn names(&self) -> [&'static str; 3] {
        [self.primary.name(), self.side.name(), self.beverage.name()]
    }
}
