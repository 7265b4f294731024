//! Built-in themes.

mod american;
mod italian;

pub use american::{AmericanBurger, AmericanDrink, AmericanFactory, AmericanFries};
pub use italian::{ItalianBurger, ItalianDrink, ItalianFactory, ItalianFries};
