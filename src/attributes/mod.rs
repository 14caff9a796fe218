//! Canonical attribute model.
//!
//! Raw scraped attribute keys drift across site layouts and game
//! editions. This module maps any raw key into a canonical camelCase
//! name, classifies canonical names into the closed category set the
//! UI groups by, and produces display labels. Every function here is
//! pure and total: unrecognized keys classify as `Other` and format via
//! the generic rule instead of failing.

mod category;
mod display;
mod normalize;

pub use category::*;
pub use display::*;
pub use normalize::*;
