//! Catalog loading, identity and grouping.
//!
//! A catalog is a declarative list of playable entries. It is loaded once at
//! startup (and replaced wholesale on reload), never mutated in between.

mod group;
mod identity;
mod load;
mod locator;
mod model;

pub use group::*;
pub use identity::*;
pub use load::*;
pub use locator::*;
pub use model::*;

#[cfg(test)]
mod tests;
