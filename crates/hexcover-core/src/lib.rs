//! Hexcover core - coverage queries over the H3 hexagonal grid
//!
//! Pure, synchronous cell-selection logic: k-ring expansion around a point,
//! polygon-to-cell coverage under the interior and buffered policies, and
//! rendering of coverage sets as GeoJSON or CSV.

pub mod cover;
pub mod error;
pub mod grid;
pub mod models;
pub mod serialize;

pub use error::{HexcoverError, Result};
