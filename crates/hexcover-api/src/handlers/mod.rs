mod health;
mod polyfill;
mod ring;

pub use health::health_check;
pub use polyfill::polyfill_csv;
pub use ring::{ring_csv_get, ring_csv_post, ring_geojson_get, ring_geojson_post};
