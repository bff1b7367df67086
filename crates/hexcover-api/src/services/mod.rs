mod polyfill;
mod ring;

pub use polyfill::PolyfillService;
pub use ring::RingService;
