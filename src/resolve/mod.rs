// src/resolve/mod.rs
mod fallback;
mod pool;
mod scrape;

pub use fallback::FallbackResolver;
pub use pool::RotationPool;
pub use scrape::{find_image, resolve_product_image};
