// src/config/consts.rs

// Net config
pub const STORE_BASE: &str = "https://brightet.com";
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
pub const SCRAPE_ATTEMPTS: u32 = 3;

// Catalog
pub const DEFAULT_CATALOG: &str = "src/data/products.ts";
// URL-prefix signature of stand-in images that still need a real replacement
pub const PLACEHOLDER_PREFIX: &str = "https://images.unsplash.com/";
pub const PLACEHOLDER_HOST: &str = "unsplash.com";
// Storefront asset host; also a substring of the CDN host serving product shots
pub const ASSET_HOST: &str = "brightet.com";
pub const CDN_MARKER: &str = "cdn.shop";

// Politeness
pub const CHECK_PAUSE_MS: u64 = 500;
pub const SCRAPE_PAUSE_MS: u64 = 1000;
pub const SCRAPE_JITTER_MS: u64 = 2000; // extra 0..2000 ms

// Accessibility classification
pub const IMAGE_MIME_TYPES: &[&str] = &["image/jpeg", "image/jpg", "image/png", "image/webp"];
pub const IMAGE_EXTENSIONS: &[&str] = &[".jpg", ".jpeg", ".png", ".webp"];

// Audit mapping files
pub const SCRAPE_MAPPING_FILE: &str = "image_mapping.json";
pub const VERIFY_FIXES_FILE: &str = "image_fixes.json";

// Run log
pub const LOG_FILE: &str = ".imgfix.log";

// Catalog categories we have curated pools for
pub const KNOWN_CATEGORIES: &[&str] = &[
    "Chandeliers",
    "Table Lamps",
    "Floor Lamps",
    "Wall Lights",
    "Outdoor Lighting",
    "Pendant Lights",
    "Ceiling Lights",
];
