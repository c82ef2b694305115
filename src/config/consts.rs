// src/config/consts.rs

// Net config
pub const BASE_URL: &str = "http://pathofexile.gamepedia.com";
pub const INDEX_URL: &str = "http://pathofexile.gamepedia.com/Unique_item#UniqueItemTypes";
pub const LIST_SOURCE_URL: &str = "http://pathofexile.gamepedia.com/List_of_unique_items";
pub const USER_AGENT: &str = "poe_uniques/1.0";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// The index has no sub-category links for these two
pub const EXTRA_LIST_PAGES: [&str; 2] = [
    "/List_of_unique_jewels",
    "/List_of_unique_maps",
];

// Output
pub const OUT_FILE: &str = "Uniques.txt";

// Local debug log
pub const LOG_FILE: &str = ".store/debug.log";

// Concurrency
pub const WORKERS: usize = 4;
pub const REQUEST_PAUSE_MS: u64 = 75; // be polite
pub const JITTER_MS: u64 = 50; // extra 0..50 ms
