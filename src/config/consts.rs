// src/config/consts.rs

// Source
pub const DEFAULT_SOURCE: &str = "robots.csv";
pub const SOURCE_ENV: &str = "ROBOT_GUIDE_SOURCE";

// Net config
pub const USER_AGENT: &str = "robot_guide/0.1";
pub const FETCH_TIMEOUT_SECS: u64 = 15;

// Local state
pub const STORE_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
pub const DEFAULT_LOG_FILTER: &str = "warn,robot_guide=info";

// Render
pub const PLACEHOLDER: &str = "N/A";
pub const NO_LINK: &str = "#";
pub const DEFAULT_SUMMARY: &str = "This robot teaches coding and sequencing skills.";
pub const DEFAULT_STUDENTS_PER_DEVICE: &str = "1 - 2";
pub const CS_STANDARD: &str = "Washington State CS Standards: Algorithms and Programming";
pub const CLASSROOM_SET_SIZE: u32 = 24;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "dashboard";

// GUI
pub const APP_TITLE: &str = "Busy Teachers' Guide to Robots";
pub const CARD_COLUMNS: usize = 3;
pub const LOAD_POLL_MS: u64 = 100;
pub const SEARCH_ID: &str = "search";
pub const DASHBOARD_ID: &str = "dashboard";
pub const CARD_WIDTH_MIN: f32 = 260.0;
