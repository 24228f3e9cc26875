pub mod load;
pub mod types;

pub use load::SETTINGS_FILE;
pub use types::{
    Config, DEFAULT_EXTENSION, DEFAULT_FILE_PREFIX, DEFAULT_OUTPUT_DIR, DEFAULT_TIMESTAMP_FORMAT,
    SaverSettings,
};
