use std::path::PathBuf;

const DATA_DIR_NAME: &str = "wien_wetter";

/// Default location of the reference data, below the platform data directory.
pub fn get_data_dir() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join(DATA_DIR_NAME))
}
