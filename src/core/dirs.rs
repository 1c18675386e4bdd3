use crate::core::error::LinguaSparkError;
use std::path::PathBuf;

pub fn get_config_directory() -> Result<PathBuf, LinguaSparkError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|_| home_join(".config"))?,
        "macos" => home_join("Library/Application Support")?,
        _ => dirs::config_dir().ok_or(LinguaSparkError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("linguaspark"))
}

pub fn get_data_directory() -> Result<PathBuf, LinguaSparkError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_DATA_HOME")
            .map(PathBuf::from)
            .or_else(|_| home_join(".local/share"))?,
        "macos" => home_join("Library/Application Support")?,
        _ => dirs::data_dir().ok_or(LinguaSparkError::ConfigDirectoryNotFound)?,
    };

    Ok(base.join("linguaspark"))
}

fn home_join(relative: &str) -> Result<PathBuf, LinguaSparkError> {
    dirs::home_dir()
        .map(|home| home.join(relative))
        .ok_or(LinguaSparkError::ConfigDirectoryNotFound)
}
