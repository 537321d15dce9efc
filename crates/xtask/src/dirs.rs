//! Data directory resolution

use std::path::PathBuf;

/// Environment variable naming the default content directory.
pub const DATA_DIR_ENV: &str = "TACTICS_DATA_DIR";

/// Resolve the content directory.
///
/// Precedence:
/// - the `--data-dir` flag
/// - `$TACTICS_DATA_DIR` (also read from `.env`)
/// - `./data`
pub fn data_dir(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| std::env::var_os(DATA_DIR_ENV).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("data"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_flag_wins() {
        assert_eq!(
            data_dir(Some(PathBuf::from("/srv/maps"))),
            PathBuf::from("/srv/maps")
        );
    }
}
