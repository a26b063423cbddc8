//! File-count and space-requirement calculations

use crate::error::{Error, Result};
use crate::types::{SizeValue, SpaceRequirement};

/// Hard cap on the number of data files per database
pub const MAX_DATA_FILES: u32 = 8;

/// Default safety margin applied on top of computed space requirements (10%)
pub const DEFAULT_MARGIN: f64 = 1.10;

/// Calculate how many data files a database of `expected` size needs
///
/// One file per `threshold` of expected size, rounded up, never more than
/// `max_files`. A database at or below the threshold gets a single file.
pub fn optimal_file_count(
    expected: SizeValue,
    threshold: SizeValue,
    max_files: u32,
) -> Result<u32> {
    if threshold.is_zero() {
        return Err(Error::InvalidThreshold(
            "per-file threshold must be greater than zero".to_string(),
        ));
    }
    if max_files == 0 {
        return Err(Error::InvalidInput(
            "maximum file count must be at least 1".to_string(),
        ));
    }

    if expected <= threshold {
        return Ok(1);
    }

    let raw = expected.bytes().div_ceil(threshold.bytes());
    Ok(raw.min(u64::from(max_files)) as u32)
}

/// Calculate per-drive disk space requirements for a planned file layout
///
/// `data` covers `file_count` data files of `data_file_size` each, `log`
/// covers the log file, and `total` is the margined sum of both. All three
/// values include the `margin` factor.
pub fn required_space(
    file_count: u32,
    data_file_size: SizeValue,
    log_size: SizeValue,
    margin: f64,
) -> Result<SpaceRequirement> {
    if file_count == 0 {
        return Err(Error::InvalidInput(
            "file count must be at least 1".to_string(),
        ));
    }
    if !margin.is_finite() || margin < 0.0 {
        return Err(Error::InvalidInput(format!(
            "margin factor must be a non-negative number, got {margin}"
        )));
    }

    let data_bytes = data_file_size
        .bytes()
        .checked_mul(u64::from(file_count))
        .ok_or_else(|| Error::InvalidInput("data size overflows".to_string()))?;
    let combined = data_bytes
        .checked_add(log_size.bytes())
        .ok_or_else(|| Error::InvalidInput("combined size overflows".to_string()))?;

    Ok(SpaceRequirement {
        data: SizeValue::from_bytes(apply_margin(data_bytes, margin)),
        log: SizeValue::from_bytes(apply_margin(log_size.bytes(), margin)),
        total: SizeValue::from_bytes(apply_margin(combined, margin)),
    })
}

/// Scale a byte count by the margin factor, rounded to the nearest byte
fn apply_margin(bytes: u64, margin: f64) -> u64 {
    (bytes as f64 * margin).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(s: &str) -> SizeValue {
        s.parse().unwrap()
    }

    #[test]
    fn test_single_file_when_at_or_below_threshold() {
        // 5GB / 10GB -> one file
        assert_eq!(
            optimal_file_count(size("5GB"), size("10GB"), MAX_DATA_FILES).unwrap(),
            1
        );
        // exact boundary stays at one file, not two
        assert_eq!(
            optimal_file_count(size("10GB"), size("10GB"), MAX_DATA_FILES).unwrap(),
            1
        );
    }

    #[test]
    fn test_file_count_rounds_up() {
        // 50GB / 10GB -> 5 files
        assert_eq!(
            optimal_file_count(size("50GB"), size("10GB"), MAX_DATA_FILES).unwrap(),
            5
        );
        // 51GB / 10GB -> 6 files
        assert_eq!(
            optimal_file_count(size("51GB"), size("10GB"), MAX_DATA_FILES).unwrap(),
            6
        );
    }

    #[test]
    fn test_file_count_is_capped() {
        // 100GB / 10GB would be 10 files, capped at 8
        assert_eq!(
            optimal_file_count(size("100GB"), size("10GB"), MAX_DATA_FILES).unwrap(),
            8
        );
        // extreme ratio still respects the cap
        assert_eq!(
            optimal_file_count(size("10TB"), size("10GB"), MAX_DATA_FILES).unwrap(),
            8
        );
    }

    #[test]
    fn test_custom_cap() {
        assert_eq!(
            optimal_file_count(size("100GB"), size("10GB"), 4).unwrap(),
            4
        );
    }

    #[test]
    fn test_zero_threshold_is_rejected() {
        assert!(matches!(
            optimal_file_count(size("50GB"), size("0GB"), MAX_DATA_FILES),
            Err(Error::InvalidThreshold(_))
        ));
    }

    #[test]
    fn test_zero_cap_is_rejected() {
        assert!(matches!(
            optimal_file_count(size("50GB"), size("10GB"), 0),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_required_space_with_default_margin() {
        // (4 x 200MB + 100MB) x 1.10 = 990MB
        let req = required_space(4, size("200MB"), size("100MB"), DEFAULT_MARGIN).unwrap();
        assert_eq!(req.total, size("990MB"));
        assert_eq!(req.data, size("880MB"));
        assert_eq!(req.log, size("110MB"));
    }

    #[test]
    fn test_required_space_without_margin() {
        let req = required_space(2, size("1GB"), size("512MB"), 1.0).unwrap();
        assert_eq!(req.data, size("2GB"));
        assert_eq!(req.log, size("512MB"));
        assert_eq!(req.total, size("2560MB"));
    }

    #[test]
    fn test_required_space_rejects_zero_files() {
        assert!(matches!(
            required_space(0, size("200MB"), size("100MB"), DEFAULT_MARGIN),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_required_space_rejects_bad_margin() {
        for margin in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                required_space(1, size("200MB"), size("100MB"), margin),
                Err(Error::InvalidInput(_))
            ));
        }
    }
}
