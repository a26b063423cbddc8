//! # sizing
//!
//! Pure size arithmetic for database file provisioning: parse human-readable
//! size strings, work out how many data files a database needs from its
//! expected size and a per-file threshold, and compute per-drive disk space
//! requirements with a safety margin.
//!
//! All operations are synchronous, deterministic and side-effect free.
//!
//! ```
//! use sizing::{optimal_file_count, required_space, SizeValue, DEFAULT_MARGIN, MAX_DATA_FILES};
//!
//! let expected: SizeValue = "50GB".parse().unwrap();
//! let threshold: SizeValue = "10GB".parse().unwrap();
//! let files = optimal_file_count(expected, threshold, MAX_DATA_FILES).unwrap();
//! assert_eq!(files, 5);
//!
//! let per_file: SizeValue = "200MB".parse().unwrap();
//! let log: SizeValue = "100MB".parse().unwrap();
//! let space = required_space(files, per_file, log, DEFAULT_MARGIN).unwrap();
//! assert_eq!(space.total.to_string(), "1210MB");
//! ```

mod calc;
mod error;
mod types;

pub use calc::{DEFAULT_MARGIN, MAX_DATA_FILES, optimal_file_count, required_space};
pub use error::{Error, Result};
pub use types::{SizeValue, SpaceRequirement};
