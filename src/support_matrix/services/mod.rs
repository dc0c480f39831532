mod anomaly_checker;
mod cross_version_aggregator;
mod eol_merge;
mod release_status;
mod unsupported_detector;
pub mod version_display;

pub use anomaly_checker::AnomalyChecker;
pub use cross_version_aggregator::{CrossVersionAggregator, TargetRow};
pub use eol_merge::{CycleLookup, EolMerge, UnsupportedWithEol};
pub use release_status::{ReleaseStatusService, StatusWindow, DEFAULT_EOL_SOON_DAYS};
pub use unsupported_detector::{UnsupportedDetector, UnsupportedRecord};
