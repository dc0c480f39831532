pub mod distribution;
pub mod exceptions;
pub mod lifecycle;
pub mod release_catalog;
pub mod release_line;
pub mod release_report;
pub mod target;

pub use distribution::{Distribution, Family, SupportMatrix};
pub use exceptions::ExceptionTable;
pub use lifecycle::{EolDate, SupportCycle, VersionWithEol};
pub use release_catalog::{CatalogEntry, ReleaseCatalog};
pub use release_line::ReleaseLine;
pub use release_report::{
    Anomaly, AnomalyCategory, CheckOutcome, DistributionStatus, FamilyStatus, ReleaseOverview,
    ReleaseReport, SupportPhase,
};
pub use target::{SupportTier, TargetSelection};
