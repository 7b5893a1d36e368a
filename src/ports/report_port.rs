//! Dashboard generation port trait.

use crate::domain::error::RetscanError;
use crate::domain::scan::TimeframeReport;

/// Port for writing the scan dashboard.
pub trait ReportPort {
    fn write(
        &self,
        reports: &[TimeframeReport],
        output_path: &str,
    ) -> Result<(), RetscanError>;
}
