use crate::application::dto::CheckResponse;
use crate::support_matrix::domain::CheckOutcome;

const EOL_NOTICE: &str = "** This version is EOL and therefore checks can not be performed as the documents should show the state as of EOL instead of today.";

/// Formats the anomaly check result as the plain-text list CI logs show
pub struct CheckFormatter {
    platform_name: String,
}

impl CheckFormatter {
    pub fn new(platform_name: impl Into<String>) -> Self {
        Self {
            platform_name: platform_name.into(),
        }
    }

    pub fn format(&self, response: &CheckResponse) -> String {
        let mut output = format!("* {} {}\n", self.platform_name, response.release_line);

        match &response.outcome {
            CheckOutcome::ReleaseLineEol => {
                output.push_str(EOL_NOTICE);
                output.push('\n');
            }
            CheckOutcome::Checked(anomalies) => {
                for anomaly in anomalies {
                    output.push_str(&format!(
                        "** {} {}: {}\n",
                        anomaly.distribution_name, anomaly.version, anomaly.category
                    ));
                }
            }
        }

        output
    }
}
