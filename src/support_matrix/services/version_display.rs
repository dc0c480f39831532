//! Display rules for OS version strings in report cells.

/// Length of the lead two Windows version strings must share to be shown
/// as one entry (e.g. "10-22h2" for "10-22h2-e" and "10-22h2-w")
pub const WINDOWS_LEAD_LENGTH: usize = 7;

/// Removes `prefix` plus its separator from the start of `version`.
///
/// `"alpine-3.18"` with prefix `"alpine"` becomes `"3.18"`. Versions no
/// longer than the prefix and separator are returned unchanged.
pub fn strip_version_prefix(version: &str, prefix: Option<&str>) -> String {
    let Some(prefix) = prefix else {
        return version.to_string();
    };

    let offset = prefix.len() + 1;
    if version.len() > offset {
        if let Some(rest) = version.get(offset..) {
            return rest.to_string();
        }
    }
    version.to_string()
}

/// Collapses runs of consecutive Windows versions that share the same
/// [`WINDOWS_LEAD_LENGTH`]-character lead into that lead, upper-cased.
/// Every other version is upper-cased as is.
pub fn simplify_windows_versions(versions: &[String]) -> Vec<String> {
    let mut simplified = Vec::with_capacity(versions.len());
    let mut i = 0;

    while i < versions.len() {
        let current = &versions[i];

        if let Some(lead) = current.get(..WINDOWS_LEAD_LENGTH) {
            let run_end = versions[i + 1..]
                .iter()
                .position(|next| !next.starts_with(lead))
                .map_or(versions.len(), |offset| i + 1 + offset);

            if run_end > i + 1 {
                simplified.push(lead.to_uppercase());
                i = run_end;
                continue;
            }
        }

        simplified.push(prettify_windows_version(current));
        i += 1;
    }

    simplified
}

pub fn prettify_windows_version(version: &str) -> String {
    version.to_uppercase()
}

/// Display form of a whole column's version list
pub fn display_versions(versions: &[String], is_windows: bool, prefix: Option<&str>) -> Vec<String> {
    let versions = if is_windows {
        simplify_windows_versions(versions)
    } else {
        versions.to_vec()
    };

    versions
        .iter()
        .map(|version| strip_version_prefix(version, prefix))
        .collect()
}

/// Display form of a single version
pub fn display_version(version: &str, is_windows: bool, prefix: Option<&str>) -> String {
    if is_windows {
        strip_version_prefix(&prettify_windows_version(version), prefix)
    } else {
        strip_version_prefix(version, prefix)
    }
}
