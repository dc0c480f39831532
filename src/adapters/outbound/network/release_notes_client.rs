use super::url_safety::normalize_base_url;
use crate::ports::outbound::{ReleaseOverviewRepository, SupportMatrixRepository};
use crate::shared::error::SupportError;
use crate::shared::security::read_document;
use crate::shared::Result;
use crate::support_matrix::domain::{
    Distribution, Family, ReleaseLine, ReleaseOverview, SupportMatrix, SupportPhase,
};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_RELEASE_NOTES_URL: &str =
    "https://raw.githubusercontent.com/dotnet/core/main/release-notes/";

const SUPPORTED_OS_DOCUMENT: &str = "supported-os.json";
const RELEASES_DOCUMENT: &str = "releases.json";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct SupportedOsDocument {
    channel_version: String,
    #[serde(default)]
    families: Vec<FamilyDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct FamilyDocument {
    name: String,
    #[serde(default)]
    distributions: Vec<DistributionDocument>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct DistributionDocument {
    id: String,
    name: String,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    lifecycle: Option<String>,
    #[serde(default)]
    architectures: Vec<String>,
    #[serde(default)]
    supported_versions: Vec<String>,
    #[serde(default)]
    unsupported_versions: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case")]
struct ReleasesDocument {
    channel_version: String,
    support_phase: String,
    #[serde(default)]
    eol_date: Option<String>,
    #[serde(default)]
    release_type: Option<String>,
}

impl SupportedOsDocument {
    fn into_domain(self) -> SupportMatrix {
        let families = self
            .families
            .into_iter()
            .map(|family| {
                let distributions = family
                    .distributions
                    .into_iter()
                    .map(|d| Distribution {
                        id: d.id,
                        name: d.name,
                        link: d.link,
                        lifecycle: d.lifecycle,
                        architectures: d.architectures,
                        supported_versions: d.supported_versions,
                        unsupported_versions: d.unsupported_versions,
                    })
                    .collect();
                Family::new(family.name, distributions)
            })
            .collect();

        SupportMatrix::new(self.channel_version, families)
    }
}

impl ReleasesDocument {
    fn into_domain(self) -> ReleaseOverview {
        let mut overview =
            ReleaseOverview::new(self.channel_version, SupportPhase::parse(&self.support_phase));
        overview.eol_date = self
            .eol_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
        overview.release_type = self.release_type;
        overview
    }
}

/// Where the release notes documents are read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReleaseNotesSource {
    /// Base URL ending in `/`
    Web(String),
    /// Root directory of a release notes checkout
    Local(PathBuf),
}

impl ReleaseNotesSource {
    /// Resolves an optional `--base` override.
    ///
    /// No override means the published release notes; an override starting
    /// with `https` is a web base; anything else is a local directory.
    pub fn resolve(base: Option<&str>) -> Self {
        match base {
            None => ReleaseNotesSource::Web(DEFAULT_RELEASE_NOTES_URL.to_string()),
            Some(base) if base.starts_with("https") => {
                ReleaseNotesSource::Web(normalize_base_url(base))
            }
            Some(base) => ReleaseNotesSource::Local(PathBuf::from(base)),
        }
    }

    /// Location of one document of one release line
    pub fn location(&self, release_line: ReleaseLine, document: &str) -> String {
        match self {
            ReleaseNotesSource::Web(base) => {
                format!("{}{}/{}", base, release_line.channel_version(), document)
            }
            ReleaseNotesSource::Local(root) => root
                .join(release_line.channel_version())
                .join(document)
                .display()
                .to_string(),
        }
    }
}

impl fmt::Display for ReleaseNotesSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseNotesSource::Web(base) => write!(f, "{}", base),
            ReleaseNotesSource::Local(root) => write!(f, "{}", root.display()),
        }
    }
}

/// ReleaseNotesClient adapter reading the release notes JSON documents
///
/// Implements both SupportMatrixRepository and ReleaseOverviewRepository,
/// over HTTP or the local filesystem depending on the source.
pub struct ReleaseNotesClient {
    client: reqwest::Client,
    source: ReleaseNotesSource,
}

impl ReleaseNotesClient {
    pub fn new(source: ReleaseNotesSource) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("os-support/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self { client, source })
    }

    pub fn source(&self) -> &ReleaseNotesSource {
        &self.source
    }

    async fn fetch_document<T: DeserializeOwned>(
        &self,
        release_line: ReleaseLine,
        document: &str,
    ) -> Result<T> {
        let location = self.source.location(release_line, document);

        let result = self.read_and_parse(&location).await;

        result.map_err(|e| {
            SupportError::ReleaseDataUnavailable {
                release_line: release_line.to_string(),
                location,
                details: e.to_string(),
            }
            .into()
        })
    }

    async fn read_and_parse<T: DeserializeOwned>(&self, location: &str) -> Result<T> {
        let content = match &self.source {
            ReleaseNotesSource::Web(_) => {
                let response = self.client.get(location).send().await?;
                if !response.status().is_success() {
                    anyhow::bail!("HTTP request failed with status: {}", response.status());
                }
                response.text().await?
            }
            ReleaseNotesSource::Local(_) => {
                read_document(std::path::Path::new(location), "release notes document")?
            }
        };

        Ok(serde_json::from_str(&content)?)
    }
}

#[async_trait]
impl SupportMatrixRepository for ReleaseNotesClient {
    async fn fetch_support_matrix(&self, release_line: ReleaseLine) -> Result<SupportMatrix> {
        let document: SupportedOsDocument =
            self.fetch_document(release_line, SUPPORTED_OS_DOCUMENT).await?;
        Ok(document.into_domain())
    }
}

#[async_trait]
impl ReleaseOverviewRepository for ReleaseNotesClient {
    async fn fetch_release_overview(&self, release_line: ReleaseLine) -> Result<ReleaseOverview> {
        let document: ReleasesDocument = self.fetch_document(release_line, RELEASES_DOCUMENT).await?;
        Ok(document.into_domain())
    }
}
