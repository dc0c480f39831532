use super::url_safety::{normalize_base_url, validate_url_component};
use crate::ports::outbound::LifecycleRepository;
use crate::shared::Result;
use crate::support_matrix::domain::{EolDate, SupportCycle};
use async_trait::async_trait;
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_LIFECYCLE_API_URL: &str = "https://endoflife.date/api/";

/// endoflife.date fields that are either a date string or a boolean
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum DateOrBool {
    Date(String),
    Bool(bool),
}

impl DateOrBool {
    fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").ok(),
            Self::Bool(_) => None,
        }
    }

    /// `true` means ended without a published date, `false` means not
    /// scheduled yet
    fn to_eol(&self) -> EolDate {
        match self {
            Self::Bool(true) => EolDate::Ended,
            Self::Bool(false) => EolDate::Unscheduled,
            Self::Date(_) => self.as_date().map_or(EolDate::Unknown, EolDate::On),
        }
    }

    fn is_set(&self) -> bool {
        !matches!(self, Self::Bool(false))
    }
}

/// One cycle as served by `/api/{product}.json` or `/api/{product}/{cycle}.json`.
/// The single-cycle endpoint omits `cycle`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct EolCycle {
    #[serde(default)]
    cycle: Option<String>,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    eol: Option<DateOrBool>,
    #[serde(default)]
    link: Option<String>,
    #[serde(default)]
    lts: Option<DateOrBool>,
}

impl EolCycle {
    fn into_domain(self) -> SupportCycle {
        let eol = self.eol.as_ref().map_or(EolDate::Unknown, DateOrBool::to_eol);
        let mut cycle = SupportCycle::new(eol);
        cycle.cycle = self.cycle;
        cycle.release_date = self
            .release_date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());
        cycle.link = self.link.filter(|link| !link.is_empty());
        cycle.lts = self.lts.as_ref().is_some_and(DateOrBool::is_set);
        cycle
    }
}

/// EndOfLifeClient adapter for fetching OS lifecycle data from endoflife.date
///
/// This adapter implements the LifecycleRepository port over the public
/// endoflife.date JSON API.
pub struct EndOfLifeClient {
    client: reqwest::Client,
    api_url: String,
}

impl EndOfLifeClient {
    /// Creates a client for the public endoflife.date API
    pub fn new() -> Result<Self> {
        Self::with_api_url(DEFAULT_LIFECYCLE_API_URL)
    }

    /// Creates a client for an alternative API base, e.g. a mirror
    pub fn with_api_url(api_url: &str) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("os-support/{}", version);
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;

        Ok(Self {
            client,
            api_url: normalize_base_url(api_url),
        })
    }

    fn product_url(&self, product: &str) -> Result<String> {
        validate_url_component(product, "Product")?;
        Ok(format!("{}{}.json", self.api_url, urlencoding::encode(product)))
    }

    fn cycle_url(&self, product: &str, cycle: &str) -> Result<String> {
        validate_url_component(product, "Product")?;
        validate_url_component(cycle, "Cycle")?;
        Ok(format!(
            "{}{}/{}.json",
            self.api_url,
            urlencoding::encode(product),
            urlencoding::encode(cycle)
        ))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            anyhow::bail!(
                "endoflife.date returned status code {} for {}",
                response.status(),
                url
            );
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LifecycleRepository for EndOfLifeClient {
    async fn fetch_product_cycle(&self, product: &str, cycle: &str) -> Result<SupportCycle> {
        let url = self.cycle_url(product, cycle)?;
        let record: EolCycle = self.get_json(&url).await?;

        let mut support_cycle = record.into_domain();
        if support_cycle.cycle.is_none() {
            support_cycle.cycle = Some(cycle.to_string());
        }
        Ok(support_cycle)
    }

    async fn fetch_product_cycles(&self, product: &str) -> Result<Vec<SupportCycle>> {
        let url = self.product_url(product)?;
        let records: Vec<EolCycle> = self.get_json(&url).await?;
        Ok(records.into_iter().map(EolCycle::into_domain).collect())
    }
}
