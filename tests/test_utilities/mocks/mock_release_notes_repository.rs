use async_trait::async_trait;
use os_support::prelude::*;
use std::collections::HashMap;

/// Mock release notes source serving support matrices and overviews from memory
#[derive(Default)]
pub struct MockReleaseNotesRepository {
    matrices: HashMap<ReleaseLine, SupportMatrix>,
    overviews: HashMap<ReleaseLine, ReleaseOverview>,
}

impl MockReleaseNotesRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_matrix(mut self, release_line: u32, families: Vec<Family>) -> Self {
        let release_line = ReleaseLine::new(release_line);
        self.matrices.insert(
            release_line,
            SupportMatrix::new(release_line.channel_version(), families),
        );
        self
    }

    pub fn with_phase(mut self, release_line: u32, phase: SupportPhase) -> Self {
        let release_line = ReleaseLine::new(release_line);
        self.overviews.insert(
            release_line,
            ReleaseOverview::new(release_line.channel_version(), phase),
        );
        self
    }
}

#[async_trait]
impl SupportMatrixRepository for MockReleaseNotesRepository {
    async fn fetch_support_matrix(&self, release_line: ReleaseLine) -> Result<SupportMatrix> {
        self.matrices
            .get(&release_line)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no supported-os.json for {}", release_line))
    }
}

#[async_trait]
impl ReleaseOverviewRepository for MockReleaseNotesRepository {
    async fn fetch_release_overview(&self, release_line: ReleaseLine) -> Result<ReleaseOverview> {
        self.overviews
            .get(&release_line)
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("no releases.json for {}", release_line))
    }
}
