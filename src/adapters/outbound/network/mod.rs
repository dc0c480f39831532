/// Network adapters for external API calls
mod caching_lifecycle_client;
mod endoflife_client;
mod release_notes_client;
mod url_safety;

pub use caching_lifecycle_client::CachingLifecycleRepository;
pub use endoflife_client::{EndOfLifeClient, DEFAULT_LIFECYCLE_API_URL};
pub use release_notes_client::{ReleaseNotesClient, ReleaseNotesSource, DEFAULT_RELEASE_NOTES_URL};
