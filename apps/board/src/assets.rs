//! Logo resolution — turns a job's logo reference into a URL the board can show.
//!
//! Resolution happens once at startup. A reference that cannot be resolved is
//! replaced by the configured fallback URL; the user never sees an error and
//! card content is otherwise untouched.

use std::collections::HashMap;
use std::path::PathBuf;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::models::job::Job;

/// Resolves a logo reference to a displayable URL, or `None` when the asset
/// cannot be found.
#[async_trait]
pub trait LogoResolver: Send + Sync {
    async fn resolve(&self, logo: &str) -> Option<String>;
}

/// Resolves references against a directory of static assets.
///
/// - `http://` / `https://` references pass through untouched
/// - `./images/x.svg` is served as `/images/x.svg`
/// - the file must exist under `root`
pub struct FsLogoResolver {
    root: PathBuf,
}

impl FsLogoResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl LogoResolver for FsLogoResolver {
    async fn resolve(&self, logo: &str) -> Option<String> {
        if logo.starts_with("http://") || logo.starts_with("https://") {
            return Some(logo.to_string());
        }

        let url = public_url(logo)?;
        let on_disk = self.root.join(url.trim_start_matches('/'));
        match tokio::fs::try_exists(&on_disk).await {
            Ok(true) => Some(url),
            Ok(false) => None,
            Err(e) => {
                debug!("Could not stat {}: {e}", on_disk.display());
                None
            }
        }
    }
}

/// Root-relative URL for a relative asset reference.
fn public_url(logo: &str) -> Option<String> {
    let trimmed = logo.trim();
    if trimmed.is_empty() {
        return None;
    }
    let path = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if path.starts_with('/') {
        Some(path.to_string())
    } else {
        Some(format!("/{path}"))
    }
}

/// Display URL for every job's logo, keyed by job id.
#[derive(Debug, Clone, Default)]
pub struct LogoTable {
    urls: HashMap<u32, String>,
    fallback: String,
}

impl LogoTable {
    pub async fn build(jobs: &[Job], resolver: &dyn LogoResolver, fallback: &str) -> Self {
        let mut urls = HashMap::with_capacity(jobs.len());
        for job in jobs {
            let url = match resolver.resolve(&job.logo).await {
                Some(url) => url,
                None => {
                    warn!(
                        "Logo '{}' for job {} not found, using fallback",
                        job.logo, job.id
                    );
                    fallback.to_string()
                }
            };
            urls.insert(job.id, url);
        }
        Self {
            urls,
            fallback: fallback.to_string(),
        }
    }

    /// Always yields a URL: unknown ids get the fallback too.
    pub fn url_for(&self, job_id: u32) -> &str {
        self.urls
            .get(&job_id)
            .map(String::as_str)
            .unwrap_or(&self.fallback)
    }
}
