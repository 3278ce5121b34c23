//! Release update check against GitHub.
//!
//! Queries the GitHub Releases API for the latest published release and
//! compares it against the running version. A failed check never blocks the
//! tool: network and parse errors are logged and reported as "no update".

use semver::Version;
use serde::Deserialize;
use thiserror::Error;

/// Default GitHub repository queried for releases.
pub const DEFAULT_REPO_OWNER: &str = "codesift";
pub const DEFAULT_REPO_NAME: &str = "codesift";

/// Errors that can occur during an update check.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse version: {0}")]
    VersionParse(#[from] semver::Error),
}

/// A GitHub release.
#[derive(Debug, Clone, Deserialize)]
struct GitHubRelease {
    tag_name: String,
    body: Option<String>,
    assets: Vec<GitHubAsset>,
}

/// A release asset (downloadable file).
#[derive(Debug, Clone, Deserialize)]
struct GitHubAsset {
    browser_download_url: String,
}

/// Outcome of an update check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateCheck {
    /// Whether a newer release exists.
    pub has_update: bool,
    /// The newest known version (the running version when up to date).
    pub latest_version: String,
    /// Download URL of the first release asset, empty when none.
    pub download_url: String,
    /// Release notes, empty when none.
    pub changelog: String,
}

impl UpdateCheck {
    fn up_to_date(current: &Version) -> Self {
        Self {
            has_update: false,
            latest_version: current.to_string(),
            download_url: String::new(),
            changelog: String::new(),
        }
    }
}

/// Checks GitHub for a release newer than `current`.
///
/// Failures degrade to "no update available" and are logged at warn level.
pub fn check_for_updates(current: &Version, owner: &str, repo: &str) -> UpdateCheck {
    match fetch_latest(current, owner, repo) {
        Ok(check) => check,
        Err(e) => {
            tracing::warn!("update check failed: {}", e);
            UpdateCheck::up_to_date(current)
        }
    }
}

fn fetch_latest(current: &Version, owner: &str, repo: &str) -> Result<UpdateCheck, UpdateError> {
    let url = format!(
        "https://api.github.com/repos/{}/{}/releases/latest",
        owner, repo
    );

    let client = reqwest::blocking::Client::builder()
        .user_agent(concat!("codesift/", env!("CARGO_PKG_VERSION")))
        .build()?;

    let release: GitHubRelease = client
        .get(&url)
        .header("Accept", "application/vnd.github+json")
        .send()?
        .error_for_status()?
        .json()?;

    evaluate(current, &release)
}

/// Compares a fetched release against the running version.
fn evaluate(current: &Version, release: &GitHubRelease) -> Result<UpdateCheck, UpdateError> {
    // Tags are commonly published as "v1.2.3".
    let tag = release
        .tag_name
        .strip_prefix('v')
        .unwrap_or(&release.tag_name);
    let latest = Version::parse(tag)?;

    if latest <= *current {
        return Ok(UpdateCheck::up_to_date(current));
    }

    Ok(UpdateCheck {
        has_update: true,
        latest_version: latest.to_string(),
        download_url: release
            .assets
            .first()
            .map(|asset| asset.browser_download_url.clone())
            .unwrap_or_default(),
        changelog: release.body.clone().unwrap_or_default(),
    })
}
