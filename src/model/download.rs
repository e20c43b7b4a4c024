//! Model artifact download.

use crate::constants::download::TEMP_SUFFIX;
use crate::error::{Error, Result};
use futures_util::StreamExt;
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use sha2::{Digest, Sha256};
use std::io;
use std::path::Path;
use std::time::Duration;
use tempfile::NamedTempFile;
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// HTTP client timeouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownloadSettings {
    /// Connection timeout.
    pub connect_timeout: Duration,
    /// Overall request timeout.
    pub timeout: Duration,
    /// Draw a progress bar while downloading.
    pub progress: bool,
}

impl Default for DownloadSettings {
    fn default() -> Self {
        use crate::constants::download::{CONNECT_TIMEOUT_SECS, TIMEOUT_SECS};
        Self {
            connect_timeout: Duration::from_secs(CONNECT_TIMEOUT_SECS),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            progress: true,
        }
    }
}

/// Create an HTTP client with the configured timeouts.
pub fn build_client(settings: &DownloadSettings) -> Result<Client> {
    Client::builder()
        .connect_timeout(settings.connect_timeout)
        .timeout(settings.timeout)
        .build()
        .map_err(|e| Error::Internal {
            message: format!("Failed to create HTTP client: {e}"),
        })
}

/// Download `url` into `dest`, optionally drawing a progress bar.
///
/// The body is hashed as it streams; returns its hex SHA-256.
pub async fn download_file(
    client: &Client,
    url: &str,
    dest: &Path,
    progress: bool,
) -> Result<String> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| Error::DownloadFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

    if !response.status().is_success() {
        return Err(Error::DownloadFailed {
            url: url.to_string(),
            source: format!("HTTP {}", response.status()).into(),
        });
    }

    let total_size = response.content_length().unwrap_or(0);

    let pb = if progress {
        let pb = ProgressBar::new(total_size);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{msg}\n{bar:40.green/white} {percent}% ({bytes}/{total_bytes})")
                .map_err(|e| Error::Internal {
                    message: format!("Failed to create progress bar: {e}"),
                })?
                .progress_chars("█▓▒░ "),
        );
        pb.set_message(format!(
            "Downloading {}...",
            url.rsplit('/').next().unwrap_or("model")
        ));
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut file = File::create(dest).await?;
    let mut stream = response.bytes_stream();
    let mut hasher = Sha256::new();
    let mut downloaded = 0u64;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::DownloadFailed {
            url: url.to_string(),
            source: Box::new(e),
        })?;

        file.write_all(&chunk).await?;
        hasher.update(&chunk);

        downloaded += chunk.len() as u64;
        pb.set_position(downloaded);
    }

    file.flush().await?;
    pb.finish_and_clear();
    debug!("Downloaded {} bytes from {}", downloaded, url);

    Ok(format!("{:x}", hasher.finalize()))
}

/// Download `url` into a fresh temporary file.
///
/// The file is removed when the returned handle is dropped.
pub async fn download_to_temp(
    client: &Client,
    url: &str,
    sha256: Option<&str>,
    progress: bool,
) -> Result<NamedTempFile> {
    let temp = tempfile::Builder::new().suffix(TEMP_SUFFIX).tempfile()?;
    let actual = download_file(client, url, temp.path(), progress).await?;

    if let Some(expected) = sha256 {
        check_digest(url, expected, actual)?;
    }

    Ok(temp)
}

/// Hex SHA-256 of the file at `path`, read in chunks.
pub fn file_sha256(path: &Path) -> Result<String> {
    let mut file = std::fs::File::open(path)?;
    let mut hasher = Sha256::new();
    io::copy(&mut file, &mut hasher)?;
    Ok(format!("{:x}", hasher.finalize()))
}

/// Compare the SHA-256 digest of `path` against `expected` (hex, any case).
pub fn verify_checksum(path: &Path, source: &str, expected: &str) -> Result<()> {
    check_digest(source, expected, file_sha256(path)?)
}

fn check_digest(source: &str, expected: &str, actual: String) -> Result<()> {
    if actual.eq_ignore_ascii_case(expected.trim()) {
        debug!("Checksum OK for {}", source);
        Ok(())
    } else {
        Err(Error::ChecksumMismatch {
            url: source.to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}
