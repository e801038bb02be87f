//! HTTP client for pages and files.

use std::path::{Path, PathBuf};
use std::time::Duration;

use futures::StreamExt;
use reqwest::{Client, Response};
use tokio::fs::File;
use tokio::io::AsyncWriteExt;
use tokio::time::timeout;
use url::Url;

use crate::error::{Error, FetchError, Result};
use crate::fs::{ensure_dir, filename_from_url};
use crate::output::create_download_bar;

/// Total time allowed for fetching a page.
pub const PAGE_TIMEOUT: Duration = Duration::from_secs(10);

/// Time allowed for file response headers and for each body chunk.
pub const FILE_TIMEOUT: Duration = Duration::from_secs(30);

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Parse an absolute target URL.
pub fn parse_url(url: &str) -> std::result::Result<Url, FetchError> {
    Url::parse(url).map_err(|source| FetchError::InvalidUrl {
        url: url.to_string(),
        source,
    })
}

/// HTTP client used for every request of a run.
pub struct Fetcher {
    client: Client,
    show_progress: bool,
}

impl Fetcher {
    /// Create a client that identifies itself with `user_agent`.
    pub fn new(user_agent: &str) -> Result<Self> {
        let client = Client::builder()
            .user_agent(user_agent)
            .connect_timeout(PAGE_TIMEOUT)
            .build()
            .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            show_progress: false,
        })
    }

    /// Show a progress bar for large downloads.
    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// Fetch a page and return its body as text.
    pub async fn fetch_page(&self, url: &str) -> std::result::Result<String, FetchError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(parse_url(url)?)
            .timeout(PAGE_TIMEOUT)
            .send()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))?;

        let response = check_status(url, response)?;

        response
            .text()
            .await
            .map_err(|e| FetchError::from_reqwest(url, e))
    }

    /// Download a file into `staging_dir` under its remote filename.
    ///
    /// Fails with [`FetchError::NoFilename`] before any request when the URL
    /// has no usable last path segment. An existing file with the same name
    /// is returned as-is without downloading.
    pub async fn fetch_file(
        &self,
        file_url: &str,
        staging_dir: &Path,
    ) -> std::result::Result<PathBuf, FetchError> {
        let file_name = filename_from_url(file_url)?;
        let output_path = staging_dir.join(&file_name);

        ensure_dir(staging_dir).map_err(|source| FetchError::Io {
            path: staging_dir.to_path_buf(),
            source,
        })?;

        if output_path.exists() {
            tracing::info!(
                "'{}' already exists in '{}', skipping download",
                file_name,
                staging_dir.display()
            );
            return Ok(output_path);
        }

        tracing::info!("Downloading '{}' from {}", file_name, file_url);

        let response = match timeout(FILE_TIMEOUT, self.client.get(file_url).send()).await {
            Ok(sent) => sent.map_err(|e| FetchError::from_reqwest(file_url, e))?,
            Err(_) => {
                return Err(FetchError::Timeout {
                    url: file_url.to_string(),
                })
            }
        };
        let response = check_status(file_url, response)?;

        if let Err(e) = self.stream_to_file(file_url, response, &output_path).await {
            // A truncated file would be mistaken for a finished one next run
            let _ = tokio::fs::remove_file(&output_path).await;
            return Err(e);
        }

        Ok(output_path)
    }

    /// Stream a response body to disk in arrival order.
    async fn stream_to_file(
        &self,
        file_url: &str,
        response: Response,
        output_path: &Path,
    ) -> std::result::Result<(), FetchError> {
        let io_err = |source| FetchError::Io {
            path: output_path.to_path_buf(),
            source,
        };

        let content_length = response.content_length();
        let progress = (self.show_progress
            && content_length.is_some_and(|l| l > PROGRESS_THRESHOLD))
        .then(|| create_download_bar(content_length.unwrap_or(0)));

        let mut file = File::create(output_path).await.map_err(io_err)?;
        let mut stream = response.bytes_stream();
        let mut downloaded: u64 = 0;

        loop {
            let next = timeout(FILE_TIMEOUT, stream.next())
                .await
                .map_err(|_| FetchError::Timeout {
                    url: file_url.to_string(),
                })?;

            let Some(chunk) = next else {
                break;
            };
            let chunk = chunk.map_err(|e| FetchError::from_reqwest(file_url, e))?;

            file.write_all(&chunk).await.map_err(io_err)?;
            downloaded += chunk.len() as u64;

            if let Some(ref pb) = progress {
                pb.set_position(downloaded);
            }
        }

        file.flush().await.map_err(io_err)?;

        if let Some(pb) = progress {
            pb.finish_and_clear();
        }

        tracing::debug!("Wrote {} bytes to {}", downloaded, output_path.display());
        Ok(())
    }
}

/// Turn a non-2xx response into [`FetchError::Status`].
fn check_status(url: &str, response: Response) -> std::result::Result<Response, FetchError> {
    let status = response.status();
    tracing::debug!("Response status: {}", status);

    if !status.is_success() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    Ok(response)
}
