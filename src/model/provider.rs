//! Model provider: fetch, build and cache classifier sessions.

use super::cache::ModelCache;
use super::download::{DownloadSettings, build_client, download_to_temp, verify_checksum};
use super::{ModelLocation, ModelSource};
use crate::error::{Error, Result};
use crate::inference::OnnxModel;
use reqwest::Client;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info};

/// Cache key: where the model comes from and what it is called.
type ModelKey = (String, String);

/// Loads models on first use and keeps them for the life of the process.
#[derive(Debug)]
pub struct ModelProvider {
    client: Client,
    settings: DownloadSettings,
    cache: ModelCache<ModelKey, OnnxModel>,
}

impl ModelProvider {
    /// Create a provider with the given download settings.
    pub fn new(settings: DownloadSettings) -> Result<Self> {
        Ok(Self {
            client: build_client(&settings)?,
            settings,
            cache: ModelCache::new(),
        })
    }

    /// Load one model, reusing a cached handle when available.
    ///
    /// Any failure is reported as [`Error::ModelLoad`] naming the model.
    pub async fn load_model(&self, source: &ModelSource) -> Result<Arc<OnnxModel>> {
        let key = (source.location.to_string(), source.name.clone());

        self.cache
            .get_or_try_init(&key, || self.fetch_and_build(source))
            .await
            .map_err(|e| Error::ModelLoad {
                model: source.name.clone(),
                source: Box::new(e),
            })
    }

    /// Load every configured model, failing closed.
    ///
    /// Each failure is logged; if any model is missing the result is
    /// [`Error::ModelsUnavailable`] listing all of them.
    pub async fn load_all(&self, sources: &[ModelSource]) -> Result<Vec<Arc<OnnxModel>>> {
        let mut loaded = Vec::with_capacity(sources.len());
        let mut failed = Vec::new();

        for source in sources {
            match self.load_model(source).await {
                Ok(model) => loaded.push(model),
                Err(e) => {
                    error!("{e}");
                    failed.push(source.name.clone());
                }
            }
        }

        if failed.is_empty() {
            Ok(loaded)
        } else {
            Err(Error::ModelsUnavailable { models: failed })
        }
    }

    /// Number of models currently cached.
    pub fn cached(&self) -> usize {
        self.cache.loaded()
    }

    async fn fetch_and_build(&self, source: &ModelSource) -> Result<OnnxModel> {
        let name = source.name.clone();

        match &source.location {
            ModelLocation::Url(url) => {
                info!("Downloading {} from {}", name, url);
                let temp = download_to_temp(
                    &self.client,
                    url,
                    source.sha256.as_deref(),
                    self.settings.progress,
                )
                .await?;

                // Session construction is blocking; the temp file is removed
                // once the session has been built.
                tokio::task::spawn_blocking(move || {
                    let model = OnnxModel::load(temp.path(), &name);
                    drop(temp);
                    model
                })
                .await
                .map_err(|e| Error::Internal {
                    message: format!("model build task failed: {e}"),
                })?
            }
            ModelLocation::Path(path) => {
                info!("Loading {} from {}", name, path.display());
                let path = path.clone();
                let expected = source.sha256.clone();
                tokio::task::spawn_blocking(move || {
                    if let Some(expected) = &expected {
                        verify_checksum(&path, &path.to_string_lossy(), expected)?;
                    }
                    OnnxModel::load(Path::new(&path), &name)
                })
                .await
                .map_err(|e| Error::Internal {
                    message: format!("model build task failed: {e}"),
                })?
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::panic)]
mod tests {
    use super::*;
    use crate::model::download::tests::serve_once;
    use std::net::TcpListener;
    use std::path::PathBuf;

    fn provider() -> ModelProvider {
        ModelProvider::new(DownloadSettings {
            progress: false,
            ..DownloadSettings::default()
        })
        .unwrap()
    }

    fn refused_url() -> String {
        let port = TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        format!("http://127.0.0.1:{port}/model.onnx")
    }

    #[tokio::test]
    async fn test_unreachable_url_names_the_model() {
        let provider = provider();
        let source = ModelSource::url("MobileNetV2", refused_url());

        let err = provider.load_model(&source).await.unwrap_err();
        assert!(matches!(err, Error::ModelLoad { ref model, .. } if model == "MobileNetV2"));
        assert!(err.to_string().contains("MobileNetV2"));
        assert_eq!(provider.cached(), 0);
    }

    #[tokio::test]
    async fn test_http_404_is_a_load_failure() {
        let base = serve_once("404 Not Found", b"");
        let provider = provider();
        let source = ModelSource::url("ResNet50V2", format!("{base}/resnet50v2_2.onnx"));

        let err = provider.load_model(&source).await.unwrap_err();
        match err {
            Error::ModelLoad { model, source } => {
                assert_eq!(model, "ResNet50V2");
                assert!(matches!(*source, Error::DownloadFailed { .. }));
            }
            other => panic!("expected ModelLoad, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_malformed_artifact_is_a_load_failure() {
        let base = serve_once("200 OK", b"<html>rate limited</html>");
        let provider = provider();
        let source = ModelSource::url("MobileNetV2", format!("{base}/m.onnx"));

        let err = provider.load_model(&source).await.unwrap_err();
        match err {
            Error::ModelLoad { model, source } => {
                assert_eq!(model, "MobileNetV2");
                assert!(matches!(*source, Error::ModelBuild { .. }));
            }
            other => panic!("expected ModelLoad, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_load_all_fails_closed_listing_every_model() {
        let provider = provider();
        let sources = [
            ModelSource::url("MobileNetV2", refused_url()),
            ModelSource::path("ResNet50V2", PathBuf::from("/nonexistent/resnet.onnx")),
        ];

        let err = provider.load_all(&sources).await.unwrap_err();
        match err {
            Error::ModelsUnavailable { models } => {
                assert_eq!(models, ["MobileNetV2", "ResNet50V2"]);
            }
            other => panic!("expected ModelsUnavailable, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_local_checksum_mismatch_is_a_load_failure() {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), b"weights").unwrap();

        let mut source = ModelSource::path("MobileNetV2", file.path().to_path_buf());
        source.sha256 = Some("00".repeat(32));

        let err = provider().load_model(&source).await.unwrap_err();
        match err {
            Error::ModelLoad { source, .. } => {
                assert!(matches!(*source, Error::ChecksumMismatch { .. }));
            }
            other => panic!("expected ModelLoad, got {other:?}"),
        }
    }
}
