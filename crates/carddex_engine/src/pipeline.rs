use std::path::PathBuf;

use url::Url;

use crate::card::CardType;
use crate::classify::classify;
use crate::decode::decode_page;
use crate::error::{BatchError, FailureKind, FetchError, UrlError};
use crate::extract::extract_record;
use crate::fetch::{ContentKind, Fetcher};
use crate::filename::record_filename;
use crate::image::resolve_image;
use crate::page::CardPage;
use crate::persist::{ensure_output_dir, AtomicFileWriter};
use crate::serialize::render_module;

/// Steps a URL passes through, in order. Each URL runs the sequence
/// exactly once; completion and failure are the `Result` of
/// `process_url`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Fetching,
    Parsing,
    Classifying,
    Extracting,
    ResolvingImage,
    Serializing,
    DownloadingImage,
    Done,
}

/// Where records and images land. Passed in explicitly so the pipeline
/// runs against temporary directories in tests.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub output_dir: PathBuf,
    pub image_dir: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardSummary {
    pub url: String,
    pub card_type: CardType,
    pub record_file: String,
    pub image_file: String,
}

#[derive(Debug)]
pub struct SkippedUrl {
    pub url: String,
    pub stage: Stage,
    pub reason: String,
}

#[derive(Debug, Default)]
pub struct BatchReport {
    pub completed: Vec<CardSummary>,
    pub skipped: Vec<SkippedUrl>,
}

#[derive(Debug)]
struct UrlFailure {
    stage: Stage,
    error: UrlError,
}

impl UrlFailure {
    fn new(stage: Stage, error: impl Into<UrlError>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }
}

/// Drives fetch -> parse -> classify -> extract -> resolve image ->
/// serialize -> download image for each URL, strictly in order with no
/// overlap between URLs.
pub struct Pipeline {
    fetcher: Box<dyn Fetcher>,
    config: PipelineConfig,
}

impl Pipeline {
    pub fn new(fetcher: Box<dyn Fetcher>, config: PipelineConfig) -> Self {
        Self { fetcher, config }
    }

    /// Processes the URL list front to back.
    ///
    /// Fetch, extraction and write failures skip the offending URL and
    /// continue. An unclassifiable page stops the batch immediately:
    /// its output schema is unknown, so pressing on would only produce
    /// wrong records. Files already written stay on disk; every write
    /// before the abort was atomic and complete.
    pub async fn run_batch(&self, urls: &[String]) -> Result<BatchReport, BatchError> {
        ensure_output_dir(&self.config.output_dir)?;
        ensure_output_dir(&self.config.image_dir)?;
        let record_writer = AtomicFileWriter::new(self.config.output_dir.clone());
        let image_writer = AtomicFileWriter::new(self.config.image_dir.clone());

        let mut report = BatchReport::default();
        for url in urls {
            match self.process_url(url, &record_writer, &image_writer).await {
                Ok(summary) => {
                    log::info!(
                        "{url}: wrote {} ({})",
                        summary.record_file,
                        summary.card_type
                    );
                    report.completed.push(summary);
                }
                Err(UrlFailure {
                    error: UrlError::Classify(err),
                    ..
                }) => {
                    log::error!("{err}");
                    return Err(BatchError::Classify(err));
                }
                Err(failure) => {
                    log::warn!("skipping {url} ({:?}): {}", failure.stage, failure.error);
                    report.skipped.push(SkippedUrl {
                        url: url.clone(),
                        stage: failure.stage,
                        reason: failure.error.to_string(),
                    });
                }
            }
        }
        Ok(report)
    }

    async fn process_url(
        &self,
        url: &str,
        record_writer: &AtomicFileWriter,
        image_writer: &AtomicFileWriter,
    ) -> Result<CardSummary, UrlFailure> {
        log::debug!("{url}: {:?}", Stage::Fetching);
        let output = self
            .fetcher
            .fetch(url, ContentKind::Markup)
            .await
            .map_err(|e| UrlFailure::new(Stage::Fetching, e))?;

        let decoded = decode_page(&output.bytes, output.metadata.content_type.as_deref())
            .map_err(|e| UrlFailure::new(Stage::Parsing, e))?;
        let page_url = Url::parse(&output.metadata.final_url).map_err(|e| {
            UrlFailure::new(
                Stage::Parsing,
                FetchError::new(FailureKind::InvalidUrl, e.to_string()),
            )
        })?;

        // The parsed page lives only inside this block; everything the
        // remaining steps need has been pulled out of it before the
        // image download suspends.
        let (card_type, record_file, module, image_url, image_file) = {
            let page = CardPage::new(page_url, &decoded.text);
            let card_type =
                classify(&page).map_err(|e| UrlFailure::new(Stage::Classifying, e))?;
            log::debug!("{url}: classified as {card_type}");
            let record = extract_record(card_type, &page)
                .map_err(|e| UrlFailure::new(Stage::Extracting, e))?;
            let (image_url, image_ref) =
                resolve_image(&page).map_err(|e| UrlFailure::new(Stage::ResolvingImage, e))?;
            let module = render_module(&record);
            let record_file = record_filename(record.name(), page.url());
            (
                card_type,
                record_file,
                module,
                image_url,
                image_ref.into_filename(),
            )
        };

        record_writer
            .write(&record_file, &module)
            .map_err(|e| UrlFailure::new(Stage::Serializing, e))?;

        log::debug!("{url}: {:?} {image_file}", Stage::DownloadingImage);
        let image = self
            .fetcher
            .fetch(image_url.as_str(), ContentKind::Image)
            .await
            .map_err(|e| UrlFailure::new(Stage::DownloadingImage, e))?;
        image_writer
            .write_bytes(&image_file, &image.bytes)
            .map_err(|e| UrlFailure::new(Stage::DownloadingImage, e))?;

        log::debug!("{url}: {:?}", Stage::Done);
        Ok(CardSummary {
            url: url.to_string(),
            card_type,
            record_file,
            image_file,
        })
    }
}
