//! Remote classification client.
//!
//! Segments go up as multipart POSTs to `{base_url}/upload`; the service
//! answers with a JSON envelope carrying a probability (number or numeric
//! string) and a label string.

use crate::{
    CoreResult, MonitorError,
    capture::CaptureSegment,
    classify::{ClassificationResult, Label},
};

use std::{future::Future, panic::Location, time::Duration};

use error_location::ErrorLocation;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use tracing::{debug, info, instrument, warn};

/// Multipart field name the classification service expects.
const VIDEO_FIELD: &str = "video";

/// File name reported for the uploaded segment.
const SEGMENT_FILE_NAME: &str = "segment.webm";

const SEGMENT_MIME: &str = "video/webm";

/// Classification seam: submit one captured segment, get one result.
///
/// The segment is consumed: it is submitted exactly once and discarded.
pub trait SegmentClassifier {
    /// Classify one segment.
    fn classify(
        &self,
        segment: CaptureSegment,
    ) -> impl Future<Output = CoreResult<ClassificationResult>> + Send;
}

/// Wire envelope returned by the classification service.
#[derive(Debug, Deserialize)]
pub(crate) struct ClassificationResponse {
    pred: PredictionValue,
    result: String,
}

/// `pred` arrives as a JSON number or a numeric string depending on the
/// service version; both are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum PredictionValue {
    /// Plain JSON number.
    Number(f64),
    /// Number serialized as a string, e.g. `"0.12"`.
    Text(String),
}

impl PredictionValue {
    fn as_probability(&self) -> Option<f64> {
        let value = match self {
            Self::Number(n) => *n,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
        };

        value.is_finite().then_some(value)
    }
}

impl TryFrom<ClassificationResponse> for ClassificationResult {
    type Error = MonitorError;

    fn try_from(response: ClassificationResponse) -> CoreResult<Self> {
        let probability =
            response
                .pred
                .as_probability()
                .ok_or_else(|| MonitorError::MalformedResponse {
                    reason: format!("prediction is not a finite number: {:?}", response.pred),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let label = Label::parse(&response.result).ok_or_else(|| {
            MonitorError::MalformedResponse {
                reason: "label field is blank".to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;

        Ok(ClassificationResult {
            label,
            probability,
            text: Label::normalize(&response.result),
        })
    }
}

/// HTTP client for the remote drowsiness classification service.
pub struct HttpClassifier {
    http: reqwest::Client,
    upload_url: String,
}

impl HttpClassifier {
    /// Build a client for the given service base URL.
    ///
    /// `timeout` bounds each upload call; a timed-out upload surfaces as
    /// `UploadFailed` like any other transport error.
    #[track_caller]
    #[instrument]
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| MonitorError::UploadFailed {
                reason: format!("Failed to build HTTP client: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let upload_url = format!("{}/upload", base_url.trim_end_matches('/'));

        info!(upload_url = %upload_url, "HttpClassifier initialized");

        Ok(Self { http, upload_url })
    }

    /// One-shot connectivity probe against the upload endpoint.
    ///
    /// The response is logged and not otherwise interpreted.
    #[instrument(skip(self))]
    pub async fn probe(&self) {
        match self.http.get(&self.upload_url).send().await {
            Ok(response) => {
                info!(status = %response.status(), "Classification service reachable");
            }
            Err(e) => {
                warn!(error = %e, "Classification service not reachable");
            }
        }
    }
}

impl SegmentClassifier for HttpClassifier {
    #[instrument(skip(self, segment))]
    async fn classify(&self, segment: CaptureSegment) -> CoreResult<ClassificationResult> {
        let segment_bytes = segment.media.len();

        let part = Part::bytes(segment.media)
            .file_name(SEGMENT_FILE_NAME)
            .mime_str(SEGMENT_MIME)
            .map_err(|e| MonitorError::UploadFailed {
                reason: format!("Failed to encode segment part: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?;
        let form = Form::new().part(VIDEO_FIELD, part);

        debug!(segment_bytes, "Uploading segment");

        let response = self
            .http
            .post(&self.upload_url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| MonitorError::UploadFailed {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?
            .error_for_status()
            .map_err(|e| MonitorError::UploadFailed {
                reason: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        let envelope: ClassificationResponse =
            response
                .json()
                .await
                .map_err(|e| MonitorError::MalformedResponse {
                    reason: format!("Failed to decode response body: {}", e),
                    location: ErrorLocation::from(Location::caller()),
                })?;

        let result = ClassificationResult::try_from(envelope)?;

        info!(
            label = ?result.label,
            probability = result.probability,
            "Segment classified"
        );

        Ok(result)
    }
}
