use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use overwatch_core::{AnalysisPayload, AnalysisResult, JobId, ModelHint};

use crate::{ApiError, ClientSettings, StatusReport};

/// The two-endpoint surface of the remote analysis engine.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Posts a new job. The returned id keys every later status poll.
    async fn submit(&self, payload: &AnalysisPayload) -> Result<JobId, ApiError>;

    /// Fetches one status snapshot for the job.
    async fn status(&self, job_id: &str) -> Result<StatusReport, ApiError>;
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SubmitBody<'a> {
    video_url: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_dir: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    model_hint: Option<&'static str>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmitReply {
    #[serde(default)]
    job_id: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatusReply {
    #[serde(default)]
    progress: Option<f64>,
    #[serde(default)]
    status: String,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    result: Option<ResultReply>,
}

/// Wire shape of a finished job's result. Every field is optional on the
/// wire and defaulted here, so absence never leaks past this module.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResultReply {
    #[serde(default)]
    transcript: Option<String>,
    #[serde(default)]
    cheating_indicators: Option<Vec<String>>,
    #[serde(default)]
    keyboard_findings: Option<Vec<String>>,
    #[serde(default)]
    behavior_summary: Option<Vec<String>>,
    #[serde(default)]
    openface_insights: Option<Vec<String>>,
    #[serde(default)]
    log: Option<Vec<String>>,
}

impl ResultReply {
    fn into_result(self) -> AnalysisResult {
        AnalysisResult {
            transcript: self.transcript.unwrap_or_default(),
            cheating_indicators: self.cheating_indicators.unwrap_or_default(),
            keyboard_findings: self.keyboard_findings.unwrap_or_default(),
            behavior_summary: self.behavior_summary.unwrap_or_default(),
            openface_insights: self.openface_insights.unwrap_or_default(),
            log: self.log.unwrap_or_default(),
        }
    }
}

fn clamp_progress(raw: Option<f64>) -> u8 {
    raw.unwrap_or(0.0).clamp(0.0, 100.0) as u8
}

/// Production implementation over `reqwest`.
#[derive(Debug, Clone)]
pub struct ReqwestApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestApi {
    /// Builds the HTTP client with the settings' timeouts. Fails when the
    /// base URL is not an absolute URL.
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        reqwest::Url::parse(&base_url)
            .map_err(|err| ApiError::Network(format!("invalid engine base url: {err}")))?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl AnalysisApi for ReqwestApi {
    async fn submit(&self, payload: &AnalysisPayload) -> Result<JobId, ApiError> {
        let body = SubmitBody {
            video_url: &payload.video_url,
            output_dir: payload.output_dir.as_deref(),
            model_hint: payload.model_hint.map(ModelHint::as_str),
        };

        let response = self
            .client
            .post(format!("{}/api/analyze", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let reply: SubmitReply =
            serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))?;

        match reply.job_id {
            Some(job_id) if !job_id.is_empty() => Ok(job_id),
            _ => Err(ApiError::MissingJobId),
        }
    }

    async fn status(&self, job_id: &str) -> Result<StatusReport, ApiError> {
        let response = self
            .client
            .get(format!("{}/api/analyze/{job_id}", self.base_url))
            .send()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::HttpStatus(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|err| ApiError::Network(err.to_string()))?;
        let reply: StatusReply =
            serde_json::from_str(&text).map_err(|err| ApiError::Decode(err.to_string()))?;

        Ok(StatusReport {
            progress: clamp_progress(reply.progress),
            status: reply.status,
            error: reply.error,
            result: reply.result.map(ResultReply::into_result),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_clamps_and_defaults() {
        assert_eq!(clamp_progress(None), 0);
        assert_eq!(clamp_progress(Some(-3.0)), 0);
        assert_eq!(clamp_progress(Some(42.7)), 42);
        assert_eq!(clamp_progress(Some(640.0)), 100);
    }

    #[test]
    fn result_reply_defaults_every_field() {
        let result = ResultReply::default().into_result();
        assert_eq!(result, AnalysisResult::default());
        assert_eq!(result.transcript, "");
        assert!(result.cheating_indicators.is_empty());
        assert!(result.log.is_empty());
    }
}
