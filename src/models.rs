//! Data models and structures
//!
//! Defines the core data structures for logos, predictions, and the wire
//! formats shared between the gateway and the generation client.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Lifecycle of a prediction job at the external provider.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PredictionStatus {
    Starting,
    Processing,
    Succeeded,
    Failed,
}

/// One asynchronous generation job tracked by the provider. Created by the
/// gateway's submit call; only ever updated by re-fetching status.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prediction {
    pub id: String,
    pub status: PredictionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Prediction {
    /// First output URL, when the provider produced any.
    pub fn first_output(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|urls| urls.first())
            .map(String::as_str)
    }
}

/// Fixed catalog of logo style tags. Serialized with the tag names the
/// mobile app persists, so stored history stays readable across versions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum LogoStyle {
    Signature,
    Mascot,
    Classic,
    Grunge,
    TextLogo,
    Minimalist,
    Geometric,
    Futuristic,
    Elegant,
    Abstract,
    Corporate,
    HandDrawn,
    Symbolic,
    Vintage,
    ArtDeco,
    Modern,
    Monogram,
    Neon,
    Gradient,
    Holographic,
    Vibrant,
    Colorful3D,
    PopArt,
}

/// A completed generation. Immutable once persisted; `prompt` is the
/// original user text, never the style-augmented one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Logo {
    pub id: String,
    pub prompt: String,
    pub image_url: String,
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<LogoStyle>,
}

impl Logo {
    pub fn new(prompt: &str, image_url: String, style: Option<LogoStyle>) -> Self {
        let now = Utc::now();
        Self {
            id: now.timestamp_millis().to_string(),
            prompt: prompt.to_string(),
            image_url,
            created_at: now.to_rfc3339_opts(SecondsFormat::Millis, true),
            style,
        }
    }
}

/// One submission's worth of user input.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub prompt: String,
    pub style: Option<LogoStyle>,
}

impl GenerationRequest {
    pub fn new(prompt: impl Into<String>, style: Option<LogoStyle>) -> Self {
        Self {
            prompt: prompt.into(),
            style,
        }
    }
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub replicate_api_token: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            replicate_api_token: std::env::var("REPLICATE_API_TOKEN")
                .map_err(|_| crate::Error::Generic("REPLICATE_API_TOKEN not set".to_string()))?,
            port: std::env::var("PORT")
                .ok()
                .and_then(|value| value.parse().ok())
                .unwrap_or(8080),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prediction_status_serialization() {
        let json = serde_json::to_string(&PredictionStatus::Succeeded).unwrap();
        assert_eq!(json, "\"succeeded\"");

        let parsed: PredictionStatus = serde_json::from_str("\"starting\"").unwrap();
        assert_eq!(parsed, PredictionStatus::Starting);
    }

    #[test]
    fn test_prediction_optional_fields_default() {
        let prediction: Prediction =
            serde_json::from_str("{\"id\":\"abc123\",\"status\":\"processing\"}").unwrap();

        assert_eq!(prediction.id, "abc123");
        assert_eq!(prediction.status, PredictionStatus::Processing);
        assert!(prediction.output.is_none());
        assert!(prediction.first_output().is_none());
    }

    #[test]
    fn test_prediction_first_output() {
        let prediction = Prediction {
            id: "abc123".to_string(),
            status: PredictionStatus::Succeeded,
            output: Some(vec![
                "https://img/one.png".to_string(),
                "https://img/two.png".to_string(),
            ]),
            error: None,
        };

        assert_eq!(prediction.first_output(), Some("https://img/one.png"));
    }

    #[test]
    fn test_logo_style_tag_names() {
        assert_eq!(
            serde_json::to_string(&LogoStyle::TextLogo).unwrap(),
            "\"textLogo\""
        );
        assert_eq!(
            serde_json::to_string(&LogoStyle::Colorful3D).unwrap(),
            "\"colorful3D\""
        );
        assert_eq!(
            serde_json::to_string(&LogoStyle::ArtDeco).unwrap(),
            "\"artDeco\""
        );
        assert_eq!(
            serde_json::to_string(&LogoStyle::PopArt).unwrap(),
            "\"popArt\""
        );

        let parsed: LogoStyle = serde_json::from_str("\"handDrawn\"").unwrap();
        assert_eq!(parsed, LogoStyle::HandDrawn);
    }

    #[test]
    fn test_logo_serialization_uses_camel_case_fields() {
        let logo = Logo {
            id: "1700000000000".to_string(),
            prompt: "Acme Coffee".to_string(),
            image_url: "https://img/abc.png".to_string(),
            created_at: "2024-01-15T10:30:00.000Z".to_string(),
            style: Some(LogoStyle::Minimalist),
        };

        let json = serde_json::to_string(&logo).unwrap();
        assert!(json.contains("\"imageUrl\":\"https://img/abc.png\""));
        assert!(json.contains("\"createdAt\":\"2024-01-15T10:30:00.000Z\""));
        assert!(json.contains("\"style\":\"minimalist\""));

        let roundtrip: Logo = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip, logo);
    }

    #[test]
    fn test_logo_without_style_omits_field() {
        let logo = Logo::new("Acme Coffee", "https://img/abc.png".to_string(), None);
        let json = serde_json::to_string(&logo).unwrap();
        assert!(!json.contains("style"));
    }

    #[test]
    fn test_logo_new_stamps_time_based_id() {
        let logo = Logo::new("Acme Coffee", "https://img/abc.png".to_string(), None);

        let millis: i64 = logo.id.parse().unwrap();
        assert!(millis > 0);
        assert!(logo.created_at.ends_with('Z'));
        assert_eq!(logo.prompt, "Acme Coffee");
    }
}
