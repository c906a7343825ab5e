use crate::Document;
use profile_types::{ConfigType, DocumentId, Status, now_millis};
use serde::{Deserialize, Serialize};

/// Chat-provider block of a unit's pipeline config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub provider: String,
    #[serde(rename = "appId", default)]
    pub app_id: String,
}

/// Text-to-speech provider block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TtsConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub provider: String,
    #[serde(rename = "appId", default)]
    pub app_id: String,
    #[serde(default)]
    pub speaker: String,
}

/// Report-generation provider block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub provider: String,
    #[serde(rename = "appId", default)]
    pub app_id: String,
}

/// Per-unit pipeline configuration.
///
/// At most one per unit in practice; looked up by `unitId`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(rename = "_id")]
    pub id: DocumentId,
    #[serde(rename = "unitId")]
    pub unit_id: DocumentId,
    #[serde(rename = "type")]
    pub config_type: ConfigType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat: Option<ChatConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tts: Option<TtsConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,
    pub status: Status,
    #[serde(rename = "createTime")]
    pub create_time: i64,
    #[serde(rename = "updateTime")]
    pub update_time: i64,
    #[serde(rename = "deleteTime", default, skip_serializing_if = "Option::is_none")]
    pub delete_time: Option<i64>,
}

impl Config {
    /// Creates an active config for a unit with a fresh identifier and
    /// current timestamps. Provider blocks start unset.
    #[must_use]
    pub fn new(unit_id: DocumentId, config_type: ConfigType) -> Self {
        let now = now_millis();
        Self {
            id: DocumentId::generate(),
            unit_id,
            config_type,
            chat: None,
            tts: None,
            report: None,
            status: Status::Active,
            create_time: now,
            update_time: now,
            delete_time: None,
        }
    }
}

impl Document for Config {
    const COLLECTION: &'static str = "config";

    fn id(&self) -> DocumentId {
        self.id
    }
}
