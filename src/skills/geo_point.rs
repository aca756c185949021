use crate::adapters::http::select_collection;
use crate::core::{HttpFetcher, RecordData, RecordTransform, SettingsProvider, TransformError, TransformOutput};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::Arc;

pub const KEY_SETTING: &str = "AZUREMAPS_APP_KEY";
pub const ENDPOINT_SETTING: &str = "AZUREMAPS_ENDPOINT";
pub const DEFAULT_ENDPOINT: &str = "http://dev.virtualearth.net/REST/v1/Locations";
const POINTS_PATH: &str = "resourceSets..resources..point";

/// A point as returned by the locations service: `coordinates` is `[lat, lon]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geography {
    #[serde(rename = "type")]
    pub kind: String,
    pub coordinates: Vec<f64>,
}

/// Resolves an address to geo points through the locations REST API.
pub struct GeoPointFromName {
    fetcher: Arc<dyn HttpFetcher>,
    endpoint: String,
    api_key: Option<String>,
}

impl GeoPointFromName {
    pub const NAME: &'static str = "geo-point-from-name";

    pub fn new(fetcher: Arc<dyn HttpFetcher>, endpoint: String, api_key: Option<String>) -> Self {
        Self {
            fetcher,
            endpoint,
            api_key,
        }
    }

    pub fn from_settings(fetcher: Arc<dyn HttpFetcher>, settings: &dyn SettingsProvider) -> Self {
        let endpoint = settings
            .get_non_empty(ENDPOINT_SETTING)
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Self::new(fetcher, endpoint, settings.get_non_empty(KEY_SETTING))
    }
}

#[async_trait]
impl RecordTransform for GeoPointFromName {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn missing_setting(&self) -> Option<&str> {
        self.api_key.is_none().then_some(KEY_SETTING)
    }

    async fn transform(
        &self,
        record_id: &str,
        data: &RecordData,
    ) -> Result<TransformOutput, TransformError> {
        let address = data
            .get("address")
            .and_then(Value::as_str)
            .ok_or_else(|| TransformError::missing_input("address", "string"))?;
        let api_key = self.api_key.as_deref().unwrap_or_default();

        tracing::debug!("Resolving address for record '{}'", record_id);
        let response = self
            .fetcher
            .get_json(&self.endpoint, &[("q", address), ("key", api_key)])
            .await?;

        let geographies = select_collection(&response, POINTS_PATH)
            .into_iter()
            .map(serde_json::from_value::<Geography>)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TransformError::new(format!("Unexpected point format: {}", e)))?;

        let mut out = RecordData::new();
        if let Some(main) = geographies.first() {
            // 沿用上游的座標順序，只取前兩個值
            if let [first, second, ..] = main.coordinates.as_slice() {
                out.insert(
                    "mainGeoPoint".to_string(),
                    json!({ "type": "Point", "coordinates": [first, second] }),
                );
            }
        }
        out.insert("results".to_string(), json!(geographies));
        Ok(TransformOutput::new(out))
    }
}
