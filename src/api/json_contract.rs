use serde::{Deserialize, Serialize};

use crate::error::{RadarError, RadarResult};

use super::RadarScene;

pub const RADAR_SCENE_JSON_SCHEMA_V1: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarSceneJsonContractV1 {
    pub schema_version: u32,
    pub scene: RadarScene,
}

impl RadarScene {
    pub fn to_json_pretty(&self) -> RadarResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RadarError::Serialization(format!("failed to serialize scene json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> RadarResult<String> {
        let payload = RadarSceneJsonContractV1 {
            schema_version: RADAR_SCENE_JSON_SCHEMA_V1,
            scene: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            RadarError::Serialization(format!("failed to serialize scene contract v1: {e}"))
        })
    }

    /// Accepts either a bare scene or a versioned contract payload, then
    /// validates the geometry it carries.
    pub fn from_json_compat_str(input: &str) -> RadarResult<Self> {
        let scene = parse_scene_payload(input)?;
        scene.validate()?;
        Ok(scene)
    }
}

fn parse_scene_payload(input: &str) -> RadarResult<RadarScene> {
    if let Ok(scene) = serde_json::from_str::<RadarScene>(input) {
        return Ok(scene);
    }
    let payload: RadarSceneJsonContractV1 = serde_json::from_str(input).map_err(|e| {
        RadarError::Serialization(format!("failed to parse scene json payload: {e}"))
    })?;
    if payload.schema_version != RADAR_SCENE_JSON_SCHEMA_V1 {
        return Err(RadarError::Serialization(format!(
            "unsupported scene schema version: {}",
            payload.schema_version
        )));
    }
    Ok(payload.scene)
}
