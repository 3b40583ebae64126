use crate::animation::AnimationSet;
use crate::error::{AtlasPackerError, Result};
use crate::model::AtlasDoc;

/// Serializes the atlas document as pretty-printed JSON.
pub fn atlas_to_json(atlas: &AtlasDoc) -> Result<String> {
    serde_json::to_string_pretty(atlas).map_err(|e| AtlasPackerError::Encode(e.to_string()))
}

/// Serializes an animation set as pretty-printed JSON.
pub fn animations_to_json(set: &AnimationSet) -> Result<String> {
    serde_json::to_string_pretty(set).map_err(|e| AtlasPackerError::Encode(e.to_string()))
}
