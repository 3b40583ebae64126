use serde::{Deserialize, Serialize};

/// Packing and atlas-generation settings.
///
/// Field names serialize in camelCase so project files written for the
/// original tooling keep working.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackerConfig {
    /// Maximum atlas width in pixels.
    #[serde(default = "default_max_dim")]
    pub max_width: u32,
    /// Maximum atlas height in pixels.
    #[serde(default = "default_max_dim")]
    pub max_height: u32,
    /// Pixels kept free between any two sprites.
    #[serde(default = "default_padding")]
    pub padding: u32,
    /// Allow 90° rotation when a sprite does not fit upright.
    #[serde(default)]
    pub allow_rotation: bool,
    /// Trim transparent borders before packing.
    #[serde(rename = "trimSprites", default = "default_trim")]
    pub trim: bool,
    /// Alpha values at or below this count as transparent when trimming.
    #[serde(default)]
    pub trim_threshold: u8,
    /// Round the final atlas dimensions up to powers of two.
    #[serde(default = "default_pow2")]
    pub power_of_two: bool,
}

impl Default for PackerConfig {
    fn default() -> Self {
        Self {
            max_width: default_max_dim(),
            max_height: default_max_dim(),
            padding: default_padding(),
            allow_rotation: false,
            trim: default_trim(),
            trim_threshold: 0,
            power_of_two: default_pow2(),
        }
    }
}

impl PackerConfig {
    /// Validates the configuration parameters.
    ///
    /// Returns an error if dimensions are zero or the padding leaves no
    /// usable space for even a 1x1 sprite.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::AtlasPackerError;

        if self.max_width == 0 || self.max_height == 0 {
            return Err(AtlasPackerError::InvalidInput(format!(
                "atlas dimensions must be positive, got {}x{}",
                self.max_width, self.max_height
            )));
        }

        let total_padding = self.padding.saturating_mul(2);
        if total_padding >= self.max_width || total_padding >= self.max_height {
            return Err(AtlasPackerError::InvalidInput(format!(
                "padding ({}) * 2 leaves no usable space in a {}x{} atlas",
                self.padding, self.max_width, self.max_height
            )));
        }

        Ok(())
    }

    /// Create a fluent builder for `PackerConfig`.
    pub fn builder() -> PackerConfigBuilder {
        PackerConfigBuilder::new()
    }
}

fn default_max_dim() -> u32 {
    2048
}
fn default_padding() -> u32 {
    1
}
fn default_trim() -> bool {
    true
}
fn default_pow2() -> bool {
    true
}

/// Builder for `PackerConfig` for ergonomic construction.
#[derive(Debug, Default, Clone)]
pub struct PackerConfigBuilder {
    cfg: PackerConfig,
}

impl PackerConfigBuilder {
    pub fn new() -> Self {
        Self {
            cfg: PackerConfig::default(),
        }
    }
    pub fn with_max_dimensions(mut self, w: u32, h: u32) -> Self {
        self.cfg.max_width = w;
        self.cfg.max_height = h;
        self
    }
    pub fn padding(mut self, v: u32) -> Self {
        self.cfg.padding = v;
        self
    }
    pub fn allow_rotation(mut self, v: bool) -> Self {
        self.cfg.allow_rotation = v;
        self
    }
    pub fn trim(mut self, v: bool) -> Self {
        self.cfg.trim = v;
        self
    }
    pub fn trim_threshold(mut self, v: u8) -> Self {
        self.cfg.trim_threshold = v;
        self
    }
    pub fn pow2(mut self, v: bool) -> Self {
        self.cfg.power_of_two = v;
        self
    }
    pub fn build(self) -> PackerConfig {
        self.cfg
    }
}

/// One input entry of a project file: a single image, a sprite sheet with
/// its data file, or a directory of images.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputConfig {
    /// Path to a PNG file or a directory of PNG files.
    pub image_path: String,
    /// Path to a sheet-data JSON file describing frames within the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,
    /// Prefix prepended to every sprite name from this input.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
}

/// Output file locations of a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(default = "default_image_path")]
    pub image_path: String,
    #[serde(default = "default_data_path")]
    pub data_path: String,
    /// Animation JSON path; animations are only written when this is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_path: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            image_path: default_image_path(),
            data_path: default_data_path(),
            animation_path: None,
        }
    }
}

fn default_image_path() -> String {
    "atlas.png".to_string()
}
fn default_data_path() -> String {
    "atlas.json".to_string()
}

/// Declares one animation built from atlas sprites, either as an explicit
/// frame list or generated from a numbered pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationConfig {
    pub name: String,
    /// Explicit sprite names; ignored when `pattern` is set.
    #[serde(default)]
    pub frames: Vec<String>,
    /// Default frame duration in milliseconds.
    #[serde(default = "default_frame_duration")]
    pub frame_duration: u32,
    #[serde(rename = "loop", default = "default_loop")]
    pub looped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<AnimationPattern>,
}

fn default_frame_duration() -> u32 {
    100
}
fn default_loop() -> bool {
    true
}

/// Numbered frame-name pattern, e.g. `"walk_{0:D2}"` for walk_01, walk_02, …
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationPattern {
    pub name_pattern: String,
    #[serde(default = "default_start_frame")]
    pub start_frame: u32,
    #[serde(default = "default_start_frame")]
    pub end_frame: u32,
}

fn default_start_frame() -> u32 {
    1
}

/// A whole project file: inputs, outputs, atlas settings and optional
/// animation definitions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    #[serde(default)]
    pub inputs: Vec<InputConfig>,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub atlas: PackerConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animations: Option<Vec<AnimationConfig>>,
}
