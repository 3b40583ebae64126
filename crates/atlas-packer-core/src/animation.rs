//! Animation export: expands animation definitions against the packed atlas
//! and resolves per-frame durations.

use crate::config::{AnimationConfig, AnimationPattern};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// One frame of an exported animation. `duration` is only set when the
/// source sheet carried an explicit duration; consumers fall back to the
/// animation's default otherwise.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnimFrame {
    pub sprite: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Animation {
    pub name: String,
    pub frames: Vec<AnimFrame>,
    /// Fallback duration in milliseconds for frames without their own.
    pub default_duration: u32,
    #[serde(rename = "loop")]
    pub looped: bool,
}

impl Animation {
    /// Total run time in milliseconds, using the default duration for
    /// frames without an explicit one.
    pub fn total_duration(&self) -> u32 {
        self.frames
            .iter()
            .map(|f| f.duration.unwrap_or(self.default_duration))
            .sum()
    }
}

/// All animations of one atlas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSet {
    pub animations: Vec<Animation>,
    /// The atlas image these animations index into.
    pub atlas_file: String,
}

/// Builds the animation set for an atlas.
///
/// `durations` maps every sprite name present in the atlas to the duration
/// ingested with it (if any); it doubles as the existence check. Frames
/// naming a sprite that is not in the atlas are dropped with a warning, and
/// animations left without frames are dropped entirely.
pub fn build_animations(
    configs: &[AnimationConfig],
    durations: &HashMap<String, Option<u32>>,
    atlas_file: &str,
) -> AnimationSet {
    let mut animations = Vec::with_capacity(configs.len());

    for cfg in configs {
        let names = match &cfg.pattern {
            Some(pattern) => expand_pattern(pattern),
            None => cfg.frames.clone(),
        };

        let mut frames = Vec::with_capacity(names.len());
        for name in names {
            match durations.get(&name) {
                Some(duration) => frames.push(AnimFrame {
                    sprite: name,
                    duration: *duration,
                }),
                None => {
                    warn!(animation = %cfg.name, frame = %name, "animation frame not found in atlas");
                }
            }
        }

        if !frames.is_empty() {
            animations.push(Animation {
                name: cfg.name.clone(),
                frames,
                default_duration: cfg.frame_duration,
                looped: cfg.looped,
            });
        }
    }

    AnimationSet {
        animations,
        atlas_file: atlas_file.to_string(),
    }
}

/// Expands a numbered pattern into frame names, start through end inclusive.
pub fn expand_pattern(pattern: &AnimationPattern) -> Vec<String> {
    (pattern.start_frame..=pattern.end_frame)
        .map(|i| format_frame_name(&pattern.name_pattern, i))
        .collect()
}

/// Substitutes `{0}` / `{0:Dn}` placeholders with `index`, zero-padded to
/// `n` digits for the `D` form. Text without a placeholder is returned
/// unchanged; a malformed placeholder is kept literally.
fn format_frame_name(pattern: &str, index: u32) -> String {
    let mut out = String::with_capacity(pattern.len() + 4);
    let mut rest = pattern;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];
        match tail.find('}') {
            Some(close) => {
                let token = &tail[1..close];
                match parse_placeholder(token) {
                    Some(width) => {
                        out.push_str(&format!("{index:0width$}", width = width));
                    }
                    None => {
                        out.push_str(&tail[..=close]);
                    }
                }
                rest = &tail[close + 1..];
            }
            None => {
                out.push_str(tail);
                return out;
            }
        }
    }
    out.push_str(rest);
    out
}

/// Returns the pad width of a `0` / `0:Dn` placeholder token, or `None` when
/// the token is not one.
fn parse_placeholder(token: &str) -> Option<usize> {
    if token == "0" {
        return Some(1);
    }
    let digits = token.strip_prefix("0:D")?;
    digits.parse::<usize>().ok()
}
