use crate::guides::error::GuideError;
use crate::guides::model::{
    clamp_thickness, Guide, GuideColor, GuideStyle, LineStyle, Orientation, DEFAULT_GUIDE_COLOR,
    DEFAULT_THICKNESS,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Guides, ambient defaults and visibility as they are written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedSettings {
    pub guides: Vec<Guide>,
    pub defaults: GuideStyle,
    pub show_guides: bool,
}

impl Default for PersistedSettings {
    fn default() -> Self {
        Self {
            guides: Vec::new(),
            defaults: GuideStyle::default(),
            show_guides: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    pub index: usize,
    pub reason: String,
}

/// Outcome of parsing a settings document: the usable settings plus every
/// entry that had to be dropped along the way.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoadedSettings {
    pub settings: PersistedSettings,
    pub skipped: Vec<SkippedEntry>,
    pub defaults_rejected: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct GuideRecord {
    orientation: Orientation,
    pos: i32,
    #[serde(default = "default_color")]
    color: GuideColor,
    #[serde(default = "default_thickness")]
    thickness: u32,
    #[serde(default)]
    style_name: LineStyle,
}

impl From<&Guide> for GuideRecord {
    fn from(guide: &Guide) -> Self {
        Self {
            orientation: guide.orientation,
            pos: guide.position,
            color: guide.color,
            thickness: guide.thickness,
            style_name: guide.line_style,
        }
    }
}

impl From<GuideRecord> for Guide {
    fn from(record: GuideRecord) -> Self {
        Guide {
            orientation: record.orientation,
            position: record.pos,
            color: record.color,
            thickness: clamp_thickness(record.thickness),
            line_style: record.style_name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StyleDefaultsRecord {
    #[serde(default = "default_thickness")]
    thickness: u32,
    #[serde(default)]
    style: LineStyle,
    #[serde(default = "default_color")]
    color: GuideColor,
}

impl From<GuideStyle> for StyleDefaultsRecord {
    fn from(style: GuideStyle) -> Self {
        Self {
            thickness: style.thickness,
            style: style.line_style,
            color: style.color,
        }
    }
}

impl From<StyleDefaultsRecord> for GuideStyle {
    fn from(record: StyleDefaultsRecord) -> Self {
        GuideStyle {
            color: record.color,
            thickness: clamp_thickness(record.thickness),
            line_style: record.style,
        }
    }
}

#[derive(Debug, Serialize)]
struct SettingsDocument {
    guides: Vec<GuideRecord>,
    settings: StyleDefaultsRecord,
    show_guides: bool,
}

/// Loosely typed top level so a single bad guide cannot sink the document.
#[derive(Debug, Deserialize)]
struct RawSettingsDocument {
    #[serde(default)]
    guides: Vec<Value>,
    #[serde(default)]
    settings: Option<Value>,
    #[serde(default)]
    show_guides: Option<Value>,
}

fn default_color() -> GuideColor {
    DEFAULT_GUIDE_COLOR
}

fn default_thickness() -> u32 {
    DEFAULT_THICKNESS
}

/// Strictly validates a single persisted guide record.
pub fn parse_guide_entry(value: &Value) -> Result<Guide, GuideError> {
    GuideRecord::deserialize(value)
        .map(Guide::from)
        .map_err(|err| GuideError::malformed_entry(err.to_string()))
}

pub fn parse_settings_value(document: Value) -> Result<LoadedSettings, serde_json::Error> {
    let raw: RawSettingsDocument = serde_json::from_value(document)?;

    let mut guides = Vec::with_capacity(raw.guides.len());
    let mut skipped = Vec::new();
    for (index, entry) in raw.guides.iter().enumerate() {
        match parse_guide_entry(entry) {
            Ok(guide) => guides.push(guide),
            Err(err) => {
                tracing::warn!(index, %err, "skipping persisted guide");
                skipped.push(SkippedEntry {
                    index,
                    reason: err.to_string(),
                });
            }
        }
    }

    let mut defaults_rejected = false;
    let defaults = match raw.settings {
        None => GuideStyle::default(),
        Some(value) => match StyleDefaultsRecord::deserialize(&value) {
            Ok(record) => record.into(),
            Err(err) => {
                tracing::warn!(%err, "invalid style defaults, using built-in defaults");
                defaults_rejected = true;
                GuideStyle::default()
            }
        },
    };

    let show_guides = raw
        .show_guides
        .as_ref()
        .and_then(Value::as_bool)
        .unwrap_or(true);

    Ok(LoadedSettings {
        settings: PersistedSettings {
            guides,
            defaults,
            show_guides,
        },
        skipped,
        defaults_rejected,
    })
}

pub fn parse_settings_str(content: &str) -> Result<LoadedSettings, serde_json::Error> {
    let document: Value = serde_json::from_str(content)?;
    parse_settings_value(document)
}

pub fn to_json_pretty(settings: &PersistedSettings) -> Result<String, serde_json::Error> {
    let document = SettingsDocument {
        guides: settings.guides.iter().map(GuideRecord::from).collect(),
        settings: settings.defaults.into(),
        show_guides: settings.show_guides,
    };
    serde_json::to_string_pretty(&document)
}
