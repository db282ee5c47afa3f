//! Upstream configuration providers
//!
//! Each source is a GitHub repository whose default-branch archive zip is
//! the bundle we deploy. The selectable schema catalogs mirror the menus
//! each provider ships.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// A selectable input schema shipped by a config source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaInfo {
    /// Schema identifier as it appears in `schema_list`
    pub id: &'static str,
    /// Human-readable menu label
    pub label: &'static str,
}

/// Upstream configuration bundle variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConfigSource {
    /// iDvel/rime-ice (雾凇拼音)
    #[default]
    RimeIce,
    /// gaboolic/rime-frost (白霜拼音)
    RimeFrost,
}

impl ConfigSource {
    pub const ALL: [ConfigSource; 2] = [ConfigSource::RimeIce, ConfigSource::RimeFrost];

    /// Stable identifier used in settings and logs.
    pub fn id(&self) -> &'static str {
        match self {
            Self::RimeIce => "rime-ice",
            Self::RimeFrost => "rime-frost",
        }
    }

    /// Menu label shown to the user.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::RimeIce => "Rime-Ice (雾凇拼音)",
            Self::RimeFrost => "Rime-Frost (白霜拼音, larger dictionary)",
        }
    }

    /// Default-branch archive of the provider's repository.
    pub fn bundle_url(&self) -> &'static str {
        match self {
            Self::RimeIce => "https://github.com/iDvel/rime-ice/archive/refs/heads/main.zip",
            Self::RimeFrost => "https://github.com/gaboolic/rime-frost/archive/refs/heads/master.zip",
        }
    }

    /// Schemas the provider ships, in menu order.
    pub fn schema_catalog(&self) -> &'static [SchemaInfo] {
        match self {
            Self::RimeIce => &[
                SchemaInfo { id: "rime_ice", label: "雾凇拼音 (full pinyin)" },
                SchemaInfo { id: "double_pinyin_flypy", label: "小鹤双拼" },
                SchemaInfo { id: "double_pinyin_mspro", label: "微软双拼" },
                SchemaInfo { id: "double_pinyin", label: "自然码双拼" },
                SchemaInfo { id: "double_pinyin_abc", label: "智能ABC双拼" },
            ],
            Self::RimeFrost => &[
                SchemaInfo { id: "rime_frost", label: "白霜拼音 (full pinyin)" },
                SchemaInfo { id: "rime_frost_double_pinyin_flypy", label: "小鹤双拼" },
                SchemaInfo { id: "rime_frost_double_pinyin_mspy", label: "微软双拼" },
                SchemaInfo { id: "rime_frost_double_pinyin", label: "自然码双拼" },
                SchemaInfo { id: "rime_frost_double_pinyin_sogou", label: "搜狗双拼" },
            ],
        }
    }

    /// Fallback schema when the user confirms an empty selection.
    pub fn default_schema(&self) -> &'static str {
        self.schema_catalog()[0].id
    }
}

impl fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ConfigSource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rime-ice" => Ok(Self::RimeIce),
            "rime-frost" => Ok(Self::RimeFrost),
            other => Err(Error::UnknownSource { id: other.into() }),
        }
    }
}
