use std::{collections::BTreeMap, fs, io, path::Path};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use phonepad_core::{Decoder, KeyMap, Region, ReservedTable, region::UnknownRegion};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `[keys]` 的键必须是单个数字字符
    #[error("invalid key {0:?} in [keys] (expected a single digit 0-9)")]
    InvalidKey(String),

    #[error(transparent)]
    Region(#[from] UnknownRegion),

    #[error(transparent)]
    Keymap(#[from] phonepad_core::Error),
}

/// TOML 配置（所有字段都可省略）：
///
/// ```toml
/// region = "Holland"
///
/// [keys]
/// "1" = ".,?"
///
/// [literals]
/// "555#" = "Kierkegaard: anxiety is the dizziness of freedom"
///
/// [predict]
/// trigger = "AI#"
/// ```
///
/// - `keys`：按数字覆盖默认键位（整组替换）
/// - `region`：在覆盖之后追加地区字符
/// - `literals`：合并到默认语录之上；同键时配置优先
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PadConfig {
    pub region: Option<String>,
    pub keys: BTreeMap<String, String>,
    pub literals: BTreeMap<String, String>,
    pub predict: PredictConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PredictConfig {
    /// 为空字符串时关闭预测
    pub trigger: Option<String>,
}

impl PadConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading config");
        let s = fs::read_to_string(path)?;
        Self::from_toml_str(&s)
    }

    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: PadConfig = toml::from_str(s)?;
        debug!(
            keys = config.keys.len(),
            literals = config.literals.len(),
            region = ?config.region,
            "config parsed"
        );
        Ok(config)
    }

    /// 默认键位 -> `[keys]` 覆盖 -> 地区追加。
    pub fn build_keymap(&self) -> Result<KeyMap, ConfigError> {
        let mut keymap = KeyMap::default();
        for (key, chars) in &self.keys {
            let mut it = key.chars();
            let (Some(digit), None) = (it.next(), it.next()) else {
                return Err(ConfigError::InvalidKey(key.clone()));
            };
            if !digit.is_ascii_digit() {
                return Err(ConfigError::InvalidKey(key.clone()));
            }
            keymap.set(digit, chars)?;
        }
        if let Some(tag) = &self.region {
            // 配置里写错地区名直接报错，而不是像 `KeyMap::mutate` 那样静默忽略
            let region: Region = tag.parse()?;
            keymap.mutate(region.tag());
        }
        Ok(keymap)
    }

    pub fn build_reserved(&self) -> ReservedTable {
        let mut reserved = ReservedTable::default();
        for (input, response) in &self.literals {
            reserved.insert(input.as_str(), response.as_str());
        }
        match &self.predict.trigger {
            Some(trigger) => reserved.with_predict_trigger(trigger.as_str()),
            None => reserved,
        }
    }

    pub fn build_decoder(&self) -> Result<Decoder, ConfigError> {
        let keymap = self.build_keymap()?;
        Ok(Decoder::new(keymap)?.with_reserved(self.build_reserved()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    const SAMPLE: &str = r#"
region = "Holland"

[keys]
"1" = ".,?"

[literals]
"555#" = "Kierkegaard: anxiety is the dizziness of freedom"

[predict]
trigger = "00#"
"#;

    #[test]
    fn empty_config_builds_the_default_decoder() {
        let config = PadConfig::from_toml_str("").unwrap();
        assert_eq!(config.build_keymap().unwrap(), KeyMap::default());
        let mut decoder = config.build_decoder().unwrap();
        assert_eq!(decoder.decode("4433555 555666#"), "HELLO");
        assert_eq!(decoder.decode("AI#"), "Kage predicts: the last input decoded was HELLO");
    }

    #[test]
    fn sample_config_applies_every_section() {
        let config = PadConfig::from_toml_str(SAMPLE).unwrap();
        let mut decoder = config.build_decoder().unwrap();
        assert_eq!(decoder.decode("1 11 111#"), ".,?");
        assert_eq!(decoder.decode("6666#"), "I");
        assert_eq!(
            decoder.decode("555#"),
            "Kierkegaard: anxiety is the dizziness of freedom"
        );
        assert_eq!(
            decoder.decode("777#"),
            "Camus: the absurd persists in endless cycles"
        );
        assert_eq!(decoder.decode("00#"), "Kage predicts: the last input decoded was 777#");
    }

    #[test]
    fn region_applies_after_key_overrides() {
        let config = PadConfig::from_toml_str(
            r#"
region = "india"
[keys]
"2" = "xy"
"#,
        )
        .unwrap();
        let keymap = config.build_keymap().unwrap();
        assert_eq!(keymap.available_characters('2'), Some(&['X', 'Y', 'आ'][..]));
    }

    #[test]
    fn rejects_bad_keys() {
        for bad in [r#"[keys]
"12" = "ab""#, r#"[keys]
"a" = "ab""#] {
            let config = PadConfig::from_toml_str(bad).unwrap();
            assert!(matches!(config.build_keymap(), Err(ConfigError::InvalidKey(_))));
        }
    }

    #[test]
    fn rejects_empty_key_sets() {
        let config = PadConfig::from_toml_str("[keys]\n\"3\" = \"\"").unwrap();
        assert!(matches!(
            config.build_keymap(),
            Err(ConfigError::Keymap(phonepad_core::Error::EmptyCharacterSet('3')))
        ));
    }

    #[test]
    fn rejects_unknown_regions() {
        let config = PadConfig::from_toml_str("region = \"Atlantis\"").unwrap();
        assert!(matches!(config.build_keymap(), Err(ConfigError::Region(_))));
    }

    #[test]
    fn rejects_unknown_fields() {
        assert!(matches!(
            PadConfig::from_toml_str("colour = \"red\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn empty_trigger_disables_predict() {
        let config = PadConfig::from_toml_str("[predict]\ntrigger = \"\"").unwrap();
        let mut decoder = config.build_decoder().unwrap();
        assert_eq!(decoder.decode("AI#"), "");
    }

    #[test]
    fn loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = PadConfig::from_path(file.path()).unwrap();
        assert_eq!(config.region.as_deref(), Some("Holland"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = PadConfig::from_path(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
