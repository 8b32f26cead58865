//! 설정 파일 로드/저장 (JSON)
//!
//! 활용 엔진은 설정이 없고, 명령줄 도구의 출력 방식만 정합니다.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// 설정 파일 경로를 지정하는 환경 변수
pub const CONFIG_ENV: &str = "HWALYONG_CONFIG";

/// 출력 형식
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// hwalyong 설정
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct HwalyongConfig {
    /// 출력 형식
    #[serde(default)]
    pub format: OutputFormat,
    /// 어간1/2/3, 높임 어간 출력 여부
    #[serde(default = "default_true")]
    pub show_stems: bool,
    /// 연결형/관형사형/명사형 출력 여부
    #[serde(default = "default_true")]
    pub show_non_finite: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HwalyongConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            show_stems: default_true(),
            show_non_finite: default_true(),
        }
    }
}

/// 설정 파일 경로: $HWALYONG_CONFIG 또는 ~/.config/hwalyong/config.json
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| {
            // HOME 미설정이거나 유효하지 않으면 /var/tmp 폴백
            PathBuf::from("/var/tmp")
        });
    home.join(".config").join("hwalyong").join("config.json")
}

/// 설정 파일 로드 (파일 없거나 파싱 실패 시 기본값)
pub fn load_config() -> HwalyongConfig {
    load_config_from(&config_path())
}

/// 지정한 경로에서 설정 로드
pub fn load_config_from(path: &Path) -> HwalyongConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("설정 파일 파싱 실패 ({}): {}", path.display(), e);
            HwalyongConfig::default()
        }),
        Err(_) => HwalyongConfig::default(),
    }
}

/// 설정 파일 저장
pub fn save_config(config: &HwalyongConfig) -> anyhow::Result<()> {
    save_config_to(config, &config_path())
}

/// 지정한 경로에 설정 저장
pub fn save_config_to(config: &HwalyongConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("설정 디렉토리 생성 실패: {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(config).context("직렬화 실패")?;
    fs::write(path, json).with_context(|| format!("설정 파일 저장 실패: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = HwalyongConfig::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.show_stems);
        assert!(config.show_non_finite);
    }

    #[test]
    fn test_serialize_deserialize() {
        let config = HwalyongConfig {
            format: OutputFormat::Json,
            show_stems: false,
            show_non_finite: true,
        };
        let json = serde_json::to_string(&config).unwrap();
        assert!(json.contains("\"json\""));
        let parsed: HwalyongConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_backward_compat_missing_field() {
        let json = r#"{"show_stems": false}"#;
        let config: HwalyongConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.show_stems);
        assert!(config.show_non_finite);
    }

    #[test]
    fn test_load_missing_file_uses_default() {
        let path = std::env::temp_dir().join("hwalyong-test-missing").join("config.json");
        assert_eq!(load_config_from(&path), HwalyongConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = std::env::temp_dir().join(format!("hwalyong-test-{}", std::process::id()));
        let path = dir.join("config.json");
        let config = HwalyongConfig {
            format: OutputFormat::Json,
            show_stems: true,
            show_non_finite: false,
        };
        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_save_error_is_reported() {
        // 상위 경로가 파일이면 디렉토리를 만들 수 없음
        let blocker = std::env::temp_dir().join(format!("hwalyong-test-blocker-{}", std::process::id()));
        fs::write(&blocker, "").unwrap();
        let path = blocker.join("config.json");
        let err = save_config_to(&HwalyongConfig::default(), &path).unwrap_err();
        assert!(format!("{:#}", err).contains("설정 디렉토리 생성 실패"));
        let _ = fs::remove_file(&blocker);
    }

    #[test]
    fn test_invalid_json_uses_default() {
        let dir = std::env::temp_dir().join(format!("hwalyong-test-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(load_config_from(&path), HwalyongConfig::default());
        let _ = fs::remove_dir_all(&dir);
    }
}
