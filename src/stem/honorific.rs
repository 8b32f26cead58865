//! 높임 어간 (-시-)

use super::{stem1, stem3};
use crate::error::Result;

/// 주체 높임 선어말 어미
pub const HONORIFIC_SUFFIX: &str = "시";

/// 높임 어간이 따로 있는 어휘
const HONORIFIC_OVERRIDES: &[(&str, &str)] = &[("먹다", "드시"), ("자다", "주무시")];

/// 높임 어간: 고정 어휘는 그대로, 그 외는 어간3 + `시`
pub fn honorific_stem(word: &str, irregular: bool) -> Result<String> {
    stem1(word)?;
    if let Some((_, root)) = HONORIFIC_OVERRIDES.iter().find(|(w, _)| *w == word) {
        log::debug!("{}: 높임 어간 {}", word, root);
        return Ok(root.to_string());
    }
    Ok(format!("{}{HONORIFIC_SUFFIX}", stem3(word, irregular)?))
}
