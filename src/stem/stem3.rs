//! 어간3 (매개모음 `으` 형) 도출

use super::{not_applicable, split_last, stem1};
use crate::core::jamo::{FINAL_L, FINAL_P, FINAL_S, FINAL_T};
use crate::error::Result;

/// 매개모음
pub const EUPHONIC_VOWEL: &str = "으";

/// ㅂ 불규칙에서 매개모음 대신 쓰는 모음
const P_IRREGULAR_VOWEL: &str = "우";

/// 기본형에서 어간3을 얻음
pub fn stem3(word: &str, irregular: bool) -> Result<String> {
    stem1_to_stem3(stem1(word)?, irregular)
}

/// 어간1에서 어간3을 얻음
pub fn stem1_to_stem3(stem1: &str, irregular: bool) -> Result<String> {
    let (prefix, _, letters) = split_last(stem1)?;

    if !irregular {
        return Ok(if letters.is_closed() {
            format!("{stem1}{EUPHONIC_VOWEL}")
        } else {
            stem1.to_string()
        });
    }

    // 불규칙 규칙은 받침 있는 음절에만 해당
    match letters.final_consonant {
        Some(FINAL_S) => Ok(format!("{prefix}{}{EUPHONIC_VOWEL}", letters.with_final(None)?)),
        Some(FINAL_T) => Ok(format!(
            "{prefix}{}{EUPHONIC_VOWEL}",
            letters.with_final(Some(FINAL_L))?
        )),
        Some(FINAL_P) => Ok(format!("{prefix}{}{P_IRREGULAR_VOWEL}", letters.with_final(None)?)),
        Some(FINAL_L) => Ok(format!("{prefix}{}", letters.with_final(None)?)),
        _ => Err(not_applicable(stem1, "어간3 불규칙 활용")),
    }
}
