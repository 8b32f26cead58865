//! 어간 도출
//!
//! 기본형에서 세 가지 어간을 만듭니다.
//!
//! - 어간1: 기본형에서 `다`를 뗀 형태 (가다 → 가)
//! - 어간2: 모음조화/축약/불규칙을 적용한 `-아/어` 형태 (먹다 → 먹어)
//! - 어간3: 매개모음 `으` 또는 불규칙 대응형 (먹다 → 먹으)
//!
//! 불규칙 여부는 단어에서 추론하지 않고 호출자가 지정합니다.

mod honorific;
mod stem2;
mod stem3;

pub use honorific::{honorific_stem, HONORIFIC_SUFFIX};
pub use stem2::{stem1_to_stem2, stem2};
pub use stem3::{stem1_to_stem3, stem3, EUPHONIC_VOWEL};

use crate::core::jamo::{decompose, LetterTriple, VOWEL_A, VOWEL_O};
use crate::core::unicode::is_hangul_syllable;
use crate::error::{ConjugationError, Result};

/// 기본형 어미
pub const WORD_ENDING: char = '다';

/// 기본형에서 어간1을 얻음
///
/// `다`로 끝나지 않거나, 두 글자 미만이거나, 어간에 완성형 한글이 아닌
/// 문자가 있으면 `InvalidWord`.
pub fn stem1(word: &str) -> Result<&str> {
    let invalid = || ConjugationError::InvalidWord(word.to_string());
    let (idx, last) = word.char_indices().next_back().ok_or_else(invalid)?;
    if last != WORD_ENDING {
        return Err(invalid());
    }
    let root = &word[..idx];
    if root.is_empty() || !root.chars().all(is_hangul_syllable) {
        return Err(invalid());
    }
    Ok(root)
}

/// 어간1에 기본형 어미를 다시 붙임
pub fn stem1_to_word(stem1: &str) -> String {
    format!("{stem1}{WORD_ENDING}")
}

/// 마지막 음절 앞부분, 마지막 음절, 그 자모 분해
pub(crate) fn split_last(stem: &str) -> Result<(&str, char, LetterTriple)> {
    let (idx, last) = stem
        .char_indices()
        .next_back()
        .ok_or_else(|| ConjugationError::InvalidWord(stem.to_string()))?;
    Ok((&stem[..idx], last, decompose(last)?))
}

/// 양성 모음 (ㅏ, ㅗ)
pub(crate) fn is_bright_vowel(vowel: char) -> bool {
    matches!(vowel, VOWEL_A | VOWEL_O)
}

/// 모음조화에 따른 연결 모음: 양성 모음 뒤 `아`, 그 외 `어`
pub(crate) fn harmony_vowel(vowel: char) -> &'static str {
    if is_bright_vowel(vowel) {
        "아"
    } else {
        "어"
    }
}

pub(crate) fn not_applicable(stem1: &str, rule: &'static str) -> ConjugationError {
    ConjugationError::IrregularNotApplicable {
        word: stem1_to_word(stem1),
        rule,
    }
}
