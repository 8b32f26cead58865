//! 음절 ↔ 자모 삼중항 코덱
//!
//! 완성형 음절 하나를 초성/중성/종성 자모(첫가끝 조합형, U+1100 영역)로
//! 분해하고, 다시 하나의 음절로 조합합니다.
//! 활용 규칙은 모두 이 두 함수만으로 음절을 다룹니다.

use crate::core::unicode::{
    combine_jongseong, compose_syllable, decompose_syllable, CHOSEONG_COUNT, JONGSEONG_COUNT,
    JUNGSEONG_COUNT,
};
use crate::error::CodecError;

/// 초성 자모 시작 (ᄀ)
const CHOSEONG_BASE: u32 = 0x1100;
/// 중성 자모 시작 (ᅡ)
const JUNGSEONG_BASE: u32 = 0x1161;
/// 종성 자모 시작 직전 (ᆨ = 0x11A8 이 인덱스 1)
const JONGSEONG_BASE: u32 = 0x11A7;

pub const VOWEL_A: char = '\u{1161}'; // ㅏ
pub const VOWEL_AE: char = '\u{1162}'; // ㅐ
pub const VOWEL_EO: char = '\u{1165}'; // ㅓ
pub const VOWEL_YEO: char = '\u{1167}'; // ㅕ
pub const VOWEL_O: char = '\u{1169}'; // ㅗ
pub const VOWEL_WA: char = '\u{116A}'; // ㅘ
pub const VOWEL_U: char = '\u{116E}'; // ㅜ
pub const VOWEL_WEO: char = '\u{116F}'; // ㅝ
pub const VOWEL_EU: char = '\u{1173}'; // ㅡ
pub const VOWEL_I: char = '\u{1175}'; // ㅣ

pub const FINAL_N: char = '\u{11AB}'; // ㄴ
pub const FINAL_T: char = '\u{11AE}'; // ㄷ
pub const FINAL_L: char = '\u{11AF}'; // ㄹ
pub const FINAL_M: char = '\u{11B7}'; // ㅁ
pub const FINAL_P: char = '\u{11B8}'; // ㅂ
pub const FINAL_S: char = '\u{11BA}'; // ㅅ
pub const FINAL_SS: char = '\u{11BB}'; // ㅆ
pub const FINAL_H: char = '\u{11C2}'; // ㅎ

/// 한 음절의 자모 분해 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LetterTriple {
    /// 초성
    pub initial: char,
    /// 중성
    pub vowel: char,
    /// 종성 (열린 음절이면 None)
    pub final_consonant: Option<char>,
}

impl LetterTriple {
    /// 종성이 있는 닫힌 음절인지 확인
    pub fn is_closed(&self) -> bool {
        self.final_consonant.is_some()
    }

    /// 종성이 주어진 자모인지 확인
    pub fn has_final(&self, jamo: char) -> bool {
        self.final_consonant == Some(jamo)
    }

    /// 자모 개수 (2 또는 3)
    pub fn component_count(&self) -> usize {
        if self.is_closed() {
            3
        } else {
            2
        }
    }

    /// 초성/중성은 그대로 두고 종성만 바꾼 음절
    pub fn with_final(&self, final_consonant: Option<char>) -> Result<char, CodecError> {
        compose(self.initial, self.vowel, final_consonant)
    }

    /// 초성은 그대로 두고 중성을 바꾼 열린 음절
    pub fn with_vowel(&self, vowel: char) -> Result<char, CodecError> {
        compose(self.initial, vowel, None)
    }
}

/// 완성형 음절을 자모 삼중항으로 분해
pub fn decompose(c: char) -> Result<LetterTriple, CodecError> {
    let (cho, jung, jong) = decompose_syllable(c).ok_or(CodecError::NotSyllable(c))?;
    let jamo = |base: u32, index: u32| char::from_u32(base + index).ok_or(CodecError::NotSyllable(c));
    Ok(LetterTriple {
        initial: jamo(CHOSEONG_BASE, cho)?,
        vowel: jamo(JUNGSEONG_BASE, jung)?,
        final_consonant: if jong == 0 {
            None
        } else {
            Some(jamo(JONGSEONG_BASE, jong)?)
        },
    })
}

/// 자모 삼중항을 완성형 음절로 조합
/// 조합 불가능한 자모가 섞여 있으면 실패
pub fn compose(initial: char, vowel: char, final_consonant: Option<char>) -> Result<char, CodecError> {
    let invalid = CodecError::InvalidLetters {
        initial,
        vowel,
        final_consonant,
    };
    let cho = jamo_index(initial, CHOSEONG_BASE, CHOSEONG_COUNT).ok_or(invalid)?;
    let jung = jamo_index(vowel, JUNGSEONG_BASE, JUNGSEONG_COUNT).ok_or(invalid)?;
    let jong = match final_consonant {
        None => 0,
        Some(f) => match jamo_index(f, JONGSEONG_BASE, JONGSEONG_COUNT) {
            Some(index) if index > 0 => index,
            _ => return Err(invalid),
        },
    };
    compose_syllable(cho, jung, jong).ok_or(invalid)
}

/// 두 종성 자모를 겹받침 자모로 조합 (예: ᆯ + ᆷ = ᆱ)
pub fn combine_finals(first: char, second: char) -> Option<char> {
    let a = jamo_index(first, JONGSEONG_BASE, JONGSEONG_COUNT)?;
    let b = jamo_index(second, JONGSEONG_BASE, JONGSEONG_COUNT)?;
    let combined = combine_jongseong(a, b)?;
    char::from_u32(JONGSEONG_BASE + combined)
}

fn jamo_index(c: char, base: u32, count: u32) -> Option<u32> {
    let index = (c as u32).checked_sub(base)?;
    (index < count).then_some(index)
}
