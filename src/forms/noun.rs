//! 명사형 (-음/-기)

use super::past_stem;
use crate::core::jamo::{combine_finals, FINAL_L, FINAL_M};
use crate::error::{CodecError, Result};
use crate::grammar::NounTense;
use crate::stem::{split_last, stem1};

/// 명사형 두 가지: [-음 형, -기 형]
pub fn noun_form(tense: NounTense, word: &str, is_irregular: bool) -> Result<Vec<String>> {
    match tense {
        NounTense::Present => present(word),
        NounTense::Past => {
            let past = past_stem(word, is_irregular)?;
            Ok(vec![format!("{past}음"), format!("{past}기")])
        }
    }
}

/// 현재 명사형은 불규칙 여부와 관계없이 어간1 에서 만듦
fn present(word: &str) -> Result<Vec<String>> {
    let stem1 = stem1(word)?;
    let (prefix, _, letters) = split_last(stem1)?;

    let nominal = if letters.has_final(FINAL_L) {
        // 살 → 삶
        let cluster = combine_finals(FINAL_L, FINAL_M).ok_or(CodecError::InvalidLetters {
            initial: letters.initial,
            vowel: letters.vowel,
            final_consonant: Some(FINAL_M),
        })?;
        format!("{prefix}{}", letters.with_final(Some(cluster))?)
    } else if letters.is_closed() {
        // 먹 → 먹음, 노랗 → 노랗음
        format!("{stem1}음")
    } else {
        // 가 → 감, 고르 → 고름
        format!("{prefix}{}", letters.with_final(Some(FINAL_M))?)
    };

    Ok(vec![nominal, format!("{stem1}기")])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_present() {
        assert_eq!(noun_form(NounTense::Present, "살다", true).unwrap(), ["삶", "살기"]);
        assert_eq!(noun_form(NounTense::Present, "먹다", false).unwrap(), ["먹음", "먹기"]);
        assert_eq!(noun_form(NounTense::Present, "가다", false).unwrap(), ["감", "가기"]);
        assert_eq!(noun_form(NounTense::Present, "돕다", true).unwrap(), ["돕음", "돕기"]);
        assert_eq!(noun_form(NounTense::Present, "걷다", true).unwrap(), ["걷음", "걷기"]);
    }

    #[test]
    fn test_present_irregular_stems() {
        // ㅎ 불규칙: 어간3 이 없어도 명사형은 만들어짐
        assert_eq!(noun_form(NounTense::Present, "노랗다", true).unwrap(), ["노랗음", "노랗기"]);
        assert_eq!(noun_form(NounTense::Present, "고르다", true).unwrap(), ["고름", "고르기"]);
        assert_eq!(noun_form(NounTense::Present, "아프다", true).unwrap(), ["아픔", "아프기"]);
        assert_eq!(noun_form(NounTense::Present, "아프다", false).unwrap(), ["아픔", "아프기"]);
    }

    #[test]
    fn test_past() {
        assert_eq!(noun_form(NounTense::Past, "가다", false).unwrap(), ["갔음", "갔기"]);
        assert_eq!(noun_form(NounTense::Past, "먹다", false).unwrap(), ["먹었음", "먹었기"]);
    }
}
