//! 어간2 (-아/어 형) 도출

use super::{harmony_vowel, is_bright_vowel, not_applicable, split_last, stem1};
use crate::core::jamo::{
    decompose, LetterTriple, FINAL_H, FINAL_L, FINAL_P, FINAL_S, FINAL_T, VOWEL_A, VOWEL_AE,
    VOWEL_EO, VOWEL_EU, VOWEL_I, VOWEL_O, VOWEL_U, VOWEL_WA, VOWEL_WEO, VOWEL_YEO,
};
use crate::error::Result;

/// `하` 어근과 그 축약형
const HA_ROOT: char = '하';
const HA_FUSED: &str = "해";

/// `르` 불규칙 어근
const LEU_ROOT: char = '르';

/// 모음조화와 무관하게 정해진 축약형을 갖는 `으` 어근 (쓰다, 악쓰다, 글쓰다...)
const EU_OVERRIDES: &[(char, &str)] = &[('쓰', "써")];

/// 이중모음화: ㅗ → ㅘ, ㅜ → ㅝ, ㅣ → ㅕ
const DIPHTHONGS: &[(char, char)] = &[(VOWEL_O, VOWEL_WA), (VOWEL_U, VOWEL_WEO), (VOWEL_I, VOWEL_YEO)];

/// 기본형에서 어간2를 얻음
pub fn stem2(word: &str, irregular: bool) -> Result<String> {
    stem1_to_stem2(stem1(word)?, irregular)
}

/// 어간1에서 어간2를 얻음
pub fn stem1_to_stem2(stem1: &str, irregular: bool) -> Result<String> {
    let (prefix, last, letters) = split_last(stem1)?;
    if last == HA_ROOT {
        log::debug!("{}: 하 → 해", stem1);
        return Ok(format!("{prefix}{HA_FUSED}"));
    }

    if irregular {
        irregular_stem2(stem1, prefix, last, letters)
    } else {
        regular_stem2(stem1, prefix, last, letters)
    }
}

fn regular_stem2(stem1: &str, prefix: &str, last: char, letters: LetterTriple) -> Result<String> {
    if letters.is_closed() {
        return Ok(format!("{stem1}{}", harmony_vowel(letters.vowel)));
    }
    if letters.vowel == VOWEL_EU {
        return eu_stem2(prefix, last, letters);
    }
    match DIPHTHONGS.iter().find(|(from, _)| *from == letters.vowel) {
        Some(&(_, to)) => Ok(format!("{prefix}{}", letters.with_vowel(to)?)),
        // ㅏ, ㅓ, ㅐ, ㅔ ... 는 그대로
        None => Ok(stem1.to_string()),
    }
}

/// `으` 탈락: 앞 음절이 ㅏ 이면 ㅏ, 아니면 ㅓ 로 축약
fn eu_stem2(prefix: &str, last: char, letters: LetterTriple) -> Result<String> {
    if let Some((_, fused)) = EU_OVERRIDES.iter().find(|(root, _)| *root == last) {
        log::debug!("{}{}: 고정 축약형 {}", prefix, last, fused);
        return Ok(format!("{prefix}{fused}"));
    }
    let vowel = match prefix.chars().next_back() {
        Some(prev) if decompose(prev)?.vowel == VOWEL_A => VOWEL_A,
        _ => VOWEL_EO,
    };
    Ok(format!("{prefix}{}", letters.with_vowel(vowel)?))
}

fn irregular_stem2(stem1: &str, prefix: &str, last: char, letters: LetterTriple) -> Result<String> {
    if last == LEU_ROOT {
        return leu_stem2(stem1, prefix);
    }

    match letters.final_consonant {
        None if letters.vowel == VOWEL_EU => {
            log::trace!("{}: 으 탈락", stem1);
            eu_stem2(prefix, last, letters)
        }
        None => Err(not_applicable(stem1, "불규칙 활용")),
        Some(FINAL_T) => {
            log::trace!("{}: ㄷ 불규칙", stem1);
            Ok(format!(
                "{prefix}{}{}",
                letters.with_final(Some(FINAL_L))?,
                harmony_vowel(letters.vowel)
            ))
        }
        // ㄹ 어간은 이 단계에서 규칙 활용
        Some(FINAL_L) => regular_stem2(stem1, prefix, last, letters),
        Some(FINAL_P) => {
            log::trace!("{}: ㅂ 불규칙", stem1);
            // 돕다, 곱다 처럼 한 음절 양성 어간만 `와`
            let ending = if prefix.is_empty() && is_bright_vowel(letters.vowel) {
                "와"
            } else {
                "워"
            };
            Ok(format!("{prefix}{}{ending}", letters.with_final(None)?))
        }
        Some(FINAL_S) => {
            log::trace!("{}: ㅅ 불규칙", stem1);
            Ok(format!(
                "{prefix}{}{}",
                letters.with_final(None)?,
                harmony_vowel(letters.vowel)
            ))
        }
        Some(FINAL_H) => {
            log::trace!("{}: ㅎ 불규칙", stem1);
            Ok(format!("{prefix}{}", letters.with_vowel(VOWEL_AE)?))
        }
        Some(_) => Err(not_applicable(stem1, "불규칙 활용")),
    }
}

/// `르` 불규칙: 앞 음절에 ㄹ 받침을 더하고 `라/러`
fn leu_stem2(stem1: &str, prefix: &str) -> Result<String> {
    log::trace!("{}: 르 불규칙", stem1);
    if prefix.is_empty() {
        return Err(not_applicable(stem1, "르 불규칙"));
    }
    let (head, _, letters) = split_last(prefix)?;
    if letters.is_closed() {
        return Err(not_applicable(stem1, "르 불규칙"));
    }
    let ending = if is_bright_vowel(letters.vowel) { "라" } else { "러" };
    Ok(format!("{head}{}{ending}", letters.with_final(Some(FINAL_L))?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConjugationError;

    fn regular(stem: &str) -> String {
        stem1_to_stem2(stem, false).unwrap()
    }

    fn irregular(stem: &str) -> String {
        stem1_to_stem2(stem, true).unwrap()
    }

    #[test]
    fn test_regular_open_syllable() {
        assert_eq!(regular("가"), "가");
        assert_eq!(regular("서"), "서");
        assert_eq!(regular("개"), "개");
    }

    #[test]
    fn test_regular_closed_syllable() {
        assert_eq!(regular("뵙"), "뵙어");
        assert_eq!(regular("먹"), "먹어");
        assert_eq!(regular("가다듬"), "가다듬어");
        assert_eq!(regular("곪"), "곪아");
        assert_eq!(regular("얇"), "얇어");
    }

    #[test]
    fn test_regular_diphthong() {
        assert_eq!(regular("가두"), "가둬");
        assert_eq!(regular("보"), "봐");
        assert_eq!(regular("기다리"), "기다려");
    }

    #[test]
    fn test_ha_fusion() {
        assert_eq!(regular("하"), "해");
        assert_eq!(regular("공부하"), "공부해");
        assert_eq!(irregular("하"), "해");
    }

    #[test]
    fn test_eu_contraction() {
        assert_eq!(regular("침담그"), "침담가");
        assert_eq!(regular("따르"), "따라");
        assert_eq!(regular("크"), "커");
        assert_eq!(irregular("아프"), "아파");
    }

    #[test]
    fn test_sseu_family() {
        assert_eq!(regular("쓰"), "써");
        assert_eq!(regular("악쓰"), "악써");
    }

    #[test]
    fn test_t_irregular() {
        assert_eq!(irregular("걷"), "걸어");
        assert_eq!(irregular("깨닫"), "깨달아");
        assert_eq!(irregular("실"), "실어");

        assert_eq!(regular("받"), "받아");
        assert_eq!(regular("얻"), "얻어");
        assert_eq!(regular("묻"), "묻어");
    }

    #[test]
    fn test_l_stem_is_regular() {
        assert_eq!(irregular("길"), "길어");
        assert_eq!(regular("길"), "길어");
        assert_eq!(regular("열"), "열어");
    }

    #[test]
    fn test_leu_irregular() {
        assert_eq!(irregular("고르"), "골라");
        assert_eq!(irregular("이르"), "일러");
    }

    #[test]
    fn test_leu_irregular_needs_open_prefix() {
        assert!(matches!(
            stem1_to_stem2("르", true),
            Err(ConjugationError::IrregularNotApplicable { .. })
        ));
        assert!(matches!(
            stem1_to_stem2("막르", true),
            Err(ConjugationError::IrregularNotApplicable { .. })
        ));
    }

    #[test]
    fn test_p_irregular() {
        assert_eq!(irregular("고맙"), "고마워");
        assert_eq!(irregular("돕"), "도와");
        assert_eq!(irregular("어렵"), "어려워");
        assert_eq!(irregular("아름답"), "아름다워");

        assert_eq!(regular("잡"), "잡아");
    }

    #[test]
    fn test_s_irregular() {
        assert_eq!(irregular("낫"), "나아");
        assert_eq!(irregular("짓"), "지어");
        assert_eq!(regular("벗"), "벗어");
    }

    #[test]
    fn test_h_irregular() {
        assert_eq!(irregular("노랗"), "노래");
        assert_eq!(regular("좋"), "좋아");
    }

    #[test]
    fn test_irregular_not_applicable() {
        // 받침 ㄱ 은 불규칙 부류가 아님
        assert_eq!(
            stem1_to_stem2("먹", true),
            Err(ConjugationError::IrregularNotApplicable {
                word: "먹다".into(),
                rule: "불규칙 활용",
            })
        );
        // 으 가 아닌 열린 음절
        assert!(stem1_to_stem2("가", true).is_err());
    }

    #[test]
    fn test_stem2_from_word() {
        assert_eq!(stem2("먹다", false), Ok("먹어".to_string()));
        assert!(matches!(stem2("먹", false), Err(ConjugationError::InvalidWord(_))));
    }
}
