//! 관형사형 (-ㄴ/-는/-ㄹ)

use crate::core::jamo::{FINAL_H, FINAL_L, FINAL_N, FINAL_P, FINAL_S, FINAL_T};
use crate::error::Result;
use crate::grammar::DeterminerTense;
use crate::stem::{split_last, stem1};

/// 과거/미래 관형사형 어미 묶음
struct Endings {
    /// 받침 뒤 어미
    regular: &'static str,
    /// ㅂ 불규칙 어미
    irregular_p: &'static str,
    /// 열린 음절(및 ㄹ/ㅎ 받침)에 붙는 받침
    final_consonant: char,
}

const PAST: Endings = Endings {
    regular: "은",
    irregular_p: "운",
    final_consonant: FINAL_N,
};

const FUTURE: Endings = Endings {
    regular: "을",
    irregular_p: "울",
    final_consonant: FINAL_L,
};

/// 관형사형 (간/가는/갈)
pub fn determiner_form(tense: DeterminerTense, word: &str, is_irregular: bool) -> Result<String> {
    match tense {
        DeterminerTense::Past => past_or_future(word, is_irregular, &PAST),
        DeterminerTense::Present => present(word),
        DeterminerTense::Future => past_or_future(word, is_irregular, &FUTURE),
    }
}

fn past_or_future(word: &str, is_irregular: bool, endings: &Endings) -> Result<String> {
    let stem1 = stem1(word)?;
    let (prefix, _, letters) = split_last(stem1)?;

    if is_irregular {
        match letters.final_consonant {
            Some(FINAL_S) => {
                return Ok(format!("{prefix}{}{}", letters.with_final(None)?, endings.regular));
            }
            Some(FINAL_T) => {
                return Ok(format!(
                    "{prefix}{}{}",
                    letters.with_final(Some(FINAL_L))?,
                    endings.regular
                ));
            }
            Some(FINAL_P) => {
                return Ok(format!("{prefix}{}{}", letters.with_final(None)?, endings.irregular_p));
            }
            _ => {}
        }
    }

    match letters.final_consonant {
        None | Some(FINAL_L) | Some(FINAL_H) => Ok(format!(
            "{prefix}{}",
            letters.with_final(Some(endings.final_consonant))?
        )),
        Some(_) => Ok(format!("{stem1}{}", endings.regular)),
    }
}

fn present(word: &str) -> Result<String> {
    let stem1 = stem1(word)?;
    let (prefix, _, letters) = split_last(stem1)?;
    if letters.has_final(FINAL_L) {
        Ok(format!("{prefix}{}는", letters.with_final(None)?))
    } else {
        Ok(format!("{stem1}는"))
    }
}
