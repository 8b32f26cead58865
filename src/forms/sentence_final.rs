//! 종결형 (평서/의문/추측/명령/청유)
//!
//! 각 서법은 시제 × 격식 × 높임 조합마다 한 갈래를 갖습니다.
//! 추측/명령/청유형에는 과거 시제 칸이 없고, 요청하면 `FormNotImplemented`.

use super::{
    formal_polite_root, p_infix_root, past_stem, FORMAL_POLITE_INFIX, FORMAL_QUESTION_ENDING,
    POLITE_ENDING,
};
use crate::core::jamo::{FINAL_L, FINAL_N, FINAL_P, FINAL_S, FINAL_T};
use crate::error::{ConjugationError, Result};
use crate::grammar::{Formality, Mood, Politeness, Tense};
use crate::stem::{
    honorific_stem, split_last, stem1, stem1_to_stem3, stem2, HONORIFIC_SUFFIX, WORD_ENDING,
};

/// 추측 선어말 어미
const ASSERTIVE_MARKER: &str = "겠";

/// 평서형과 의문형에서 달라지는 어미
#[derive(Debug, Clone, Copy)]
enum Sentence {
    Statement,
    Question,
}

impl Sentence {
    /// 하십시오체 끝 어미
    fn formal_ending(self) -> &'static str {
        match self {
            Sentence::Statement => "다",
            Sentence::Question => FORMAL_QUESTION_ENDING,
        }
    }

    /// 해라체 끝 어미
    fn plain_ending(self) -> &'static str {
        match self {
            Sentence::Statement => "다",
            Sentence::Question => "니",
        }
    }
}

/// 선어말 어미(-었-, -겠-)로 끝나는 어근 뒤의 어미
fn after_marker(base: &str, sentence: Sentence, formality: Formality, politeness: Politeness) -> String {
    match (formality, politeness) {
        (Formality::Formal, Politeness::Polite) => {
            format!("{base}{FORMAL_POLITE_INFIX}{}", sentence.formal_ending())
        }
        (Formality::Formal, Politeness::NonPolite) => format!("{base}{}", sentence.plain_ending()),
        (Formality::Informal, Politeness::Polite) => format!("{base}어{POLITE_ENDING}"),
        (Formality::Informal, Politeness::NonPolite) => format!("{base}어"),
    }
}

fn not_implemented(mood: Mood, tense: Tense, formality: Formality, politeness: Politeness) -> ConjugationError {
    ConjugationError::FormNotImplemented {
        mood,
        tense,
        formality,
        politeness,
    }
}

/// 해라체 평서형: 형용사는 기본형 그대로, 동사는 -ㄴ다/-는다
fn plain_indicative(word: &str, is_verb: bool) -> Result<String> {
    if !is_verb {
        return Ok(word.to_string());
    }
    let stem1 = stem1(word)?;
    let (prefix, _, letters) = split_last(stem1)?;
    if !letters.is_closed() || letters.has_final(FINAL_L) {
        // ㄹ 받침은 ㄴ 으로 바뀜 (놀다 → 논다)
        Ok(format!("{prefix}{}{WORD_ENDING}", letters.with_final(Some(FINAL_N))?))
    } else {
        Ok(format!("{stem1}는{WORD_ENDING}"))
    }
}

/// 해라체 의문형: -니 (ㄹ 받침은 탈락)
fn plain_interrogative(word: &str) -> Result<String> {
    let stem1 = stem1(word)?;
    let (prefix, _, letters) = split_last(stem1)?;
    if letters.has_final(FINAL_L) {
        Ok(format!("{prefix}{}니", letters.with_final(None)?))
    } else {
        Ok(format!("{stem1}니"))
    }
}

/// 명령형 높임 어근 (-시-)
///
/// ㄹ 받침은 불규칙 여부와 관계없이 탈락 (놀다 → 노시, 만들다 → 만드시)
fn imperative_root(word: &str, is_irregular: bool) -> Result<String> {
    let stem1 = stem1(word)?;
    let (prefix, _, letters) = split_last(stem1)?;
    if letters.has_final(FINAL_L) {
        return Ok(format!("{prefix}{}{HONORIFIC_SUFFIX}", letters.with_final(None)?));
    }
    honorific_stem(word, is_irregular)
}

/// 평서형
pub fn indicative(
    word: &str,
    is_verb: bool,
    is_irregular: bool,
    tense: Tense,
    formality: Formality,
    politeness: Politeness,
) -> Result<String> {
    match (tense, formality, politeness) {
        (Tense::NonPast, Formality::Formal, Politeness::Polite) => {
            Ok(format!("{}{WORD_ENDING}", formal_polite_root(word)?))
        }
        (Tense::NonPast, Formality::Formal, Politeness::NonPolite) => plain_indicative(word, is_verb),
        (Tense::NonPast, Formality::Informal, Politeness::Polite) => {
            Ok(format!("{}{POLITE_ENDING}", stem2(word, is_irregular)?))
        }
        (Tense::NonPast, Formality::Informal, Politeness::NonPolite) => stem2(word, is_irregular),
        (Tense::Past, formality, politeness) => Ok(after_marker(
            &past_stem(word, is_irregular)?,
            Sentence::Statement,
            formality,
            politeness,
        )),
    }
}

/// 의문형
pub fn interrogative(
    word: &str,
    _is_verb: bool,
    is_irregular: bool,
    tense: Tense,
    formality: Formality,
    politeness: Politeness,
) -> Result<String> {
    match (tense, formality, politeness) {
        (Tense::NonPast, Formality::Formal, Politeness::Polite) => {
            Ok(format!("{}{FORMAL_QUESTION_ENDING}", formal_polite_root(word)?))
        }
        (Tense::NonPast, Formality::Formal, Politeness::NonPolite) => plain_interrogative(word),
        (Tense::NonPast, Formality::Informal, Politeness::Polite) => {
            Ok(format!("{}{POLITE_ENDING}", stem2(word, is_irregular)?))
        }
        (Tense::NonPast, Formality::Informal, Politeness::NonPolite) => stem2(word, is_irregular),
        (Tense::Past, formality, politeness) => Ok(after_marker(
            &past_stem(word, is_irregular)?,
            Sentence::Question,
            formality,
            politeness,
        )),
    }
}

/// 추측형 (-겠-)
pub fn assertive(
    word: &str,
    _is_verb: bool,
    _is_irregular: bool,
    tense: Tense,
    formality: Formality,
    politeness: Politeness,
) -> Result<String> {
    match tense {
        Tense::NonPast => {
            let base = format!("{}{ASSERTIVE_MARKER}", stem1(word)?);
            Ok(after_marker(&base, Sentence::Statement, formality, politeness))
        }
        Tense::Past => Err(not_implemented(Mood::Assertive, tense, formality, politeness)),
    }
}

/// 명령형
pub fn imperative(
    word: &str,
    _is_verb: bool,
    is_irregular: bool,
    tense: Tense,
    formality: Formality,
    politeness: Politeness,
) -> Result<String> {
    match (tense, formality, politeness) {
        (Tense::NonPast, Formality::Formal, Politeness::Polite) => {
            // 가시 → 가십시오
            let root = imperative_root(word, is_irregular)?;
            let (prefix, _, letters) = split_last(&root)?;
            Ok(format!("{prefix}{}시오", letters.with_final(Some(FINAL_P))?))
        }
        (Tense::NonPast, Formality::Formal, Politeness::NonPolite) => {
            Ok(format!("{}라", stem2(word, is_irregular)?))
        }
        (Tense::NonPast, Formality::Informal, Politeness::Polite) => {
            // 시 + 어요 → 세요
            let root = imperative_root(word, is_irregular)?;
            let Some(prefix) = root.strip_suffix(HONORIFIC_SUFFIX) else {
                return Err(ConjugationError::InvalidWord(word.to_string()));
            };
            Ok(format!("{prefix}세{POLITE_ENDING}"))
        }
        (Tense::NonPast, Formality::Informal, Politeness::NonPolite) => stem2(word, is_irregular),
        (Tense::Past, _, _) => Err(not_implemented(Mood::Imperative, tense, formality, politeness)),
    }
}

/// 청유형
pub fn hortative(
    word: &str,
    _is_verb: bool,
    is_irregular: bool,
    tense: Tense,
    formality: Formality,
    politeness: Politeness,
) -> Result<String> {
    match (tense, formality, politeness) {
        (Tense::NonPast, Formality::Formal, Politeness::Polite) => {
            // 가 → 갑시다, 먹 → 먹읍시다, 놀 → 놉시다
            let stem1 = stem1(word)?;
            let (_, _, letters) = split_last(stem1)?;
            let base = match letters.final_consonant {
                // 듣 → 들으, 짓 → 지으, 돕 → 도우
                Some(FINAL_T | FINAL_S | FINAL_P) if is_irregular => stem1_to_stem3(stem1, true)?,
                _ => stem1.to_string(),
            };
            Ok(format!("{}다", p_infix_root(&base, "읍시", "시")?))
        }
        (Tense::NonPast, Formality::Formal, Politeness::NonPolite) => Ok(format!("{}자", stem1(word)?)),
        (Tense::NonPast, Formality::Informal, Politeness::Polite) => {
            Ok(format!("{}{POLITE_ENDING}", stem2(word, is_irregular)?))
        }
        (Tense::NonPast, Formality::Informal, Politeness::NonPolite) => Ok(stem1(word)?.to_string()),
        (Tense::Past, _, _) => Err(not_implemented(Mood::Hortative, tense, formality, politeness)),
    }
}

/// 서법별 종결형 분기
pub fn sentence_final(
    mood: Mood,
    word: &str,
    is_verb: bool,
    is_irregular: bool,
    tense: Tense,
    formality: Formality,
    politeness: Politeness,
) -> Result<String> {
    let generate: fn(&str, bool, bool, Tense, Formality, Politeness) -> Result<String> = match mood {
        Mood::Indicative => indicative,
        Mood::Interrogative => interrogative,
        Mood::Assertive => assertive,
        Mood::Imperative => imperative,
        Mood::Hortative => hortative,
    };
    generate(word, is_verb, is_irregular, tense, formality, politeness)
}
