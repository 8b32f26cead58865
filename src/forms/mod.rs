//! 활용형 생성
//!
//! 어간1/2/3에 어미를 붙여 최종 활용형을 만듭니다.
//!
//! - `sentence_final`: 평서/의문/추측/명령/청유 종결형
//! - `connective`: 이유/대조/나열/조건/의도 연결형
//! - `determiner`: 관형사형 (과거/현재/미래)
//! - `noun`: 명사형 (-음/-기)

pub mod connective;
pub mod determiner;
pub mod noun;
pub mod sentence_final;

pub use connective::{condition, conjunction, connective, contrast, motive, reason, Connective};
pub use determiner::determiner_form;
pub use noun::noun_form;
pub use sentence_final::{assertive, hortative, imperative, indicative, interrogative, sentence_final};

use crate::core::jamo::{FINAL_L, FINAL_P, FINAL_SS};
use crate::error::{ConjugationError, Result};
use crate::stem::{split_last, stem1, stem2};

/// 해요체 어미
pub const POLITE_ENDING: &str = "요";
/// 하십시오체 선어말 어미
pub const FORMAL_POLITE_INFIX: &str = "습니";
/// 하십시오체 의문 어미
pub const FORMAL_QUESTION_ENDING: &str = "까";

/// 하십시오체 어근 (-습니- / -ㅂ니-)
///
/// ㄹ 이외의 받침이 있으면 `습니`, 열린 음절이나 ㄹ 받침이면
/// 받침을 ㅂ 으로 바꾸고 `니` (가다 → 갑니, 열다 → 엽니)
pub fn formal_polite_root(word: &str) -> Result<String> {
    p_infix_root(stem1(word)?, FORMAL_POLITE_INFIX, "니")
}

/// ㅂ 계열 선어말 어미 결합
///
/// ㄹ 이외의 받침 뒤에는 `closed_infix`, 열린 음절이나 ㄹ 받침은
/// 받침을 ㅂ 으로 바꾸고 `open_infix` (습니/니, 읍시/시)
pub(crate) fn p_infix_root(stem: &str, closed_infix: &str, open_infix: &str) -> Result<String> {
    let (prefix, _, letters) = split_last(stem)?;
    if letters.is_closed() && !letters.has_final(FINAL_L) {
        Ok(format!("{stem}{closed_infix}"))
    } else {
        Ok(format!("{prefix}{}{open_infix}", letters.with_final(Some(FINAL_P))?))
    }
}

/// 과거 어간: 어간2 마지막 음절에 ㅆ 받침
///
/// 어간2가 받침 있는 음절로 끝나면 과거 표지를 붙일 수 없으므로 `InvalidWord`.
pub fn past_stem(word: &str, irregular: bool) -> Result<String> {
    let stem2 = stem2(word, irregular)?;
    let (prefix, _, letters) = split_last(&stem2)?;
    if letters.is_closed() {
        return Err(ConjugationError::InvalidWord(word.to_string()));
    }
    Ok(format!("{prefix}{}", letters.with_final(Some(FINAL_SS))?))
}
