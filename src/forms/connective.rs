//! 연결형
//!
//! 연결형은 하나를 고르지 않고, 모두 문법적으로 맞는 대안 목록을 돌려줍니다.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::Result;
use crate::stem::{stem1, stem2, stem3};

/// 연결 어미의 의미 부류
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Connective {
    /// 이유 (-아서, -니까)
    Reason,
    /// 대조 (-지만, -는데)
    Contrast,
    /// 나열 (-고)
    Conjunction,
    /// 조건 (-면, -아야)
    Condition,
    /// 의도 (-려고)
    Motive,
}

impl Connective {
    pub const ALL: [Connective; 5] = [
        Connective::Reason,
        Connective::Contrast,
        Connective::Conjunction,
        Connective::Condition,
        Connective::Motive,
    ];
}

impl fmt::Display for Connective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Connective::Reason => "이유",
            Connective::Contrast => "대조",
            Connective::Conjunction => "나열",
            Connective::Condition => "조건",
            Connective::Motive => "의도",
        })
    }
}

/// 이유: 가, 가서, 가니, 가니까
pub fn reason(word: &str, is_irregular: bool) -> Result<Vec<String>> {
    let stem2 = stem2(word, is_irregular)?;
    let stem3 = stem3(word, is_irregular)?;
    Ok(vec![
        stem2.clone(),
        format!("{stem2}서"),
        format!("{stem3}니"),
        format!("{stem3}니까"),
    ])
}

/// 대조: 가지만, 가는데, 가더니
pub fn contrast(word: &str, _is_irregular: bool) -> Result<Vec<String>> {
    let stem1 = stem1(word)?;
    Ok(vec![
        format!("{stem1}지만"),
        format!("{stem1}는데"),
        format!("{stem1}더니"),
    ])
}

/// 나열: 가고
pub fn conjunction(word: &str, _is_irregular: bool) -> Result<Vec<String>> {
    Ok(vec![format!("{}고", stem1(word)?)])
}

/// 조건: 가면, 가야
pub fn condition(word: &str, is_irregular: bool) -> Result<Vec<String>> {
    Ok(vec![
        format!("{}면", stem3(word, is_irregular)?),
        format!("{}야", stem2(word, is_irregular)?),
    ])
}

/// 의도: 가려고
pub fn motive(word: &str, is_irregular: bool) -> Result<Vec<String>> {
    Ok(vec![format!("{}려고", stem3(word, is_irregular)?)])
}

/// 부류별 연결형 분기
pub fn connective(kind: Connective, word: &str, is_irregular: bool) -> Result<Vec<String>> {
    match kind {
        Connective::Reason => reason(word, is_irregular),
        Connective::Contrast => contrast(word, is_irregular),
        Connective::Conjunction => conjunction(word, is_irregular),
        Connective::Condition => condition(word, is_irregular),
        Connective::Motive => motive(word, is_irregular),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason() {
        assert_eq!(reason("가다", false).unwrap(), ["가", "가서", "가니", "가니까"]);
        assert_eq!(reason("먹다", false).unwrap(), ["먹어", "먹어서", "먹으니", "먹으니까"]);
        assert_eq!(reason("걷다", true).unwrap(), ["걸어", "걸어서", "걸으니", "걸으니까"]);
    }

    #[test]
    fn test_contrast_and_conjunction() {
        assert_eq!(contrast("먹다", false).unwrap(), ["먹지만", "먹는데", "먹더니"]);
        assert_eq!(conjunction("먹다", false).unwrap(), ["먹고"]);
    }

    #[test]
    fn test_condition_and_motive() {
        assert_eq!(condition("가다", false).unwrap(), ["가면", "가야"]);
        assert_eq!(condition("돕다", true).unwrap(), ["도우면", "도와야"]);
        assert_eq!(motive("먹다", false).unwrap(), ["먹으려고"]);
        assert_eq!(motive("살다", true).unwrap(), ["사려고"]);
    }

    #[test]
    fn test_connective_dispatch() {
        assert_eq!(connective(Connective::Conjunction, "가다", false).unwrap(), ["가고"]);
        // 어간3 불규칙 규칙이 없는 ㅎ 불규칙은 이유형을 만들 수 없음
        assert!(connective(Connective::Reason, "노랗다", true).is_err());
    }
}
