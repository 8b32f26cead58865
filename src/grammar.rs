//! 활용형을 고르는 문법 범주
//!
//! 종결형은 시제 × 격식 × 높임의 2×2×2 조합 중 한 칸으로 결정된다.
//!
//! | 격식 \ 높임 | 높임          | 안높임      |
//! |-------------|---------------|-------------|
//! | 격식        | 하십시오체    | 해라체      |
//! | 비격식      | 해요체        | 해체        |

use serde::{Deserialize, Serialize};
use std::fmt;

/// 시제
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tense {
    NonPast,
    Past,
}

/// 격식
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formality {
    Formal,
    Informal,
}

/// 높임
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Politeness {
    Polite,
    NonPolite,
}

/// 종결 서법
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    /// 평서형
    Indicative,
    /// 의문형
    Interrogative,
    /// 추측형 (-겠-)
    Assertive,
    /// 명령형
    Imperative,
    /// 청유형
    Hortative,
}

/// 관형사형 시제
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeterminerTense {
    Past,
    Present,
    Future,
}

/// 명사형 시제
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NounTense {
    Present,
    Past,
}

impl Tense {
    pub const ALL: [Tense; 2] = [Tense::NonPast, Tense::Past];
}

impl Formality {
    pub const ALL: [Formality; 2] = [Formality::Formal, Formality::Informal];
}

impl Politeness {
    pub const ALL: [Politeness; 2] = [Politeness::Polite, Politeness::NonPolite];
}

impl Mood {
    pub const ALL: [Mood; 5] = [
        Mood::Indicative,
        Mood::Interrogative,
        Mood::Assertive,
        Mood::Imperative,
        Mood::Hortative,
    ];
}

impl DeterminerTense {
    pub const ALL: [DeterminerTense; 3] = [
        DeterminerTense::Past,
        DeterminerTense::Present,
        DeterminerTense::Future,
    ];
}

impl NounTense {
    pub const ALL: [NounTense; 2] = [NounTense::Present, NounTense::Past];
}

/// 격식/높임 조합의 전통적인 문체 이름
pub fn speech_level(formality: Formality, politeness: Politeness) -> &'static str {
    match (formality, politeness) {
        (Formality::Formal, Politeness::Polite) => "하십시오체",
        (Formality::Formal, Politeness::NonPolite) => "해라체",
        (Formality::Informal, Politeness::Polite) => "해요체",
        (Formality::Informal, Politeness::NonPolite) => "해체",
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Tense::NonPast => "현재",
            Tense::Past => "과거",
        })
    }
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Formality::Formal => "격식",
            Formality::Informal => "비격식",
        })
    }
}

impl fmt::Display for Politeness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Politeness::Polite => "높임",
            Politeness::NonPolite => "안높임",
        })
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mood::Indicative => "평서형",
            Mood::Interrogative => "의문형",
            Mood::Assertive => "추측형",
            Mood::Imperative => "명령형",
            Mood::Hortative => "청유형",
        })
    }
}

impl fmt::Display for DeterminerTense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeterminerTense::Past => "과거",
            DeterminerTense::Present => "현재",
            DeterminerTense::Future => "미래",
        })
    }
}

impl fmt::Display for NounTense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NounTense::Present => "현재",
            NounTense::Past => "과거",
        })
    }
}
