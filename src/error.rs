//! 활용 에러 정의

use crate::grammar::{Formality, Mood, Politeness, Tense};

/// 음절 코덱 에러
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    /// 완성형 한글 음절이 아님
    #[error("완성형 한글 음절이 아닙니다: {0:?}")]
    NotSyllable(char),
    /// 음절로 조합할 수 없는 자모
    #[error("음절로 조합할 수 없는 자모입니다: {initial:?} + {vowel:?} + {final_consonant:?}")]
    InvalidLetters {
        initial: char,
        vowel: char,
        final_consonant: Option<char>,
    },
}

/// 활용 에러
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConjugationError {
    /// 기본형(-다)이 아니거나 너무 짧은 입력
    #[error("{0}: 동사나 형용사의 기본형이 아닙니다")]
    InvalidWord(String),
    /// 이 형태에는 요청한 불규칙 규칙을 적용할 수 없음
    #[error("{word}: {rule} 규칙을 적용할 수 없습니다")]
    IrregularNotApplicable { word: String, rule: &'static str },
    /// 서법에 없는 시제/격식/높임 조합
    #[error("{mood}의 {tense}/{formality}/{politeness} 활용형은 없습니다")]
    FormNotImplemented {
        mood: Mood,
        tense: Tense,
        formality: Formality,
        politeness: Politeness,
    },
    /// 음절 조합/분해 실패
    #[error(transparent)]
    Codec(#[from] CodecError),
}

pub type Result<T> = std::result::Result<T, ConjugationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let e = ConjugationError::InvalidWord("가".into());
        assert_eq!(e.to_string(), "가: 동사나 형용사의 기본형이 아닙니다");

        let e = ConjugationError::FormNotImplemented {
            mood: Mood::Imperative,
            tense: Tense::Past,
            formality: Formality::Formal,
            politeness: Politeness::Polite,
        };
        assert_eq!(e.to_string(), "명령형의 과거/격식/높임 활용형은 없습니다");
    }

    #[test]
    fn test_codec_error_is_transparent() {
        let e: ConjugationError = CodecError::NotSyllable('a').into();
        assert_eq!(e.to_string(), CodecError::NotSyllable('a').to_string());
    }
}
