//! 한국어 동사/형용사 활용기
//!
//! 기본형(-다)에서 어간을 도출하고, 규칙/불규칙 활용을 적용해
//! 종결형, 연결형, 관형사형, 명사형을 만듭니다.
//!
//! ```
//! use hwalyong::{indicative, Formality, Politeness, Tense};
//!
//! let form = indicative("가다", true, false, Tense::Past, Formality::Formal, Politeness::Polite);
//! assert_eq!(form.unwrap(), "갔습니다");
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod forms;
pub mod grammar;
pub mod paradigm;
pub mod stem;

pub use error::{CodecError, ConjugationError, Result};
pub use forms::{
    assertive, condition, conjunction, connective, contrast, determiner_form, formal_polite_root,
    hortative, imperative, indicative, interrogative, motive, noun_form, past_stem, reason,
    sentence_final, Connective,
};
pub use grammar::{DeterminerTense, Formality, Mood, NounTense, Politeness, Tense};
pub use paradigm::Paradigm;
pub use stem::{honorific_stem, stem1, stem1_to_stem2, stem1_to_stem3, stem2, stem3};
