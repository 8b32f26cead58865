//! 한 단어의 전체 활용표
//!
//! 어간, 모든 서법의 종결형, 연결형, 관형사형, 명사형을 한꺼번에 만듭니다.
//! 서법에 없는 칸(과거 명령형 등)은 표에서 빠지고, 규칙이 거부한 항목은
//! 에러 메시지와 함께 남습니다.

use serde::Serialize;
use std::fmt::Write;

use crate::error::{ConjugationError, Result};
use crate::forms::{connective, determiner_form, noun_form, sentence_final, Connective};
use crate::grammar::{
    speech_level, DeterminerTense, Formality, Mood, NounTense, Politeness, Tense,
};
use crate::stem::{honorific_stem, stem1, stem2, stem3};

/// 활용표의 한 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub label: String,
    pub forms: Vec<String>,
    /// 규칙이 이 항목을 만들 수 없을 때의 사유
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Entry {
    fn from_result(label: impl Into<String>, result: Result<Vec<String>>) -> Self {
        let label = label.into();
        match result {
            Ok(forms) => Self {
                label,
                forms,
                error: None,
            },
            Err(e) => {
                log::debug!("{}: {}", label, e);
                Self {
                    label,
                    forms: Vec::new(),
                    error: Some(e.to_string()),
                }
            }
        }
    }

    fn render(&self) -> String {
        match &self.error {
            Some(e) => format!("({})", e),
            None => self.forms.join(", "),
        }
    }
}

/// 종결형 한 칸
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub tense: Tense,
    pub formality: Formality,
    pub politeness: Politeness,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// 한 서법의 종결형 표
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodTable {
    pub mood: Mood,
    pub cells: Vec<Cell>,
}

/// 전체 활용표
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paradigm {
    pub word: String,
    pub is_verb: bool,
    pub is_irregular: bool,
    pub stems: Vec<Entry>,
    pub sentence_final: Vec<MoodTable>,
    pub connective: Vec<Entry>,
    pub determiner: Vec<Entry>,
    pub noun: Vec<Entry>,
}

impl Paradigm {
    /// 활용표 생성
    ///
    /// 기본형이 아니면 바로 `InvalidWord`. 그 밖의 규칙 실패는 해당 항목에만 기록.
    pub fn build(word: &str, is_verb: bool, is_irregular: bool) -> Result<Self> {
        let root = stem1(word)?;

        let stems = vec![
            Entry::from_result("어간1", Ok(vec![root.to_string()])),
            Entry::from_result("어간2", stem2(word, is_irregular).map(|s| vec![s])),
            Entry::from_result("어간3", stem3(word, is_irregular).map(|s| vec![s])),
            Entry::from_result("높임", honorific_stem(word, is_irregular).map(|s| vec![s])),
        ];

        let sentence_final = Mood::ALL
            .iter()
            .map(|&mood| MoodTable {
                mood,
                cells: mood_cells(mood, word, is_verb, is_irregular),
            })
            .collect();

        let connective = Connective::ALL
            .iter()
            .map(|&kind| Entry::from_result(kind.to_string(), connective(kind, word, is_irregular)))
            .collect();

        let determiner = DeterminerTense::ALL
            .iter()
            .map(|&tense| {
                Entry::from_result(
                    tense.to_string(),
                    determiner_form(tense, word, is_irregular).map(|s| vec![s]),
                )
            })
            .collect();

        let noun = NounTense::ALL
            .iter()
            .map(|&tense| Entry::from_result(tense.to_string(), noun_form(tense, word, is_irregular)))
            .collect();

        Ok(Self {
            word: word.to_string(),
            is_verb,
            is_irregular,
            stems,
            sentence_final,
            connective,
            determiner,
            noun,
        })
    }

    /// 특정 서법의 표
    pub fn mood(&self, mood: Mood) -> Option<&MoodTable> {
        self.sentence_final.iter().find(|t| t.mood == mood)
    }

    /// 터미널 출력용 텍스트
    pub fn render_text(&self, show_stems: bool, show_non_finite: bool) -> String {
        let mut out = String::new();
        let kind = if self.is_verb { "동사" } else { "형용사" };
        let irregular = if self.is_irregular { ", 불규칙" } else { "" };
        let _ = writeln!(out, "{} ({}{})", self.word, kind, irregular);

        if show_stems {
            write_section(&mut out, "어간", &self.stems);
        }

        for table in &self.sentence_final {
            let _ = writeln!(out, "\n[{}]", table.mood);
            for cell in &table.cells {
                let value = match (&cell.form, &cell.error) {
                    (Some(form), _) => form.clone(),
                    (None, Some(e)) => format!("({})", e),
                    (None, None) => String::new(),
                };
                let _ = writeln!(
                    out,
                    "  {} {}: {}",
                    cell.tense,
                    speech_level(cell.formality, cell.politeness),
                    value
                );
            }
        }

        if show_non_finite {
            write_section(&mut out, "연결형", &self.connective);
            write_section(&mut out, "관형사형", &self.determiner);
            write_section(&mut out, "명사형", &self.noun);
        }
        out
    }
}

fn write_section(out: &mut String, title: &str, entries: &[Entry]) {
    let _ = writeln!(out, "\n[{}]", title);
    for entry in entries {
        let _ = writeln!(out, "  {}: {}", entry.label, entry.render());
    }
}

/// 서법에 정의된 칸만 모음
fn mood_cells(mood: Mood, word: &str, is_verb: bool, is_irregular: bool) -> Vec<Cell> {
    let mut cells = Vec::new();
    for tense in Tense::ALL {
        for formality in Formality::ALL {
            for politeness in Politeness::ALL {
                let result = sentence_final(mood, word, is_verb, is_irregular, tense, formality, politeness);
                let (form, error) = match result {
                    Ok(form) => (Some(form), None),
                    Err(ConjugationError::FormNotImplemented { .. }) => continue,
                    Err(e) => {
                        log::debug!("{} {} {}/{}/{}: {}", word, mood, tense, formality, politeness, e);
                        (None, Some(e.to_string()))
                    }
                };
                cells.push(Cell {
                    tense,
                    formality,
                    politeness,
                    form,
                    error,
                });
            }
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell<'a>(p: &'a Paradigm, mood: Mood, tense: Tense, f: Formality, po: Politeness) -> Option<&'a Cell> {
        p.mood(mood)?
            .cells
            .iter()
            .find(|c| c.tense == tense && c.formality == f && c.politeness == po)
    }

    #[test]
    fn test_build_regular_verb() {
        let p = Paradigm::build("가다", true, false).unwrap();
        assert_eq!(p.stems[0].forms, ["가"]);
        assert_eq!(p.stems[3].forms, ["가시"]);

        let c = cell(&p, Mood::Indicative, Tense::Past, Formality::Formal, Politeness::Polite).unwrap();
        assert_eq!(c.form.as_deref(), Some("갔습니다"));

        assert_eq!(p.mood(Mood::Indicative).unwrap().cells.len(), 8);
        assert_eq!(p.mood(Mood::Interrogative).unwrap().cells.len(), 8);
    }

    #[test]
    fn test_absent_cells_are_omitted() {
        let p = Paradigm::build("가다", true, false).unwrap();
        for mood in [Mood::Assertive, Mood::Imperative, Mood::Hortative] {
            let table = p.mood(mood).unwrap();
            assert_eq!(table.cells.len(), 4);
            assert!(table.cells.iter().all(|c| c.tense == Tense::NonPast));
        }
    }

    #[test]
    fn test_failing_rule_is_recorded() {
        // ㅎ 불규칙은 어간3이 없으므로 관련 항목만 에러
        let p = Paradigm::build("노랗다", false, true).unwrap();
        assert_eq!(p.stems[1].forms, ["노래"]);
        assert!(p.stems[2].error.is_some());
        assert!(p.connective[0].error.is_some());
        assert_eq!(p.connective[2].forms, ["노랗고"]);
        assert_eq!(p.noun[0].forms, ["노랗음", "노랗기"]);
        assert!(p.noun[0].error.is_none());
    }

    #[test]
    fn test_invalid_word_fails() {
        assert!(matches!(
            Paradigm::build("가", true, false),
            Err(ConjugationError::InvalidWord(_))
        ));
    }

    #[test]
    fn test_render_text() {
        let p = Paradigm::build("먹다", true, false).unwrap();
        let text = p.render_text(true, true);
        assert!(text.starts_with("먹다 (동사)"));
        assert!(text.contains("현재 해라체: 먹는다"));
        assert!(text.contains("이유: 먹어, 먹어서, 먹으니, 먹으니까"));

        let short = p.render_text(false, false);
        assert!(!short.contains("[어간]"));
        assert!(!short.contains("[연결형]"));
    }

    #[test]
    fn test_serialize_json() {
        let p = Paradigm::build("가다", true, false).unwrap();
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["word"], "가다");
        assert_eq!(json["sentence_final"][0]["mood"], "indicative");
        assert!(json["stems"][0].get("error").is_none());
    }
}
