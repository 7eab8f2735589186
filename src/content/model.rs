//! Content documents as they arrive over the wire
//!
//! The JSON is authored by hand elsewhere, so nothing here is validated.
//! Every field decodes tolerantly through the [`decode`] helpers: a field that
//! is absent, `null`, empty, `false`, `0`, or of the wrong shape becomes
//! `None` (or an empty list) and the renderer substitutes its fallback text.
//! Only a top level of the wrong shape fails the whole document.

use serde::Deserialize;

/// One selectable entry of `Reading_and_Writing/lessons_manifest.json`
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ManifestEntry {
    #[serde(default, deserialize_with = "decode::text")]
    pub label: Option<String>,
    #[serde(default, deserialize_with = "decode::text")]
    pub file: Option<String>,
}

/// The lesson manifest: a top-level JSON array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LessonManifest(#[serde(deserialize_with = "decode::array")] pub Vec<ManifestEntry>);

/// A structured reading/writing lesson
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Lesson {
    #[serde(default, deserialize_with = "decode::text")]
    pub unit_title: Option<String>,
    #[serde(default, deserialize_with = "decode::text")]
    pub target_exam: Option<String>,
    #[serde(default, deserialize_with = "decode::text")]
    pub total_mastery_points: Option<String>,
    #[serde(default, deserialize_with = "decode::object")]
    pub teacher_notes: Option<TeacherNotes>,
    #[serde(default, deserialize_with = "decode::strings")]
    pub learning_objectives: Vec<String>,
    #[serde(default, deserialize_with = "decode::seq")]
    pub structure: Vec<Section>,
    #[serde(default, deserialize_with = "decode::optional_seq")]
    pub unit_check: Option<Vec<QaItem>>,
    #[serde(default, deserialize_with = "decode::optional_strings")]
    pub homework: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeacherNotes {
    #[serde(default, deserialize_with = "decode::text")]
    pub pacing: Option<String>,
    #[serde(default, deserialize_with = "decode::text")]
    pub materials: Option<String>,
    #[serde(default, deserialize_with = "decode::text")]
    pub assessment: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Section {
    #[serde(default, deserialize_with = "decode::text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "decode::text")]
    pub time_suggested_minutes: Option<String>,
    #[serde(default, deserialize_with = "decode::strings")]
    pub objectives: Vec<String>,
    #[serde(default, deserialize_with = "decode::seq")]
    pub lecture_script: Vec<ScriptStep>,
    #[serde(default, deserialize_with = "decode::object")]
    pub content: Option<SectionContent>,
}

/// One timed step of a section's lecture script
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScriptStep {
    #[serde(rename = "type", default, deserialize_with = "decode::text")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "decode::text")]
    pub duration_min: Option<String>,
    #[serde(default, deserialize_with = "decode::text")]
    pub script: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SectionContent {
    #[serde(default, deserialize_with = "decode::object")]
    pub worked_example: Option<WorkedExample>,
    #[serde(default, deserialize_with = "decode::optional_seq")]
    pub practice_set: Option<Vec<QaItem>>,
}

/// A multiple-choice question
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QaItem {
    #[serde(default, deserialize_with = "decode::text")]
    pub question: Option<String>,
    /// Option letter and text, in document order
    #[serde(default, deserialize_with = "decode::pairs")]
    pub options: Vec<(String, String)>,
    #[serde(default, deserialize_with = "decode::text")]
    pub correct_answer: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkedExample {
    #[serde(default, deserialize_with = "decode::text")]
    pub passage: Option<String>,
    #[serde(flatten)]
    pub qa: QaItem,
}

/// `Math/lectures.json`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LectureManifest {
    #[serde(default, deserialize_with = "decode::seq")]
    pub units: Vec<Unit>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Unit {
    #[serde(rename = "unitTitle", default, deserialize_with = "decode::text")]
    pub unit_title: Option<String>,
    #[serde(default, deserialize_with = "decode::text")]
    pub slug: Option<String>,
    #[serde(default, deserialize_with = "decode::seq")]
    pub lectures: Vec<Lecture>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Lecture {
    #[serde(default, deserialize_with = "decode::text")]
    pub title: Option<String>,
    #[serde(rename = "contentHtml", default, deserialize_with = "decode::text")]
    pub content_html: Option<String>,
}

/// Tolerant field decoders
pub(crate) mod decode {
    use serde::de::{DeserializeOwned, Deserializer, Error};
    use serde::Deserialize;
    use serde_json::Value;

    /// Text of a scalar that counts as present.
    ///
    /// Empty strings, zero, `false`, `null` and containers are absent.
    pub fn scalar(value: &Value) -> Option<String> {
        match value {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            Value::Bool(true) => Some("true".to_string()),
            _ => None,
        }
    }

    /// Text of a list element; unlike [`scalar`], empty and zero survive.
    fn element(value: Value) -> Option<String> {
        match value {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    fn items<T: DeserializeOwned>(values: Vec<Value>) -> Vec<T> {
        values
            .into_iter()
            .filter_map(|v| serde_json::from_value(v).ok())
            .collect()
    }

    pub fn text<'de, D: Deserializer<'de>>(d: D) -> Result<Option<String>, D::Error> {
        Ok(scalar(&Value::deserialize(d)?))
    }

    pub fn object<'de, D, T>(d: D) -> Result<Option<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(d)? {
            v @ Value::Object(_) => Ok(serde_json::from_value(v).ok()),
            _ => Ok(None),
        }
    }

    pub fn seq<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        Ok(optional_seq(d)?.unwrap_or_default())
    }

    /// Like [`seq`], but a top level that is not an array is an error
    pub fn array<'de, D, T>(d: D) -> Result<Vec<T>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(d)? {
            Value::Array(values) => Ok(items(values)),
            other => Err(D::Error::custom(format!(
                "expected a JSON array, found {}",
                kind(&other)
            ))),
        }
    }

    pub fn optional_seq<'de, D, T>(d: D) -> Result<Option<Vec<T>>, D::Error>
    where
        D: Deserializer<'de>,
        T: DeserializeOwned,
    {
        match Value::deserialize(d)? {
            Value::Array(values) => Ok(Some(items(values))),
            _ => Ok(None),
        }
    }

    pub fn strings<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<String>, D::Error> {
        Ok(optional_strings(d)?.unwrap_or_default())
    }

    pub fn optional_strings<'de, D: Deserializer<'de>>(
        d: D,
    ) -> Result<Option<Vec<String>>, D::Error> {
        match Value::deserialize(d)? {
            Value::Array(values) => Ok(Some(values.into_iter().filter_map(element).collect())),
            _ => Ok(None),
        }
    }

    /// Object entries in document order, values rendered as text
    pub fn pairs<'de, D: Deserializer<'de>>(d: D) -> Result<Vec<(String, String)>, D::Error> {
        match Value::deserialize(d)? {
            Value::Object(map) => Ok(map
                .into_iter()
                .map(|(k, v)| {
                    let text = match v {
                        Value::String(s) => s,
                        other => other.to_string(),
                    };
                    (k, text)
                })
                .collect()),
            _ => Ok(Vec::new()),
        }
    }

    fn kind(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Number(_) => "a number",
            Value::String(_) => "a string",
            Value::Array(_) => "an array",
            Value::Object(_) => "an object",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manifest_keeps_entries_in_order() {
        let json = r#"[
            {"label": "Transitions", "file": "transitions.json"},
            {"label": "Boundaries", "file": "boundaries.json"}
        ]"#;
        let manifest: LessonManifest = serde_json::from_str(json).expect("decode");
        let labels: Vec<_> = manifest.0.iter().filter_map(|e| e.label.as_deref()).collect();
        assert_eq!(labels, vec!["Transitions", "Boundaries"]);
    }

    #[test]
    fn test_manifest_must_be_an_array() {
        let result: Result<LessonManifest, _> = serde_json::from_str(r#"{"lessons": []}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_manifest_drops_non_object_entries() {
        let manifest: LessonManifest =
            serde_json::from_str(r#"[{"label": "A", "file": "a.json"}, 7, "x"]"#).expect("decode");
        assert_eq!(manifest.0.len(), 1);
    }

    #[test]
    fn test_falsy_scalars_are_absent() {
        let lesson: Lesson = serde_json::from_str(
            r#"{"unit_title": "", "target_exam": null, "total_mastery_points": 0}"#,
        )
        .expect("decode");
        assert!(lesson.unit_title.is_none());
        assert!(lesson.target_exam.is_none());
        assert!(lesson.total_mastery_points.is_none());
    }

    #[test]
    fn test_numbers_become_text() {
        let lesson: Lesson =
            serde_json::from_str(r#"{"unit_title": 12, "total_mastery_points": 250}"#)
                .expect("decode");
        assert_eq!(lesson.unit_title.as_deref(), Some("12"));
        assert_eq!(lesson.total_mastery_points.as_deref(), Some("250"));
    }

    #[test]
    fn test_wrong_shapes_degrade_to_empty() {
        let lesson: Lesson = serde_json::from_str(
            r#"{"structure": "oops", "learning_objectives": {"a": 1}, "teacher_notes": [1]}"#,
        )
        .expect("decode");
        assert!(lesson.structure.is_empty());
        assert!(lesson.learning_objectives.is_empty());
        assert!(lesson.teacher_notes.is_none());
        assert!(lesson.unit_check.is_none());
        assert!(lesson.homework.is_none());
    }

    #[test]
    fn test_options_keep_document_order() {
        let item: QaItem = serde_json::from_str(
            r#"{"question": "Q?", "options": {"D": "four", "A": "one", "C": 3}}"#,
        )
        .expect("decode");
        assert_eq!(
            item.options,
            vec![
                ("D".to_string(), "four".to_string()),
                ("A".to_string(), "one".to_string()),
                ("C".to_string(), "3".to_string()),
            ]
        );
    }

    #[test]
    fn test_worked_example_carries_question_fields() {
        let we: WorkedExample = serde_json::from_str(
            r#"{"passage": "Read this.", "question": "Which?", "options": {"A": "x"}, "correct_answer": "A"}"#,
        )
        .expect("decode");
        assert_eq!(we.passage.as_deref(), Some("Read this."));
        assert_eq!(we.qa.question.as_deref(), Some("Which?"));
        assert_eq!(we.qa.correct_answer.as_deref(), Some("A"));
        assert_eq!(we.qa.options.len(), 1);
    }

    #[test]
    fn test_script_step_type_field() {
        let step: ScriptStep =
            serde_json::from_str(r#"{"type": "hook", "duration_min": 5, "script": "Ask why."}"#)
                .expect("decode");
        assert_eq!(step.kind.as_deref(), Some("hook"));
        assert_eq!(step.duration_min.as_deref(), Some("5"));
    }

    #[test]
    fn test_lecture_manifest_without_units() {
        let manifest: LectureManifest = serde_json::from_str("{}").expect("decode");
        assert!(manifest.units.is_empty());
    }

    #[test]
    fn test_unit_fields_use_camel_case() {
        let manifest: LectureManifest = serde_json::from_str(
            r#"{"units": [{"unitTitle": "Linear Equations", "slug": "linear", "lectures": [{"title": "Intro", "contentHtml": "<p>x</p>"}]}]}"#,
        )
        .expect("decode");
        let unit = &manifest.units[0];
        assert_eq!(unit.unit_title.as_deref(), Some("Linear Equations"));
        assert_eq!(unit.slug.as_deref(), Some("linear"));
        assert_eq!(unit.lectures[0].content_html.as_deref(), Some("<p>x</p>"));
    }
}
