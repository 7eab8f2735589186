//! Reading & writing lesson rendering

use super::{or, Block, DetailView};
use crate::content::model::{Lesson, QaItem, ScriptStep, Section, WorkedExample};

pub const TITLE_FALLBACK: &str = "Lesson";
const EXAM_FALLBACK: &str = "SAT R&W";

/// A multiple-choice question as a card
pub fn qa_block(item: &QaItem) -> Block {
    let mut children = vec![Block::Question(or(&item.question, "Question"))];
    children.extend(
        item.options
            .iter()
            .map(|(key, text)| Block::Text(format!("{}. {}", key, text))),
    );
    if let Some(answer) = &item.correct_answer {
        children.push(Block::Pill(format!("Answer: {}", answer)));
    }
    Block::Card(children)
}

fn script_step(step: &ScriptStep) -> Block {
    Block::Step {
        kind: or(&step.kind, "step"),
        text: format!(
            "{} min - {}",
            or(&step.duration_min, "0"),
            or(&step.script, "")
        ),
    }
}

fn worked_example(we: &WorkedExample) -> Block {
    Block::Card(vec![
        Block::Pill("Worked Example".to_string()),
        Block::Text(or(&we.passage, "")),
        qa_block(&we.qa),
    ])
}

fn section_blocks(section: &Section) -> Vec<Block> {
    let mut blocks = vec![
        Block::Heading(or(&section.title, "Section")),
        Block::Pill(format!("~{} min", or(&section.time_suggested_minutes, "0"))),
        Block::Label("Objectives".to_string()),
        Block::Bullets(section.objectives.clone()),
        Block::Label("Lecture Script".to_string()),
        Block::Card(section.lecture_script.iter().map(script_step).collect()),
        Block::Label("Content".to_string()),
    ];

    if let Some(content) = &section.content {
        if let Some(we) = &content.worked_example {
            blocks.push(worked_example(we));
        }
        if let Some(set) = &content.practice_set {
            blocks.push(Block::Grid(set.iter().map(qa_block).collect()));
        }
    }
    blocks
}

/// Build the detail view for one lesson document
pub fn render_lesson(lesson: &Lesson) -> DetailView {
    let notes = lesson.teacher_notes.clone().unwrap_or_default();
    let mut body = vec![
        Block::Card(vec![
            Block::Pill("Teacher Notes".to_string()),
            Block::Text(format!("Pacing: {}", or(&notes.pacing, ""))),
            Block::Text(format!("Materials: {}", or(&notes.materials, ""))),
            Block::Text(format!("Assessment: {}", or(&notes.assessment, ""))),
        ]),
        Block::Card(vec![
            Block::Pill("Learning Objectives".to_string()),
            Block::Bullets(lesson.learning_objectives.clone()),
        ]),
    ];

    for section in &lesson.structure {
        body.extend(section_blocks(section));
    }

    if let Some(check) = &lesson.unit_check {
        body.push(Block::Heading("Unit Check".to_string()));
        body.push(Block::Grid(check.iter().map(qa_block).collect()));
    }

    if let Some(homework) = &lesson.homework {
        body.push(Block::Heading("Homework".to_string()));
        body.push(Block::Bullets(homework.clone()));
    }

    DetailView {
        title: or(&lesson.unit_title, TITLE_FALLBACK),
        meta: vec![
            or(&lesson.target_exam, EXAM_FALLBACK),
            format!("Mastery: {}", or(&lesson.total_mastery_points, "0")),
        ],
        body,
    }
}
