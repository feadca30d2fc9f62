use serde::{Deserialize, Serialize};

use crate::parsing::{
    Content, Dialect, ParseContext, ParseOptions, RenderNode, render_content,
};

use super::explanation::{ExplanationEntry, Section};

/// The four section bodies of a lesson. Any of them may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LessonSections {
    pub problem: Option<Content>,
    pub algorithm: Option<Content>,
    pub solution: Option<Content>,
    pub improvements: Option<Content>,
}

impl LessonSections {
    pub fn get(&self, section: Section) -> Option<&Content> {
        match section {
            Section::Problem => self.problem.as_ref(),
            Section::Algorithm => self.algorithm.as_ref(),
            Section::Solution => self.solution.as_ref(),
            Section::Improvements => self.improvements.as_ref(),
        }
    }
}

/// A lesson: its section texts plus the explanation table shared by all sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lesson {
    pub title: String,
    #[serde(default)]
    pub sections: LessonSections,
    #[serde(default)]
    pub explanations: Vec<ExplanationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedSection {
    pub section: Section,
    pub nodes: Vec<RenderNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedLesson {
    pub title: String,
    pub sections: Vec<RenderedSection>,
}

impl Lesson {
    /// Renders one section with the top-level dialect and that section's triggers.
    ///
    /// Returns `None` when the lesson has no content for `section`.
    pub fn render_section(&self, section: Section, options: &ParseOptions) -> Option<Vec<RenderNode>> {
        let content = self.sections.get(section)?;
        let ctx = ParseContext::new(options).with_section(&self.explanations, section);
        Some(render_content(content, &Dialect::TOP_LEVEL, &ctx).into_owned())
    }

    /// Renders every present section in lesson order.
    pub fn render(&self, options: &ParseOptions) -> RenderedLesson {
        let sections = Section::ALL
            .into_iter()
            .filter_map(|section| {
                self.render_section(section, options)
                    .map(|nodes| RenderedSection { section, nodes })
            })
            .collect();

        RenderedLesson {
            title: self.title.clone(),
            sections,
        }
    }
}
