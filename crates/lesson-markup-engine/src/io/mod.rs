use crate::models::Lesson;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LessonError {
    #[error("Lesson file not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse lesson file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("Invalid lessons directory: {0}")]
    InvalidLessonsDir(String),
}

/// File extension of lesson files.
pub const LESSON_EXTENSION: &str = "toml";

/// Parse lesson TOML. `path` is only used for error reporting.
pub fn parse_lesson(content: &str, path: &Path) -> Result<Lesson, LessonError> {
    toml::from_str(content).map_err(|source| LessonError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Read and parse a lesson file
pub fn load_lesson(path: &Path) -> Result<Lesson, LessonError> {
    if !path.exists() {
        return Err(LessonError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path)?;
    let lesson = parse_lesson(&content, path)?;
    log::debug!(
        "loaded lesson {:?} from {} with {} explanation(s)",
        lesson.title,
        path.display(),
        lesson.explanations.len()
    );
    Ok(lesson)
}

/// Scan for lesson files in the lessons directory, sorted by path
pub fn scan_lesson_files(lessons_root: &Path) -> Result<Vec<PathBuf>, LessonError> {
    if !lessons_root.is_dir() {
        return Err(LessonError::InvalidLessonsDir(format!(
            "{} is not a directory",
            lessons_root.display()
        )));
    }

    let mut files = Vec::new();
    scan_directory_recursive(lessons_root, &mut files)?;
    files.sort();
    Ok(files)
}

fn scan_directory_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), LessonError> {
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            scan_directory_recursive(&path, files)?;
        } else if let Some(ext) = path.extension()
            && ext == LESSON_EXTENSION
        {
            files.push(path);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExplanationContent, Section};
    use crate::parsing::{Content, RenderNode};
    use tempfile::TempDir;

    const LESSON: &str = r#"
title = "Breadth-First Search"

[sections]
problem = "Find the shortest path in an unweighted graph."
algorithm = """
**Approach**
Use BFS with a queue.
"""

[[explanations]]
trigger = "BFS"
section = "algorithm"
content = "Breadth-first search."

[[explanations]]
trigger = "queue"
section = "algorithm"

[[explanations.content]]
type = "paragraph"
spans = [{ type = "text", value = "First in, first out." }]
"#;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_lesson_from_file() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "bfs.toml", LESSON);

        let lesson = load_lesson(&path).unwrap();

        assert_eq!(lesson.title, "Breadth-First Search");
        assert!(matches!(lesson.sections.problem, Some(Content::Raw(_))));
        assert!(lesson.sections.solution.is_none());
        assert_eq!(lesson.explanations.len(), 2);
        assert_eq!(lesson.explanations[0].section, Section::Algorithm);
        assert!(matches!(
            &lesson.explanations[1].content,
            ExplanationContent::Rich(nodes) if matches!(nodes[0], RenderNode::Paragraph { .. })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load_lesson(Path::new("/this/path/does/not/exist.toml")).unwrap_err();
        assert!(matches!(err, LessonError::NotFound(_)));
    }

    #[test]
    fn invalid_toml_reports_path() {
        let err = parse_lesson("title = ", Path::new("broken.toml")).unwrap_err();
        assert!(matches!(&err, LessonError::Parse { path, .. } if path == Path::new("broken.toml")));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn scan_finds_nested_lesson_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "graphs/bfs.toml", LESSON);
        write(&dir, "trees/path-sum.toml", LESSON);
        write(&dir, "notes.md", "not a lesson");

        let files = scan_lesson_files(dir.path()).unwrap();

        assert_eq!(files.len(), 2);
        assert!(files[0].ends_with("graphs/bfs.toml"));
        assert!(files[1].ends_with("trees/path-sum.toml"));
    }

    #[test]
    fn scan_rejects_missing_directory() {
        let err = scan_lesson_files(Path::new("/this/path/does/not/exist")).unwrap_err();
        assert!(matches!(err, LessonError::InvalidLessonsDir(_)));
    }
}
