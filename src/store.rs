use crate::render::{self, Line, LineKind};
use crate::{Classifier, CodeStoreError, Content, log};

/// Default number of spaces per indentation level.
pub const DEFAULT_INDENTATION: usize = 2;

/// Default width of separator lines, including their indentation.
pub const DEFAULT_SEPARATOR_WIDTH: usize = 15;

/// Settings fixed when a [`CodeStore`] is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Number of spaces per indentation level.
    pub indentation: usize,
    /// Total width of separator lines, indentation included.
    pub separator_width: usize,
    /// Text starting a separator line, i.e., a line comment in the generated language.
    pub comment_marker: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indentation: DEFAULT_INDENTATION,
            separator_width: DEFAULT_SEPARATOR_WIDTH,
            comment_marker: "#".to_string(),
        }
    }
}

impl Config {
    // Separator text filling up the separator width after `indent` spaces
    pub(crate) fn separator(&self, indent: usize) -> String {
        let dashes = self
            .separator_width
            .saturating_sub(indent + self.comment_marker.chars().count());
        format!("{}{}", self.comment_marker, "-".repeat(dashes))
    }
}

/// Buffer for generated code. Lines are appended one or many at a time, and indentation
/// is added when the code is retrieved, based on what the classifier says about each line.
///
/// ```
/// use codestore::{CodeStore, ReferenceMarkers};
///
/// let mut store = CodeStore::new(ReferenceMarkers);
/// store.append(vec!["begin", "statement", "end"]);
/// assert_eq!(store.code(), "begin\n  statement\nend\n");
/// ```
///
/// A store is meant to be used from a single thread.
pub struct CodeStore {
    lines: Vec<Line>,
    classifier: Box<dyn Classifier>,
    config: Config,
    log: Option<log::Logger>,
}

impl std::fmt::Debug for CodeStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodeStore")
            .field("lines", &self.lines)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CodeStore {
    pub fn new(classifier: impl Classifier + 'static) -> Self {
        Self::with_config(classifier, Config::default())
    }

    pub fn with_config(classifier: impl Classifier + 'static, config: Config) -> Self {
        Self {
            lines: Vec::new(),
            classifier: Box::new(classifier),
            config,
            log: None,
        }
    }

    /// Writes a trace of indentation decisions to `write` every time code is rendered.
    pub fn log_to(mut self, write: Box<dyn std::io::Write>) -> Self {
        self.log = Some(log::Logger::new(write));
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Appends a line or lines of code, trimmed of surrounding whitespace. Skipped
    /// entries are ignored.
    pub fn append(&mut self, content: impl Into<Content>) {
        self.append_lines(content.into(), true);
    }

    /// Appends a line or lines of code as is, keeping surrounding whitespace.
    pub fn append_untrimmed(&mut self, content: impl Into<Content>) {
        self.append_lines(content.into(), false);
    }

    /// Appends content of a dynamic type, which must be a string, an array of strings and
    /// nulls, or null. Otherwise nothing is appended and an error is returned.
    pub fn append_value(&mut self, value: serde_json::Value, trim: bool) -> crate::Result<()> {
        let content = Content::try_from(value)?;
        self.append_lines(content, trim);
        Ok(())
    }

    /// Appends a separator line, a comment filled up with dashes to the separator width.
    pub fn append_separator(&mut self) {
        self.lines.push(Line::separator(&self.config));
    }

    /// Appends a piece of code to the last line. The line's indentation is still decided
    /// from its content at the time code is rendered.
    pub fn append_to_last_line(&mut self, part: &str) -> crate::Result<()> {
        let line = self.lines.last_mut().ok_or(CodeStoreError::EmptyState)?;
        line.content.push_str(part);
        line.kind = LineKind::Code;
        Ok(())
    }

    /// Removes all code.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns the generated code with indentation, each line terminated by a newline.
    /// Returns an empty string when there is no code.
    pub fn code(&self) -> String {
        render::render(&self.lines, self.classifier.as_ref(), &self.config, &self.log)
    }

    /// Returns the lines as appended, without indentation.
    pub fn lines(&self) -> Vec<&str> {
        self.lines.iter().map(|line| line.content.as_str()).collect()
    }

    pub fn last_line(&self) -> crate::Result<&str> {
        self.lines
            .last()
            .map(|line| line.content.as_str())
            .ok_or(CodeStoreError::EmptyState)
    }

    fn append_lines(&mut self, content: Content, trim: bool) {
        self.lines.extend(content.into_lines().into_iter().map(|line| {
            if trim {
                Line::code(line.trim().to_string())
            } else {
                Line::code(line)
            }
        }));
    }
}
