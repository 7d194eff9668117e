use crate::CodeStoreError;

/// Content that can be appended to a [`crate::CodeStore`].
///
/// `None` entries in a list, and [`Content::Skip`] itself, append nothing. They exist so
/// callers can build line lists with optional parts without filtering them first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Line(String),
    Lines(Vec<Option<String>>),
    Skip,
}

impl Content {
    pub(crate) fn into_lines(self) -> Vec<String> {
        match self {
            Content::Line(line) => vec![line],
            Content::Lines(lines) => lines.into_iter().flatten().collect(),
            Content::Skip => Vec::new(),
        }
    }
}

impl From<&str> for Content {
    fn from(line: &str) -> Self {
        Content::Line(line.to_string())
    }
}

impl From<String> for Content {
    fn from(line: String) -> Self {
        Content::Line(line)
    }
}

impl From<Option<&str>> for Content {
    fn from(line: Option<&str>) -> Self {
        line.map_or(Content::Skip, Content::from)
    }
}

impl From<Option<String>> for Content {
    fn from(line: Option<String>) -> Self {
        line.map_or(Content::Skip, Content::Line)
    }
}

impl From<&[&str]> for Content {
    fn from(lines: &[&str]) -> Self {
        Content::Lines(lines.iter().map(|line| Some(line.to_string())).collect())
    }
}

impl From<Vec<&str>> for Content {
    fn from(lines: Vec<&str>) -> Self {
        Content::from(lines.as_slice())
    }
}

impl From<Vec<String>> for Content {
    fn from(lines: Vec<String>) -> Self {
        Content::Lines(lines.into_iter().map(Some).collect())
    }
}

impl From<Vec<Option<&str>>> for Content {
    fn from(lines: Vec<Option<&str>>) -> Self {
        Content::Lines(
            lines
                .into_iter()
                .map(|line| line.map(str::to_string))
                .collect(),
        )
    }
}

impl From<Vec<Option<String>>> for Content {
    fn from(lines: Vec<Option<String>>) -> Self {
        Content::Lines(lines)
    }
}

impl TryFrom<serde_json::Value> for Content {
    type Error = CodeStoreError;

    /// Accepts a string, `null`, or an array of strings and `null`s. The whole value is
    /// checked before anything is returned, so a rejected value appends nothing.
    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::String(line) => Ok(Content::Line(line)),
            serde_json::Value::Null => Ok(Content::Skip),
            serde_json::Value::Array(values) => values
                .into_iter()
                .enumerate()
                .map(|(index, value)| match value {
                    serde_json::Value::String(line) => Ok(Some(line)),
                    serde_json::Value::Null => Ok(None),
                    other => Err(CodeStoreError::InvalidInput(format!(
                        "Element {} is {}, expected a string or null",
                        index,
                        kind(&other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()
                .map(Content::Lines),
            other => Err(CodeStoreError::InvalidInput(format!(
                "Got {}, expected a string, an array or null",
                kind(&other)
            ))),
        }
    }
}

fn kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}
