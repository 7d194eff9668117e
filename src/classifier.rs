use crate::Directive;

/// Maps the content of a line to the indentation directive for that line.
///
/// Classifiers see the stored content of a line, which may carry leading or trailing
/// whitespace when appended untrimmed, and should trim it before comparing.
pub trait Classifier {
    fn classify(&self, line: &str) -> Directive;
}

impl<F> Classifier for F
where
    F: Fn(&str) -> Directive,
{
    fn classify(&self, line: &str) -> Directive {
        self(line)
    }
}

/// The small marker vocabulary used to exercise the indentation engine.
///
/// | Line            | Directive                                |
/// |-----------------|------------------------------------------|
/// | `BEGIN`         | increment before                         |
/// | `begin`         | increment after                          |
/// | `end`           | decrement before                         |
/// | `END`           | decrement after                          |
/// | `middle`        | decrement before, increment after        |
/// | `MIDDLE`        | increment before, decrement after        |
/// | `end-end`       | decrement twice before                   |
/// | `heredoc-start` | following lines are verbatim             |
/// | `heredoc-end`   | last verbatim line                       |
#[derive(Debug, Default, Clone, Copy)]
pub struct ReferenceMarkers;

impl Classifier for ReferenceMarkers {
    fn classify(&self, line: &str) -> Directive {
        match line.trim() {
            "BEGIN" => Directive::INCREMENT_BEFORE,
            "begin" => Directive::INCREMENT_AFTER,
            "end" => Directive::DECREMENT_BEFORE,
            "END" => Directive::DECREMENT_AFTER,
            "middle" => Directive::INCREMENT_AFTER | Directive::DECREMENT_BEFORE,
            "MIDDLE" => Directive::INCREMENT_BEFORE | Directive::DECREMENT_AFTER,
            "end-end" => Directive::DECREMENT_BEFORE_DOUBLE,
            "heredoc-start" => Directive::VERBATIM_START,
            "heredoc-end" => Directive::VERBATIM_END,
            _ => Directive::empty(),
        }
    }
}

/// A regex pattern and the directive given to lines matching it.
#[derive(Debug, Clone)]
pub struct Rule {
    regex: regex::Regex,
    directive: Directive,
}

impl Rule {
    /// Creates a rule. The pattern must match the entire trimmed line.
    pub fn new(pattern: &str, directive: Directive) -> crate::Result<Self> {
        Ok(Self {
            regex: regex::Regex::new(&format!("^(?:{pattern})$")).map_err(|err| {
                crate::CodeStoreError::InvalidRule(format!(
                    "Invalid regex in rule: {}",
                    err
                ))
            })?,
            directive,
        })
    }

    /// Parses a rule written as `<regex>=<directives>`, e.g., `.*\{=increment-after`.
    /// The text is split at the last `=`, so the regex may contain `=` itself.
    pub fn from_rule_string(rule: &str) -> crate::Result<Self> {
        let Some((pattern, directive)) = rule.rsplit_once('=') else {
            return Err(crate::CodeStoreError::InvalidRule(format!(
                "Got {}, but expected <regex>=<directives>",
                rule
            )));
        };
        Self::new(pattern, directive.parse()?)
    }

    fn matches(&self, line: &str) -> bool {
        self.regex.is_match(line)
    }
}

/// Classifies lines by an ordered list of regex rules, where the first matching rule
/// decides the directive. Lines matching no rule get an empty directive.
#[derive(Debug, Clone, Default)]
pub struct RuleClassifier {
    rules: Vec<Rule>,
}

impl RuleClassifier {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn from_rule_strings<S: AsRef<str>>(rules: &[S]) -> crate::Result<Self> {
        rules
            .iter()
            .map(|rule| Rule::from_rule_string(rule.as_ref()))
            .collect::<crate::Result<Vec<_>>>()
            .map(Self::new)
    }
}

impl Classifier for RuleClassifier {
    fn classify(&self, line: &str) -> Directive {
        let line = line.trim();
        self.rules
            .iter()
            .find(|rule| rule.matches(line))
            .map_or(Directive::empty(), |rule| rule.directive)
    }
}
