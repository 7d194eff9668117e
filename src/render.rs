use crate::{Classifier, Config, Directive};
use crate::{log, verbose};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LineKind {
    Code,
    // Rendered to fill up the separator width at the line's own indentation
    Separator,
}

// A stored line of code
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Line {
    pub(crate) content: String,
    pub(crate) kind: LineKind,
}

impl Line {
    pub(crate) fn code(content: String) -> Self {
        Self {
            content,
            kind: LineKind::Code,
        }
    }

    pub(crate) fn separator(config: &Config) -> Self {
        Self {
            content: config.separator(0),
            kind: LineKind::Separator,
        }
    }
}

// Running state of one render pass. Never negative, decrements are clamped at zero.
#[derive(Debug, Default)]
struct IndentState {
    level: usize,
    verbatim: bool,
}

impl IndentState {
    fn before(&mut self, directive: Directive) {
        if directive.contains(Directive::INCREMENT_BEFORE) {
            self.level += 1;
        }
        self.level = self.level.saturating_sub(directive.decrements_before());
    }

    fn after(&mut self, directive: Directive) {
        if directive.contains(Directive::INCREMENT_AFTER) {
            self.level += 1;
        }
        if directive.contains(Directive::DECREMENT_AFTER) {
            self.level = self.level.saturating_sub(1);
        }
    }

    fn unindented(&self, directive: Directive) -> bool {
        self.verbatim || directive.intersects(Directive::UNINDENTED | Directive::VERBATIM_END)
    }
}

/// Renders lines with indentation as decided by the classifier. Each line, including the
/// last, is terminated by a newline. No lines give an empty string.
pub(crate) fn render(
    lines: &[Line],
    classifier: &dyn Classifier,
    config: &Config,
    log: &Option<log::Logger>,
) -> String {
    let mut state = IndentState::default();
    let mut output = Vec::with_capacity(lines.len());

    for (index, line) in lines.iter().enumerate() {
        let directive = classifier.classify(&line.content);
        state.before(directive);

        let indent = if state.unindented(directive) {
            0
        } else {
            state.level * config.indentation
        };
        verbose!(
            log,
            "Line {} at level {}, indent {}: {:?}",
            index,
            state.level,
            indent,
            directive
        );
        let text = match line.kind {
            LineKind::Code => line.content.clone(),
            LineKind::Separator => config.separator(indent),
        };
        output.push(format!("{}{}", " ".repeat(indent), text));

        state.after(directive);
        if state.verbatim && directive.contains(Directive::VERBATIM_END) {
            verbose!(log, "Leaving verbatim span at line {}", index);
            state.verbatim = false;
        } else if !state.verbatim && directive.contains(Directive::VERBATIM_START) {
            verbose!(log, "Entering verbatim span after line {}", index);
            state.verbatim = true;
        }
    }

    if output.is_empty() {
        return String::new();
    }
    let mut code = output.join("\n");
    code.push('\n');
    code
}
