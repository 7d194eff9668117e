mod args;

use anyhow::Context;
use codestore::{CodeStore, Config, ReferenceMarkers, RuleClassifier};
use std::io::Read;

fn main() -> anyhow::Result<()> {
    let arguments = args::arguments();

    let mut store = create_store(&arguments)?;
    for (name, content) in inputs(&arguments)? {
        if arguments.json {
            let value = serde_json::from_str(&content)
                .with_context(|| format!("Could not parse JSON from {}", name))?;
            store
                .append_value(value, !arguments.no_trim)
                .with_context(|| format!("Could not append code from {}", name))?;
        } else {
            append_text(&mut store, &arguments, &content);
        }
    }

    let code = store.code();
    if let Some(output_file) = &arguments.output_file {
        std::fs::write(output_file, code).with_context(|| {
            format!("Could not write code to file {}", output_file.display())
        })?;
    } else {
        print!("{}", code);
    }

    Ok(())
}

fn create_store(arguments: &args::Arguments) -> anyhow::Result<CodeStore> {
    let config = Config {
        indentation: arguments.indentation,
        separator_width: arguments.separator_width,
        comment_marker: arguments.comment_marker.clone(),
    };
    let store = if arguments.rules.is_empty() {
        CodeStore::with_config(ReferenceMarkers, config)
    } else {
        let classifier = RuleClassifier::from_rule_strings(&arguments.rules)
            .context("Could not create indentation rules")?;
        CodeStore::with_config(classifier, config)
    };

    Ok(if !arguments.verbose {
        store
    } else if arguments.output_file.is_some() {
        store.log_to(Box::new(std::io::stdout()))
    } else {
        store.log_to(Box::new(std::io::stderr()))
    })
}

// Reads the content of all source files, or stdin if there are none, paired with a name
// for error messages
fn inputs(arguments: &args::Arguments) -> anyhow::Result<Vec<(String, String)>> {
    if arguments.source_files.is_empty() {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        return Ok(vec![("stdin".to_string(), content)]);
    }

    arguments
        .source_files
        .iter()
        .map(|file| {
            std::fs::read_to_string(file)
                .map(|content| (file.display().to_string(), content))
                .with_context(|| format!("Could not read file {}", file.display()))
        })
        .collect()
}

fn append_text(store: &mut CodeStore, arguments: &args::Arguments, content: &str) {
    for line in content.lines() {
        if arguments
            .separator_token
            .as_deref()
            .is_some_and(|token| line.trim() == token)
        {
            store.append_separator();
        } else if arguments.no_trim {
            store.append_untrimmed(line);
        } else {
            store.append(line);
        }
    }
}
