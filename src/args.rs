use clap::Parser;
use std::path::PathBuf;

/// Indents generated code. Reads lines of code from files, or from stdin if no files are
/// provided, and prints them with indentation decided by marker lines.
#[derive(Parser, Debug)]
#[command(version, about)]
pub(crate) struct Arguments {
    /// Number of spaces per indentation level.
    #[arg(short = 'i', long, default_value_t = codestore::DEFAULT_INDENTATION)]
    pub(crate) indentation: usize,

    /// Total width of separator lines, including their indentation.
    #[arg(short = 'w', long, default_value_t = codestore::DEFAULT_SEPARATOR_WIDTH)]
    pub(crate) separator_width: usize,

    /// Line comment marker starting separator lines.
    #[arg(long, default_value = "#")]
    pub(crate) comment_marker: String,

    /// Input lines equal to this token, after trimming, are replaced by separator lines.
    #[arg(long, value_name = "TOKEN")]
    pub(crate) separator_token: Option<String>,

    /// Keeps leading and trailing whitespace of input lines.
    #[arg(long)]
    pub(crate) no_trim: bool,

    /// An indentation rule, <regex>=<directives>, where the regex must match an entire
    /// trimmed line and directives is a '+' separated list of increment-before,
    /// increment-after, decrement-before, decrement-after, decrement-before-double,
    /// verbatim-start, verbatim-end, unindented or none. The first matching rule applies.
    /// If no rules are given, the markers BEGIN, begin, end, END, middle, MIDDLE, end-end,
    /// heredoc-start and heredoc-end are used.
    #[arg(short = 'r', long = "rule", value_name = "RULE")]
    pub(crate) rules: Vec<String>,

    /// Reads input as a JSON value, a string or an array of strings and nulls, instead of
    /// as lines of text.
    #[arg(long)]
    pub(crate) json: bool,

    /// If set, the indented code is written to the specified file rather than stdout.
    #[arg(short = 'o', long)]
    pub(crate) output_file: Option<PathBuf>,

    /// Enables verbose output, printing indentation decisions to stdout if writing code
    /// to file, otherwise to stderr.
    #[arg(short = 'v', long)]
    pub(crate) verbose: bool,

    /// Files with lines of code. If no files are provided, the program reads from stdin.
    #[arg(value_name = "FILE")]
    pub(crate) source_files: Vec<PathBuf>,
}

pub(crate) fn arguments() -> Arguments {
    Arguments::parse()
}
