use std::io::Write;

// Joins lines of text, each terminated by a newline
#[macro_export]
macro_rules! lines {
    () => {
        String::new()
    };
    ($line:expr $(, $rest:expr)* $(,)?) => {
        format!("{}\n{}", $line, lines!($($rest),*))
    };
}

pub fn temp_file() -> tempfile::NamedTempFile {
    tempfile::NamedTempFile::new().expect("Should be able to create temp file")
}

pub fn temp_file_from(content: &str) -> tempfile::NamedTempFile {
    let mut file = temp_file();
    write!(file, "{content}").expect("Should be able to write to file");
    file
}
