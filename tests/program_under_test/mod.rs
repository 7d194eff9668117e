use super::paths::CODESTORE_PATH;
use std::io::{Read, Write};

/// A wrapper to run the codestore program with some arguments. It provides functions to
/// feed stdin and get output from stdout and stderr.
pub struct Codestore {
    command: std::process::Command,
    process: Option<std::process::Child>,
}

impl Drop for Codestore {
    fn drop(&mut self) {
        if let Some(process) = &mut self.process {
            if process.try_wait().unwrap().is_none() {
                eprintln!("Codestore process left by test. Attempting to kill!");
                process.kill().unwrap();
                for _ in 0..100 {
                    if process.try_wait().unwrap().is_some() {
                        eprintln!("Codestore process killed successfully!");
                        return;
                    }
                    std::thread::sleep(std::time::Duration::from_millis(100));
                }
                eprintln!("Failed to kill codestore process");
            }
        }
    }
}

// Not all methods are used in all integration test files
#[allow(dead_code)]
impl Codestore {
    pub fn new() -> Self {
        Self::new_with_options(&[])
    }

    pub fn new_with_options(options: &[&str]) -> Self {
        let mut command = std::process::Command::new(CODESTORE_PATH.as_path());
        command
            .args(options)
            .stdin(std::process::Stdio::piped())
            .stdout(std::process::Stdio::piped())
            .stderr(std::process::Stdio::piped());
        Self {
            command,
            process: None,
        }
    }

    /// Add source file argument to read code from a file
    pub fn source_file(mut self, path: &std::path::Path) -> Self {
        if self.process.is_some() {
            panic!("Codestore is already running!");
        }
        self.command.arg(path.to_string_lossy().as_ref());
        self
    }

    /// Runs codestore with the provided arguments
    pub fn run(mut self) -> Self {
        if self.process.is_some() {
            panic!("Codestore is already running!");
        }
        self.process = Some(
            self.command
                .spawn()
                .expect("Should be able to run codestore"),
        );
        self
    }

    /// Writes to the program's stdin and closes it
    pub fn stdin(&mut self, text: &str) -> &mut Self {
        let process = self
            .process
            .as_mut()
            .expect("Codestore process should be running");
        let mut stdin = process
            .stdin
            .take()
            .expect("Codestore stdin has already been used");
        stdin
            .write_all(text.as_bytes())
            .expect("Could not write to codestore stdin");
        stdin.flush().expect("Could not flush codestore stdin");
        self
    }

    /// Closes stdin without writing anything
    pub fn close_stdin(&mut self) -> &mut Self {
        let process = self
            .process
            .as_mut()
            .expect("Codestore process should be running");
        process.stdin.take();
        self
    }

    pub fn read_stdout(&mut self) -> Result<String, std::io::Error> {
        let process = self
            .process
            .as_mut()
            .expect("Codestore process should have been started");
        let mut stdout = process
            .stdout
            .take()
            .expect("Codestore stdout has already been used");
        Self::read(&mut stdout, "stdout")
    }

    pub fn read_stderr(&mut self) -> Result<String, std::io::Error> {
        let process = self
            .process
            .as_mut()
            .expect("Codestore process should have been started");
        let mut stderr = process
            .stderr
            .take()
            .expect("Codestore stderr has already been used");
        Self::read(&mut stderr, "stderr")
    }

    /// Reads all text from the program's stdout and checks that it matches the expected
    /// text, otherwise it returns an error
    pub fn expect_stdout(&mut self, expected_text: &str) -> Result<(), std::io::Error> {
        let read_text = self.read_stdout()?;
        if read_text == expected_text {
            Ok(())
        } else {
            Err(std::io::Error::other(format!(
                "Expected to read:\n'{expected_text}'\nfrom stdout but read:\n'{read_text}'"
            )))
        }
    }

    /// Waits for program to end and checks that nothing more can be read from its stdout
    /// and stderr
    pub fn wait(&mut self) -> std::process::ExitStatus {
        let process = self
            .process
            .as_mut()
            .expect("Codestore process should be running");
        process.stdin.take();

        if let Some(mut stdout) = process.stdout.take() {
            let mut text = String::new();
            if stdout
                .read_to_string(&mut text)
                .expect("Could not convert left-overs on codestore stdout to UTF-8")
                != 0
            {
                panic!("Nothing should be left on codestore stdout, but found '{text}'");
            }
        }
        if let Some(mut stderr) = process.stderr.take() {
            let mut text = String::new();
            if stderr
                .read_to_string(&mut text)
                .expect("Could not convert left-overs on codestore stderr to UTF-8")
                != 0
            {
                panic!("Nothing should be left on codestore stderr, but found '{text}'");
            }
        }

        process
            .wait()
            .expect("Could not wait for codestore process to exit")
    }

    fn read<R>(reader: &mut R, reader_name: &str) -> Result<String, std::io::Error>
    where
        R: Read,
    {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(String::from_utf8(buffer).unwrap_or_else(|error| {
            panic!("Read from codestore {reader_name} but could not convert to UTF-8: {error}")
        }))
    }
}
