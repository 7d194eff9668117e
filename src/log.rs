use std::{cell::RefCell, io::Write};

#[macro_export]
macro_rules! verbose {
    ($logger:expr, $($arg:tt)*) => {
        if let Some(logger) = &$logger {
                logger.log(&format!($($arg)*));
            }
    };
}

// Writes trace messages from rendering. Interior mutability since rendering only borrows
// the store.
pub(crate) struct Logger {
    write: RefCell<Box<dyn Write>>,
}

impl Logger {
    pub(crate) fn new(write: Box<dyn Write>) -> Self {
        Logger {
            write: RefCell::new(write),
        }
    }

    pub(crate) fn log(&self, message: &str) {
        let mut write = self.write.borrow_mut();
        writeln!(write, "{}", message).unwrap_or_else(|_| eprintln!("{}", message));
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Logger")
    }
}
