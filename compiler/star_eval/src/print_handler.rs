//! Where `print` output goes.
//!
//! `starc run` writes to stdout; tests capture into a buffer and assert on
//! it. Natives hold a clone of the [`SharedPrintHandler`].

use std::sync::Arc;

use parking_lot::Mutex;
use star_patterns::Value;

pub enum PrintHandler {
    Stdout,
    /// Captured lines, each terminated by `\n`.
    Buffer(Mutex<String>),
}

impl PrintHandler {
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout => println!("{msg}"),
            Self::Buffer(buffer) => {
                let mut buffer = buffer.lock();
                buffer.push_str(msg);
                buffer.push('\n');
            }
        }
    }

    /// Print values separated by single spaces, the way `print(a, b)` does.
    pub fn print_values(&self, values: &[Value]) {
        let line = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.println(&line);
    }

    /// Captured output; always empty for stdout.
    pub fn get_output(&self) -> String {
        match self {
            Self::Stdout => String::new(),
            Self::Buffer(buffer) => buffer.lock().clone(),
        }
    }

    pub fn clear(&self) {
        if let Self::Buffer(buffer) = self {
            buffer.lock().clear();
        }
    }
}

pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout)
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(Mutex::new(String::new())))
}
