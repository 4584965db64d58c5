use std::io::{self, BufRead, Lines, StdinLock, Write};

use unosim::Interaction;

/// Stdin/stdout seat for the `play` command.
pub struct Terminal {
    lines: Lines<StdinLock<'static>>,
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            lines: io::stdin().lock().lines(),
        }
    }
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for Terminal {
    fn show(&mut self, line: &str) {
        println!("{line}");
    }

    fn ask(&mut self, question: &str) -> Option<String> {
        print!("{question}");
        io::stdout().flush().ok()?;
        self.lines.next()?.ok()
    }
}
