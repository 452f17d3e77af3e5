use std::io::{self, Stdout, Write};

/// Totals of a finished `Report` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: u32,
    pub total: u32,
}

impl Summary {
    /// Integer percentage of passed checks; an empty run counts as fully passed.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            100
        } else {
            ((self.passed as u64 * 100) / self.total as u64) as u32
        }
    }

    pub fn all_passed(&self) -> bool {
        self.passed == self.total
    }
}

/// Console pass/fail report over a sequence of checks.
///
/// `begin` is ignored while a run is in progress; `check` and `finish` are ignored
/// outside of one.
pub struct Report<W: Write> {
    out: W,
    is_running: bool,
    passed: u32,
    total: u32,
}

impl Report<Stdout> {
    pub fn stdout() -> Report<Stdout> {
        Report::new(io::stdout())
    }
}

impl<W: Write> Report<W> {
    pub fn new(out: W) -> Report<W> {
        Report {
            out,
            is_running: false,
            passed: 0,
            total: 0,
        }
    }

    pub fn begin(&mut self, title: &str) -> io::Result<()> {
        if self.is_running {
            return Ok(());
        }
        writeln!(self.out, "--{}--", title)?;
        self.passed = 0;
        self.total = 0;
        self.is_running = true;
        Ok(())
    }

    pub fn check(&mut self, condition: bool, description: &str) -> io::Result<()> {
        if !self.is_running {
            return Ok(());
        }
        writeln!(self.out, "[{}] {}", if condition { '*' } else { ' ' }, description)?;
        if condition {
            self.passed += 1;
        }
        self.total += 1;
        Ok(())
    }

    /// Prints the totals and ends the run. Returns `None` if no run was in progress.
    pub fn finish(&mut self) -> io::Result<Option<Summary>> {
        if !self.is_running {
            return Ok(None);
        }
        self.is_running = false;
        let summary = Summary { passed: self.passed, total: self.total };
        write!(
            self.out,
            "-----\nTotal test: {}\nTotal passed: {}\nPercentage passed: {:3}%\n",
            summary.total, summary.passed, summary.percentage()
        )?;
        self.out.flush()?;
        Ok(Some(summary))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
