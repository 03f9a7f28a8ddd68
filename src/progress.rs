// src/progress.rs

/// Narration sink for long runs. The CLI prints; tests and library callers
/// can pass nothing and stay silent.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One item finished; `label` names it, `status` says how it went.
    fn item_done(&mut self, _label: &str, _status: &str) {}

    /// One item gave up after local recovery.
    fn item_failed(&mut self, _label: &str, _status: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Console narration in the style of the maintenance runs: a counter per
/// item, indented status lines underneath.
pub struct ConsoleProgress {
    total: usize,
    seen: usize,
}

impl ConsoleProgress {
    pub fn new() -> Self {
        Self { total: 0, seen: 0 }
    }

    fn bump(&mut self) -> usize {
        self.seen += 1;
        self.seen
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.seen = 0;
    }

    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }

    fn item_done(&mut self, label: &str, status: &str) {
        let n = self.bump();
        println!("[{}/{}] {}", n, self.total, label);
        println!("   {}", status);
    }

    fn item_failed(&mut self, label: &str, status: &str) {
        let n = self.bump();
        println!("[{}/{}] {}", n, self.total, label);
        println!("   {}", status);
    }

    fn finish(&mut self) {}
}
