/// Raw input lines in the order they were entered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    lines: Vec<String>,
}

impl History {
    pub fn from_lines(lines: Vec<String>) -> History {
        History { lines }
    }

    pub fn push(&mut self, line: &str) {
        self.lines.push(line.to_string());
    }

    /// Drops the most recent entry, if any.
    pub fn discard_last(&mut self) -> Option<String> {
        self.lines.pop()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(|s| s.as_str())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }
}

impl std::fmt::Display for History {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in self.lines.iter().rev() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
