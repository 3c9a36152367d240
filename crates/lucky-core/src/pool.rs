//! Name pool derived from free-form multi-line text.
//!
//! The raw text is the only stored form. The pool is recomputed from it on
//! demand: one entry per line, whitespace-only lines dropped, entry text kept
//! exactly as typed.

/// Raw multi-line name list as edited by the user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    raw: String,
}

impl NameList {
    pub fn new(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn raw_mut(&mut self) -> &mut String {
        &mut self.raw
    }

    pub fn set_raw(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
    }

    /// Eligible names, in list order, duplicates preserved
    pub fn pool(&self) -> Vec<&str> {
        parse_pool(&self.raw)
    }

    pub fn pool_len(&self) -> usize {
        self.raw.lines().filter(|line| !is_blank(line)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.pool_len() == 0
    }

    /// Remove the first line that matches `name` exactly.
    ///
    /// Returns `false` (and leaves the text untouched) when no line matches.
    pub fn remove_first(&mut self, name: &str) -> bool {
        match remove_first_line(&self.raw, name) {
            Some(updated) => {
                self.raw = updated;
                true
            }
            None => false,
        }
    }
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Split raw text on line breaks and drop whitespace-only lines
pub fn parse_pool(raw: &str) -> Vec<&str> {
    raw.lines().filter(|line| !is_blank(line)).collect()
}

/// Rebuild `raw` without its first line equal to `name`.
///
/// Blank lines and the remaining entries keep their positions. Line breaks
/// are normalized to `\n` in the result.
pub fn remove_first_line(raw: &str, name: &str) -> Option<String> {
    let lines: Vec<&str> = raw.lines().collect();
    let index = lines.iter().position(|line| *line == name)?;

    let kept: Vec<&str> = lines
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, line)| *line)
        .collect();

    let mut updated = kept.join("\n");
    if raw.ends_with('\n') && !updated.is_empty() {
        updated.push('\n');
    }
    Some(updated)
}
