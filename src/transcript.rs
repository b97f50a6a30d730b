use std::fmt;

/// Ordered output lines produced by a demo run.
///
/// Examples return their output as text instead of printing it, so a demo
/// collects those lines here and the caller decides where they go.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    lines: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::trace!(target: "transcript", "{line}");
        self.lines.push(line);
    }

    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for line in lines {
            self.push(line);
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, line) in self.lines.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

impl<S: Into<String>> FromIterator<S> for Transcript {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut transcript = Transcript::new();
        transcript.extend(iter);
        transcript
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_and_extend_keep_order() {
        let mut transcript = Transcript::new();
        transcript.push("first");
        transcript.extend(vec!["second".to_string(), "third".to_string()]);

        assert_eq!(transcript.lines(), ["first", "second", "third"]);
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn test_display_joins_with_newlines() {
        let transcript: Transcript = ["a", "b"].into_iter().collect();
        assert_eq!(transcript.to_string(), "a\nb");
        assert_eq!(Transcript::new().to_string(), "");
    }
}
