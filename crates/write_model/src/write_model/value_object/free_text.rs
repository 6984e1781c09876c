#[derive(Debug, thiserror::Error)]
#[error("text too long (max = {max_chars})")]
pub struct Error {
    max_chars: usize,
}

/// Trimmed, non-empty, length-bounded text
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct FreeText(String);

impl FreeText {
    /// Rejects text longer than `max_chars` after trimming.
    pub fn bounded(s: &str, max_chars: usize) -> Result<Option<Self>, Error> {
        let trimmed = s.trim();
        if trimmed.chars().count() > max_chars {
            return Err(Error { max_chars });
        }
        Ok(Self::non_empty(trimmed))
    }

    /// Silently cuts text down to `max_chars` after trimming.
    pub fn truncated(s: &str, max_chars: usize) -> Option<Self> {
        Self::non_empty(truncate(s, max_chars))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    fn non_empty(s: &str) -> Option<Self> {
        (!s.is_empty()).then(|| Self(s.to_owned()))
    }
}

impl std::fmt::Display for FreeText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

// trim, cut at a char boundary, trim again so that the result is a fixed point
pub(crate) fn truncate(s: &str, max_chars: usize) -> &str {
    let trimmed = s.trim();
    match trimmed.char_indices().nth(max_chars) {
        None => trimmed,
        Some((end, _)) => trimmed[..end].trim_end(),
    }
}
