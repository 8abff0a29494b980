use serde::{Deserialize, Serialize};

/// Assignment value meaning "no color yet".
pub const UNCOLORED: usize = 0;

/// Named colors. Color `k` (1-based, as stored in assignments) is `names[k - 1]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Palette {
    names: Vec<String>,
}

impl Palette {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// `k` anonymous colors named `color1`, `color2`, ...
    pub fn numbered(k: usize) -> Self {
        Self::new((1..=k).map(|c| format!("color{c}")))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn name(&self, color: usize) -> Option<&str> {
        color
            .checked_sub(1)
            .and_then(|i| self.names.get(i))
            .map(String::as_str)
    }

    /// Truncate to `k` colors, or extend with numbered names.
    pub fn resized(&self, k: usize) -> Self {
        let mut names: Vec<String> = self.names.iter().take(k).cloned().collect();
        names.extend((names.len() + 1..=k).map(|c| format!("color{c}")));
        Self { names }
    }
}
