//! Hover caption decks: the `|`-delimited lyric excerpts the site
//! attaches to each album cover.

use rand::Rng;

/// An ordered, immutable list of caption strings for one hover target,
/// parsed once at load time. Selection is uniform-random per hover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptionDeck {
    captions: Vec<String>,
}

impl CaptionDeck {
    /// Parse a raw `hover_texts` attribute. Captions are separated by
    /// `|`; a literal `\n` marker inside a caption becomes a real line
    /// break. Returns `None` when nothing usable remains, which
    /// silently disables the hover behavior for that target.
    pub fn parse(raw: &str) -> Option<Self> {
        let captions: Vec<String> = raw
            .split('|')
            .map(|part| part.replace("\\n", "\n"))
            .filter(|part| !part.trim().is_empty())
            .collect();
        if captions.is_empty() {
            None
        } else {
            Some(Self { captions })
        }
    }

    pub fn len(&self) -> usize {
        self.captions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.captions.is_empty()
    }

    /// Pick one caption uniformly at random. Re-rolling on every hover
    /// entry is the intended use; no selection state is kept.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        &self.captions[rng.gen_range(0..self.captions.len())]
    }

    pub fn captions(&self) -> &[String] {
        &self.captions
    }
}
