// src/core/html.rs
// Marker scanning over raw page text.
//
// The standings page is read by plain text search: markers are matched
// ASCII case-insensitively, and only the FIRST occurrence of a boundary
// marker counts. No tag balancing happens anywhere, so a nested or repeated
// block is not seen. Byte offsets are shared between the raw text and its
// lowercase copy (ASCII lowering keeps lengths).

pub fn to_lower(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_ascii() { c.to_ascii_lowercase() } else { c })
        .collect()
}

/// Raw text plus its lowercase twin for case-insensitive search.
pub struct Markup<'a> {
    raw: &'a str,
    lc: String,
}

impl<'a> Markup<'a> {
    pub fn new(raw: &'a str) -> Self {
        Self { raw, lc: to_lower(raw) }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }

    /// Byte index of `pat` at or after `from`.
    pub fn find_from(&self, pat: &str, from: usize) -> Option<usize> {
        let pat = to_lower(pat);
        self.lc.get(from..)?.find(&pat).map(|i| i + from)
    }

    pub fn find(&self, pat: &str) -> Option<usize> {
        self.find_from(pat, 0)
    }

    /// Text between the first `open` and the first `close`, both searched
    /// from the start of the document. If the first `close` sits before the
    /// end of the first `open`, the region is empty.
    pub fn slice_first(&self, open: &str, close: &str) -> Option<&'a str> {
        let start = self.find(open)? + open.len();
        let end = self.find(close)?;
        if end < start {
            return Some("");
        }
        Some(&self.raw[start..end])
    }

    /// Text right after the first `marker`, up to the next `<`, trimmed.
    /// `None` if the marker is missing or no tag follows it.
    pub fn text_after(&self, marker: &str) -> Option<&'a str> {
        let start = self.find(marker)? + marker.len();
        let end = self.raw[start..].find('<')? + start;
        Some(self.raw[start..end].trim())
    }

    /// Inner text of every `open … close` pair, scanning left to right.
    pub fn blocks(&self, open: &str, close: &str) -> Vec<&'a str> {
        let mut out = Vec::new();
        let mut pos = 0usize;
        while let Some(s) = self.find_from(open, pos) {
            let inner = s + open.len();
            let Some(e) = self.find_from(close, inner) else { break };
            out.push(&self.raw[inner..e]);
            pos = e + close.len();
        }
        out
    }

    /// Non-overlapping occurrences of `marker`.
    pub fn count(&self, marker: &str) -> usize {
        let pat = to_lower(marker);
        if pat.is_empty() {
            return 0;
        }
        self.lc.matches(pat.as_str()).count()
    }

    /// Chunks of the raw text between occurrences of `marker`
    /// (the part before the first marker included).
    pub fn split(&self, marker: &str) -> Vec<&'a str> {
        let pat = to_lower(marker);
        if pat.is_empty() {
            return vec![self.raw];
        }
        let mut out = Vec::new();
        let mut last = 0usize;
        for (i, _) in self.lc.match_indices(pat.as_str()) {
            out.push(&self.raw[last..i]);
            last = i + pat.len();
        }
        out.push(&self.raw[last..]);
        out
    }
}
