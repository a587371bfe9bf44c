//! Frequency statistics for colors and fonts used across a deck.

use indexmap::IndexMap;

use crate::backend::SlideSource;
use crate::error::{Error, Result};
use crate::model::PageSize;

/// Number of color entries printed in the ranked report.
pub const TOP_COLOR_COUNT: usize = 15;

/// Number of font entries printed in the ranked report.
pub const TOP_FONT_COUNT: usize = 10;

/// Frequency count keyed by a canonical string identifier.
///
/// Keys keep their insertion order, so ranking ties resolve to whichever
/// key was seen first.
#[derive(Debug, Clone, Default)]
pub struct Tally {
    counts: IndexMap<String, u64>,
}

impl Tally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the count for `key`, inserting it on first sight.
    pub fn bump(&mut self, key: impl Into<String>) {
        *self.counts.entry(key.into()).or_insert(0) += 1;
    }

    /// Count recorded for `key`, zero if never seen.
    pub fn get(&self, key: &str) -> u64 {
        self.counts.get(key).copied().unwrap_or(0)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no keys have been recorded.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all occurrence counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Top `n` entries by descending count.
    ///
    /// Uses a stable sort over insertion order, so equal counts rank in
    /// first-seen order.
    pub fn top(&self, n: usize) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .map(|(key, &count)| (key.as_str(), count))
            .collect();
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(n);
        entries
    }
}

/// Aggregate design statistics for one document.
#[derive(Debug, Clone)]
pub struct DesignStats {
    /// Total number of pages.
    pub page_count: u32,
    /// Size of the first page.
    pub page_size: PageSize,
    /// Colors of non-blank text spans, keyed by `#RRGGBB`.
    pub text_colors: Tally,
    /// Font family names of non-blank text spans.
    pub fonts: Tally,
    /// Fill and stroke colors of vector drawings, keyed by `#RRGGBB`.
    ///
    /// Tracked separately from [`text_colors`](Self::text_colors) and not
    /// part of the ranked color report.
    pub shape_colors: Tally,
}

impl DesignStats {
    /// Ranked text colors, most frequent first.
    pub fn top_colors(&self, n: usize) -> Vec<(&str, u64)> {
        self.text_colors.top(n)
    }

    /// Ranked font names, most frequent first.
    pub fn top_fonts(&self, n: usize) -> Vec<(&str, u64)> {
        self.fonts.top(n)
    }
}

/// Walk every page of `source` and accumulate color and font tallies.
///
/// Each non-blank text span contributes exactly one increment to one color
/// key and one font key. Blank spans (empty or whitespace-only after
/// trimming) contribute nothing. Fill and stroke colors of drawings
/// accumulate into the shape tally.
///
/// Fails with [`Error::EmptyDocument`] before touching any page when the
/// document has no pages.
pub fn collect_stats<S: SlideSource>(source: &S) -> Result<DesignStats> {
    let page_count = source.page_count();
    if page_count == 0 {
        return Err(Error::EmptyDocument);
    }

    let mut stats = DesignStats {
        page_count,
        page_size: source.page_size(0)?,
        text_colors: Tally::new(),
        fonts: Tally::new(),
        shape_colors: Tally::new(),
    };

    for index in 0..page_count {
        let drawings = source.drawings(index)?;
        for drawing in &drawings {
            if let Some(fill) = drawing.fill {
                stats.shape_colors.bump(fill.to_hex());
            }
            if let Some(stroke) = drawing.stroke {
                stats.shape_colors.bump(stroke.to_hex());
            }
        }

        let spans = source.spans(index)?;
        log::debug!(
            "page {}: {} drawings, {} spans",
            index,
            drawings.len(),
            spans.len()
        );

        for span in &spans {
            if span.is_blank() {
                continue;
            }
            stats.text_colors.bump(span.color_hex());
            stats.fonts.bump(span.font.clone());
        }
    }

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_bump_and_get() {
        let mut tally = Tally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.get("#FFFFFF"), 0);

        tally.bump("#FFFFFF");
        tally.bump("#FFFFFF");
        tally.bump("#000000");

        assert_eq!(tally.get("#FFFFFF"), 2);
        assert_eq!(tally.get("#000000"), 1);
        assert_eq!(tally.len(), 2);
        assert_eq!(tally.total(), 3);
    }

    #[test]
    fn test_tally_top_orders_by_count_descending() {
        let mut tally = Tally::new();
        for _ in 0..3 {
            tally.bump("b");
        }
        tally.bump("a");
        for _ in 0..2 {
            tally.bump("c");
        }

        let top = tally.top(10);
        assert_eq!(top, vec![("b", 3), ("c", 2), ("a", 1)]);
    }

    #[test]
    fn test_tally_top_ties_keep_first_seen_order() {
        let mut tally = Tally::new();
        tally.bump("second");
        tally.bump("first");
        tally.bump("second");
        tally.bump("first");
        tally.bump("third");
        tally.bump("third");

        // All counts equal; ranking follows insertion order.
        let top = tally.top(3);
        assert_eq!(top, vec![("second", 2), ("first", 2), ("third", 2)]);
    }

    #[test]
    fn test_tally_top_truncates() {
        let mut tally = Tally::new();
        for i in 0..20 {
            tally.bump(format!("key{i}"));
        }
        assert_eq!(tally.top(TOP_COLOR_COUNT).len(), 15);
        assert_eq!(tally.top(TOP_FONT_COUNT).len(), 10);
        assert_eq!(tally.top(0).len(), 0);
    }
}
