//! Deterministic page sampling and rendering.
//!
//! Picks a spread of pages that covers the start of a deck, a periodic
//! mid-deck cadence, and the end, then rasterizes each pick to a PNG file.
//! For decks where design consistency matters, eyeballing this subset is
//! enough to judge the whole document without rendering every page.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::SlideSource;
use crate::error::Result;

/// Pages always sampled from the front of the deck.
const LEAD_PAGES: u32 = 5;

/// Cadence of mid-deck samples.
const STRIDE: u32 = 10;

/// Pages always sampled from the end of the deck.
const TAIL_PAGES: u32 = 2;

/// Default rasterization resolution in dots per inch.
pub const RENDER_DPI: f32 = 150.0;

/// Select the page indices to sample from a deck of `page_count` pages.
///
/// The selection is the union of the first [`LEAD_PAGES`] indices, every
/// multiple of [`STRIDE`] below `page_count`, and the last [`TAIL_PAGES`]
/// indices, restricted to valid indices, deduplicated, and sorted
/// ascending.
pub fn sample_indices(page_count: u32) -> Vec<u32> {
    let mut picks: BTreeSet<u32> = BTreeSet::new();

    picks.extend(0..LEAD_PAGES.min(page_count));

    let mut index = STRIDE;
    while index < page_count {
        picks.insert(index);
        index += STRIDE;
    }

    for index in page_count.saturating_sub(TAIL_PAGES)..page_count {
        picks.insert(index);
    }

    picks.into_iter().collect()
}

/// Output filename for a rendered page, named by 1-based page number.
pub fn page_filename(index: u32) -> String {
    format!("page_{}.png", index + 1)
}

/// Render the sampled pages of `source` into `out_dir` at `dpi`.
///
/// Creates `out_dir` (and missing parents) first, then renders each selected
/// page to `page_<N>.png` where `N` is the 1-based page number. Returns the
/// `(index, path)` pair for every file written, in ascending page order.
///
/// The first page that fails to render aborts the batch; files already
/// written stay on disk.
pub fn render_sample<S: SlideSource>(
    source: &S,
    out_dir: &Path,
    dpi: f32,
) -> Result<Vec<(u32, PathBuf)>> {
    fs::create_dir_all(out_dir)?;

    let indices = sample_indices(source.page_count());
    log::debug!(
        "sampling {} of {} pages at {} dpi",
        indices.len(),
        source.page_count(),
        dpi
    );

    let mut saved = Vec::with_capacity(indices.len());
    for index in indices {
        let path = out_dir.join(page_filename(index));
        source.render_to_file(index, dpi, &path)?;
        log::info!("rendered page {} to {}", index + 1, path.display());
        saved.push((index, path));
    }

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_indices_mid_size_deck() {
        assert_eq!(
            sample_indices(25),
            vec![0, 1, 2, 3, 4, 10, 20, 23, 24]
        );
    }

    #[test]
    fn test_sample_indices_short_deck_collapses() {
        // Last-two rule collapses into the first-five set.
        assert_eq!(sample_indices(3), vec![0, 1, 2]);
        assert_eq!(sample_indices(1), vec![0]);
    }

    #[test]
    fn test_sample_indices_empty_deck() {
        assert!(sample_indices(0).is_empty());
    }

    #[test]
    fn test_sample_indices_stride_boundary() {
        // Exactly ten pages: index 10 is out of range, tail picks 8 and 9.
        assert_eq!(sample_indices(10), vec![0, 1, 2, 3, 4, 8, 9]);
        // Eleven pages: stride pick lands on the second-to-last tail page.
        assert_eq!(sample_indices(11), vec![0, 1, 2, 3, 4, 9, 10]);
    }

    #[test]
    fn test_sample_indices_long_deck() {
        let picks = sample_indices(100);
        assert_eq!(
            picks,
            vec![0, 1, 2, 3, 4, 10, 20, 30, 40, 50, 60, 70, 80, 90, 98, 99]
        );
    }

    #[test]
    fn test_sample_indices_sorted_and_unique() {
        for count in [0, 1, 2, 5, 7, 10, 12, 21, 42, 100] {
            let picks = sample_indices(count);
            let mut deduped = picks.clone();
            deduped.dedup();
            assert_eq!(picks, deduped, "duplicates for page_count={count}");
            let mut sorted = picks.clone();
            sorted.sort_unstable();
            assert_eq!(picks, sorted, "unsorted for page_count={count}");
            assert!(
                picks.iter().all(|&i| i < count),
                "out-of-range pick for page_count={count}"
            );
        }
    }

    #[test]
    fn test_page_filename_is_one_based() {
        assert_eq!(page_filename(0), "page_1.png");
        assert_eq!(page_filename(24), "page_25.png");
    }
}
