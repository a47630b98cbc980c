//! Page range calculation for paginated lists (1-based pages)

/// Page lists up to this size are rendered without ellipsis
const COMPACT_LIMIT: usize = 11;

/// One control of the pagination bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageDirective {
    Prev,
    Page { number: usize, current: bool },
    Ellipsis,
    Next,
}

/// Controls to render, plus a page the caller should navigate to instead
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PagePlan {
    pub directives: Vec<PageDirective>,
    /// Set when the requested page is out of range; always page 1
    pub correction: Option<usize>,
}

/// Item slice `[start, end)` of one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub start: usize,
    pub end: usize,
}

/// Page selected by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    pub page: usize,
    /// Present when the item count and page size are known
    pub window: Option<PageWindow>,
}

/// Number of pages needed for `total_items` (ceiling division)
pub fn page_count(total_items: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(page_size)
}

/// Items shown on `page_number`, clamped to the total
pub fn page_window(page_number: usize, page_size: usize, total_items: usize) -> PageWindow {
    let page = page_number.max(1);
    let start = ((page - 1) * page_size).min(total_items);
    let end = (page * page_size).min(total_items);
    PageWindow { start, end }
}

/// Clamp `target` into `1..=page_count`; `None` when that leaves the page unchanged
fn step_target(page_number: usize, target: usize, page_count: usize) -> Option<usize> {
    if page_count == 0 {
        return None;
    }
    let target = target.clamp(1, page_count);
    (target != page_number).then_some(target)
}

/// Target of the "previous" control, `None` on the first page
pub fn prev_page(page_number: usize, page_count: usize) -> Option<usize> {
    step_target(page_number, page_number.saturating_sub(1), page_count)
}

/// Target of the "next" control, `None` on the last page
pub fn next_page(page_number: usize, page_count: usize) -> Option<usize> {
    step_target(page_number, page_number.saturating_add(1), page_count)
}

/// Controls for `page_number` out of `page_count` pages
///
/// ```text
/// prev 1 2 ... n-2 n-1 n n+1 n+2 ... count-1 count next
/// ```
pub fn page_range(page_number: usize, page_count: usize) -> PagePlan {
    if page_count == 0 {
        return PagePlan::default();
    }

    let correction = (page_number < 1 || page_number > page_count).then_some(1);
    let page = |number: usize| PageDirective::Page {
        number,
        current: number == page_number,
    };

    let mut directives = vec![PageDirective::Prev];

    if page_count <= COMPACT_LIMIT {
        directives.extend((1..=page_count).map(page));
    } else if page_number <= 5 {
        directives.extend((1..=8).map(page));
        directives.push(PageDirective::Ellipsis);
        directives.extend((page_count - 1..=page_count).map(page));
    } else if page_number >= page_count - 5 {
        directives.extend((1..=2).map(page));
        directives.push(PageDirective::Ellipsis);
        directives.extend((page_count - 7..=page_count).map(page));
    } else {
        directives.extend((1..=2).map(page));
        directives.push(PageDirective::Ellipsis);
        directives.extend((page_number - 2..=page_number + 2).map(page));
        directives.push(PageDirective::Ellipsis);
        directives.extend((page_count - 1..=page_count).map(page));
    }

    directives.push(PageDirective::Next);

    PagePlan {
        directives,
        correction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageDirective::{Ellipsis, Next, Prev};

    /// Compact notation: page numbers, 0 for ellipsis, Prev/Next dropped
    fn numbers(plan: &PagePlan) -> Vec<usize> {
        plan.directives
            .iter()
            .filter_map(|d| match d {
                PageDirective::Page { number, .. } => Some(*number),
                Ellipsis => Some(0),
                Prev | Next => None,
            })
            .collect()
    }

    fn current(plan: &PagePlan) -> Vec<usize> {
        plan.directives
            .iter()
            .filter_map(|d| match d {
                PageDirective::Page {
                    number,
                    current: true,
                } => Some(*number),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_no_pages_renders_nothing() {
        assert_eq!(page_range(1, 0), PagePlan::default());
        assert_eq!(page_range(0, 0), PagePlan::default());
        assert_eq!(page_range(7, 0).correction, None);
    }

    #[test]
    fn test_compact_range() {
        let plan = page_range(3, 5);
        assert_eq!(plan.directives.first(), Some(&Prev));
        assert_eq!(plan.directives.last(), Some(&Next));
        assert_eq!(numbers(&plan), vec![1, 2, 3, 4, 5]);
        assert_eq!(current(&plan), vec![3]);
        assert_eq!(plan.correction, None);
    }

    #[test]
    fn test_eleven_pages_stay_compact() {
        let plan = page_range(6, 11);
        assert_eq!(numbers(&plan), (1..=11).collect::<Vec<_>>());
    }

    #[test]
    fn test_near_start() {
        let plan = page_range(1, 20);
        assert_eq!(numbers(&plan), vec![1, 2, 3, 4, 5, 6, 7, 8, 0, 19, 20]);
        assert_eq!(current(&plan), vec![1]);

        let plan = page_range(5, 20);
        assert_eq!(numbers(&plan), vec![1, 2, 3, 4, 5, 6, 7, 8, 0, 19, 20]);
    }

    #[test]
    fn test_near_end() {
        let plan = page_range(18, 20);
        assert_eq!(
            numbers(&plan),
            vec![1, 2, 0, 13, 14, 15, 16, 17, 18, 19, 20]
        );
        assert_eq!(current(&plan), vec![18]);

        // 15 == 20 - 5 is already the tail case
        let plan = page_range(15, 20);
        assert_eq!(
            numbers(&plan),
            vec![1, 2, 0, 13, 14, 15, 16, 17, 18, 19, 20]
        );
    }

    #[test]
    fn test_middle() {
        let plan = page_range(10, 20);
        assert_eq!(
            plan.directives,
            vec![
                Prev,
                PageDirective::Page { number: 1, current: false },
                PageDirective::Page { number: 2, current: false },
                Ellipsis,
                PageDirective::Page { number: 8, current: false },
                PageDirective::Page { number: 9, current: false },
                PageDirective::Page { number: 10, current: true },
                PageDirective::Page { number: 11, current: false },
                PageDirective::Page { number: 12, current: false },
                Ellipsis,
                PageDirective::Page { number: 19, current: false },
                PageDirective::Page { number: 20, current: false },
                Next,
            ]
        );

        let plan = page_range(6, 20);
        assert_eq!(numbers(&plan), vec![1, 2, 0, 4, 5, 6, 7, 8, 0, 19, 20]);
    }

    #[test]
    fn test_out_of_range_requests_first_page() {
        let plan = page_range(0, 20);
        assert_eq!(plan.correction, Some(1));
        assert_eq!(numbers(&plan), vec![1, 2, 3, 4, 5, 6, 7, 8, 0, 19, 20]);
        assert!(current(&plan).is_empty());

        let plan = page_range(25, 20);
        assert_eq!(plan.correction, Some(1));
        assert_eq!(
            numbers(&plan),
            vec![1, 2, 0, 13, 14, 15, 16, 17, 18, 19, 20]
        );

        let plan = page_range(4, 3);
        assert_eq!(plan.correction, Some(1));
        assert_eq!(numbers(&plan), vec![1, 2, 3]);
    }

    #[test]
    fn test_page_count() {
        assert_eq!(page_count(0, 20), 0);
        assert_eq!(page_count(1, 20), 1);
        assert_eq!(page_count(20, 20), 1);
        assert_eq!(page_count(21, 20), 2);
        assert_eq!(page_count(5, 0), 0);
    }

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 20, 45), PageWindow { start: 0, end: 20 });
        assert_eq!(page_window(3, 20, 45), PageWindow { start: 40, end: 45 });
        assert_eq!(page_window(4, 20, 45), PageWindow { start: 45, end: 45 });
    }

    #[test]
    fn test_prev_next_are_clamped() {
        assert_eq!(prev_page(1, 5), None);
        assert_eq!(prev_page(2, 5), Some(1));
        assert_eq!(next_page(5, 5), None);
        assert_eq!(next_page(4, 5), Some(5));
        assert_eq!(next_page(1, 0), None);
        assert_eq!(prev_page(1, 0), None);
    }

    #[test]
    fn test_prev_next_stay_in_range_past_the_end() {
        assert_eq!(prev_page(25, 20), Some(20));
        assert_eq!(next_page(25, 20), Some(20));
        assert_eq!(prev_page(0, 20), Some(1));
        assert_eq!(next_page(0, 20), Some(1));
    }
}
