use serde::Serialize;

/// Gap between slides, in pixels.
pub const SPACE_BETWEEN_PX: u32 = 20;

/// From `min_width` pixels up, show `slides_per_view` slides at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Breakpoint {
    pub min_width: u32,
    pub slides_per_view: usize,
}

/// Ascending by `min_width`; the first entry covers every width.
pub const BREAKPOINTS: &[Breakpoint] = &[
    Breakpoint { min_width: 0, slides_per_view: 1 },
    Breakpoint { min_width: 640, slides_per_view: 2 },
    Breakpoint { min_width: 768, slides_per_view: 3 },
    Breakpoint { min_width: 1024, slides_per_view: 5 },
];

pub fn slides_per_view(width: u32) -> usize {
    BREAKPOINTS
        .iter()
        .rev()
        .find(|bp| width >= bp.min_width)
        .map(|bp| bp.slides_per_view)
        .unwrap_or(1)
}

/// Slides advanced per navigation step; always the visible count.
pub fn slides_per_group(width: u32) -> usize {
    slides_per_view(width)
}

/// Navigation stops needed to see `total` slides at `width`.
pub fn page_count(total: usize, width: u32) -> usize {
    if total == 0 {
        return 0;
    }
    let per_view = slides_per_view(width);
    let group = slides_per_group(width);
    if total <= per_view {
        1
    } else {
        1 + (total - per_view).div_ceil(group)
    }
}
