pub const BOUNDING_SPACES_COUNT: usize = 2;
pub const MIN_DASHES_COUNT: usize = 2;
pub const MIN_TERM_WIDTH: usize = 60;

/// Spaces between the pie chart legend and the pie itself.
pub const LEGEND_GAP: usize = 4;

pub const fn count_digits(n: u64) -> usize {
    if n >= 10000000000000000000 {
        return 20;
    }
    let mut count = 1;
    let mut ceil = 10;
    while n >= ceil {
        ceil *= 10;
        count += 1;
    }
    count
}

/// Number of terminal columns `s` occupies, assuming one column per char.
pub fn charlen(s: &str) -> usize {
    s.chars().count()
}
