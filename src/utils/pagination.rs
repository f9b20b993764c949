// src/utils/pagination.rs

/// Number of question records served per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slices `records` down to the 1-indexed `page`.
///
/// A page past the end of the data (page 0 included) comes back empty
/// rather than failing; callers decide whether an empty page is a 404.
pub fn paginate<T: Clone>(records: &[T], page: u32) -> Vec<T> {
    if page == 0 {
        return Vec::new();
    }

    let start = (page as usize - 1).saturating_mul(QUESTIONS_PER_PAGE);

    records
        .iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .cloned()
        .collect()
}
