// src/catalog/pagination.rs

/// Products per catalog page.
pub const PAGE_SIZE: usize = 6;

pub fn total_pages(len: usize, per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    len.div_ceil(per_page)
}

/// Items of the 1-based `page`. Page 0 is read as page 1; pages past the end are empty.
pub fn paginate<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if per_page == 0 {
        return &[];
    }
    let start = (page.max(1) - 1).saturating_mul(per_page);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(per_page).min(items.len());
    &items[start..end]
}

#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: usize,
    pub total_pages: usize,
    pub total_items: usize,
}

impl<'a, P> Page<&'a P> {
    pub fn new(filtered: Vec<&'a P>, number: usize, per_page: usize) -> Self {
        let number = number.max(1);
        let total_items = filtered.len();
        Self {
            items: paginate(&filtered, number, per_page).to_vec(),
            number,
            total_pages: total_pages(total_items, per_page),
            total_items,
        }
    }
}

impl<T> Page<T> {
    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 6), 0);
        assert_eq!(total_pages(6, 6), 1);
        assert_eq!(total_pages(7, 6), 2);
        assert_eq!(total_pages(13, 6), 3);
    }

    #[test]
    fn pages_concatenate_to_the_whole_list() {
        for len in 0..20 {
            let items: Vec<usize> = (0..len).collect();
            let mut joined = Vec::new();
            for page in 1..=total_pages(len, PAGE_SIZE) {
                let chunk = paginate(&items, page, PAGE_SIZE);
                assert!(!chunk.is_empty());
                assert!(chunk.len() <= PAGE_SIZE);
                joined.extend_from_slice(chunk);
            }
            assert_eq!(joined, items, "len {len}");
        }
    }

    #[test]
    fn out_of_range_pages_are_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, 2, PAGE_SIZE).is_empty());
        assert!(paginate(&items, usize::MAX, PAGE_SIZE).is_empty());
        assert_eq!(paginate(&items, 0, PAGE_SIZE), &[1, 2, 3]);
    }

    #[test]
    fn page_navigation_flags() {
        let items: Vec<u32> = (0..13).collect();
        let refs: Vec<&u32> = items.iter().collect();
        let page = Page::new(refs.clone(), 2, PAGE_SIZE);
        assert!(page.has_previous());
        assert!(page.has_next());
        assert_eq!(page.items.len(), 6);

        let last = Page::new(refs, 3, PAGE_SIZE);
        assert!(!last.has_next());
        assert_eq!(last.items, vec![&12]);
    }
}
