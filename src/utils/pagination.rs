// ============================================================================
// PAGINATION WINDOW - Ventana acotada de links de página con elipsis
// ============================================================================

/// Un ítem del footer de paginación: número de página o elipsis
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PageItem {
    Page(u32),
    Dots,
}

/// Calcular la secuencia de páginas a mostrar alrededor de `page`.
///
/// Con pocas páginas (`total_pages <= 7 + siblings`) se devuelven todas.
/// Con muchas, se comprimen los extremos con elipsis manteniendo siempre
/// la primera página, la última, y `siblings` vecinos a cada lado de la
/// página actual. La longitud del resultado queda acotada por
/// `5 + 2 * siblings`.
pub fn pagination_range(total_pages: u32, page: u32, siblings: u32) -> Vec<PageItem> {
    if total_pages <= 7 + siblings {
        return (1..=total_pages).map(PageItem::Page).collect();
    }

    let left_sibling = page.saturating_sub(siblings).max(1);
    let right_sibling = (page + siblings).min(total_pages);

    let show_left_dots = left_sibling > 2;
    let show_right_dots = right_sibling < total_pages - 2;

    if !show_left_dots && show_right_dots {
        let left_count = 3 + 2 * siblings;
        let mut items: Vec<PageItem> = (1..=left_count).map(PageItem::Page).collect();
        items.push(PageItem::Dots);
        items.push(PageItem::Page(total_pages));
        return items;
    }

    if show_left_dots && !show_right_dots {
        let right_count = 3 + 2 * siblings;
        let mut items = vec![PageItem::Page(1), PageItem::Dots];
        items.extend((total_pages - right_count + 1..=total_pages).map(PageItem::Page));
        return items;
    }

    if show_left_dots && show_right_dots {
        let mut items = vec![PageItem::Page(1), PageItem::Dots];
        items.extend((left_sibling..=right_sibling).map(PageItem::Page));
        items.push(PageItem::Dots);
        items.push(PageItem::Page(total_pages));
        return items;
    }

    // Sin elipsis a ningún lado: mostrar el rango completo
    (1..=total_pages).map(PageItem::Page).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageItem::{Dots, Page};

    #[test]
    fn small_total_returns_full_range() {
        assert_eq!(
            pagination_range(5, 1, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5)]
        );
    }

    #[test]
    fn middle_page_gets_dots_on_both_sides() {
        assert_eq!(
            pagination_range(20, 10, 1),
            vec![Page(1), Dots, Page(9), Page(10), Page(11), Dots, Page(20)]
        );
    }

    #[test]
    fn near_start_only_right_dots() {
        assert_eq!(
            pagination_range(20, 2, 1),
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Dots, Page(20)]
        );
    }

    #[test]
    fn near_end_only_left_dots() {
        assert_eq!(
            pagination_range(20, 19, 1),
            vec![Page(1), Dots, Page(16), Page(17), Page(18), Page(19), Page(20)]
        );
    }

    #[test]
    fn boundary_total_equals_window() {
        // total_pages == 7 + siblings: todavía rango completo
        let items = pagination_range(8, 4, 1);
        assert_eq!(items.len(), 8);
        assert!(items.iter().all(|i| matches!(i, Page(_))));
    }

    #[test]
    fn zero_siblings_still_total() {
        assert_eq!(
            pagination_range(50, 25, 0),
            vec![Page(1), Dots, Page(25), Dots, Page(50)]
        );
    }

    #[test]
    fn output_length_is_bounded() {
        for siblings in 0..4u32 {
            for total in 1..=60u32 {
                for page in 1..=total {
                    let items = pagination_range(total, page, siblings);
                    assert!(
                        items.len() as u32 <= (5 + 2 * siblings).max(7 + siblings),
                        "total={total} page={page} siblings={siblings} len={}",
                        items.len()
                    );
                    assert!(!items.is_empty());
                }
            }
        }
    }

    #[test]
    fn first_and_last_pages_always_present() {
        for page in 1..=40u32 {
            let items = pagination_range(40, page, 1);
            assert_eq!(items.first(), Some(&Page(1)));
            assert_eq!(items.last(), Some(&Page(40)));
        }
    }
}
