use std::num::NonZeroUsize;

use crate::markup::MarkupOptions;
use crate::pagination::PageState;
use crate::presentation::{PaginationView, View};
use crate::surface::Region;

fn state(count: usize, page: usize) -> PageState {
    PageState::new(count, page).with_page_size(NonZeroUsize::new(10).unwrap())
}

#[test]
fn single_page_renders_empty() {
    let view = PaginationView::new();
    assert!(view.render(&state(0, 1)).is_empty());
    assert!(view.render(&state(10, 1)).is_empty());
}

#[test]
fn first_page_renders_next_only() {
    let html = PaginationView::new().render(&state(45, 1)).into_string();

    assert!(html.contains("pager__control--next"));
    assert!(html.contains("data-page=\"2\""));
    assert!(html.contains("Page 2"));
    assert!(!html.contains("pager__control--prev"));
}

#[test]
fn last_page_renders_previous_only() {
    let html = PaginationView::new().render(&state(45, 5)).into_string();

    assert!(html.contains("pager__control--prev"));
    assert!(html.contains("data-page=\"4\""));
    assert!(html.contains("Page 4"));
    assert!(!html.contains("pager__control--next"));
}

#[test]
fn middle_page_orders_prev_indicator_next() {
    let html = PaginationView::new().render(&state(45, 3)).into_string();

    let prev = html.find("pager__control--prev").unwrap();
    let pages = html.find("pager__pages").unwrap();
    let next = html.find("pager__control--next").unwrap();
    assert!(prev < pages && pages < next);

    assert!(html.contains("data-page=\"2\""));
    assert!(html.contains("data-page=\"4\""));
}

#[test]
fn indicator_shows_current_over_total() {
    let html = PaginationView::new().render(&state(45, 3)).into_string();
    assert!(html.contains(">3/5<"));
}

#[test]
fn overflowing_page_renders_clamped() {
    let html = PaginationView::new().render(&state(30, 9)).into_string();

    assert!(html.contains(">3/3<"));
    assert!(html.contains("data-page=\"2\""));
    assert!(!html.contains("pager__control--next"));
}

#[test]
fn icons_resolve_against_sheet() {
    let options = MarkupOptions::new().with_icon_sheet("/assets/icons.svg");
    let html = PaginationView::with_options(options).render(&state(45, 3)).into_string();

    assert!(html.contains("href=\"/assets/icons.svg#icon-arrow-left\""));
    assert!(html.contains("href=\"/assets/icons.svg#icon-arrow-right\""));
}

#[test]
fn pager_mounts_into_pagination_region() {
    assert_eq!(PaginationView::new().region(), Region::Pagination);
}
