use std::cell::RefCell;
use std::rc::Rc;

use crate::app::Pager;
use crate::pagination::PageState;
use crate::surface::Region;
use crate::tests::support::{RecordingSurface, StubClick};

#[test]
fn render_replaces_existing_controls() {
    let surface = RecordingSurface::new();
    let mut pager = Pager::new(surface.clone());

    pager.render(&PageState::new(45, 2)).unwrap();
    pager.render(&PageState::new(45, 3)).unwrap();

    assert_eq!(surface.clear_count(Region::Pagination), 2);
    let inserts = surface.inserts_into(Region::Pagination);
    assert_eq!(inserts.len(), 2);
    assert!(inserts[0].contains(">2/5<"));
    assert!(inserts[1].contains(">3/5<"));
}

#[test]
fn single_page_render_empties_the_region() {
    let surface = RecordingSurface::new();
    let mut pager = Pager::new(surface.clone());

    pager.render(&PageState::new(7, 1)).unwrap();

    assert_eq!(surface.clear_count(Region::Pagination), 1);
    assert_eq!(surface.inserts_into(Region::Pagination), vec![String::new()]);
}

#[test]
fn control_click_fires_page_change() {
    let surface = RecordingSurface::new();
    let mut pager = Pager::new(surface.clone());
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    pager.on_page_change(move |page| sink.borrow_mut().push(page));

    assert_eq!(pager.handle_click(&StubClick::on_control("4")), Some(4));
    assert_eq!(*seen.borrow(), vec![4]);
    // Navigation does not re-render; the caller does, with fresh state.
    assert!(surface.ops().is_empty());
}

#[test]
fn click_outside_controls_is_ignored() {
    let surface = RecordingSurface::new();
    let mut pager = Pager::new(surface);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    pager.on_page_change(move |page| sink.borrow_mut().push(page));

    assert_eq!(pager.handle_click(&StubClick::outside()), None);
    assert!(seen.borrow().is_empty());
}
