use css::{PixelProperty, StyleAccess};
use dom::{DomTree, EventKind, EventTarget, InputEvent, NodeKey, Point, Rect};
use drag::{DragConfig, DragOptions, DragPhase, DragRegistry, PointerKind};
use page::Page;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn mouse(kind: EventKind, target: EventTarget, x: f64, y: f64) -> InputEvent {
    InputEvent::mouse(kind, target, x, y)
}

/// html > body > element, nothing positioned; the element sits at (80, 90).
fn flat_page() -> (Page, NodeKey) {
    let mut page = Page::new();
    let body = page.create_element(NodeKey::ROOT, "body").unwrap();
    let element = page.create_element(body, "div").unwrap();
    page.set_flow_box(body, Rect::new(0.0, 0.0, 1000.0, 3000.0)).unwrap();
    page.set_flow_box(element, Rect::new(80.0, 90.0, 50.0, 30.0)).unwrap();
    (page, element)
}

fn left_top(page: &Page, element: NodeKey) -> (Option<f64>, Option<f64>) {
    (
        page.pixel(element, PixelProperty::Left).unwrap(),
        page.pixel(element, PixelProperty::Top).unwrap(),
    )
}

#[test]
fn drag_follows_pointer_and_scroll() {
    init_logger();
    let (mut page, element) = flat_page();
    let mut registry = DragRegistry::default();
    let handle = registry.enable_drag(&mut page, element, DragOptions::new());

    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 100.0, 100.0);
    registry.dispatch(&mut page, &mut down).unwrap();
    let session = registry.session(handle).unwrap();
    assert_eq!(session.pointer_kind, PointerKind::Mouse);
    assert_eq!((session.item_x, session.item_y), (20.0, 10.0));
    assert_eq!(session.container, None);
    assert_eq!(left_top(&page, element), (Some(80.0), Some(90.0)));
    assert!(page.has_class(element, "being-dragged"));

    let mut moved = mouse(EventKind::MouseMove, EventTarget::Document, 150.0, 140.0);
    registry.dispatch(&mut page, &mut moved).unwrap();
    assert_eq!(left_top(&page, element), (Some(130.0), Some(130.0)));

    page.scroll_by(0.0, 50.0);
    registry.dispatch(&mut page, &mut InputEvent::scroll()).unwrap();
    assert_eq!(left_top(&page, element), (Some(130.0), Some(180.0)));
    let session = registry.session(handle).unwrap();
    assert_eq!((session.page_x, session.page_y), (150.0, 190.0));
    assert_eq!((session.scroll_x, session.scroll_y), (0.0, 50.0));

    // On screen the element stays under the pointer.
    let rect = page.bounding_client_rect(element).unwrap();
    assert_eq!((rect.x, rect.y), (130.0, 130.0));
}

#[test]
fn size_is_pinned_while_dragging() {
    init_logger();
    let (mut page, element) = flat_page();
    let mut registry = DragRegistry::default();
    registry.enable_drag(&mut page, element, DragOptions::new());

    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 100.0, 100.0);
    registry.dispatch(&mut page, &mut down).unwrap();
    assert_eq!(page.inline_value(element, "width").unwrap().as_deref(), Some("50px"));
    assert_eq!(page.inline_value(element, "height").unwrap().as_deref(), Some("30px"));
    assert_eq!(
        page.inline_value(element, "position").unwrap().as_deref(),
        Some("absolute")
    );
}

#[test]
fn moves_do_not_accumulate_error() {
    init_logger();
    let (mut page, element) = flat_page();
    let mut registry = DragRegistry::default();
    let handle = registry.enable_drag(&mut page, element, DragOptions::new());

    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 100.25, 100.5);
    registry.dispatch(&mut page, &mut down).unwrap();

    let mut last = (0.0, 0.0);
    for step in 0..200 {
        let offset = f64::from(step) * 0.75;
        last = (100.25 + offset, 100.5 - offset / 2.0);
        let mut moved = mouse(EventKind::MouseMove, EventTarget::Document, last.0, last.1);
        registry.dispatch(&mut page, &mut moved).unwrap();
        if step % 7 == 0 {
            page.scroll_by(0.0, 0.5);
            registry.dispatch(&mut page, &mut InputEvent::scroll()).unwrap();
        }
    }
    let mut moved = mouse(EventKind::MouseMove, EventTarget::Document, last.0, last.1);
    registry.dispatch(&mut page, &mut moved).unwrap();

    let scroll = page.scroll_offset();
    let session = registry.session(handle).unwrap();
    assert_eq!(session.page_x, last.0 + scroll.x);
    assert_eq!(session.page_y, last.1 + scroll.y);
    assert_eq!(
        left_top(&page, element),
        (
            Some(last.0 + scroll.x - 20.25),
            Some(last.1 + scroll.y - 10.5)
        )
    );
}

#[test]
fn scroll_keeps_element_under_a_still_pointer() {
    init_logger();
    let (mut page, element) = flat_page();
    let mut registry = DragRegistry::default();
    registry.enable_drag(&mut page, element, DragOptions::new());

    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 90.0, 95.0);
    registry.dispatch(&mut page, &mut down).unwrap();
    let before = page.bounding_client_rect(element).unwrap();

    for (dx, dy) in [(40.0, 120.0), (-12.0, -35.0), (0.0, 0.0), (133.0, 400.0), (-161.0, -485.0)] {
        page.scroll_by(dx, dy);
        registry.dispatch(&mut page, &mut InputEvent::scroll()).unwrap();
        assert_eq!(page.bounding_client_rect(element).unwrap(), before);
    }
}

#[test]
fn release_clears_inline_style_and_class() {
    init_logger();
    let (mut page, element) = flat_page();
    let mut registry = DragRegistry::default();
    let handle = registry.enable_drag(&mut page, element, DragOptions::new());

    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 100.0, 100.0);
    registry.dispatch(&mut page, &mut down).unwrap();
    let mut up = mouse(EventKind::MouseUp, EventTarget::Document, 100.0, 100.0);
    registry.dispatch(&mut page, &mut up).unwrap();

    assert_eq!(page.style_attribute(element).unwrap(), "");
    assert!(!page.has_class(element, "being-dragged"));
    assert_eq!(page.bounding_client_rect(element).unwrap(), Rect::new(80.0, 90.0, 50.0, 30.0));
    assert_eq!(registry.session(handle), None);
    assert_eq!(registry.controller(handle).unwrap().phase(), DragPhase::Idle);
    // Only the pointer-down listeners remain.
    assert_eq!(page.listeners().len(), 2);
}

#[test]
fn release_clears_dragged_properties_only() {
    init_logger();
    let (mut page, element) = flat_page();
    page.set_style_attribute(element, "position: relative; left: 5px; z-index: 3")
        .unwrap();
    let mut registry = DragRegistry::default();
    registry.enable_drag(&mut page, element, DragOptions::new());

    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 100.0, 100.0);
    registry.dispatch(&mut page, &mut down).unwrap();
    let mut up = mouse(EventKind::MouseUp, EventTarget::Document, 100.0, 100.0);
    registry.dispatch(&mut page, &mut up).unwrap();

    assert_eq!(page.style_attribute(element).unwrap(), "z-index: 3;");
    assert_eq!(page.inline_value(element, "left").unwrap(), None);
    assert_eq!(page.inline_value(element, "position").unwrap(), None);
}

#[test]
fn failed_start_leaves_the_element_untouched() {
    init_logger();
    let (mut page, element) = flat_page();
    let mut registry = DragRegistry::new(DragConfig::new("being dragged", true));
    let handle = registry.enable_drag(&mut page, element, DragOptions::new());

    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 100.0, 100.0);
    assert!(registry.dispatch(&mut page, &mut down).is_err());

    assert_eq!(page.style_attribute(element).unwrap(), "");
    assert_eq!(registry.controller(handle).unwrap().phase(), DragPhase::Idle);
    assert_eq!(registry.session(handle), None);
    // Only the pointer-down listeners remain.
    assert_eq!(page.listeners().len(), 2);
}

#[test]
fn events_after_release_are_ignored() {
    init_logger();
    let (mut page, element) = flat_page();
    let mut registry = DragRegistry::default();
    registry.enable_drag(&mut page, element, DragOptions::new());

    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 100.0, 100.0);
    registry.dispatch(&mut page, &mut down).unwrap();
    let mut up = mouse(EventKind::MouseUp, EventTarget::Document, 100.0, 100.0);
    registry.dispatch(&mut page, &mut up).unwrap();

    let mut moved = mouse(EventKind::MouseMove, EventTarget::Document, 400.0, 400.0);
    registry.dispatch(&mut page, &mut moved).unwrap();
    page.scroll_by(0.0, 10.0);
    registry.dispatch(&mut page, &mut InputEvent::scroll()).unwrap();
    assert_eq!(page.style_attribute(element).unwrap(), "");
    assert_eq!(registry.active_sessions().count(), 0);
}

#[test]
fn transformed_parent_is_the_container() {
    init_logger();
    let mut page = Page::new();
    let body = page.create_element(NodeKey::ROOT, "body").unwrap();
    let parent = page.create_element(body, "div").unwrap();
    let element = page.create_element(parent, "div").unwrap();
    page.set_flow_box(body, Rect::new(0.0, 0.0, 1000.0, 3000.0)).unwrap();
    page.set_flow_box(parent, Rect::new(200.0, 150.0, 400.0, 300.0)).unwrap();
    page.set_flow_box(element, Rect::new(210.0, 160.0, 50.0, 30.0)).unwrap();
    page.apply_sheet_declarations(
        parent,
        "transform: translate(0, 0); border-left-width: 2px; border-top-width: 3px",
    )
    .unwrap();

    let mut registry = DragRegistry::default();
    let handle = registry.enable_drag(&mut page, element, DragOptions::new());
    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 220.0, 170.0);
    registry.dispatch(&mut page, &mut down).unwrap();

    assert_eq!(registry.session(handle).unwrap().container, Some(parent));
    assert_eq!(registry.controller(handle).unwrap().draggable().container, Some(parent));
    // Relative to the padding box at (202, 153), not the page origin.
    assert_eq!(left_top(&page, element), (Some(8.0), Some(7.0)));
    assert_eq!(page.bounding_client_rect(element).unwrap().origin(), Point::new(210.0, 160.0));

    let mut moved = mouse(EventKind::MouseMove, EventTarget::Document, 300.0, 250.0);
    registry.dispatch(&mut page, &mut moved).unwrap();
    assert_eq!(left_top(&page, element), (Some(88.0), Some(87.0)));
    let rect = page.bounding_client_rect(element).unwrap();
    assert_eq!((rect.x, rect.y), (290.0, 240.0));
}

#[test]
fn container_is_resolved_again_for_each_drag() {
    init_logger();
    let mut page = Page::new();
    let body = page.create_element(NodeKey::ROOT, "body").unwrap();
    let parent = page.create_element(body, "div").unwrap();
    let element = page.create_element(parent, "div").unwrap();
    page.set_flow_box(parent, Rect::new(200.0, 150.0, 400.0, 300.0)).unwrap();
    page.set_flow_box(element, Rect::new(210.0, 160.0, 50.0, 30.0)).unwrap();

    let mut registry = DragRegistry::default();
    let handle = registry.enable_drag(&mut page, element, DragOptions::new());
    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 220.0, 170.0);
    registry.dispatch(&mut page, &mut down).unwrap();
    assert_eq!(registry.session(handle).unwrap().container, None);
    let mut up = mouse(EventKind::MouseUp, EventTarget::Document, 220.0, 170.0);
    registry.dispatch(&mut page, &mut up).unwrap();

    page.apply_sheet_declarations(parent, "position: relative").unwrap();
    let mut down = mouse(EventKind::MouseDown, EventTarget::Element(element), 220.0, 170.0);
    registry.dispatch(&mut page, &mut down).unwrap();
    assert_eq!(registry.session(handle).unwrap().container, Some(parent));
    assert_eq!(left_top(&page, element), (Some(10.0), Some(10.0)));
}
