use super::*;
use std::cell::RefCell;
use std::rc::Rc;

/// Controller wired to a recorder so tests can assert exactly which
/// indices were handed to the rendering boundary.
fn recording(slide_count: usize) -> (GalleryController, Rc<RefCell<Vec<usize>>>) {
    let rendered = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&rendered);
    let gallery = GalleryController::new(slide_count, move |i| sink.borrow_mut().push(i));
    (gallery, rendered)
}

#[test]
fn starts_on_the_first_slide() {
    let (gallery, rendered) = recording(4);
    assert_eq!(gallery.current_index(), Some(0));
    assert!(rendered.borrow().is_empty());
}

#[test]
fn empty_gallery_is_inactive() {
    let (mut gallery, rendered) = recording(0);
    assert!(gallery.is_empty());
    assert_eq!(gallery.current_index(), None);
    assert_eq!(gallery.next(), None);
    assert_eq!(gallery.previous(), None);
    assert_eq!(
        gallery.go_to(0),
        Err(OutOfRangeError {
            index: 0,
            slide_count: 0
        })
    );
    assert_eq!(gallery.current_index(), None);
    assert!(rendered.borrow().is_empty());
}

#[test]
fn next_wraps_from_last_to_first() {
    let (mut gallery, rendered) = recording(4);
    assert_eq!(gallery.next(), Some(1));
    assert_eq!(gallery.next(), Some(2));
    assert_eq!(gallery.next(), Some(3));
    assert_eq!(gallery.next(), Some(0));
    assert_eq!(*rendered.borrow(), vec![1, 2, 3, 0]);
}

#[test]
fn previous_wraps_from_first_to_last() {
    let (mut gallery, _) = recording(4);
    assert_eq!(gallery.previous(), Some(3));
}

#[test]
fn full_cycle_returns_to_start() {
    for count in [1, 2, 3, 7] {
        let (mut gallery, _) = recording(count);
        gallery.go_to(count / 2).unwrap();
        let start = gallery.current_index();
        for _ in 0..count {
            gallery.next();
        }
        assert_eq!(gallery.current_index(), start, "count = {count}");
    }
}

#[test]
fn previous_undoes_next() {
    for count in [2, 3, 5] {
        for start in 0..count {
            let (mut gallery, _) = recording(count);
            gallery.go_to(start).unwrap();
            gallery.next();
            gallery.previous();
            assert_eq!(gallery.current_index(), Some(start));
        }
    }
}

#[test]
fn go_to_jumps_and_renders() {
    let (mut gallery, rendered) = recording(5);
    assert_eq!(gallery.go_to(3), Ok(3));
    assert_eq!(gallery.current_index(), Some(3));
    assert_eq!(*rendered.borrow(), vec![3]);
}

#[test]
fn go_to_out_of_range_leaves_state_untouched() {
    let (mut gallery, rendered) = recording(4);
    gallery.go_to(2).unwrap();
    rendered.borrow_mut().clear();

    for bad in [4, 5, usize::MAX] {
        assert_eq!(
            gallery.go_to(bad),
            Err(OutOfRangeError {
                index: bad,
                slide_count: 4
            })
        );
    }
    assert_eq!(gallery.current_index(), Some(2));
    assert!(rendered.borrow().is_empty());
}

#[test]
fn swipe_left_advances_once() {
    let (mut gallery, rendered) = recording(4);
    gallery.gesture_start(100.0);
    gallery.gesture_end(40.0); // delta 60 > threshold
    assert_eq!(gallery.current_index(), Some(1));
    assert_eq!(rendered.borrow().len(), 1);
}

#[test]
fn swipe_right_goes_back_once() {
    let (mut gallery, rendered) = recording(4);
    gallery.gesture_start(100.0);
    gallery.gesture_end(160.0); // delta -60 < -threshold
    assert_eq!(gallery.current_index(), Some(3));
    assert_eq!(rendered.borrow().len(), 1);
}

#[test]
fn short_drag_is_a_tap() {
    let (mut gallery, rendered) = recording(4);
    gallery.gesture_start(100.0);
    gallery.gesture_end(90.0); // delta 10, below threshold
    assert_eq!(gallery.current_index(), Some(0));
    assert!(rendered.borrow().is_empty());
}

#[test]
fn travel_exactly_at_threshold_is_discarded() {
    let (mut gallery, _) = recording(4);
    gallery.gesture_start(100.0);
    gallery.gesture_end(50.0); // delta == 50: not a swipe
    assert_eq!(gallery.current_index(), Some(0));
}

#[test]
fn stray_gesture_end_is_ignored() {
    let (mut gallery, rendered) = recording(4);
    gallery.gesture_end(40.0);
    assert_eq!(gallery.current_index(), Some(0));
    assert!(rendered.borrow().is_empty());
}

#[test]
fn new_gesture_start_overwrites_stale_one() {
    let (mut gallery, _) = recording(4);
    gallery.gesture_start(500.0);
    gallery.gesture_start(100.0);
    gallery.gesture_end(160.0); // measured against the second start
    assert_eq!(gallery.current_index(), Some(3));
}

#[test]
fn gesture_is_cleared_after_evaluation() {
    let (mut gallery, rendered) = recording(4);
    gallery.gesture_start(100.0);
    gallery.gesture_end(40.0);
    gallery.gesture_end(40.0); // no pending gesture anymore
    assert_eq!(gallery.current_index(), Some(1));
    assert_eq!(rendered.borrow().len(), 1);
}

#[test]
fn keys_navigate_while_focused() {
    let (mut gallery, _) = recording(4);
    gallery.set_focused(true);
    assert_eq!(gallery.handle_key(NavKey::ArrowRight), Some(1));
    assert_eq!(gallery.handle_key(NavKey::ArrowLeft), Some(0));
    assert_eq!(gallery.handle_key(NavKey::Other), None);
    assert_eq!(gallery.current_index(), Some(0));
}

#[test]
fn keys_are_ignored_without_focus() {
    let (mut gallery, rendered) = recording(4);
    assert_eq!(gallery.handle_key(NavKey::ArrowRight), None);
    assert_eq!(gallery.current_index(), Some(0));
    assert!(rendered.borrow().is_empty());
}

#[test]
fn single_slide_wraps_onto_itself() {
    let (mut gallery, rendered) = recording(1);
    assert_eq!(gallery.next(), Some(0));
    assert_eq!(gallery.previous(), Some(0));
    // Each successful navigation re-renders, even without an index change.
    assert_eq!(*rendered.borrow(), vec![0, 0]);
}

#[test]
fn reference_walk_through_four_slides() {
    let (mut gallery, _) = recording(4);
    assert_eq!(gallery.current_index(), Some(0));
    assert_eq!(gallery.next(), Some(1));
    assert_eq!(gallery.next(), Some(2));
    assert_eq!(gallery.next(), Some(3));
    assert_eq!(gallery.next(), Some(0));
    assert_eq!(gallery.previous(), Some(3));
}
