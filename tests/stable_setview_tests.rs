// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

extern crate rand;
#[macro_use]
extern crate setviews;

use rand::prelude::*;
use setviews::read_only_set::ReadOnlySet;
use setviews::set_view::{AsReadOnlySet, ReadOnlySetView};
use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

fn owned<I: IntoIterator<Item = i32>>(items: I) -> Rc<RefCell<HashSet<i32>>> {
    Rc::new(RefCell::new(items.into_iter().collect()))
}

#[test]
fn basic_queries_delegate_to_backing_set() {
    let items = owned(vec![1, 2, 3]);
    let v = items.as_read_only_set();

    assert_eq!(v.len(), 3);
    assert!(v.contains(&2));
    assert!(!v.contains(&5));
    assert!(v.is_subset_of(&[1, 2, 3, 4]));
    assert!(!v.is_proper_subset_of(&[1, 2, 3]));
    assert!(v.set_equals(&[3, 2, 1]));
    assert!(!v.overlaps(&[4, 5]));

    items.borrow_mut().insert(4);
    assert!(v.contains(&4));
}

#[test]
fn random_parity_with_backing_set() {
    let mut rng = thread_rng();
    let backing = owned(vec![]);
    let view = backing.as_read_only_set();

    for _ in 0..1000 {
        let x: i32 = rng.gen_range(0..500);
        if rng.gen_bool(0.25) {
            backing.borrow_mut().remove(&x);
            assert!(!view.contains(&x));
        } else {
            backing.borrow_mut().insert(x);
            assert!(view.contains(&x));
        }
        assert_eq!(view.len(), backing.borrow().len());
        assert_eq!(view.is_empty(), backing.borrow().is_empty());
    }

    for x in 0..500 {
        assert_eq!(view.contains(&x), backing.borrow().contains(&x));
    }
    assert!(view.set_equals(&*backing.borrow()));
}

#[test]
fn random_comparison_properties() {
    let mut rng = thread_rng();

    for _ in 0..200 {
        let na = rng.gen_range(0..12);
        let nb = rng.gen_range(0..12);
        let a: HashSet<i32> = (0..na).map(|_| rng.gen_range(0..10)).collect();
        let b: HashSet<i32> = (0..nb).map(|_| rng.gen_range(0..10)).collect();

        let va = owned(a.iter().cloned()).as_read_only_set();
        let vb = owned(b.iter().cloned()).as_read_only_set();

        // Subset/superset symmetry.
        assert_eq!(va.is_subset_of(&b), vb.is_superset_of(&a));
        assert_eq!(va.is_proper_subset_of(&b), vb.is_proper_superset_of(&a));

        // Proper subset implies subset but not equality.
        if va.is_proper_subset_of(&b) {
            assert!(va.is_subset_of(&b));
            assert!(!va.set_equals(&b));
        }

        // Equality is mutual inclusion.
        assert_eq!(va.set_equals(&b), va.is_subset_of(&b) && vb.is_subset_of(&a));
        assert_eq!(va.set_equals(&b), va == vb);

        // Overlap is a non-empty intersection.
        let disjoint = a.intersection(&b).next().is_none();
        assert_eq!(va.overlaps(&b), !disjoint);
    }
}

#[test]
fn views_compose_with_views() {
    let a = owned(vec![1, 2]).as_read_only_set();
    let b = owned(vec![1, 2, 3]).as_read_only_set();

    assert!(a.is_subset_of(&b));
    assert!(a.is_proper_subset_of(&b));
    assert!(b.is_superset_of(&a));
    assert!(b.is_proper_superset_of(&a));
    assert!(a.overlaps(&b));
    assert!(!a.set_equals(&b));
}

#[test]
fn iteration_matches_backing_set() {
    let items = owned(vec![3, 1, 4, 1, 5, 9, 2, 6]);
    let view = items.as_read_only_set();

    let seen: HashSet<i32> = view.iter().collect();
    assert_eq!(seen, *items.borrow());

    // Restartable and exact-size.
    assert_eq!(view.iter().len(), items.borrow().len());
    let again: HashSet<i32> = (&view).into_iter().collect();
    assert_eq!(seen, again);
}

#[test]
fn empty_view_is_permanently_empty() {
    let none: ReadOnlySetView<String> = ReadOnlySetView::empty();

    assert_eq!(none.len(), 0);
    assert!(none.is_empty());
    assert!(!none.contains(&"anything".to_string()));
    assert_eq!(none.iter().count(), 0);

    let cloned = none.clone();
    assert!(cloned.is_empty());
}

#[test]
fn dead_weak_handle_is_rejected() {
    let items = owned(vec![1, 2]);
    let weak = Rc::downgrade(&items);

    assert!(ReadOnlySetView::from_weak(&weak).is_ok());
    drop(items);

    let err = ReadOnlySetView::from_weak(&weak).unwrap_err();
    assert!(format!("{}", err).starts_with("invalid argument"));
}

#[test]
fn setview_macro_builds_fixed_views() {
    let v = setview!["a", "b", "a"];

    assert_eq!(v.len(), 2);
    assert!(v.contains(&"a"));
    assert!(v.set_equals(&["b", "a"]));

    let empty: ReadOnlySetView<i32> = setview![];
    assert!(empty.is_empty());
}
