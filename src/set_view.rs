// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # `ReadOnlySetView`: a read-only wrap over a shared mutable `HashSet`.
//! The view forwards every query to the wrapped set and exposes no mutation
//! path at all.

use error::SetViewError;
use read_only_set::ReadOnlySet;

use std::borrow::Borrow;
use std::cell::{Ref, RefCell};
use std::collections::hash_map::RandomState;
use std::collections::hash_set;
use std::collections::HashSet;
use std::fmt::{self};
use std::hash::{BuildHasher, Hash};
use std::iter::FusedIterator;
use std::rc::{Rc, Weak};

/// A read-only view over a mutable `HashSet`.
///
/// The view holds a shared handle (`Rc<RefCell<...>>`) to a set it does not
/// exclusively own. The owner keeps its own handle and mutates the set
/// through it; the view observes every change immediately. There is no
/// snapshotting and no caching: what the view reports at any instant is
/// exactly what the backing set contains at that instant.
///
/// The view hands out neither its handle nor any `&mut` path, so holding a
/// `ReadOnlySetView` grants no ability to change the set. Construction is
/// O(1) and copies no elements.
///
/// No thread-safety is added: the handle is an `Rc`, so a view stays on the
/// thread its backing set lives on. Queries take a `RefCell` read borrow for
/// their duration; mutating the set through the owner's handle while an
/// [`iter`] from the view is alive panics, as any `RefCell` aliasing does.
///
/// # Examples
///
/// ```
/// use std::cell::RefCell;
/// use std::collections::HashSet;
/// use std::rc::Rc;
/// use setviews::read_only_set::ReadOnlySet;
/// use setviews::set_view::ReadOnlySetView;
///
/// let nums = Rc::new(RefCell::new(HashSet::new()));
/// nums.borrow_mut().insert(17);
///
/// let view = ReadOnlySetView::new(Rc::clone(&nums));
/// assert!(view.contains(&17));
/// assert_eq!(view.len(), 1);
///
/// // Mutations through the owner are visible through the view right away.
/// nums.borrow_mut().insert(42);
/// assert!(view.contains(&42));
/// ```
///
/// [`iter`]: #method.iter
pub struct ReadOnlySetView<T, S = RandomState> {
    items: Rc<RefCell<HashSet<T, S>>>,
}

impl<T: Eq + Hash> ReadOnlySetView<T, RandomState> {
    /// Returns a view that is empty forever.
    ///
    /// The backing set is created here and its handle is never given out, so
    /// no code path anywhere can put an element into it. Useful as a default
    /// or sentinel value where a set view is expected but there is nothing
    /// to show.
    ///
    /// # Examples
    ///
    /// ```
    /// use setviews::read_only_set::ReadOnlySet;
    /// use setviews::set_view::ReadOnlySetView;
    ///
    /// let none: ReadOnlySetView<i32> = ReadOnlySetView::empty();
    /// assert_eq!(none.len(), 0);
    /// assert!(none.is_empty());
    /// assert!(!none.contains(&1));
    /// ```
    #[inline]
    pub fn empty() -> ReadOnlySetView<T, RandomState> {
        ReadOnlySetView::new(Rc::new(RefCell::new(HashSet::new())))
    }
}

impl<T, S> ReadOnlySetView<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    /// Creates a read-only view over `items`.
    ///
    /// The view keeps its own handle to the set, so the set lives at least
    /// as long as the view does. The caller normally retains another handle
    /// and goes on mutating the set through it.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::collections::HashSet;
    /// use std::rc::Rc;
    /// use setviews::read_only_set::ReadOnlySet;
    /// use setviews::set_view::ReadOnlySetView;
    ///
    /// let items = Rc::new(RefCell::new(HashSet::from([1, 2, 3])));
    /// let view = ReadOnlySetView::new(Rc::clone(&items));
    /// assert_eq!(view.len(), 3);
    /// ```
    #[inline]
    pub fn new(items: Rc<RefCell<HashSet<T, S>>>) -> ReadOnlySetView<T, S> {
        ReadOnlySetView { items }
    }

    /// Creates a read-only view from a weak handle.
    ///
    /// Fails with [`SetViewError::InvalidArgument`] when the backing set has
    /// already been dropped, i.e. the handle no longer refers to anything.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::collections::HashSet;
    /// use std::rc::Rc;
    /// use setviews::set_view::ReadOnlySetView;
    ///
    /// let items = Rc::new(RefCell::new(HashSet::from([1, 2, 3])));
    /// let weak = Rc::downgrade(&items);
    ///
    /// assert!(ReadOnlySetView::from_weak(&weak).is_ok());
    /// drop(items);
    /// assert!(ReadOnlySetView::from_weak(&weak).is_err());
    /// ```
    ///
    /// [`SetViewError::InvalidArgument`]: ../error/enum.SetViewError.html
    pub fn from_weak(
        items: &Weak<RefCell<HashSet<T, S>>>,
    ) -> Result<ReadOnlySetView<T, S>, SetViewError> {
        match items.upgrade() {
            Some(items) => Ok(ReadOnlySetView { items }),
            None => Err(SetViewError::InvalidArgument(
                "the backing set has been dropped",
            )),
        }
    }

    /// An iterator visiting all elements in arbitrary order.
    /// The iterator element type is `T`; elements are cloned out of the
    /// backing set lazily, one per `next` call.
    ///
    /// The order is whatever the backing set yields and is not stable across
    /// mutations. The iterator keeps the backing set read-locked for as long
    /// as it is alive; mutating the set through the owner's handle during
    /// that window panics. Call `iter` again for a fresh pass.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::collections::HashSet;
    /// use std::rc::Rc;
    /// use setviews::set_view::ReadOnlySetView;
    ///
    /// let items = Rc::new(RefCell::new(HashSet::from([7, 22])));
    /// let view = ReadOnlySetView::new(Rc::clone(&items));
    ///
    /// // Will print in an arbitrary order.
    /// for x in view.iter() {
    ///     println!("{}", x);
    /// }
    /// ```
    pub fn iter(&self) -> Iter<T, S> {
        // `Borrow` is in scope for the comparison signatures and its blanket
        // impls capture a plain `.borrow()` on the `Rc`, so the cell borrow
        // has to be called by name here and in every query below.
        let guard = RefCell::borrow(&self.items);
        // The backing set lives on the heap behind the `Rc` and stays
        // read-locked while `guard` is held, so the internal borrow stays
        // valid for the iterator's whole lifetime. No reference leaves the
        // iterator; elements are cloned out.
        let iter = unsafe { &*(&*guard as *const HashSet<T, S>) }.iter();
        Iter { iter, _guard: guard }
    }
}

impl<T, S> ReadOnlySet<T> for ReadOnlySetView<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    #[inline]
    fn len(&self) -> usize {
        RefCell::borrow(&self.items).len()
    }

    #[inline]
    fn contains(&self, value: &T) -> bool {
        RefCell::borrow(&self.items).contains(value)
    }

    fn is_subset_of<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>
    {
        let other: Vec<I::Item> = other.into_iter().collect();
        let distinct: HashSet<&T> = other.iter().map(|v| v.borrow()).collect();
        let items = RefCell::borrow(&self.items);
        items.iter().all(|v| distinct.contains(v))
    }

    fn is_proper_subset_of<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>
    {
        let other: Vec<I::Item> = other.into_iter().collect();
        let distinct: HashSet<&T> = other.iter().map(|v| v.borrow()).collect();
        let items = RefCell::borrow(&self.items);
        items.len() < distinct.len() && items.iter().all(|v| distinct.contains(v))
    }

    fn is_superset_of<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>
    {
        let items = RefCell::borrow(&self.items);
        other.into_iter().all(|v| {
            let v: &T = v.borrow();
            items.contains(v)
        })
    }

    fn is_proper_superset_of<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>
    {
        // `other` must be deduplicated before its size means anything.
        let other: Vec<I::Item> = other.into_iter().collect();
        let distinct: HashSet<&T> = other.iter().map(|v| v.borrow()).collect();
        let items = RefCell::borrow(&self.items);
        distinct.len() < items.len() && distinct.iter().all(|&v| items.contains(v))
    }

    fn overlaps<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>
    {
        let items = RefCell::borrow(&self.items);
        other.into_iter().any(|v| {
            let v: &T = v.borrow();
            items.contains(v)
        })
    }

    fn set_equals<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>
    {
        let other: Vec<I::Item> = other.into_iter().collect();
        let distinct: HashSet<&T> = other.iter().map(|v| v.borrow()).collect();
        let items = RefCell::borrow(&self.items);
        distinct.len() == items.len() && distinct.iter().all(|&v| items.contains(v))
    }
}

impl<T, S> Clone for ReadOnlySetView<T, S> {
    /// Returns a view over the same backing set.
    ///
    /// This copies the handle, not the elements; mutations through the owner
    /// stay visible through both views.
    #[inline]
    fn clone(&self) -> ReadOnlySetView<T, S> {
        ReadOnlySetView { items: Rc::clone(&self.items) }
    }
}

impl<T, S> Default for ReadOnlySetView<T, S>
    where T: Eq + Hash,
          S: BuildHasher + Default
{
    /// Creates a permanently empty view, like [`empty`].
    ///
    /// [`empty`]: struct.ReadOnlySetView.html#method.empty
    fn default() -> ReadOnlySetView<T, S> {
        ReadOnlySetView::new(Rc::new(RefCell::new(HashSet::with_hasher(S::default()))))
    }
}

impl<T, S> PartialEq for ReadOnlySetView<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{
    /// Set equality: same distinct elements, any order.
    fn eq(&self, other: &ReadOnlySetView<T, S>) -> bool {
        *RefCell::borrow(&self.items) == *RefCell::borrow(&other.items)
    }
}

impl<T, S> Eq for ReadOnlySetView<T, S>
    where T: Eq + Hash,
          S: BuildHasher
{}

impl<T, S> fmt::Debug for ReadOnlySetView<T, S>
    where T: Eq + Hash + fmt::Debug,
          S: BuildHasher
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(RefCell::borrow(&self.items).iter()).finish()
    }
}

/// Conversion into a read-only view, for set owners.
pub trait AsReadOnlySet<T, S> {
    /// Returns a [`ReadOnlySetView`] wrapper for the current set.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::cell::RefCell;
    /// use std::collections::HashSet;
    /// use std::rc::Rc;
    /// use setviews::read_only_set::ReadOnlySet;
    /// use setviews::set_view::AsReadOnlySet;
    ///
    /// let items = Rc::new(RefCell::new(HashSet::from([1, 2])));
    /// let view = items.as_read_only_set();
    /// assert_eq!(view.len(), 2);
    /// ```
    ///
    /// [`ReadOnlySetView`]: struct.ReadOnlySetView.html
    fn as_read_only_set(&self) -> ReadOnlySetView<T, S>;
}

impl<T, S> AsReadOnlySet<T, S> for Rc<RefCell<HashSet<T, S>>>
    where T: Eq + Hash,
          S: BuildHasher
{
    #[inline]
    fn as_read_only_set(&self) -> ReadOnlySetView<T, S> {
        ReadOnlySetView::new(Rc::clone(self))
    }
}

/// A cloning iterator over the items of a `ReadOnlySetView`.
///
/// This `struct` is created by the [`iter`] method on [`ReadOnlySetView`].
/// See its documentation for more.
///
/// [`ReadOnlySetView`]: struct.ReadOnlySetView.html
/// [`iter`]: struct.ReadOnlySetView.html#method.iter
pub struct Iter<'a, T: 'a, S: 'a = RandomState> {
    iter: hash_set::Iter<'a, T>,
    _guard: Ref<'a, HashSet<T, S>>,
}

impl<'a, T: 'a, S: 'a> Clone for Iter<'a, T, S> {
    fn clone(&self) -> Iter<'a, T, S> {
        Iter {
            iter: self.iter.clone(),
            _guard: Ref::clone(&self._guard),
        }
    }
}

impl<'a, T: 'a + Clone, S: 'a> Iterator for Iter<'a, T, S> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.iter.next().cloned()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<'a, T: 'a + Clone, S: 'a> ExactSizeIterator for Iter<'a, T, S> {
    fn len(&self) -> usize {
        self.iter.len()
    }
}

impl<'a, T: 'a + Clone, S: 'a> FusedIterator for Iter<'a, T, S> {}

impl<'a, T, S> IntoIterator for &'a ReadOnlySetView<T, S>
    where T: Eq + Hash + Clone,
          S: BuildHasher
{
    type Item = T;
    type IntoIter = Iter<'a, T, S>;

    fn into_iter(self) -> Iter<'a, T, S> {
        self.iter()
    }
}
