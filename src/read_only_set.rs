// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # `ReadOnlySet`: the query surface of a set, with no mutation capability.
//! The trait behind [`ReadOnlySetView`]. Takers of a `ReadOnlySet` bound can
//! ask everything about a set's content and change none of it.
//!
//! [`ReadOnlySetView`]: ../set_view/struct.ReadOnlySetView.html

use std::borrow::Borrow;
use std::hash::Hash;

/// Non-mutating set queries.
///
/// All comparison operations accept any sequence whose items borrow as `T`:
/// a slice, a `&Vec<T>`, a `&HashSet<T>`, an iterator of owned elements,
/// another view, and so on. Duplicates in the sequence collapse, as set
/// semantics dictate; order never matters. None of the operations mutate
/// anything.
///
/// Elements only need [`Eq`] and [`Hash`]; no ordering is required.
///
/// # Examples
///
/// ```
/// # #[macro_use] extern crate setviews;
/// use setviews::read_only_set::ReadOnlySet;
///
/// fn report<S: ReadOnlySet<i32>>(s: &S) -> String {
///     format!("{} elements, has 7: {}", s.len(), s.contains(&7))
/// }
/// # fn main() {
/// let v = setview![7, 11];
/// assert_eq!(report(&v), "2 elements, has 7: true");
/// # }
/// ```
///
/// [`Eq`]: https://doc.rust-lang.org/std/cmp/trait.Eq.html
/// [`Hash`]: https://doc.rust-lang.org/std/hash/trait.Hash.html
pub trait ReadOnlySet<T: Eq + Hash> {
    /// Returns the number of elements in the set.
    fn len(&self) -> usize;

    /// Returns `true` if the set contains no elements.
    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if the set contains a value.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setviews;
    /// # use setviews::read_only_set::ReadOnlySet;
    /// # fn main() {
    /// let v = setview![1, 2, 3];
    /// assert_eq!(v.contains(&1), true);
    /// assert_eq!(v.contains(&4), false);
    /// # }
    /// ```
    fn contains(&self, value: &T) -> bool;

    /// Returns `true` if the set is a subset of `other`,
    /// i.e. `other` contains at least all the values in `self`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setviews;
    /// # use setviews::read_only_set::ReadOnlySet;
    /// # fn main() {
    /// let v = setview![1, 2, 3];
    /// assert!(v.is_subset_of(&[1, 2, 3, 4]));
    /// assert!(v.is_subset_of(&[3, 2, 1]));
    /// assert!(!v.is_subset_of(&[1, 2]));
    /// # }
    /// ```
    fn is_subset_of<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>;

    /// Returns `true` if the set is a proper (strict) subset of `other`,
    /// i.e. a subset with strictly fewer distinct elements than `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setviews;
    /// # use setviews::read_only_set::ReadOnlySet;
    /// # fn main() {
    /// let v = setview![1, 2, 3];
    /// assert!(v.is_proper_subset_of(&[1, 2, 3, 4]));
    /// assert!(!v.is_proper_subset_of(&[1, 2, 3]));
    /// # }
    /// ```
    fn is_proper_subset_of<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>;

    /// Returns `true` if the set is a superset of `other`,
    /// i.e. `self` contains at least all the values in `other`.
    fn is_superset_of<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>;

    /// Returns `true` if the set is a proper (strict) superset of `other`,
    /// i.e. a superset with strictly more distinct elements than `other`.
    fn is_proper_superset_of<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>;

    /// Returns `true` if the set and `other` share at least one element.
    /// This is equivalent to checking for a non-empty intersection.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setviews;
    /// # use setviews::read_only_set::ReadOnlySet;
    /// # fn main() {
    /// let v = setview![1, 2, 3];
    /// assert!(v.overlaps(&[3, 4, 5]));
    /// assert!(!v.overlaps(&[4, 5]));
    /// # }
    /// ```
    fn overlaps<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>;

    /// Returns `true` if the set and `other` contain the same distinct
    /// elements, in any order.
    ///
    /// # Examples
    ///
    /// ```
    /// # #[macro_use] extern crate setviews;
    /// # use setviews::read_only_set::ReadOnlySet;
    /// # fn main() {
    /// let v = setview![1, 2, 3];
    /// assert!(v.set_equals(&[3, 2, 1]));
    /// assert!(v.set_equals(&[1, 1, 2, 3]));
    /// assert!(!v.set_equals(&[1, 2]));
    /// # }
    /// ```
    fn set_equals<I>(&self, other: I) -> bool
        where I: IntoIterator,
              I::Item: Borrow<T>;
}
