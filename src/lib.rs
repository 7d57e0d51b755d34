// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! # Set Views for Rust
//! Read-only views over mutable sets.
//!
//! `ReadOnlySetView` wraps a shared handle to a `HashSet` and exposes only
//! the non-mutating part of its API: size, membership and the six
//! set-comparison predicates, plus iteration. The owner keeps its own handle
//! and mutates the set as usual; every change is immediately visible through
//! the view, but no code path on the view can change the set. This makes the
//! view a safe way to publish a set's contents across an ownership boundary.
//!
//! The view implements no set theory of its own. Every operation is a direct
//! delegation to the wrapped `HashSet`, so the semantics are exactly the
//! standard library's.
//!
//! `ReadOnlySet` is the trait behind the view: the query surface of a set
//! with the mutators carved away. Code that only needs to ask questions of a
//! set can take a `ReadOnlySet` bound instead of a concrete container.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! setviews = "0.1"
//! ```
//!
//! and this to your crate root:
//!
//! ```rust
//! #[macro_use] extern crate setviews;
//! # fn main() {
//! # }
//! ```
//!

extern crate thiserror;

pub mod error;
pub mod read_only_set;
pub mod set_view;

/// Creates a [`ReadOnlySetView`] containing the arguments.
///
/// `setview!` builds a fresh backing set, inserts the arguments and wraps it
/// in a view holding the only handle to it, so the resulting view's content
/// is fixed for its whole lifetime. Duplicate arguments collapse, as in any
/// set.
///
/// ```
/// # #[macro_use] extern crate setviews;
/// # use setviews::read_only_set::ReadOnlySet;
/// # fn main() {
/// let v = setview![1, 2, 3, 2];
/// assert_eq!(v.len(), 3);
/// assert!(v.contains(&2));
/// assert!(!v.contains(&5));
/// # }
/// ```
///
/// The element type only needs [`Eq`] and [`Hash`], same as `HashSet`.
///
/// [`ReadOnlySetView`]: set_view/struct.ReadOnlySetView.html
/// [`Eq`]: https://doc.rust-lang.org/std/cmp/trait.Eq.html
/// [`Hash`]: https://doc.rust-lang.org/std/hash/trait.Hash.html
#[macro_export]
macro_rules! setview {
    ($($x:expr),*$(,)*) => ({
        let mut set = ::std::collections::HashSet::new();
        $(set.insert($x);)*
        $crate::set_view::ReadOnlySetView::new(
            ::std::rc::Rc::new(::std::cell::RefCell::new(set)))
    });
}
