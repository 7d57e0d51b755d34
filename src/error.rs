// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
//

//! Error type for the fallible view constructors.

use thiserror::Error;

/// The single error kind this crate produces.
///
/// Every failure here is immediate, synchronous and caller-correctable: fix
/// the call site and the operation cannot fail. There is no I/O and no
/// recovery logic behind any of it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetViewError {
    /// A required reference was absent, e.g. constructing a view from a weak
    /// handle whose backing set has already been dropped.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
}
