//! Misc stuff.

use std::ops::Range;


pub(crate) trait RangeExt {

    /// Returns whether this value exists within the given half-open range
    /// of values.
    fn is_within(&self, range: Range<Self>) -> bool where Self: Sized;
}

// Anything that can be compared gets this, though it’s only ever used
// for day, week, and time-field bounds.

impl<T> RangeExt for T where T: PartialOrd<T> {
    fn is_within(&self, range: Range<Self>) -> bool {
        range.contains(self)
    }
}
