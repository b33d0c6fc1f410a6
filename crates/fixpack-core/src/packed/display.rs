//! Lisp-style rendering of packed and plain tuples.

use core::fmt;

use super::list::DisplayFields;
use super::tuple::Tuple;
use super::PackedTuple;

impl<L: Tuple> fmt::Display for PackedTuple<L>
where
    L::Packed: DisplayFields,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        self.0.fmt_fields(f, true)?;
        f.write_str(")")
    }
}

/// Renders a plain tuple the way [`PackedTuple`] renders itself.
///
/// ```
/// use fixpack_core::ListFormat;
///
/// assert_eq!(ListFormat(&(1, 'x', "yz")).to_string(), "(1 x yz)");
/// ```
#[derive(Debug)]
pub struct ListFormat<'a, L>(pub &'a L);

impl<L: Tuple> fmt::Display for ListFormat<'_, L>
where
    L::Packed: DisplayFields,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&PackedTuple::new(*self.0), f)
    }
}
