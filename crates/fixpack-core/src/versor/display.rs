//! `Display` formatting for [`Versor`].

use core::fmt;

use super::Versor;

impl<T: fmt::Display, const N: usize> fmt::Display for Versor<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, ")")
    }
}
