//! # Fixpack
//!
//! Exactly packed heterogeneous tuples and fixed-length vectors with
//! element-wise algebra.
//!
//! One `use fixpack::prelude::*;` brings in [`PackedTuple`](core::PackedTuple),
//! [`Versor`](core::Versor) and their protocol traits.
//!
//! ```
//! use fixpack::prelude::*;
//!
//! let rec = PackedTuple::new((3.14, 'c', 42));
//! assert_eq!(rec.to_string(), "(3.14 c 42)");
//!
//! let v = Versor::new([1.0, 2.0, 3.0]) * 2.0;
//! assert_eq!(v, Versor::new([2.0, 4.0, 6.0]));
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `std` *(default)* | `std::error::Error` for [`CoreError`](core::CoreError) |
//! | `bytemuck` *(default)* | Zero-copy byte views of both containers |

#![cfg_attr(not(feature = "std"), no_std)]

pub use fixpack_core as core;

/// Glob-import convenience: `use fixpack::prelude::*;`
pub mod prelude {
    pub use fixpack_core::prelude::*;
}
