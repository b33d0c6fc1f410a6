//! `fixpack-core` — fixed-arity value containers.
//!
//! Two families of flat, `Copy`, allocation-free containers:
//!
//! - [`PackedTuple`]: heterogeneous, with a footprint equal to the exact
//!   sum of its element footprints (no padding).
//! - [`Versor`]: homogeneous, `[T; N]`-backed, with element-wise
//!   arithmetic and bitwise operators that combine operands of different
//!   lengths by truncating to the shortest.
//!
//! Both share the indexed-element protocol in [`protocol`]: build-time
//! checked `get::<I>()`, run-time checked access by signed index, and
//! type-level [`Arity`] / [`ElementOf`] reflection.
//!
//! # Design
//!
//! - `no_std` unless the `std` feature (default) is enabled.
//! - Float equality on [`Versor`] is ULP-tolerant, see [`ulp`]; ordering
//!   stays exact.
//! - With the `bytemuck` feature (default) both families expose
//!   zero-copy byte views.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "bytemuck")]
mod bytes;
pub mod dtype;
pub mod error;
pub mod packed;
pub mod protocol;
pub mod ulp;
pub mod versor;

// Re-export key types at crate root for convenience.
pub use dtype::{ElementEq, Float, Scalar};
pub use error::{CoreError, Result};
pub use packed::{ListFormat, PackedTuple, Tuple};
pub use protocol::{Arity, ElementOf, check_index};
pub use ulp::{almost_equal, almost_equal_ulps};
pub use versor::{Versor, cross, inner};

/// Items intended for glob-import: `use fixpack_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::{ElementEq, Float, Scalar};
    pub use crate::error::{CoreError, Result};
    pub use crate::packed::{ListFormat, PackedTuple};
    pub use crate::protocol::{Arity, ElementOf};
    pub use crate::ulp::almost_equal;
    pub use crate::versor::{Versor, cross, inner};
}
