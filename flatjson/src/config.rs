//! Compile-time width configuration and limits.
//!
//! Constrained targets tune three widths: descriptor offsets, integer
//! values and floating point values. Each is selected by a cargo feature
//! so the choice is global to the build, exactly once, with no runtime
//! cost.
//!
//! | Feature     | Type        | Default       |
//! |-------------|-------------|---------------|
//! | `offset-32` | [`JsonSize`]  | `u16` (64KB inputs) |
//! | `int-32`    | [`JsonInt`]   | `i64`         |
//! | `float-32`  | [`JsonFloat`] | `f64`         |

/// Offset and count type stored in descriptors.
///
/// 32-bit offsets allow JSON texts up to ~4GB.
#[cfg(feature = "offset-32")]
pub type JsonSize = u32;

/// Offset and count type stored in descriptors.
///
/// 16-bit offsets keep descriptors at 10 bytes and allow JSON texts up to
/// 65535 bytes. Enable the `offset-32` feature for larger inputs.
#[cfg(not(feature = "offset-32"))]
pub type JsonSize = u16;

/// Integer type produced by value accessors and accepted by the generator.
#[cfg(feature = "int-32")]
pub type JsonInt = i32;

/// Integer type produced by value accessors and accepted by the generator.
#[cfg(not(feature = "int-32"))]
pub type JsonInt = i64;

/// Floating point type produced by value accessors and accepted by the
/// generator.
#[cfg(feature = "float-32")]
pub type JsonFloat = f32;

/// Floating point type produced by value accessors and accepted by the
/// generator.
#[cfg(not(feature = "float-32"))]
pub type JsonFloat = f64;

/// Maximum size in bytes of a JSON text the parser accepts.
///
/// Bounded by the descriptor offset width: every byte of the input must be
/// addressable by a [`JsonSize`].
pub const MAX_JSON_STRING_SIZE: JsonSize = JsonSize::MAX;

/// Maximum nesting depth of objects and arrays.
pub const MAX_NESTING_LEVEL: u8 = u8::MAX;
