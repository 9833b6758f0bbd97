// =============================================================================
// CRATE-LEVEL QUALITY LINTS
// =============================================================================
#![cfg_attr(not(test), no_std)]
#![forbid(unsafe_code)]
#![deny(unused_must_use)]
#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]
#![warn(unreachable_pub)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::broken_intra_doc_links)]
// =============================================================================
// CLIPPY CONFIGURATION
// =============================================================================
// Pedantic lints - allow stylistic ones that don't affect correctness
#![allow(clippy::doc_markdown)] // Code in docs - extensive changes needed
#![allow(clippy::must_use_candidate)] // Not all returned values need must_use
#![allow(clippy::cast_possible_truncation)] // Offsets are bounded by the configured width
#![allow(clippy::cast_sign_loss)] // Intentional in conversion routines
#![allow(clippy::cast_precision_loss)] // JsonInt to JsonFloat in conversion routines
#![allow(clippy::missing_errors_doc)] // # Errors sections - doc-heavy
#![allow(clippy::missing_panics_doc)] // # Panics sections - doc-heavy
#![allow(clippy::match_same_arms)] // Intentional for clarity
// Internal implementation where bounds/values are known at compile time or checked
#![allow(clippy::indexing_slicing)] // Cursor arithmetic over bounds-checked slices
#![allow(clippy::unwrap_used)] // Used after explicit checks or with known values

//! flatjson - Zero-allocation JSON parsing and generation
//!
//! # Overview
//!
//! flatjson parses a JSON text into a flat array of descriptors that index
//! into the original input buffer. Nothing is copied, nothing is allocated:
//! the caller owns both the input bytes and the descriptor array, and the
//! whole library is `no_std`.
//!
//! ```text
//! ┌──────────────────────┐      ┌───────────────────────────────────┐
//! │  input: &[u8]        │◄─────│  descriptors: &mut [JsonDescriptor]│
//! │  {"name":"nano", …}  │      │  [root obj][member "name"]…[⏚]    │
//! └──────────────────────┘      └───────────────────────────────────┘
//!            ▲                                  ▲
//!            └────────── JsonValue ─────────────┘
//! ```
//!
//! Descriptors are laid out in pre-order document order, so navigation
//! needs no pointers: the children of a composite start right after it and
//! end where the nesting level drops back.
//!
//! # Quick Start
//!
//! ```
//! use flatjson::{parse, JsonDescriptor};
//!
//! let json = br#"{"name":"nano","size":42,"tags":["a","b"]}"#;
//! let mut descriptors = [JsonDescriptor::default(); 8];
//!
//! let root = parse(json, &mut descriptors).unwrap();
//! assert!(root.is_object());
//! assert_eq!(root.size(), 3);
//!
//! let size = root.get(b"size").unwrap();
//! assert!(size.is_integer());
//! assert_eq!(size.as_int(), 42);
//!
//! let tags = root.get(b"tags").unwrap();
//! let firsts: Vec<&[u8]> = tags.iter().map(|v| v.raw()).collect();
//! assert_eq!(firsts, [b"a".as_slice(), b"b".as_slice()]);
//! ```
//!
//! # Generation
//!
//! JSON output goes into a caller-supplied buffer through
//! [`JsonGenerator`]; overflow is reported, never allocated around:
//!
//! ```
//! use flatjson::JsonGenerator;
//!
//! let mut buf = [0u8; 64];
//! let mut out = JsonGenerator::new(&mut buf);
//! out.object_begin(b"");
//! out.value_str(b"name", b"nano");
//! out.value_int(b"size", 42);
//! out.object_end();
//! let len = out.finish().unwrap();
//! assert_eq!(&buf[..len], br#"{"name":"nano","size":42}"#);
//! ```
//!
//! # Configuration
//!
//! Widths are selected at compile time through cargo features:
//!
//! | Feature     | Default      | Enabled       |
//! |-------------|--------------|---------------|
//! | `offset-32` | `u16` (64KB) | `u32` (~4GB)  |
//! | `int-32`    | `i64`        | `i32`         |
//! | `float-32`  | `f64`        | `f32`         |
//!
//! # Limits
//!
//! - Maximum input size: [`MAX_JSON_STRING_SIZE`] bytes.
//! - Maximum container nesting: [`MAX_NESTING_LEVEL`] levels.
//! - Supported escapes: `\\ \/ \" \n \r \b \f \t` (no `\uXXXX`).
//! - Numbers: optional sign, digits, optional single decimal point
//!   (no exponent form).

pub mod config;
pub mod convert;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod parser;
pub mod value;


pub use config::{JsonFloat, JsonInt, JsonSize, MAX_JSON_STRING_SIZE, MAX_NESTING_LEVEL};
pub use descriptor::{JsonDescriptor, JsonKind};
pub use error::{ParseError, ParseErrorKind};
pub use generator::JsonGenerator;
pub use parser::parse;
pub use value::{JsonIter, JsonValue, unescape_in_place};
