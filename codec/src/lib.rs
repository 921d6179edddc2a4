//! Convert bytes between textual representations.
//!
//! # Overview
//!
//! Every codec in this crate reads and writes one canonical in-memory byte
//! sequence. A request cycle decodes the text of exactly one codec into
//! that sequence, then re-encodes it through every codec for display:
//!
//! - Decode: `text -> bytes`, fallible ([`Error`])
//! - Encode: `bytes -> text`, infallible, accepts arbitrary bytes
//!
//! Auxiliary per-codec state (like the Bech32 human-readable prefix) rides
//! in a [`Params`] store passed to both directions, so it can survive a
//! round trip through a stateless request/response cycle.
//!
//! # Example
//!
//! ```
//! use bytescope_codec::{Base64, Codec, Hex, Params};
//!
//! let mut params = Params::new();
//! let bytes = Hex.decode("0xAABB", &mut params).unwrap();
//! assert_eq!(bytes, [0xAA, 0xBB]);
//! assert_eq!(Base64.encode(&bytes, &params), "qrs=");
//! assert_eq!(Hex.encode(&bytes, &params), "aabb");
//! ```

pub mod ascii;
pub mod base64;
pub mod bech32;
pub mod binary;
pub mod codec;
pub mod decimal;
pub mod error;
pub mod hex;
pub mod params;
pub mod wire;

// Re-export main types and traits
pub use ascii::Ascii;
pub use self::base64::Base64;
pub use bech32::Bech32;
pub use binary::Binary;
pub use codec::{Codec, Render};
pub use decimal::Decimal;
pub use error::Error;
pub use hex::Hex;
pub use params::Params;
pub use wire::Protobuf;
