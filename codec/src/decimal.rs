//! Decimal (base-10 unsigned integer) codec.

use crate::{Codec, Error, Params};
use std::num::IntErrorKind;

/// Placeholder rendered when the bytes do not fit in 64 bits.
const TOO_LARGE: &str = "# too large";

/// Base-10 unsigned integers up to 64 bits wide.
///
/// Canonical bytes are the big-endian minimal encoding with leading zero
/// bytes stripped, so `"0"` decodes to the empty sequence and encode of the
/// empty sequence renders `"0"`. This representation is deliberately
/// non-injective: `[0x00, 0x01]` and `[0x01]` both render as `"1"`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Decimal;

impl Codec for Decimal {
    fn id(&self) -> &'static str {
        "decimal"
    }

    fn decode(&self, input: &str, _: &mut Params) -> Result<Vec<u8>, Error> {
        let value: u64 = input.parse().map_err(|err: std::num::ParseIntError| {
            match err.kind() {
                IntErrorKind::PosOverflow => Error::Overflow(64),
                _ => Error::MalformedInput(self.id(), err.to_string()),
            }
        })?;

        let mut bytes = value.to_be_bytes().to_vec();
        while bytes.first() == Some(&0) {
            bytes.remove(0);
        }
        Ok(bytes)
    }

    fn encode(&self, bytes: &[u8], _: &Params) -> String {
        if bytes.len() > 8 {
            return TOO_LARGE.into();
        }
        let mut wide = [0u8; 8];
        wide[8 - bytes.len()..].copy_from_slice(bytes);
        u64::from_be_bytes(wide).to_string()
    }
}
