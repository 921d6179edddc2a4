//! Hexadecimal codec.

use crate::{Codec, Error, Params};

/// Converts bytes to a lowercase hexadecimal string.
pub fn to_hex(bytes: &[u8]) -> String {
    let mut hex = String::with_capacity(bytes.len() * 2);
    for byte in bytes.iter() {
        hex.push_str(&format!("{:02x}", byte));
    }
    hex
}

/// Converts a hexadecimal string to bytes.
///
/// Requires an even number of digits and no separators.
pub fn from_hex(hex: &str) -> Option<Vec<u8>> {
    if hex.len() % 2 != 0 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    (0..hex.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(&hex[i..i + 2], 16).ok())
        .collect()
}

/// Hexadecimal digit pairs, tolerating whitespace and a leading `0x`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hex;

impl Codec for Hex {
    fn id(&self) -> &'static str {
        "hex"
    }

    fn decode(&self, input: &str, _: &mut Params) -> Result<Vec<u8>, Error> {
        let stripped = input.replace(['\t', '\n', '\r', ' '], "");
        let digits = stripped.strip_prefix("0x").unwrap_or(&stripped);
        from_hex(digits)
            .ok_or_else(|| Error::MalformedInput(self.id(), "expected hex digit pairs".into()))
    }

    fn encode(&self, bytes: &[u8], _: &Params) -> String {
        to_hex(bytes)
    }
}
