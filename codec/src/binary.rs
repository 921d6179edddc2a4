//! Binary (base-2) codec.

use crate::{Codec, Error, Params};

/// Groups of eight `0`/`1` characters, one group per byte, MSB first.
///
/// Decode strips spaces and left-pads the text with `0` to a multiple of
/// eight bits, so `"11111111"` and `"1 1111111"` both decode to `[0xFF]`.
#[derive(Clone, Copy, Debug, Default)]
pub struct Binary;

impl Codec for Binary {
    fn id(&self) -> &'static str {
        "binary"
    }

    fn decode(&self, input: &str, _: &mut Params) -> Result<Vec<u8>, Error> {
        let mut digits = input.replace(' ', "");
        if digits.len() % 8 != 0 {
            digits = "0".repeat(8 - digits.len() % 8) + &digits;
        }

        let mut bytes = Vec::with_capacity(digits.len() / 8);
        for group in digits.as_bytes().chunks(8) {
            let mut byte = 0u8;
            for &bit in group {
                byte = (byte << 1)
                    | match bit {
                        b'0' => 0,
                        b'1' => 1,
                        other => {
                            return Err(Error::MalformedInput(
                                self.id(),
                                format!("unexpected character {:?}", other as char),
                            ))
                        }
                    };
            }
            bytes.push(byte);
        }
        Ok(bytes)
    }

    fn encode(&self, bytes: &[u8], _: &Params) -> String {
        let mut out = String::with_capacity(bytes.len() * 8);
        for byte in bytes {
            out.push_str(&format!("{:08b}", byte));
        }
        out
    }
}
