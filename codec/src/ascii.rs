//! ASCII codec: the identity representation.

use crate::{Codec, Error, Params};

/// Treats the text's raw UTF-8 bytes as the canonical bytes.
///
/// Decode never fails. Encode is lossy for bytes that are not valid UTF-8,
/// which is unavoidable when rendering arbitrary byte sequences as text.
#[derive(Clone, Copy, Debug, Default)]
pub struct Ascii;

impl Codec for Ascii {
    fn id(&self) -> &'static str {
        "ascii"
    }

    fn decode(&self, input: &str, _: &mut Params) -> Result<Vec<u8>, Error> {
        Ok(input.as_bytes().to_vec())
    }

    fn encode(&self, bytes: &[u8], _: &Params) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }
}
