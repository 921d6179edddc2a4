//! Base64 codec (standard alphabet, padded).

use crate::{Codec, Error, Params};
use ::base64::{engine::general_purpose::STANDARD, Engine};

/// RFC 4648 standard alphabet with `=` padding.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base64;

impl Codec for Base64 {
    fn id(&self) -> &'static str {
        "base64"
    }

    fn decode(&self, input: &str, _: &mut Params) -> Result<Vec<u8>, Error> {
        STANDARD
            .decode(input)
            .map_err(|err| Error::MalformedInput(self.id(), err.to_string()))
    }

    fn encode(&self, bytes: &[u8], _: &Params) -> String {
        STANDARD.encode(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        let params = Params::new();
        assert_eq!(Base64.encode(&[0xAA, 0xBB], &params), "qrs=");
        assert_eq!(Base64.encode(&[0x01, 0x02, 0x03], &params), "AQID");
        assert_eq!(Base64.encode(b"hello", &params), "aGVsbG8=");
        assert_eq!(Base64.encode(&[], &params), "");
    }

    #[test]
    fn test_round_trip() {
        let mut params = Params::new();
        for bytes in [vec![], vec![0xFF], vec![0xAA, 0xBB], (0u8..64).collect()] {
            let encoded = Base64.encode(&bytes, &params);
            assert_eq!(Base64.decode(&encoded, &mut params).unwrap(), bytes);
        }
    }

    #[test]
    fn test_invalid_input() {
        let mut params = Params::new();
        for input in ["????", "AQID=", "AQ=D"] {
            assert!(matches!(
                Base64.decode(input, &mut params),
                Err(Error::MalformedInput("base64", _))
            ));
        }
    }
}
