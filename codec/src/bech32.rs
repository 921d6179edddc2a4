//! Bech32 codec (BIP-173).
//!
//! A Bech32 string is `hrp || "1" || data || checksum`, where the
//! human-readable prefix (hrp) names a namespace, the data part carries the
//! payload regrouped into 5-bit symbols, and the checksum is six symbols of
//! BCH code over both. Unlike the segwit address profile, no length ceiling
//! is enforced here: the payload is an arbitrary byte sequence.

use crate::{Codec, Error, Params};

/// Prefix used by encode when the side parameters carry no `hrp`.
const DEFAULT_HRP: &str = "bytes";

const CHARSET: &[u8; 32] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

fn polymod(values: impl IntoIterator<Item = u8>) -> u32 {
    let mut chk: u32 = 1;
    for value in values {
        let top = chk >> 25;
        chk = (chk & 0x1ff_ffff) << 5 ^ u32::from(value);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}

fn hrp_expand(hrp: &str) -> impl Iterator<Item = u8> + '_ {
    hrp.bytes()
        .map(|b| b >> 5)
        .chain(std::iter::once(0))
        .chain(hrp.bytes().map(|b| b & 31))
}

fn create_checksum(hrp: &str, data: &[u8]) -> [u8; 6] {
    let values = hrp_expand(hrp)
        .chain(data.iter().copied())
        .chain([0u8; 6]);
    let pm = polymod(values) ^ 1;
    std::array::from_fn(|i| ((pm >> (5 * (5 - i))) & 31) as u8)
}

fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    polymod(hrp_expand(hrp).chain(data.iter().copied())) == 1
}

/// Regroups a bit stream from `from`-bit symbols to `to`-bit symbols.
///
/// With `pad` set, a final partial symbol is zero-filled (the encode
/// direction). Without it, leftover bits must be a valid zero pad shorter
/// than one input symbol (the decode direction), else `None`.
fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Option<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let maxv: u32 = (1 << to) - 1;
    let mut out = Vec::with_capacity((data.len() * from as usize) / to as usize + 1);
    for &value in data {
        if u32::from(value) >> from != 0 {
            return None;
        }
        acc = (acc << from) | u32::from(value);
        bits += from;
        while bits >= to {
            bits -= to;
            out.push(((acc >> bits) & maxv) as u8);
        }
    }
    if pad {
        if bits > 0 {
            out.push(((acc << (to - bits)) & maxv) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & maxv) != 0 {
        return None;
    }
    Some(out)
}

fn valid_hrp(hrp: &str) -> bool {
    !hrp.is_empty() && hrp.bytes().all(|b| (33..=126).contains(&b))
}

/// Encodes `bytes` under `hrp` with a freshly computed checksum.
fn encode_raw(hrp: &str, bytes: &[u8]) -> String {
    let data = convert_bits(bytes, 8, 5, true).expect("8-bit input cannot overflow");
    let checksum = create_checksum(hrp, &data);
    let mut out = String::with_capacity(hrp.len() + 1 + data.len() + 6);
    out.push_str(hrp);
    out.push('1');
    for symbol in data.iter().chain(checksum.iter()) {
        out.push(CHARSET[*symbol as usize] as char);
    }
    out
}

/// Decodes a checksummed string into its prefix and payload bytes.
fn decode_raw(input: &str) -> Result<(String, Vec<u8>), Error> {
    let malformed = |detail: &str| Error::MalformedInput("bech32", detail.into());

    let has_lower = input.bytes().any(|b| b.is_ascii_lowercase());
    let has_upper = input.bytes().any(|b| b.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(malformed("mixed case"));
    }
    let input = input.to_ascii_lowercase();

    let pos = input.rfind('1').ok_or_else(|| malformed("missing separator"))?;
    let (hrp, rest) = (&input[..pos], &input[pos + 1..]);
    if !valid_hrp(hrp) {
        return Err(malformed("invalid prefix"));
    }
    if rest.len() < 6 {
        return Err(malformed("data part shorter than checksum"));
    }

    let mut data = Vec::with_capacity(rest.len());
    for c in rest.bytes() {
        let symbol = CHARSET
            .iter()
            .position(|&x| x == c)
            .ok_or_else(|| malformed("invalid data character"))?;
        data.push(symbol as u8);
    }

    if !verify_checksum(hrp, &data) {
        return Err(Error::ChecksumInvalid);
    }

    let payload = convert_bits(&data[..data.len() - 6], 5, 8, false)
        .ok_or_else(|| malformed("invalid padding"))?;
    Ok((hrp.to_string(), payload))
}

/// Checksummed, prefixed strings per BIP-173.
///
/// Decode records the prefix actually present in the input under the `hrp`
/// side parameter when the caller supplied none, so a later encode reuses
/// it instead of [`DEFAULT_HRP`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Bech32;

impl Codec for Bech32 {
    fn id(&self) -> &'static str {
        "bech32"
    }

    fn decode(&self, input: &str, params: &mut Params) -> Result<Vec<u8>, Error> {
        let (hrp, payload) = decode_raw(input)?;
        if params.get("hrp").map_or(true, str::is_empty) {
            params.set("hrp", hrp);
        }
        Ok(payload)
    }

    fn encode(&self, bytes: &[u8], params: &Params) -> String {
        let hrp = match params.get("hrp") {
            Some(hrp) if !hrp.is_empty() => hrp.to_ascii_lowercase(),
            _ => DEFAULT_HRP.to_string(),
        };
        if !valid_hrp(&hrp) {
            return "# invalid hrp".into();
        }
        encode_raw(&hrp, bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_vectors() {
        // Generated with the BIP-173 reference implementation.
        assert_eq!(encode_raw("cosmos", &[0xAA, 0xBB]), "cosmos142as9fv6yh");
        assert_eq!(encode_raw("bytes", &[0x01, 0x02, 0x03]), "bytes1qypqxtjh76g");
        assert_eq!(encode_raw("bytes", &[]), "bytes1vapjud");
        assert_eq!(
            encode_raw("cosmos", &[0x00; 20]),
            "cosmos1qqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqqnrql8a"
        );
    }

    #[test]
    fn test_bip173_vector() {
        let (hrp, payload) = decode_raw("a12uel5l").unwrap();
        assert_eq!(hrp, "a");
        assert!(payload.is_empty());
        // Uppercase is equally valid.
        let (hrp, payload) = decode_raw("A12UEL5L").unwrap();
        assert_eq!(hrp, "a");
        assert!(payload.is_empty());
    }

    #[test]
    fn test_round_trip() {
        for bytes in [vec![], vec![0xFF], vec![0xAA, 0xBB], (0u8..=255).collect()] {
            let encoded = encode_raw("test", &bytes);
            let (hrp, payload) = decode_raw(&encoded).unwrap();
            assert_eq!(hrp, "test");
            assert_eq!(payload, bytes);
        }
    }

    #[test]
    fn test_checksum_invalid() {
        // Flip the final checksum character.
        assert!(matches!(
            decode_raw("bytes1qypqxtjh76h"),
            Err(Error::ChecksumInvalid)
        ));
    }

    #[test]
    fn test_malformed() {
        for input in ["", "bytes", "1qqq", "Bytes1Qypq", "bytes1qypbqxtjh76g"] {
            assert!(matches!(
                decode_raw(input),
                Err(Error::MalformedInput("bech32", _)) | Err(Error::ChecksumInvalid)
            ));
        }
    }

    #[test]
    fn test_hrp_recorded_on_decode() {
        let mut params = Params::new();
        let payload = Bech32.decode("cosmos142as9fv6yh", &mut params).unwrap();
        assert_eq!(payload, vec![0xAA, 0xBB]);
        assert_eq!(params.get("hrp"), Some("cosmos"));
        // A caller-supplied prefix is never overwritten.
        let mut params = Params::from_pairs([("hrp", "osmo")]);
        Bech32.decode("cosmos142as9fv6yh", &mut params).unwrap();
        assert_eq!(params.get("hrp"), Some("osmo"));
    }

    #[test]
    fn test_encode_uses_hrp_param() {
        let params = Params::from_pairs([("hrp", "cosmos")]);
        assert_eq!(Bech32.encode(&[0xAA, 0xBB], &params), "cosmos142as9fv6yh");
        let params = Params::new();
        assert_eq!(Bech32.encode(&[0x01, 0x02, 0x03], &params), "bytes1qypqxtjh76g");
    }
}
