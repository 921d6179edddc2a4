//! Protobuf wire-format disassembly.
//!
//! Renders arbitrary bytes as a protoscope-style field listing. Tag and
//! varint decoding is delegated to `prost`'s wire-format primitives; this
//! module only decides how the decoded fields are written out. Rendering is
//! best effort: bytes that stop parsing mid-stream are dumped as a trailing
//! hex literal rather than reported as an error.

use crate::{hex::to_hex, Render};
use bytes::Buf;
use prost::encoding::{decode_key, decode_varint, WireType};
use std::fmt::Write;

/// Nested length-delimited fields deeper than this render as hex.
const MAX_DEPTH: usize = 8;

/// Read-only renderer for protobuf wire data.
#[derive(Clone, Copy, Debug, Default)]
pub struct Protobuf;

impl Render for Protobuf {
    fn id(&self) -> &'static str {
        "protobuf"
    }

    fn render(&self, bytes: &[u8]) -> String {
        let (mut out, consumed) = render_fields(bytes, 0);
        if consumed < bytes.len() {
            let _ = writeln!(out, "`{}`", to_hex(&bytes[consumed..]));
        }
        out
    }
}

/// Renders complete fields from the front of `bytes` at the given nesting
/// depth, returning the text and how many bytes were consumed by them.
fn render_fields(bytes: &[u8], depth: usize) -> (String, usize) {
    let mut out = String::new();
    let mut consumed = 0;
    let indent = "  ".repeat(depth);

    loop {
        let mut buf = &bytes[consumed..];
        if buf.is_empty() {
            break;
        }
        let Ok((field, wire)) = decode_key(&mut buf) else {
            break;
        };
        match wire {
            WireType::Varint => {
                let Ok(value) = decode_varint(&mut buf) else {
                    break;
                };
                let _ = writeln!(out, "{indent}{field}: {value}");
            }
            WireType::SixtyFourBit => {
                if buf.remaining() < 8 {
                    break;
                }
                let value = buf.get_u64_le();
                let _ = writeln!(out, "{indent}{field}: 0x{value:016x}i64");
            }
            WireType::ThirtyTwoBit => {
                if buf.remaining() < 4 {
                    break;
                }
                let value = buf.get_u32_le();
                let _ = writeln!(out, "{indent}{field}: 0x{value:08x}i32");
            }
            WireType::LengthDelimited => {
                let Ok(len) = decode_varint(&mut buf) else {
                    break;
                };
                let Ok(len) = usize::try_from(len) else {
                    break;
                };
                if buf.remaining() < len {
                    break;
                }
                let payload = &buf[..len];
                let _ = writeln!(out, "{indent}{field}: {}", render_payload(payload, depth));
                buf.advance(len);
            }
            // Groups are long deprecated; treat them as unparseable.
            WireType::StartGroup | WireType::EndGroup => break,
        }
        consumed = bytes.len() - buf.len();
    }

    (out, consumed)
}

/// Renders the payload of a length-delimited field: printable text first,
/// then a nested message, then a hex literal.
fn render_payload(payload: &[u8], depth: usize) -> String {
    if let Some(text) = printable(payload) {
        return format!("{{\"{}\"}}", text);
    }
    if depth < MAX_DEPTH && !payload.is_empty() {
        let (nested, consumed) = render_fields(payload, depth + 1);
        if consumed == payload.len() {
            return format!("{{\n{}{}}}", nested, "  ".repeat(depth));
        }
    }
    format!("{{`{}`}}", to_hex(payload))
}

/// Returns the payload as escaped text if every character is printable.
fn printable(payload: &[u8]) -> Option<String> {
    let text = std::str::from_utf8(payload).ok()?;
    if !text.chars().all(|c| c == '\n' || !c.is_control()) {
        return None;
    }
    Some(text.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(Protobuf.render(&[]), "");
    }

    #[test]
    fn test_varint_field() {
        // Field 1, varint 150.
        assert_eq!(Protobuf.render(&[0x08, 0x96, 0x01]), "1: 150\n");
    }

    #[test]
    fn test_string_field() {
        // Field 2, length-delimited "testing".
        let bytes = [0x12, 0x07, b't', b'e', b's', b't', b'i', b'n', b'g'];
        assert_eq!(Protobuf.render(&bytes), "2: {\"testing\"}\n");
    }

    #[test]
    fn test_fixed_fields() {
        // Field 1 fixed32, field 2 fixed64.
        let mut bytes = vec![0x0d, 0x01, 0x00, 0x00, 0x00];
        bytes.extend([0x11, 0x02, 0, 0, 0, 0, 0, 0, 0]);
        assert_eq!(
            Protobuf.render(&bytes),
            "1: 0x00000001i32\n2: 0x0000000000000002i64\n"
        );
    }

    #[test]
    fn test_nested_message() {
        // Field 3 wraps (field 1, varint 1). The single payload byte 0x01
        // is an unprintable control character, so the nested-message
        // interpretation wins.
        let bytes = [0x1a, 0x02, 0x08, 0x01];
        assert_eq!(Protobuf.render(&bytes), "3: {\n  1: 1\n}\n");
    }

    #[test]
    fn test_garbage_dumps_hex() {
        // 0xff opens a key whose varint never terminates.
        assert_eq!(Protobuf.render(&[0xff]), "`ff`\n");
    }

    #[test]
    fn test_partial_parse_keeps_prefix() {
        // A valid varint field followed by a truncated key.
        assert_eq!(Protobuf.render(&[0x08, 0x01, 0xff]), "1: 1\n`ff`\n");
    }

    #[test]
    fn test_binary_payload_dumps_hex() {
        // Field 1, length-delimited [0xff, 0xfe]: not printable, not a
        // parseable message.
        assert_eq!(Protobuf.render(&[0x0a, 0x02, 0xff, 0xfe]), "1: {`fffe`}\n");
    }
}
