//! Conversion orchestrator over the bytescope codecs.
//!
//! One request cycle runs through four states: idle (nothing submitted),
//! selecting (an identifier was supplied), decoded or decode-failed, and
//! rendering. The [`Engine`] owns the ordered codec registry, gives decode
//! authority to at most one codec per cycle, and re-encodes the resulting
//! canonical bytes through every codec (plus the read-only wire renderer)
//! for display.
//!
//! A decode failure is logged and demoted to the empty byte sequence so
//! the other codecs still render; only an identifier that matches no
//! registered codec aborts the cycle ([`Error::UnknownCodec`]).

use bytescope_codec::{Ascii, Base64, Bech32, Binary, Codec, Decimal, Hex, Params, Protobuf, Render};
use thiserror::Error;
use tracing::{debug, warn};

/// Error type for a conversion cycle.
#[derive(Error, Debug)]
pub enum Error {
    #[error("no codec found: {0}")]
    UnknownCodec(String),
}

/// The submitted text of the active codec, extracted from the request
/// parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    /// Identifier of the codec with decode authority.
    pub codec: String,
    /// The raw text the user typed in that codec's field.
    pub input: String,
}

impl Submission {
    /// Extracts a submission from request parameters, supporting both
    /// framings of the form contract.
    ///
    /// The simplified framing (`codec` naming the identifier, `input`
    /// carrying the text) wins when present. Otherwise the shared-form
    /// framing applies: the first non-empty `w` value selects which
    /// `input-<id>` field is authoritative; additional `w` values are
    /// ignored. Returns `None` when neither framing names a codec.
    pub fn from_params(params: &Params) -> Option<Self> {
        if let Some(codec) = params.get("codec") {
            if !codec.is_empty() {
                return Some(Self {
                    codec: codec.to_string(),
                    input: params.get("input").unwrap_or_default().to_string(),
                });
            }
        }

        let codec = params.all("w").iter().find(|value| !value.is_empty())?;
        let input = params.get(&format!("input-{codec}")).unwrap_or_default();
        Some(Self {
            codec: codec.clone(),
            input: input.to_string(),
        })
    }
}

/// One (identifier, rendered text) pair of the render pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Field {
    pub id: &'static str,
    pub text: String,
}

/// The outcome of a conversion cycle.
#[derive(Clone, Debug, Default)]
pub struct Conversion {
    /// The canonical bytes all rendered fields agree on. Empty when nothing
    /// was submitted or the submitted text failed to decode.
    pub bytes: Vec<u8>,
    /// Rendered text for every registered codec, in display order, followed
    /// by the read-only renderers.
    pub fields: Vec<Field>,
}

/// Orchestrates decode and re-encode across the registered codecs.
///
/// Stateless between calls: the engine holds only the registry, so one
/// instance can serve concurrent requests.
pub struct Engine {
    codecs: Vec<Box<dyn Codec>>,
    renders: Vec<Box<dyn Render>>,
}

impl Default for Engine {
    /// Registers the full codec set. Registration order is display order.
    fn default() -> Self {
        Self {
            codecs: vec![
                Box::new(Ascii),
                Box::new(Binary),
                Box::new(Decimal),
                Box::new(Hex),
                Box::new(Base64),
                Box::new(Bech32),
            ],
            renders: vec![Box::new(Protobuf)],
        }
    }
}

impl Engine {
    /// Runs one conversion cycle.
    ///
    /// `submission` carries the active codec's identifier and text, if any;
    /// `params` is the request's side-parameter store and may be mutated by
    /// the decoding codec. Fails only when the identifier matches no
    /// registered codec.
    pub fn convert(
        &self,
        submission: Option<Submission>,
        params: &mut Params,
    ) -> Result<Conversion, Error> {
        let mut bytes = Vec::new();
        if let Some(submission) = submission {
            let codec = self
                .codecs
                .iter()
                .find(|codec| codec.id() == submission.codec)
                .ok_or_else(|| Error::UnknownCodec(submission.codec.clone()))?;
            match codec.decode(&submission.input, params) {
                Ok(decoded) => {
                    debug!(codec = codec.id(), len = decoded.len(), "decoded input");
                    bytes = decoded;
                }
                // Render everything against empty bytes instead of failing
                // the whole cycle.
                Err(err) => warn!(codec = codec.id(), %err, "decode failed"),
            }
        }

        let mut fields = Vec::with_capacity(self.codecs.len() + self.renders.len());
        for codec in &self.codecs {
            fields.push(Field {
                id: codec.id(),
                text: codec.encode(&bytes, params),
            });
        }
        for render in &self.renders {
            fields.push(Field {
                id: render.id(),
                text: render.render(&bytes),
            });
        }
        Ok(Conversion { bytes, fields })
    }

    /// Identifiers of the registered codecs, in display order.
    pub fn codec_ids(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.codecs.iter().map(|codec| codec.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(codec: &str, input: &str) -> Option<Submission> {
        Some(Submission {
            codec: codec.to_string(),
            input: input.to_string(),
        })
    }

    #[test]
    fn test_idle_renders_empty() {
        let engine = Engine::default();
        let mut params = Params::new();
        let conversion = engine.convert(None, &mut params).unwrap();
        assert!(conversion.bytes.is_empty());
        assert_eq!(conversion.fields.len(), 7);
        let hex = conversion.fields.iter().find(|f| f.id == "hex").unwrap();
        assert_eq!(hex.text, "");
        let decimal = conversion.fields.iter().find(|f| f.id == "decimal").unwrap();
        assert_eq!(decimal.text, "0");
    }

    #[test]
    fn test_unknown_codec() {
        let engine = Engine::default();
        let mut params = Params::new();
        assert!(matches!(
            engine.convert(submission("foo", "abc"), &mut params),
            Err(Error::UnknownCodec(id)) if id == "foo"
        ));
    }

    #[test]
    fn test_display_order() {
        let engine = Engine::default();
        let mut params = Params::new();
        let conversion = engine.convert(None, &mut params).unwrap();
        let ids: Vec<_> = conversion.fields.iter().map(|f| f.id).collect();
        assert_eq!(
            ids,
            ["ascii", "binary", "decimal", "hex", "base64", "bech32", "protobuf"]
        );
    }

    #[test]
    fn test_submission_simplified_framing() {
        let params = Params::from_pairs([("codec", "hex"), ("input", "aabb")]);
        assert_eq!(
            Submission::from_params(&params),
            submission("hex", "aabb")
        );
    }

    #[test]
    fn test_submission_shared_framing() {
        let params = Params::from_pairs([
            ("w", ""),
            ("w", "base64"),
            ("input-base64", "AQID"),
            ("input-hex", "ff"),
        ]);
        assert_eq!(
            Submission::from_params(&params),
            submission("base64", "AQID")
        );
    }

    #[test]
    fn test_submission_simplified_wins() {
        let params = Params::from_pairs([
            ("codec", "ascii"),
            ("input", "hi"),
            ("w", "hex"),
            ("input-hex", "ff"),
        ]);
        assert_eq!(Submission::from_params(&params), submission("ascii", "hi"));
    }

    #[test]
    fn test_submission_idle() {
        let params = Params::from_pairs([("w", ""), ("hrp", "cosmos")]);
        assert_eq!(Submission::from_params(&params), None);
        assert_eq!(Submission::from_params(&Params::new()), None);
    }
}
