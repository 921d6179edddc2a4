//! Core codec traits.

use crate::{Error, Params};

/// A bidirectional codec between raw bytes and one textual representation.
///
/// Implementations must be stateless: both methods are pure functions of
/// their inputs, so a single instance can be shared across concurrent
/// requests without locking.
pub trait Codec: Send + Sync {
    /// Returns the stable identifier used to select this codec.
    fn id(&self) -> &'static str;

    /// Parses user-typed text in this codec's format into canonical bytes.
    ///
    /// A codec may populate a side parameter it owns (e.g. Bech32 records
    /// the decoded prefix under `hrp` if the caller supplied none).
    fn decode(&self, input: &str, params: &mut Params) -> Result<Vec<u8>, Error>;

    /// Renders canonical bytes in this codec's textual form.
    ///
    /// Must accept any byte sequence, including ones this codec could not
    /// have produced and the empty sequence. Never fails: byte sequences
    /// the format cannot express degrade to a visible placeholder string.
    fn encode(&self, bytes: &[u8], params: &Params) -> String;
}

/// A read-only renderer of canonical bytes.
///
/// Unlike [`Codec`], there is no decode side: the output is a structured
/// dump, not a reversible encoding. Renderers take part in every render
/// pass but never own decode authority.
pub trait Render: Send + Sync {
    /// Returns the stable identifier paired with the rendered text.
    fn id(&self) -> &'static str;

    /// Renders a best-effort textual view of the bytes. Never fails.
    fn render(&self, bytes: &[u8]) -> String;
}
