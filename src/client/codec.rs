//! JSON decode/encode pair.
//!
//! Both directions go through the same `serde_json` family so that anything
//! the encoder writes, the decoder reads back byte-for-byte. The decoder
//! produces a generic tree; model construction happens later, against that
//! tree, so a malformed body and an invalid model stay distinguishable.

use serde::Serialize;
use serde_json::Value;

use crate::error::Error;

/// Parse raw response bytes into a generic JSON tree. Numbers are kept as
/// parsed; no coercion happens here. Malformed input surfaces as
/// [`Error::Decode`], unmodified.
pub(crate) fn decode(bytes: &[u8]) -> Result<Value, Error> {
    serde_json::from_slice(bytes).map_err(Error::Decode)
}

/// Serialize a request body to bytes.
pub(crate) fn encode<T: Serialize>(value: &T) -> Result<Vec<u8>, Error> {
    serde_json::to_vec(value).map_err(Error::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_the_same_family() {
        let tree: Value = serde_json::json!({"data": {"symbol": "X1-ZZ9", "units": 42}});
        let bytes = encode(&tree).unwrap();
        assert_eq!(decode(&bytes).unwrap(), tree);
    }

    #[test]
    fn malformed_payload_is_a_decode_error() {
        let err = decode(b"{\"data\": ").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn numbers_survive_as_given() {
        let tree = decode(b"{\"credits\": -17, \"speed\": 2.5}").unwrap();
        assert_eq!(tree["credits"], Value::from(-17));
        assert_eq!(tree["speed"], Value::from(2.5));
    }
}
