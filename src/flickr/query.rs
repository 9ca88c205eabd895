use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Bytes escaped in query values: everything except ASCII alphanumerics and
/// the unreserved punctuation `-`, `.`, `_`, `~`. Reserved delimiters
/// (`&`, `=`, `?`, `#`), spaces, `%` and `+` are always escaped, as is every
/// byte of a multi-byte UTF-8 sequence.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Request parameters in insertion order, with unique keys.
///
/// Keys are assumed to be pre-validated ASCII identifiers and are written
/// as-is; values are stringified on insertion and percent-encoded when the
/// query string is rendered.
#[derive(Debug, Clone, Default)]
pub struct ParamMap {
    pairs: Vec<(String, String)>,
}

impl ParamMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to the stringified `value`. Pushing a key that is already
    /// present replaces its value in place, keeping the original position.
    pub fn push<V: ToString>(&mut self, key: &str, value: V) {
        let value = value.to_string();

        match self.pairs.iter_mut().find(|(name, _)| name == key) {
            Some(pair) => pair.1 = value,
            None => self.pairs.push((key.to_owned(), value)),
        }
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Renders `?name=escapedValue&…` for a non-empty map, or the empty
    /// string for an empty one. The leading `?` is included here, so callers
    /// append the result to a base URL verbatim.
    pub fn to_query_string(&self) -> String {
        if self.pairs.is_empty() {
            return String::new();
        }

        let pairs: Vec<String> = self
            .pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
            .collect();

        format!("?{}", pairs.join("&"))
    }
}

#[cfg(test)]
mod tests {
    use percent_encoding::percent_decode_str;

    use super::*;

    fn decode(escaped: &str) -> String {
        percent_decode_str(escaped).decode_utf8().unwrap().into()
    }

    #[test]
    fn empty_map_renders_empty_string() {
        assert_eq!(ParamMap::new().to_query_string(), "");
    }

    #[test]
    fn pairs_round_trip_through_decoding() {
        let mut params = ParamMap::new();
        params.push("method", "flickr.galleries.getPhotos");
        params.push("text", "sleeping in the library & more?");
        params.push("page", 2);

        let rendered = params.to_query_string();
        let rendered = rendered.strip_prefix('?').unwrap();

        let decoded: Vec<(String, String)> = rendered
            .split('&')
            .map(|pair| {
                let (key, value) = pair.split_once('=').unwrap();
                (key.to_owned(), decode(value))
            })
            .collect();

        assert_eq!(
            decoded,
            vec![
                ("method".to_owned(), "flickr.galleries.getPhotos".to_owned()),
                ("text".to_owned(), "sleeping in the library & more?".to_owned()),
                ("page".to_owned(), "2".to_owned()),
            ]
        );
    }

    #[test]
    fn reserved_characters_are_always_escaped() {
        let mut params = ParamMap::new();
        params.push("q", "a&b=c?d #e%f+g");

        let rendered = params.to_query_string();
        let value = rendered.strip_prefix("?q=").unwrap();

        for reserved in ['&', '=', '?', ' ', '#', '+'] {
            assert!(!value.contains(reserved), "{reserved:?} leaked into {value:?}");
        }
        assert_eq!(value, "a%26b%3Dc%3Fd%20%23e%25f%2Bg");
    }

    #[test]
    fn unreserved_characters_stay_literal() {
        let mut params = ParamMap::new();
        params.push("k", "AZaz09-._~");

        assert_eq!(params.to_query_string(), "?k=AZaz09-._~");
    }

    #[test]
    fn multibyte_values_escape_every_byte() {
        let mut params = ParamMap::new();
        params.push("title", "café");

        assert_eq!(params.to_query_string(), "?title=caf%C3%A9");
    }

    #[test]
    fn repeated_key_replaces_value_in_place() {
        let mut params = ParamMap::new();
        params.push("format", "rest");
        params.push("gallery_id", "42");
        params.push("format", "json");

        assert_eq!(params.len(), 2);
        assert_eq!(params.to_query_string(), "?format=json&gallery_id=42");
    }

    #[test]
    fn rendering_is_deterministic() {
        let build = || {
            let mut params = ParamMap::new();
            params.push("b", 1);
            params.push("a", 2);
            params.to_query_string()
        };

        assert_eq!(build(), build());
        assert_eq!(build(), "?b=1&a=2");
    }
}
