use chardetng::EncodingDetector;
use encoding_rs::Encoding;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedBody {
    pub text: String,
    pub encoding_label: String,
}

/// Decode a response body into UTF-8 using: BOM -> Content-Type charset ->
/// chardetng fallback.
///
/// Decoding is lossy: undecodable byte sequences become replacement
/// characters instead of failing the item.
pub fn decode_body(bytes: &[u8], content_type: Option<&str>) -> DecodedBody {
    if let Some((encoding, _)) = Encoding::for_bom(bytes) {
        return decode_with(bytes, encoding);
    }

    if let Some(label) = content_type.and_then(extract_charset) {
        if let Some(enc) = Encoding::for_label(label.as_bytes()) {
            return decode_with(bytes, enc);
        }
    }

    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let enc = detector.guess(None, true);
    decode_with(bytes, enc)
}

fn extract_charset(content_type: &str) -> Option<String> {
    content_type.split(';').find_map(|part| {
        let (key, value) = part.trim().split_once('=')?;
        if key.eq_ignore_ascii_case("charset") {
            Some(value.trim_matches([' ', '"', '\''].as_ref()).to_string())
        } else {
            None
        }
    })
}

fn decode_with(bytes: &[u8], enc: &'static Encoding) -> DecodedBody {
    let (text, _, _) = enc.decode(bytes);
    DecodedBody {
        text: text.into_owned(),
        encoding_label: enc.name().to_string(),
    }
}
