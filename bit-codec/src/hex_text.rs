use crate::CodecError;

/// Encodes bytes as lowercase hex, two digits per byte, in byte-sequence order.
///
/// No reordering happens here; the byte order of multi-byte words is decided
/// entirely when they are encoded to bytes.
pub fn encode_hex<T: AsRef<[u8]>>(bytes: T) -> String {
    hex::encode(bytes)
}

/// Decodes hex text into bytes, most significant nibble first.
///
/// Both upper and lowercase digits are accepted.
///
/// # Errors
///
/// Returns [`CodecError::Format`] if the text has an odd length
/// or contains a character outside `[0-9a-fA-F]`.
pub fn decode_hex<T: AsRef<[u8]>>(text: T) -> Result<Vec<u8>, CodecError> {
    Ok(hex::decode(text)?)
}
