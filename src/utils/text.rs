use std::borrow::Cow;

/// Decode raw column bytes to a string
///
/// Attempts UTF-8 decoding first, falling back to Windows-1252 (CP1252) if UTF-8 fails.
/// Scenery compilers for older simulators write airport and navaid names in the
/// Windows code page, so a database can contain both encodings side by side.
///
/// # Returns
///
/// Decoded string (always succeeds with some valid string)
pub fn decode_text(bytes: &[u8]) -> Cow<'_, str> {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.into(),
        Err(_) => encoding_rs::WINDOWS_1252.decode(bytes).0,
    }
}
