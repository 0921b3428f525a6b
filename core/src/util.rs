//! Small general-purpose helpers with no dependency on the client.

/// Characters the vendor ignores in part codes.
const CODE_NOISE: &[char] = &[
    '~', '`', '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '-', '=', '{', '}', '[',
    ']', ',', '/', '?', ':', '<', '>', '\'', ';', '\\', '"', '|', '№', ' ',
];

/// Encode a flag the way the vendor expects it: `1` or `0`.
pub fn bool_to_flag(value: bool) -> u8 {
    u8::from(value)
}

/// Strip punctuation and spaces from a part code, e.g. `"0 986-452/044"`
/// becomes `"0986452044"`.
pub fn clear_code(code: &str) -> String {
    code.chars().filter(|c| !CODE_NOISE.contains(c)).collect()
}
