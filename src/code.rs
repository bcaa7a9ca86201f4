//! Deterministic short-code generation.

// FNV-1 (32-bit) parameters, the multiply-then-XOR variant.
const FNV_OFFSET_BASIS: u32 = 0x811c_9dc5;
const FNV_PRIME: u32 = 16_777_619;

/// Compute the short code for a target URL.
///
/// The code is the FNV-1 32-bit hash of the target's UTF-8 bytes, rendered
/// as lowercase hex without zero padding, so it is between 1 and 8
/// characters. The hash is unseeded: the same target yields the same code
/// within and across process runs, which is what makes `create` idempotent
/// without a store lookup first. Total over all strings, empty included.
pub fn generate(url: &str) -> String {
    let mut hash = FNV_OFFSET_BASIS;
    for &byte in url.as_bytes() {
        hash = hash.wrapping_mul(FNV_PRIME);
        hash ^= u32::from(byte);
    }
    format!("{hash:x}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors() {
        assert_eq!(generate("http://example.com"), "fd9b0c5a");
        assert_eq!(generate("https://example.org/path?q=1"), "6a29c5b6");
    }

    #[test]
    fn empty_input_hashes_to_offset_basis() {
        assert_eq!(generate(""), "811c9dc5");
    }

    #[test]
    fn deterministic() {
        let url = "https://www.rust-lang.org/";
        assert_eq!(generate(url), generate(url));
    }

    #[test]
    fn no_zero_padding() {
        // 0x0e3b18bf renders as 7 characters, not 8.
        assert_eq!(generate("https://www.rust-lang.org/"), "e3b18bf");
    }
}
