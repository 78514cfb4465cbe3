//! Request signing.
//!
//! MoviePosterDB authenticates each call with a short checksum of the API secret
//! and the IMDb id: the MD5 of `secret + id`, as lowercase hex, sliced to the 12
//! characters starting at offset 10.

const SIGNATURE_OFFSET: usize = 10;
const SIGNATURE_LEN: usize = 12;

/// Lowercase hex MD5 digest of the UTF-8 bytes of `value`.
pub(crate) fn md5_hex(value: &str) -> String {
    format!("{:x}", md5::compute(value.as_bytes()))
}

/// Compute the request signature for `imdb_id`. The id must already be validated.
pub(crate) fn sign(api_secret: &str, imdb_id: i64) -> String {
    let digest = md5_hex(&format!("{}{}", api_secret, imdb_id));
    digest[SIGNATURE_OFFSET..SIGNATURE_OFFSET + SIGNATURE_LEN].to_string()
}
