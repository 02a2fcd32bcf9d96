/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use std::fmt;

use ::md5::{Digest, Md5};

use crate::constants::{SUBJECT_HASH_HEX_WIDTH, SUBJECT_HASH_LEN};

pub type Md5Digest = ::md5::digest::Output<Md5>;

pub fn subject_name_md5(subject_der: &[u8]) -> Md5Digest {
    let mut hasher = Md5::new();
    hasher.update(subject_der);
    hasher.finalize()
}

/// A legacy subject hash.
///
/// Formats as eight lowercase, zero padded hex digits, which is the file name
/// stem OpenSSL looks up in a hashed certificate directory.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubjectHash(u32);

impl SubjectHash {
    /// Reads the first four bytes of `digest` as a little endian `u32`.
    pub fn from_digest(digest: &Md5Digest) -> Self {
        let mut prefix = [0u8; SUBJECT_HASH_LEN];
        prefix.copy_from_slice(&digest[..SUBJECT_HASH_LEN]);
        SubjectHash(u32::from_le_bytes(prefix))
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<SubjectHash> for u32 {
    fn from(hash: SubjectHash) -> u32 {
        hash.0
    }
}

impl fmt::Display for SubjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$x}", self.0, width = SUBJECT_HASH_HEX_WIDTH)
    }
}

impl fmt::LowerHex for SubjectHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digest_with_prefix(prefix: [u8; 4]) -> Md5Digest {
        let mut digest = Md5Digest::default();
        digest[..4].copy_from_slice(&prefix);
        digest
    }

    #[test]
    fn test_little_endian_prefix() {
        let hash = SubjectHash::from_digest(&digest_with_prefix([0x12, 0x34, 0x56, 0x78]));
        assert_eq!(hash.as_u32(), 0x7856_3412);
        assert_eq!(hash.to_string(), "78563412");
    }

    #[test]
    fn test_zero_padding() {
        let hash = SubjectHash::from_digest(&digest_with_prefix([0x0a, 0x00, 0x00, 0x00]));
        assert_eq!(hash.to_string(), "0000000a");

        let hash = SubjectHash::from_digest(&digest_with_prefix([0x00; 4]));
        assert_eq!(hash.to_string(), "00000000");
    }

    #[test]
    fn test_only_prefix_is_used() {
        let mut digest = digest_with_prefix([0xde, 0xad, 0xbe, 0xef]);
        let before = SubjectHash::from_digest(&digest);
        digest[4..].fill(0xff);
        assert_eq!(SubjectHash::from_digest(&digest), before);
        assert_eq!(u32::from(before), 0xefbe_adde);
    }

    #[test]
    fn test_lower_hex_honours_flags() {
        let hash = SubjectHash::from_digest(&digest_with_prefix([0x01, 0x00, 0x00, 0x00]));
        assert_eq!(format!("{hash:x}"), "1");
        assert_eq!(format!("{hash:08x}"), "00000001");
    }

    #[test]
    fn test_md5_of_empty_name() {
        let digest = subject_name_md5(b"");
        assert_eq!(hex::encode(digest), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(SubjectHash::from_digest(&digest).to_string(), "d98c1dd4");
    }

    #[test]
    fn test_md5_of_known_subject() {
        // C=US, O=Example Org, CN=subject-hash.example
        let subject = hex::decode(
            "3042310b300906035504061302555331143012060355040a0c0b4578616d706c65204f7267\
             311d301b06035504030c147375626a6563742d686173682e6578616d706c65",
        )
        .unwrap();
        let digest = subject_name_md5(&subject);
        assert_eq!(hex::encode(digest), "ff6e2be81ef7c3fcc8c485a313f50b79");
        assert_eq!(SubjectHash::from_digest(&digest).to_string(), "e82b6eff");
    }
}
