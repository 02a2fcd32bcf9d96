/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
#![deny(warnings)]
#![warn(unused_extern_crates)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::unreachable)]
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::trivially_copy_pass_by_ref)]

//! OpenSSL "old" subject hash for X.509 certificates.
//!
//! This is the value `openssl x509 -noout -subject_hash_old` prints, and the
//! name pre-1.0 OpenSSL expects for certificates in a hashed directory: the
//! MD5 digest of the DER encoded subject name, truncated to its first four
//! bytes read as a little endian `u32`, printed as eight lowercase hex digits.
//!
//! ```
//! # fn main() -> Result<(), subject_hash::ParseError> {
//! let pem = "\
//! -----BEGIN CERTIFICATE-----\n\
//! MIIBxjCCAWygAwIBAgIBATAKBggqhkjOPQQDAjBCMQswCQYDVQQGEwJVUzEUMBIG\n\
//! A1UECgwLRXhhbXBsZSBPcmcxHTAbBgNVBAMMFHN1YmplY3QtaGFzaC5leGFtcGxl\n\
//! MB4XDTI2MTAxOTEwMTc0OFoXDTM2MTAxNjEwMTc0OFowQjELMAkGA1UEBhMCVVMx\n\
//! FDASBgNVBAoMC0V4YW1wbGUgT3JnMR0wGwYDVQQDDBRzdWJqZWN0LWhhc2guZXhh\n\
//! bXBsZTBZMBMGByqGSM49AgEGCCqGSM49AwEHA0IABAPLe7ADRlME/ynhKZGVCEUj\n\
//! n4skxPAXYCrVCKIQ2q/7+AaACulucIBLZ6bcf+JfWjlFO7i8UX8zGfyVdmWFI+Cj\n\
//! UzBRMB0GA1UdDgQWBBQqc/SZhAnSGtd/B/fBL2tfQ0gHwjAfBgNVHSMEGDAWgBQq\n\
//! c/SZhAnSGtd/B/fBL2tfQ0gHwjAPBgNVHRMBAf8EBTADAQH/MAoGCCqGSM49BAMC\n\
//! A0gAMEUCIHdgevPli4unmnNYRXKU5ah0Rc1D/OqhCgGF+QZ7LX8YAiEAi3oNc3SH\n\
//! BRjSsghRKvKOaCszfX1knqhBF3N1G/8qt28=\n\
//! -----END CERTIFICATE-----\n\
//! ";
//! assert_eq!(subject_hash::subject_hash_old(pem)?, "e82b6eff");
//! # Ok(())
//! # }
//! ```

#[macro_use]
extern crate tracing;

pub mod constants;
pub mod digest;
pub mod error;
pub mod x509_cert;

pub use crate::digest::{subject_name_md5, Md5Digest, SubjectHash};
pub use crate::error::{ParseError, ParseErrorKind, ParseStage};
pub use crate::x509_cert::{
    der, subject_der, subject_hash_old, x509_subject_hash_old_der, x509_subject_hash_old_pem,
};
