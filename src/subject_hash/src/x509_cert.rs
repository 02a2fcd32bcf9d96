/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::constants::CERTIFICATE_PEM_LABEL;
use crate::digest::{subject_name_md5, SubjectHash};
use crate::error::ParseError;

pub use ::x509_cert::der;
pub use ::x509_cert::Certificate;

use ::x509_cert::der::asn1::AnyRef;
use ::x509_cert::der::{Decode, Encode, SliceReader, Tagged};

/// Legacy subject hash of a PEM certificate, as eight lowercase hex digits.
///
/// Matches `openssl x509 -noout -subject_hash_old`.
pub fn subject_hash_old(pem: &str) -> Result<String, ParseError> {
    x509_subject_hash_old_pem(pem).map(|hash| hash.to_string())
}

pub fn x509_subject_hash_old_pem(pem: &str) -> Result<SubjectHash, ParseError> {
    let der = certificate_pem_to_der(pem)?;
    x509_subject_hash_old_der(&der)
}

pub fn x509_subject_hash_old_der(der: &[u8]) -> Result<SubjectHash, ParseError> {
    let subject = subject_der(der)?;
    let hash = SubjectHash::from_digest(&subject_name_md5(&subject));
    debug!(subject_len = subject.len(), %hash, "computed legacy subject hash");
    Ok(hash)
}

/// Returns the subject `Name` of a DER certificate exactly as it is encoded
/// in `der`.
///
/// The whole certificate is decoded first, so anything that is not an X.509
/// certificate is rejected even if it happens to contain a subject-shaped
/// field.
pub fn subject_der(der: &[u8]) -> Result<Vec<u8>, ParseError> {
    let certificate = Certificate::from_der(der).map_err(ParseError::der)?;
    let original = raw_subject(der).map_err(ParseError::der)?;
    trace!(subject = ?original, "subject name encoding");

    match certificate.tbs_certificate.subject.to_der() {
        Ok(reencoded) if reencoded != original => {
            debug!("decoded subject re-encodes differently, hashing the original bytes")
        }
        Ok(_) => {}
        Err(e) => debug!(error = %e, "unable to re-encode decoded subject"),
    }

    Ok(original)
}

// Any base64 line width is accepted, as OpenSSL does.
fn certificate_pem_to_der(input: &str) -> Result<Vec<u8>, ParseError> {
    let block = ::pem::parse(input).map_err(ParseError::pem)?;
    if block.tag() != CERTIFICATE_PEM_LABEL {
        debug!(label = %block.tag(), "PEM block is not a certificate");
        return Err(ParseError::unexpected_label(block.tag()));
    }
    Ok(block.into_contents())
}

// Certificate ::= SEQUENCE { tbsCertificate, signatureAlgorithm, signature }
// TBSCertificate ::= SEQUENCE { [0] version OPTIONAL, serialNumber, signature,
//                               issuer, validity, subject, ... }
fn raw_subject(der: &[u8]) -> der::Result<Vec<u8>> {
    let certificate = AnyRef::from_der(der)?;
    let mut reader = SliceReader::new(certificate.value())?;
    let tbs_certificate = AnyRef::decode(&mut reader)?;

    let mut reader = SliceReader::new(tbs_certificate.value())?;
    let first = AnyRef::decode(&mut reader)?;
    let preceding = if first.tag().is_context_specific() {
        4
    } else {
        3
    };
    for _ in 0..preceding {
        AnyRef::decode(&mut reader)?;
    }

    // Header is re-emitted from the decoded tag and length, both of which DER
    // only allows one encoding for; the value is copied verbatim.
    AnyRef::decode(&mut reader)?.to_der()
}
