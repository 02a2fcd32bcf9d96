/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */
use std::fmt;

use ::x509_cert::der;
use thiserror::Error;

/// Which decoding step rejected the input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParseStage {
    /// The text was not a `CERTIFICATE` PEM block.
    Pem,
    /// The PEM payload (or DER input) was not an X.509 certificate.
    Der,
}

impl fmt::Display for ParseStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseStage::Pem => f.write_str("PEM"),
            ParseStage::Der => f.write_str("DER"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ParseErrorKind {
    #[error(transparent)]
    Pem(#[from] ::pem::PemError),
    #[error("expected a CERTIFICATE block, found {0}")]
    UnexpectedLabel(String),
    #[error(transparent)]
    Der(#[from] der::Error),
}

impl ParseErrorKind {
    pub fn stage(&self) -> ParseStage {
        match self {
            ParseErrorKind::Pem(_) | ParseErrorKind::UnexpectedLabel(_) => ParseStage::Pem,
            ParseErrorKind::Der(_) => ParseStage::Der,
        }
    }
}

/// The input could not be decoded as an X.509 certificate.
///
/// This is the only way computing a subject hash can fail. The decoder error
/// is kept as the [`source`](std::error::Error::source).
#[derive(Debug, Error)]
#[error("failed to parse certificate ({}): {kind}", .kind.stage())]
pub struct ParseError {
    #[source]
    kind: ParseErrorKind,
}

impl ParseError {
    fn new(kind: ParseErrorKind) -> Self {
        debug!(stage = %kind.stage(), error = %kind, "certificate parse failed");
        ParseError { kind }
    }

    pub(crate) fn pem(source: ::pem::PemError) -> Self {
        ParseError::new(source.into())
    }

    pub(crate) fn unexpected_label(label: &str) -> Self {
        ParseError::new(ParseErrorKind::UnexpectedLabel(label.to_string()))
    }

    pub(crate) fn der(source: der::Error) -> Self {
        ParseError::new(source.into())
    }

    pub fn stage(&self) -> ParseStage {
        self.kind.stage()
    }

    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_pem_error_display() {
        let err = ParseError::pem(::pem::PemError::MissingBeginTag);
        assert_eq!(err.stage(), ParseStage::Pem);
        assert!(err
            .to_string()
            .starts_with("failed to parse certificate (PEM): "));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_unexpected_label() {
        let err = ParseError::unexpected_label("PRIVATE KEY");
        assert_eq!(err.stage(), ParseStage::Pem);
        assert_eq!(
            err.to_string(),
            "failed to parse certificate (PEM): expected a CERTIFICATE block, found PRIVATE KEY"
        );
    }

    #[test]
    fn test_der_error_keeps_kind() {
        let err = ParseError::der(der::ErrorKind::Failed.into());
        assert_eq!(err.stage(), ParseStage::Der);
        match err.kind() {
            ParseErrorKind::Der(e) => assert_eq!(e.kind(), der::ErrorKind::Failed),
            other => panic!("unexpected kind {other:?}"),
        }
        assert!(err
            .to_string()
            .starts_with("failed to parse certificate (DER): "));
    }
}
