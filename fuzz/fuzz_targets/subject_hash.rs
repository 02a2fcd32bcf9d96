//! Fuzz the legacy subject hash (`subject_hash_old` and friends).

#![no_main]

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::fuzz_target;

use subject_hash::{subject_der, subject_hash_old, x509_subject_hash_old_der};

const SEED: &str = include_str!("../../src/subject_hash/test_data/leaf.pem");

// ------------------------ Input model ------------------------

#[derive(Debug, Arbitrary)]
enum Shape {
    // Raw bytes handed over as (lossy) PEM text
    Text,
    // Raw bytes armored as a CERTIFICATE block
    Armored,
    // The seed certificate with a few bytes flipped
    MutatedSeed,
}

#[derive(Debug, Arbitrary)]
struct FInput {
    shape: Shape,
    bytes: Vec<u8>,
    // (offset, xor) pairs applied to the seed DER
    flips: Vec<(u16, u8)>,
}

// ------------------------ Helpers ------------------------

fn seed_der() -> Vec<u8> {
    match pem::parse(SEED) {
        Ok(block) => block.into_contents(),
        Err(_) => Vec::new(),
    }
}

fn mutate(mut der: Vec<u8>, flips: &[(u16, u8)]) -> Vec<u8> {
    if der.is_empty() {
        return der;
    }
    for (offset, xor) in flips {
        let i = usize::from(*offset) % der.len();
        der[i] ^= xor;
    }
    der
}

fn check_hash(hash: &str) {
    // an accepted input always yields eight lowercase hex digits
    assert_eq!(hash.len(), 8);
    assert!(hash.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
}

// ------------------------ Harness ------------------------

fuzz_target!(|data: &[u8]| {
    let mut u = Unstructured::new(data);
    let fi = match FInput::arbitrary(&mut u) {
        Ok(x) => x,
        Err(_) => return,
    };

    let der = match fi.shape {
        Shape::Text => {
            let text = String::from_utf8_lossy(&fi.bytes);
            if let Ok(hash) = subject_hash_old(&text) {
                check_hash(&hash);
            }
            return;
        }
        Shape::Armored => fi.bytes,
        Shape::MutatedSeed => mutate(seed_der(), &fi.flips),
    };

    let armored = pem::encode(&pem::Pem::new("CERTIFICATE", der.clone()));

    let from_pem = subject_hash_old(&armored);
    let from_der = x509_subject_hash_old_der(&der);

    // both entry points must agree on accept/reject and on the value
    match (&from_pem, &from_der) {
        (Ok(a), Ok(b)) => {
            check_hash(a);
            assert_eq!(*a, b.to_string());
        }
        (Err(_), Err(_)) => {}
        _ => panic!("PEM and DER entry points disagree"),
    }

    // and an accepted certificate always exposes a subject
    if from_der.is_ok() {
        assert!(subject_der(&der).is_ok());
    }
});
