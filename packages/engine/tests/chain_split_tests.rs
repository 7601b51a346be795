//! Chain splitter behaviour: ordering, escaping and all-or-nothing failure

use certdesk_engine::pem::{PemKind, normalize_pem, split_chain};
use certdesk_engine::ErrorKind;

const FIRST: &str = "MIIBszCCAVmgAwIBAgIUQ2VydGRlc2sgdGVzdCByb290IGNlcnRpZmljYXRlMAoGCCqGSM49BAMC";
const SECOND: &str = "MIIBrjCCAVSgAwIBAgIUTGVhZiBjZXJ0aWZpY2F0ZSBmb3IgY2hhaW4gdGVzdHMwCgYIKoZIzj0E";

fn cert(body: &str) -> String {
    format!("-----BEGIN CERTIFICATE-----\n{body}\n-----END CERTIFICATE-----\n")
}

#[test]
fn test_split_preserves_order() {
    let a = normalize_pem(PemKind::Certificate, FIRST).expect("first block");
    let b = normalize_pem(PemKind::Certificate, SECOND).expect("second block");

    let blocks = split_chain(PemKind::Certificate, &format!("{a}{b}")).expect("chain should split");
    assert_eq!(blocks, vec![a, b]);
}

#[test]
fn test_split_handles_escaped_newlines_and_noise() {
    let input = format!(
        "chain:\\r\\n{}\\r\\nintermediate follows\\n{}",
        cert(FIRST).replace('\n', "\\n"),
        cert(SECOND).replace('\n', "\\r\\n")
    );

    let blocks = split_chain(PemKind::Certificate, &input).expect("escaped chain should split");
    assert_eq!(blocks, vec![cert(FIRST), cert(SECOND)]);
}

#[test]
fn test_missing_footer_fails_whole_call() {
    let input = format!("{}-----BEGIN CERTIFICATE-----\n{SECOND}\n", cert(FIRST));

    let err = split_chain(PemKind::Certificate, &input).expect_err("second block has no footer");
    assert_eq!(err.kind(), ErrorKind::IncompleteBlock);
}

#[test]
fn test_no_header_means_no_blocks() {
    for input in ["", "just some text", FIRST] {
        let err = split_chain(PemKind::Certificate, input).expect_err("no header present");
        assert_eq!(err.kind(), ErrorKind::NoBlocksFound);
    }
}

#[test]
fn test_block_with_empty_body_fails_whole_call() {
    let input = format!("{}-----BEGIN CERTIFICATE-----\n\n-----END CERTIFICATE-----\n", cert(FIRST));

    let err = split_chain(PemKind::Certificate, &input).expect_err("empty second body");
    assert_eq!(err.kind(), ErrorKind::EmptyBody);
}

#[test]
fn test_other_kinds_are_ignored() {
    let csr = "-----BEGIN CERTIFICATE REQUEST-----\nQUJD\n-----END CERTIFICATE REQUEST-----\n";
    let input = format!("{csr}{}", cert(FIRST));

    let certs = split_chain(PemKind::Certificate, &input).expect("certificate present");
    assert_eq!(certs, vec![cert(FIRST)]);

    let csrs = split_chain(PemKind::CertificateRequest, &input).expect("csr present");
    assert_eq!(csrs.len(), 1);
    assert!(csrs[0].contains("QUJD"));
}

#[test]
fn test_footer_is_not_reused_across_blocks() {
    // the second header's body swallows nothing from the first block
    let input = format!("{}{}{}", cert(FIRST), cert(SECOND), cert(FIRST));

    let blocks = split_chain(PemKind::Certificate, &input).expect("three blocks");
    assert_eq!(blocks, vec![cert(FIRST), cert(SECOND), cert(FIRST)]);
}
