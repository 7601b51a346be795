//! Certificate metadata extraction against freshly generated certificates

use certdesk_engine::pem::{PemKind, split_chain};
use certdesk_engine::{ErrorKind, extract_certificate_metadata, split_chain_with_metadata};
use chrono::{TimeZone, Utc};
use rcgen::{
    BasicConstraints, CertificateParams, DistinguishedName, DnType, IsCa, Issuer, KeyPair,
    SerialNumber,
};

struct Generated {
    root_pem: String,
    leaf_pem: String,
}

fn generate_chain() -> Generated {
    let mut root_params = CertificateParams::new(Vec::default()).expect("root params");
    root_params.is_ca = IsCa::Ca(BasicConstraints::Unconstrained);
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, "Test Root CA");
    root_params.distinguished_name = dn;
    let mut serial = vec![1u8];
    serial.extend_from_slice(&[0u8; 16]);
    root_params.serial_number = Some(SerialNumber::from_slice(&serial));
    root_params.not_before = rcgen::date_time_ymd(2024, 1, 1);
    root_params.not_after = rcgen::date_time_ymd(2034, 1, 1);

    let root_key = KeyPair::generate().expect("root key");
    let root = root_params.clone().self_signed(&root_key).expect("root cert");
    let issuer = Issuer::new(root_params, root_key);

    let mut leaf_params =
        CertificateParams::new(vec!["www.example.com".to_string()]).expect("leaf params");
    leaf_params.is_ca = IsCa::NoCa;
    let mut dn = DistinguishedName::new();
    dn.push(DnType::CommonName, "www.example.com");
    leaf_params.distinguished_name = dn;
    leaf_params.serial_number = Some(SerialNumber::from(4242u64));
    leaf_params.not_before = rcgen::date_time_ymd(2025, 3, 1);
    leaf_params.not_after = rcgen::date_time_ymd(2025, 6, 1);

    let leaf_key = KeyPair::generate().expect("leaf key");
    let leaf = leaf_params.signed_by(&leaf_key, &issuer).expect("leaf cert");

    Generated {
        root_pem: root.pem(),
        leaf_pem: leaf.pem(),
    }
}

#[test]
fn test_root_metadata() {
    let generated = generate_chain();
    let record = extract_certificate_metadata(&generated.root_pem).expect("root should decode");

    assert_eq!(record.subject, "CN=Test Root CA");
    assert_eq!(record.issuer, "CN=Test Root CA");
    assert_eq!(record.version, 3);
    assert!(record.is_ca);
    assert_eq!(record.serial_number, "340282366920938463463374607431768211456");
    assert_eq!(
        record.not_before,
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    );
    assert_eq!(
        record.not_after,
        Utc.with_ymd_and_hms(2034, 1, 1, 0, 0, 0).unwrap()
    );
    assert!(record.has_ordered_validity());
    assert_eq!(record.pem, generated.root_pem);
}

#[test]
fn test_leaf_metadata() {
    let generated = generate_chain();
    let record = extract_certificate_metadata(&generated.leaf_pem).expect("leaf should decode");

    assert_eq!(record.subject, "CN=www.example.com");
    assert_eq!(record.issuer, "CN=Test Root CA");
    assert!(!record.is_ca);
    assert_eq!(record.serial_number, "4242");
    assert_eq!(record.version, 3);
}

#[test]
fn test_chain_records_keep_input_order() {
    let generated = generate_chain();
    let chain = format!("{}{}", generated.leaf_pem, generated.root_pem);

    let records = split_chain_with_metadata(&chain).expect("chain should decode");
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].subject, "CN=www.example.com");
    assert_eq!(records[1].subject, "CN=Test Root CA");

    let blocks = split_chain(PemKind::Certificate, &chain).expect("chain should split");
    assert_eq!(records[0].pem, blocks[0]);
    assert_eq!(records[1].pem, blocks[1]);
}

#[test]
fn test_escaped_chain_decodes() {
    let generated = generate_chain();
    let chain = format!("{}{}", generated.root_pem, generated.leaf_pem)
        .replace("\r\n", "\n")
        .replace('\n', "\\n");

    let records = split_chain_with_metadata(&chain).expect("escaped chain should decode");
    assert_eq!(records.len(), 2);
    assert!(records[0].is_ca);
}

#[test]
fn test_record_serializes_with_wire_names() {
    let generated = generate_chain();
    let record = extract_certificate_metadata(&generated.root_pem).expect("root should decode");
    let json = serde_json::to_value(&record).expect("record should serialize");

    assert_eq!(json["isCA"], serde_json::Value::Bool(true));
    assert_eq!(json["serialNumber"], "340282366920938463463374607431768211456");
    assert_eq!(json["notBefore"], "2024-01-01T00:00:00Z");
    assert_eq!(json["version"], 3);
}

#[test]
fn test_garbage_is_decode_error() {
    let err = extract_certificate_metadata("not a pem block").expect_err("garbage");
    assert_eq!(err.kind(), ErrorKind::DecodeError);
}

#[test]
fn test_csr_block_is_decode_error() {
    let csr = "-----BEGIN CERTIFICATE REQUEST-----\nQUFBQQ==\n-----END CERTIFICATE REQUEST-----\n";
    let err = extract_certificate_metadata(csr).expect_err("wrong block kind");
    assert_eq!(err.kind(), ErrorKind::DecodeError);
}

#[test]
fn test_bad_der_is_parse_error() {
    let pem = "-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n";
    let err = extract_certificate_metadata(pem).expect_err("not a certificate");
    assert_eq!(err.kind(), ErrorKind::ParseError);
}

#[test]
fn test_one_bad_block_fails_whole_chain() {
    let generated = generate_chain();
    let chain = format!(
        "{}-----BEGIN CERTIFICATE-----\nAAAA\n-----END CERTIFICATE-----\n",
        generated.root_pem
    );

    let err = split_chain_with_metadata(&chain).expect_err("second block is not DER");
    assert_eq!(err.kind(), ErrorKind::ParseError);
}
