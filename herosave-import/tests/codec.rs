use herosave_import::decode_payload;

#[test]
fn decodes_standard_base64() {
    assert_eq!(decode_payload("QQ=="), vec![0x41]);
    assert_eq!(decode_payload("3q2+7w=="), vec![0xde, 0xad, 0xbe, 0xef]);
}

#[test]
fn empty_input_yields_empty_bytes() {
    assert!(decode_payload("").is_empty());
}

#[test]
fn malformed_input_yields_empty_bytes() {
    // Never raises; a corrupt field degrades to a zero-length payload
    assert!(decode_payload("not base64 at all!").is_empty());
    assert!(decode_payload("QQ=").is_empty());
}
