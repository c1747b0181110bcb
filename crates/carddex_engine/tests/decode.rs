use carddex_engine::decode_page;
use pretty_assertions::assert_eq;

#[test]
fn charset_in_the_content_type_header_wins() {
    let bytes = b"caf\xe9";
    let decoded = decode_page(bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.text, "café");
    assert_eq!(decoded.encoding_label, "windows-1252");
}

#[test]
fn a_utf8_bom_overrides_the_header() {
    let mut bytes = vec![0xef, 0xbb, 0xbf];
    bytes.extend_from_slice("カード".as_bytes());
    let decoded = decode_page(&bytes, Some("text/html; charset=ISO-8859-1")).unwrap();
    assert_eq!(decoded.text, "カード");
    assert_eq!(decoded.encoding_label, "UTF-8");
}

#[test]
fn shift_jis_pages_decode_via_the_header() {
    // "カード" in Shift_JIS.
    let bytes = b"\x83\x4a\x81\x5b\x83\x68";
    let decoded = decode_page(bytes, Some("text/html; charset=shift_jis")).unwrap();
    assert_eq!(decoded.text, "カード");
    assert_eq!(decoded.encoding_label, "Shift_JIS");
}

#[test]
fn plain_utf8_without_any_hint_is_detected() {
    let bytes = "通常魔法カードの説明文です。".as_bytes();
    let decoded = decode_page(bytes, None).unwrap();
    assert_eq!(decoded.text, "通常魔法カードの説明文です。");
}

#[test]
fn an_unknown_charset_label_falls_back_to_detection() {
    let bytes = "カード".as_bytes();
    let decoded = decode_page(bytes, Some("text/html; charset=no-such-encoding")).unwrap();
    assert_eq!(decoded.text, "カード");
}
