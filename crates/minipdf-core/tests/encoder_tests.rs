/// Encoder contract tests: one PDF syntax rule per test.
use minipdf_core::{dictionary, encode, ObjectId, PdfError, Stream, Value};

fn enc(value: Value) -> String {
    String::from_utf8(encode(&value).unwrap()).unwrap()
}

// ============================================================================
// Primitives
// ============================================================================

#[test]
fn encode_null() {
    assert_eq!(enc(Value::Null), "null");
}

#[test]
fn encode_booleans() {
    assert_eq!(enc(Value::Boolean(true)), "true");
    assert_eq!(enc(Value::Boolean(false)), "false");
}

#[test]
fn encode_integers() {
    assert_eq!(enc(Value::Integer(42)), "42");
    assert_eq!(enc(Value::Integer(-7)), "-7");
    assert_eq!(enc(Value::Integer(0)), "0");
}

#[test]
fn encode_real_shortest_form() {
    assert_eq!(enc(Value::Real(2.5)), "2.5");
    assert_eq!(enc(Value::Real(-0.25)), "-0.25");
    assert_eq!(enc(Value::Real(0.5)), "0.5");
    assert_eq!(enc(Value::Real(612.0)), "612");
}

#[test]
fn encode_real_is_narrowed_to_single_precision() {
    // 0.1 + 0.2 is 0.30000000000000004 in f64 but plain 0.3 in f32
    assert_eq!(enc(Value::Real(0.1 + 0.2)), "0.3");
    assert_eq!(enc(Value::Real(1.000_000_000_1)), "1");
}

#[test]
fn encode_real_never_uses_exponent() {
    let large = enc(Value::Real(1e20));
    let small = enc(Value::Real(1e-5));
    assert!(!large.contains('e') && !large.contains('E'), "{large}");
    assert!(!small.contains('e') && !small.contains('E'), "{small}");
    assert_eq!(small, "0.00001");
}

#[test]
fn encode_non_finite_real_fails() {
    for r in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, 1e300] {
        let err = encode(&Value::Real(r)).unwrap_err();
        assert!(matches!(err, PdfError::EncodingFailure(_)), "{r}: {err}");
    }
}

// ============================================================================
// Names
// ============================================================================

#[test]
fn encode_printable_name_verbatim() {
    assert_eq!(enc(Value::name("Catalog")), "/Catalog");
    assert_eq!(enc(Value::name("A;B_c.d-1")), "/A;B_c.d-1");
}

#[test]
fn encode_name_space_as_hex() {
    assert_eq!(enc(Value::name("Two Words")), "/Two#20Words");
}

#[test]
fn encode_name_control_and_high_bytes_as_hex() {
    assert_eq!(enc(Value::name("a\tb")), "/a#09b");
    assert_eq!(enc(Value::name("\u{7f}")), "/#7f");
    // U+00E9 is C3 A9 in UTF-8
    assert_eq!(enc(Value::name("caf\u{e9}")), "/caf#c3#a9");
}

#[test]
fn encode_empty_name() {
    assert_eq!(enc(Value::name("")), "/");
}

#[test]
fn encode_name_with_nul_fails() {
    let err = encode(&Value::name("bad\0name")).unwrap_err();
    assert!(matches!(err, PdfError::EncodingFailure(_)));
}

// ============================================================================
// Literal strings
// ============================================================================

#[test]
fn encode_plain_literal() {
    assert_eq!(enc(Value::literal("Hello World")), "(Hello World)");
}

#[test]
fn encode_balanced_parentheses_unescaped() {
    assert_eq!(enc(Value::literal("f(x) = (a)")), "(f(x) = (a))");
}

#[test]
fn encode_balanced_but_misordered_parentheses_unescaped() {
    // net count is what matters, not nesting
    assert_eq!(enc(Value::literal(")(")), "()()");
}

#[test]
fn encode_unbalanced_parentheses_all_escaped() {
    assert_eq!(enc(Value::literal("(a) (b")), r"(\(a\) \(b)");
    assert_eq!(enc(Value::literal("x)")), r"(x\))");
}

#[test]
fn encode_literal_control_escapes() {
    assert_eq!(
        enc(Value::literal("a\\b\nc\rd\te\u{8}f\u{c}g")),
        r"(a\\b\nc\rd\te\bf\fg)"
    );
}

#[test]
fn encode_literal_octal_escapes() {
    assert_eq!(enc(Value::literal("\u{1}")), r"(\001)");
    assert_eq!(enc(Value::literal("\u{7f}")), r"(\177)");
    assert_eq!(enc(Value::literal("caf\u{e9}")), r"(caf\351)");
}

#[test]
fn encode_literal_wide_character_uses_fallback() {
    assert_eq!(enc(Value::literal("\u{20ac}")), r"(\077)");
}

#[test]
fn encode_empty_literal() {
    assert_eq!(enc(Value::literal("")), "()");
}

// ============================================================================
// Hex strings
// ============================================================================

#[test]
fn encode_hex_string() {
    assert_eq!(enc(Value::hex("AZ")), "<415a>");
}

#[test]
fn encode_hex_string_drops_whitespace() {
    assert_eq!(enc(Value::hex("a b\nc\td\re\u{c}f")), "<616263646566>");
}

#[test]
fn encode_hex_string_uses_low_byte() {
    assert_eq!(enc(Value::hex("\u{1}\u{ff}\u{141}")), "<01ff41>");
}

#[test]
fn encode_hex_digits_are_lowercase() {
    assert_eq!(enc(Value::hex("\u{ab}\u{5}\u{cd}")), "<ab05cd>");
    let stream = Stream::new(dictionary! {}, vec![0xAB, 0x05, 0xEF]);
    assert!(enc(Value::Stream(stream)).contains("\nstream\nab05ef>\n"));
}

#[test]
fn encode_hex_bytes_keeps_every_byte() {
    // whitespace and NUL bytes survive, unlike text passed to `Value::hex`
    let bytes = [0x00, 0x09, 0x0a, 0x0c, 0x0d, 0x20, 0x7f, 0xff];
    assert_eq!(enc(Value::hex_bytes(&bytes)), "<00090a0c0d207fff>");
    assert_eq!(enc(Value::hex_bytes(&[])), "<>");
}

// ============================================================================
// Containers and references
// ============================================================================

#[test]
fn encode_array_space_separated() {
    let arr = Value::Array(vec![0.into(), 0.into(), 612.into(), 792.into()]);
    assert_eq!(enc(arr), "[0 0 612 792]");
}

#[test]
fn encode_empty_array_and_dictionary() {
    assert_eq!(enc(Value::Array(vec![])), "[]");
    assert_eq!(enc(Value::Dictionary(dictionary! {})), "<<>>");
}

#[test]
fn encode_dictionary_in_insertion_order() {
    let dict = dictionary! {
        "Type" => Value::name("Page"),
        "Parent" => ObjectId::new(3, 0),
        "Rotate" => 90,
    };
    assert_eq!(
        enc(Value::Dictionary(dict)),
        "<</Type /Page\n/Parent 3 0 R\n/Rotate 90>>"
    );
}

#[test]
fn encode_dictionary_key_escaped_like_name() {
    let dict = dictionary! { "My Key" => true };
    assert_eq!(enc(Value::Dictionary(dict)), "<</My#20Key true>>");
}

#[test]
fn encode_nested_containers() {
    let value = Value::Dictionary(dictionary! {
        "Font" => dictionary! { "F1" => ObjectId::new(7, 2) },
        "ProcSet" => vec![Value::name("PDF"), Value::name("Text")],
    });
    assert_eq!(
        enc(value),
        "<</Font <</F1 7 2 R>>\n/ProcSet [/PDF /Text]>>"
    );
}

#[test]
fn encode_reference() {
    assert_eq!(enc(Value::Reference(ObjectId::new(12, 3))), "12 3 R");
}

#[test]
fn encode_dictionary_key_with_nul_fails() {
    let dict = dictionary! { "a\0" => 1 };
    assert!(matches!(
        encode(&Value::Dictionary(dict)),
        Err(PdfError::EncodingFailure(_))
    ));
}

// ============================================================================
// Streams
// ============================================================================

#[test]
fn encode_stream_synthesizes_dictionary() {
    let stream = Stream::new(dictionary! {}, b"AB".to_vec());
    assert_eq!(
        enc(Value::Stream(stream)),
        "<</Length 5\n/Filter /ASCIIHexDecode\n/DL 2>>\nstream\n4142>\nendstream\n"
    );
}

#[test]
fn encode_stream_appends_caller_entries() {
    let stream = Stream::new(
        dictionary! {
            "Type" => Value::name("XObject"),
            "Width" => 2,
        },
        vec![0x00, 0xff, 0x10],
    );
    assert_eq!(
        enc(Value::Stream(stream)),
        "<</Length 7\n/Filter /ASCIIHexDecode\n/DL 3\n/Type /XObject\n/Width 2>>\nstream\n00ff10>\nendstream\n"
    );
}

#[test]
fn encode_empty_stream() {
    let stream = Stream::new(dictionary! {}, Vec::new());
    assert_eq!(
        enc(Value::Stream(stream)),
        "<</Length 1\n/Filter /ASCIIHexDecode\n/DL 0>>\nstream\n>\nendstream\n"
    );
}

#[test]
fn encode_stream_rejects_reserved_keys() {
    for key in ["Length", "Filter", "DL"] {
        let mut dict = dictionary! {};
        dict.insert(key.to_string(), Value::Integer(1));
        let err = encode(&Value::Stream(Stream::new(dict, b"x".to_vec()))).unwrap_err();
        match err {
            PdfError::ReservedStreamKeyConflict { key: found } => assert_eq!(found, key),
            other => panic!("expected reserved key conflict, got {other}"),
        }
    }
}

#[test]
fn encode_nested_stream_fails() {
    let stream = Value::Stream(Stream::new(dictionary! {}, b"x".to_vec()));
    let in_array = Value::Array(vec![stream.clone()]);
    let in_dict = Value::Dictionary(dictionary! { "S" => stream });
    assert!(matches!(
        encode(&in_array),
        Err(PdfError::UnsupportedValueType { found: "stream", .. })
    ));
    assert!(matches!(
        encode(&in_dict),
        Err(PdfError::UnsupportedValueType { found: "stream", .. })
    ));
}
