use std::{
    any::Any,
    io::{Cursor, Write},
    str::FromStr,
    sync::Arc,
};

use serde_json::{json, Value};

use crate::{
    json::JsonEncoder, Array, ByteString, ContextOwned, DataValue, DateTime, DiagnosticInfo,
    DynStruct, EncodingError, EncodingResult, ExpandedNodeId, ExtensionObject, Guid, LocalizedText,
    NodeId, QualifiedName, StatusCode, StructureCodec, UAString, UaEnum, UaNullable, Variant,
    VariantScalarTypeId, XmlElement, BASE_NAMESPACE,
};

fn ctx() -> ContextOwned {
    ContextOwned::default()
}

fn ctx_with_namespaces() -> ContextOwned {
    let mut ctx = ContextOwned::default();
    ctx.namespaces_mut().add_namespace("urn:example:ns:1");
    ctx.namespaces_mut().add_namespace("urn:example:ns:2");
    ctx
}

fn ctx_with_servers() -> ContextOwned {
    let mut ctx = ContextOwned::default();
    ctx.servers_mut().add_server("urn:server:local");
    ctx.servers_mut().add_server("urn:server:remote");
    ctx
}

fn try_encode<F>(ctx: &ContextOwned, reversible: bool, f: F) -> EncodingResult<String>
where
    F: FnOnce(&mut JsonEncoder) -> EncodingResult<()>,
{
    let mut target = Vec::new();
    {
        let mut stream = Cursor::new(&mut target);
        let mut encoder = JsonEncoder::new(ctx.context(), &mut stream as &mut dyn Write);
        encoder.set_reversible(reversible);
        f(&mut encoder)?;
        encoder.finish()?;
    }
    Ok(String::from_utf8(target).unwrap())
}

fn encode<F>(ctx: &ContextOwned, f: F) -> String
where
    F: FnOnce(&mut JsonEncoder) -> EncodingResult<()>,
{
    try_encode(ctx, true, f).unwrap()
}

fn encode_non_reversible<F>(ctx: &ContextOwned, f: F) -> String
where
    F: FnOnce(&mut JsonEncoder) -> EncodingResult<()>,
{
    try_encode(ctx, false, f).unwrap()
}

#[test]
fn serialize_boolean() {
    let ctx = ctx();
    assert_eq!(encode(&ctx, |e| e.encode_boolean(None, true)), "true");
    assert_eq!(encode(&ctx, |e| e.encode_boolean(None, false)), "false");

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_boolean(Some("foo"), true)?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":true}"#);
}

#[test]
fn serialize_integers() {
    let ctx = ctx();
    assert_eq!(encode(&ctx, |e| e.encode_sbyte(None, 0)), "0");
    assert_eq!(encode(&ctx, |e| e.encode_sbyte(None, i8::MIN)), "-128");
    assert_eq!(encode(&ctx, |e| e.encode_sbyte(None, i8::MAX)), "127");
    assert_eq!(encode(&ctx, |e| e.encode_byte(None, u8::MAX)), "255");
    assert_eq!(encode(&ctx, |e| e.encode_int16(None, i16::MIN)), "-32768");
    assert_eq!(encode(&ctx, |e| e.encode_uint16(None, u16::MAX)), "65535");
    assert_eq!(
        encode(&ctx, |e| e.encode_int32(None, i32::MIN)),
        "-2147483648"
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_uint32(None, u32::MAX)),
        "4294967295"
    );

    // Keyed zero is written, only structured type codecs skip defaults.
    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_int32(Some("foo"), 0)?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":0}"#);
}

#[test]
fn serialize_64_bit_integers() {
    // Int64 and UInt64 values are formatted as a decimal number
    // encoded as a JSON string.
    let ctx = ctx();
    assert_eq!(encode(&ctx, |e| e.encode_int64(None, 0)), r#""0""#);
    assert_eq!(
        encode(&ctx, |e| e.encode_int64(None, i64::MIN)),
        r#""-9223372036854775808""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_int64(None, i64::MAX)),
        r#""9223372036854775807""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_uint64(None, u64::MAX)),
        r#""18446744073709551615""#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_uint64(Some("foo"), u64::MAX)?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":"18446744073709551615"}"#);
}

#[test]
fn serialize_float() {
    let ctx = ctx();
    // Zero still renders with a fractional component to distinguish it from
    // integer columns downstream.
    assert_eq!(encode(&ctx, |e| e.encode_float(None, 0.0)), "0.0");
    assert_eq!(encode(&ctx, |e| e.encode_float(None, 123.456)), "123.456");
    assert_eq!(
        encode(&ctx, |e| e.encode_float(None, f32::INFINITY)),
        r#""Infinity""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_float(None, f32::NEG_INFINITY)),
        r#""-Infinity""#
    );
    assert_eq!(encode(&ctx, |e| e.encode_float(None, f32::NAN)), r#""NaN""#);

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_float(Some("foo"), 0.0)?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":0.0}"#);
}

#[test]
fn serialize_double() {
    let ctx = ctx();
    assert_eq!(encode(&ctx, |e| e.encode_double(None, 0.0)), "0.0");
    assert_eq!(
        encode(&ctx, |e| e.encode_double(None, -451.001)),
        "-451.001"
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_double(None, f64::INFINITY)),
        r#""Infinity""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_double(None, f64::NEG_INFINITY)),
        r#""-Infinity""#
    );
    assert_eq!(encode(&ctx, |e| e.encode_double(None, f64::NAN)), r#""NaN""#);
}

#[test]
fn serialize_string() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_string(None, &UAString::from(""))),
        r#""""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_string(None, &UAString::from("foo"))),
        r#""foo""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_string(None, &UAString::null())),
        "null"
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_string(None, &UAString::from("\"quoted\""))),
        r#""\"quoted\"""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_string(None, &UAString::from("line\nbreak"))),
        r#""line\nbreak""#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_string(Some("foo"), &UAString::from("bar"))?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":"bar"}"#);
}

#[test]
fn serialize_date_time() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_date_time(None, DateTime::null())),
        r#""1601-01-01T00:00:00Z""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_date_time(None, DateTime::ymd(2000, 1, 1))),
        r#""2000-01-01T00:00:00Z""#
    );

    // Values outside the representable range clamp to the range ends.
    let below_min = DateTime::from_ticks(DateTime::iso8601_minimum().ticks() - 10_000_000);
    assert_eq!(
        encode(&ctx, |e| e.encode_date_time(None, below_min)),
        r#""0001-01-01T00:00:00Z""#
    );
    let above_max = DateTime::from_ticks(DateTime::iso8601_maximum().ticks() + 10_000_000);
    assert_eq!(
        encode(&ctx, |e| e.encode_date_time(None, above_max)),
        r#""9999-12-31T23:59:59Z""#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_date_time(Some("foo"), DateTime::ymd(2000, 1, 1))?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":"2000-01-01T00:00:00Z"}"#);
}

#[test]
fn serialize_guid() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_guid(None, &Guid::null())),
        r#""00000000-0000-0000-0000-000000000000""#
    );

    // Hex digits render upper-case.
    let guid = Guid::from_str("72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap();
    assert_eq!(
        encode(&ctx, |e| e.encode_guid(None, &guid)),
        r#""72962B91-FA75-4AE6-8D28-B404DC7DAF63""#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_guid(Some("foo"), &guid)?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":"72962B91-FA75-4AE6-8D28-B404DC7DAF63"}"#);
}

#[test]
fn serialize_byte_string() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_byte_string(None, &ByteString::from(vec![1, 2, 3, 4]))),
        r#""AQIDBA==""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_byte_string(None, &ByteString::null())),
        "null"
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_byte_string(Some("foo"), &ByteString::from(vec![1, 2, 3, 4]))?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":"AQIDBA=="}"#);
}

#[test]
fn serialize_xml_element() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_xml_element(None, &XmlElement::from(""))),
        r#""""#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_xml_element(None, &XmlElement::from("<foo>bar</foo>"))),
        r#""<foo>bar</foo>""#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_xml_element(Some("foo"), &XmlElement::from("<foo>bar</foo>"))?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":"<foo>bar</foo>"}"#);
}

#[test]
fn serialize_node_id() {
    let ctx = ctx();

    // IdType 0 is the default and omitted, Namespace 0 is omitted.
    assert_eq!(
        encode(&ctx, |e| e.encode_node_id(None, &NodeId::new(0, 0u32))),
        r#"{"Id":0}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_node_id(None, &NodeId::new(1, 0u32))),
        r#"{"Id":0,"Namespace":1}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_node_id(None, &NodeId::new(0, "foo"))),
        r#"{"IdType":1,"Id":"foo"}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_node_id(None, &NodeId::new(1, "foo"))),
        r#"{"IdType":1,"Id":"foo","Namespace":1}"#
    );

    let guid = Guid::from_str("72962b91-fa75-4ae6-8d28-b404dc7daf63").unwrap();
    assert_eq!(
        encode(&ctx, |e| e.encode_node_id(None, &NodeId::new(0, guid.clone()))),
        r#"{"IdType":2,"Id":"72962B91-FA75-4AE6-8D28-B404DC7DAF63"}"#
    );

    let bytes = ByteString::from_base64("aGVsbG8gd29ybGQ=").unwrap();
    assert_eq!(
        encode(&ctx, |e| e.encode_node_id(None, &NodeId::new(1, bytes.clone()))),
        r#"{"IdType":3,"Id":"aGVsbG8gd29ybGQ=","Namespace":1}"#
    );

    // The non-reversible form resolves namespace indexes above 1 to URIs
    // where the table knows them.
    let ctx_ns = ctx_with_namespaces();
    assert_eq!(
        encode_non_reversible(&ctx_ns, |e| e.encode_node_id(None, &NodeId::new(0, 0u32))),
        r#"{"Id":0}"#
    );
    assert_eq!(
        encode_non_reversible(&ctx_ns, |e| e.encode_node_id(None, &NodeId::new(1, 0u32))),
        r#"{"Id":0,"Namespace":1}"#
    );
    assert_eq!(
        encode_non_reversible(&ctx_ns, |e| e.encode_node_id(None, &NodeId::new(2, 0u32))),
        r#"{"Id":0,"Namespace":"urn:example:ns:2"}"#
    );
    assert_eq!(
        encode_non_reversible(&ctx_ns, |e| e.encode_node_id(None, &NodeId::new(99, 0u32))),
        r#"{"Id":0,"Namespace":99}"#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_node_id(Some("foo"), &NodeId::new(1, "foo"))?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":{"IdType":1,"Id":"foo","Namespace":1}}"#);
}

#[test]
fn serialize_expanded_node_id() {
    let ctx = ctx();

    // An explicit namespace URI overrides the numeric index in both modes.
    let with_uri = ExpandedNodeId {
        node_id: NodeId::new(0, "foo"),
        namespace_uri: UAString::from(BASE_NAMESPACE),
        server_index: 0,
    };
    assert_eq!(
        encode(&ctx, |e| e.encode_expanded_node_id(None, &with_uri)),
        r#"{"IdType":1,"Id":"foo","Namespace":"http://opcfoundation.org/UA/"}"#
    );

    let remote = ExpandedNodeId::new((NodeId::new(0, "foo"), 1));
    assert_eq!(
        encode(&ctx, |e| e.encode_expanded_node_id(None, &remote)),
        r#"{"IdType":1,"Id":"foo","ServerUri":1}"#
    );

    // The non-reversible form resolves the server index from the server
    // table when present, and falls back to the number.
    let ctx_srv = ctx_with_servers();
    assert_eq!(
        encode_non_reversible(&ctx_srv, |e| e.encode_expanded_node_id(None, &remote)),
        r#"{"IdType":1,"Id":"foo","ServerUri":"urn:server:remote"}"#
    );
    let remote_unknown = ExpandedNodeId::new((NodeId::new(0, "foo"), 2));
    assert_eq!(
        encode_non_reversible(&ctx_srv, |e| e.encode_expanded_node_id(None, &remote_unknown)),
        r#"{"IdType":1,"Id":"foo","ServerUri":2}"#
    );

    let json = encode_non_reversible(&ctx, |e| {
        e.begin_object()?;
        e.encode_expanded_node_id(Some("foo"), &with_uri)?;
        e.end_object()
    });
    assert_eq!(
        json,
        r#"{"foo":{"IdType":1,"Id":"foo","Namespace":"http://opcfoundation.org/UA/"}}"#
    );
}

#[test]
fn serialize_status_code() {
    let ctx = ctx();

    // The reversible form is the bare numeric code, Good included.
    assert_eq!(
        encode(&ctx, |e| e.encode_status_code(None, StatusCode::Good)),
        "0"
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_status_code(None, StatusCode::UncertainInitialValue)),
        "1083310080"
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_status_code(None, StatusCode::BadUnexpectedError)),
        "2147549184"
    );

    // The non-reversible form omits Good entirely and writes other codes
    // with their symbolic name.
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_status_code(None, StatusCode::Good)),
        ""
    );
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_status_code(
            None,
            StatusCode::UncertainInitialValue
        )),
        r#"{"Code":1083310080,"Symbol":"Uncertain_InitialValue"}"#
    );
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_status_code(
            None,
            StatusCode::BadUnexpectedError
        )),
        r#"{"Code":2147549184,"Symbol":"Bad_UnexpectedError"}"#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_status_code(Some("foo"), StatusCode::Good)?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":0}"#);

    // Key and value omitted because the code is Good.
    let json = encode_non_reversible(&ctx, |e| {
        e.begin_object()?;
        e.encode_status_code(Some("foo"), StatusCode::Good)?;
        e.end_object()
    });
    assert_eq!(json, "{}");

    let json = encode_non_reversible(&ctx, |e| {
        e.begin_object()?;
        e.encode_status_code(Some("foo"), StatusCode::UncertainInitialValue)?;
        e.end_object()
    });
    assert_eq!(
        json,
        r#"{"foo":{"Code":1083310080,"Symbol":"Uncertain_InitialValue"}}"#
    );
}

#[test]
fn serialize_qualified_name() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_qualified_name(None, &QualifiedName::new(0, "foo"))),
        r#"{"Name":"foo"}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_qualified_name(None, &QualifiedName::new(1, "foo"))),
        r#"{"Name":"foo","Uri":1}"#
    );

    let ctx_ns = ctx_with_namespaces();
    assert_eq!(
        encode_non_reversible(&ctx_ns, |e| e.encode_qualified_name(
            None,
            &QualifiedName::new(1, "foo")
        )),
        r#"{"Name":"foo","Uri":1}"#
    );
    assert_eq!(
        encode_non_reversible(&ctx_ns, |e| e.encode_qualified_name(
            None,
            &QualifiedName::new(2, "foo")
        )),
        r#"{"Name":"foo","Uri":"urn:example:ns:2"}"#
    );
    assert_eq!(
        encode_non_reversible(&ctx_ns, |e| e.encode_qualified_name(
            None,
            &QualifiedName::new(99, "foo")
        )),
        r#"{"Name":"foo","Uri":99}"#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_qualified_name(Some("foo"), &QualifiedName::new(0, "foo"))?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":{"Name":"foo"}}"#);
}

#[test]
fn serialize_localized_text() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_localized_text(None, &LocalizedText::english("foo"))),
        r#"{"Locale":"en","Text":"foo"}"#
    );
    let locale_only = LocalizedText {
        locale: UAString::from("en"),
        text: UAString::null(),
    };
    assert_eq!(
        encode(&ctx, |e| e.encode_localized_text(None, &locale_only)),
        r#"{"Locale":"en"}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_localized_text(None, &LocalizedText::from("foo"))),
        r#"{"Text":"foo"}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_localized_text(None, &LocalizedText::null())),
        "{}"
    );

    // The non-reversible form discards the locale.
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_localized_text(
            None,
            &LocalizedText::english("foo")
        )),
        r#""foo""#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_localized_text(Some("foo"), &LocalizedText::english("foo"))?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":{"Locale":"en","Text":"foo"}}"#);
}

#[test]
fn serialize_extension_object() {
    let ctx = ctx();

    let json_body = ExtensionObject::from_json(NodeId::new(2, 42u32), r#"{"foo":"bar","baz":42}"#);
    let xml_body = ExtensionObject::from_xml(NodeId::new(2, 42u32), "<foo>bar</foo>");
    let binary_body = ExtensionObject::from_binary(NodeId::new(2, 42u32), vec![0u8, 1, 2, 3]);

    // A JSON body has no Encoding field.
    assert_eq!(
        encode(&ctx, |e| e.encode_extension_object(None, &json_body)),
        r#"{"TypeId":{"Id":42,"Namespace":2},"Body":{"foo":"bar","baz":42}}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_extension_object(None, &xml_body)),
        r#"{"TypeId":{"Id":42,"Namespace":2},"Encoding":2,"Body":"<foo>bar</foo>"}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_extension_object(None, &binary_body)),
        r#"{"TypeId":{"Id":42,"Namespace":2},"Encoding":1,"Body":"AAECAw=="}"#
    );

    // The non-reversible form is the body alone.
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_extension_object(None, &json_body)),
        r#"{"foo":"bar","baz":42}"#
    );
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_extension_object(None, &xml_body)),
        r#""<foo>bar</foo>""#
    );
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_extension_object(None, &binary_body)),
        r#""AAECAw==""#
    );

    assert_eq!(
        encode(&ctx, |e| e.encode_extension_object(None, &ExtensionObject::null())),
        "null"
    );
}

#[test]
fn serialize_data_value() {
    let ctx = ctx();
    let timestamp = DateTime::ymd(2020, 1, 1);

    let all_fields = DataValue {
        value: Some(Variant::from("foo")),
        status: Some(StatusCode::GoodOverload),
        source_timestamp: Some(timestamp),
        source_picoseconds: Some(100),
        server_timestamp: Some(timestamp),
        server_picoseconds: Some(200),
    };

    let json = encode(&ctx, |e| e.encode_data_value(None, &all_fields));
    assert_eq!(
        json,
        r#"{"Value":{"Type":12,"Body":"foo"},"Status":3080192,"SourceTimestamp":"2020-01-01T00:00:00Z","SourcePicoseconds":100,"ServerTimestamp":"2020-01-01T00:00:00Z","ServerPicoseconds":200}"#
    );
    // The output is well-formed JSON with the expected content.
    let value: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(
        value,
        json!({
            "Value": {"Type": 12, "Body": "foo"},
            "Status": 3080192,
            "SourceTimestamp": "2020-01-01T00:00:00Z",
            "SourcePicoseconds": 100,
            "ServerTimestamp": "2020-01-01T00:00:00Z",
            "ServerPicoseconds": 200,
        })
    );

    // Each field is omitted independently when at its default.
    let mut without_value = all_fields.clone();
    without_value.value = None;
    assert_eq!(
        encode(&ctx, |e| e.encode_data_value(None, &without_value)),
        r#"{"Status":3080192,"SourceTimestamp":"2020-01-01T00:00:00Z","SourcePicoseconds":100,"ServerTimestamp":"2020-01-01T00:00:00Z","ServerPicoseconds":200}"#
    );

    let mut good_status = all_fields.clone();
    good_status.status = Some(StatusCode::Good);
    assert_eq!(
        encode(&ctx, |e| e.encode_data_value(None, &good_status)),
        r#"{"Value":{"Type":12,"Body":"foo"},"SourceTimestamp":"2020-01-01T00:00:00Z","SourcePicoseconds":100,"ServerTimestamp":"2020-01-01T00:00:00Z","ServerPicoseconds":200}"#
    );

    let mut without_source_time = all_fields.clone();
    without_source_time.source_timestamp = None;
    assert_eq!(
        encode(&ctx, |e| e.encode_data_value(None, &without_source_time)),
        r#"{"Value":{"Type":12,"Body":"foo"},"Status":3080192,"SourcePicoseconds":100,"ServerTimestamp":"2020-01-01T00:00:00Z","ServerPicoseconds":200}"#
    );

    // Zero picoseconds are not in the omission set, only an absent field is.
    let mut zero_picoseconds = all_fields.clone();
    zero_picoseconds.source_picoseconds = Some(0);
    zero_picoseconds.server_picoseconds = None;
    assert_eq!(
        encode(&ctx, |e| e.encode_data_value(None, &zero_picoseconds)),
        r#"{"Value":{"Type":12,"Body":"foo"},"Status":3080192,"SourceTimestamp":"2020-01-01T00:00:00Z","SourcePicoseconds":0,"ServerTimestamp":"2020-01-01T00:00:00Z"}"#
    );

    // A data value with every field at its default produces no output at
    // all, and is omitted entirely when keyed.
    assert_eq!(encode(&ctx, |e| e.encode_data_value(None, &DataValue::null())), "");
    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_data_value(Some("foo"), &DataValue::null())?;
        e.end_object()
    });
    assert_eq!(json, "{}");
}

#[test]
fn serialize_variant_scalar() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_variant(None, &Variant::Boolean(true))),
        r#"{"Type":1,"Body":true}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_variant(
            None,
            &Variant::from(QualifiedName::new(1, "foo"))
        )),
        r#"{"Type":20,"Body":{"Name":"foo","Uri":1}}"#
    );

    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_variant(None, &Variant::Boolean(true))),
        "true"
    );
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_variant(
            None,
            &Variant::from(QualifiedName::new(1, "foo"))
        )),
        r#"{"Name":"foo","Uri":1}"#
    );
}

#[test]
fn serialize_variant_empty() {
    let ctx = ctx();
    assert_eq!(encode(&ctx, |e| e.encode_variant(None, &Variant::Empty)), "null");

    // Omitted when keyed.
    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_variant(Some("foo"), &Variant::Empty)?;
        e.end_object()
    });
    assert_eq!(json, "{}");
}

#[test]
fn serialize_variant_nested() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_variant(
            None,
            &Variant::Variant(Box::new(Variant::Double(1.2)))
        )),
        r#"{"Type":24,"Body":{"Type":11,"Body":1.2}}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_variant(
            None,
            &Variant::Variant(Box::new(Variant::Empty))
        )),
        r#"{"Type":24,"Body":null}"#
    );
}

#[test]
fn serialize_variant_array_of_variants() {
    let ctx = ctx();
    let array = Array::new(
        VariantScalarTypeId::Variant,
        vec![Variant::from("foo"), Variant::from("bar")],
    )
    .unwrap();

    // Each element is a full variant in the reversible form.
    assert_eq!(
        encode(&ctx, |e| e.encode_variant(None, &Variant::from(array.clone()))),
        r#"{"Type":24,"Body":[{"Type":12,"Body":"foo"},{"Type":12,"Body":"bar"}]}"#
    );
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_variant(None, &Variant::from(array))),
        r#"["foo","bar"]"#
    );
}

#[test]
fn serialize_variant_single_dimension_array() {
    let ctx = ctx();
    assert_eq!(
        encode(&ctx, |e| e.encode_variant(None, &Variant::from(vec![0, 1, 2, 3]))),
        r#"{"Type":6,"Body":[0,1,2,3]}"#
    );
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_variant(None, &Variant::from(vec![0, 1, 2, 3]))),
        "[0,1,2,3]"
    );

    assert_eq!(
        encode(&ctx, |e| e.encode_variant(
            None,
            &Variant::from(vec![
                LocalizedText::new("en", "Test"),
                LocalizedText::new("en", "Test2"),
            ])
        )),
        r#"{"Type":21,"Body":[{"Locale":"en","Text":"Test"},{"Locale":"en","Text":"Test2"}]}"#
    );
}

#[test]
fn serialize_variant_multi_dimension_array() {
    let ctx = ctx();

    let matrix_2d = Array::new_multi(
        VariantScalarTypeId::Int32,
        [0, 2, 3, 1, 3, 4]
            .into_iter()
            .map(Variant::from)
            .collect::<Vec<_>>(),
        vec![2, 3],
    )
    .unwrap();
    let matrix_3d = Array::new_multi(
        VariantScalarTypeId::Int32,
        [0, 1, 2, 3, 4, 5, 6, 7]
            .into_iter()
            .map(Variant::from)
            .collect::<Vec<_>>(),
        vec![2, 2, 2],
    )
    .unwrap();

    // The reversible form flattens the elements in row-major order and
    // carries the shape in Dimensions.
    assert_eq!(
        encode(&ctx, |e| e.encode_variant(None, &Variant::from(matrix_2d.clone()))),
        r#"{"Type":6,"Body":[0,2,3,1,3,4],"Dimensions":[2,3]}"#
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_variant(None, &Variant::from(matrix_3d.clone()))),
        r#"{"Type":6,"Body":[0,1,2,3,4,5,6,7],"Dimensions":[2,2,2]}"#
    );

    // The non-reversible form nests arrays to the logical shape.
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_variant(None, &Variant::from(matrix_2d))),
        "[[0,2,3],[1,3,4]]"
    );
    assert_eq!(
        encode_non_reversible(&ctx, |e| e.encode_variant(None, &Variant::from(matrix_3d))),
        "[[[0,1],[2,3]],[[4,5],[6,7]]]"
    );
}

#[test]
fn serialize_matrix() {
    let ctx = ctx();
    let matrix_2d = Array::new_multi(
        VariantScalarTypeId::Int32,
        [0, 1, 2, 3].into_iter().map(Variant::from).collect::<Vec<_>>(),
        vec![2, 2],
    )
    .unwrap();
    let matrix_3d = Array::new_multi(
        VariantScalarTypeId::Int32,
        [0, 1, 2, 3, 4, 5, 6, 7]
            .into_iter()
            .map(Variant::from)
            .collect::<Vec<_>>(),
        vec![2, 2, 2],
    )
    .unwrap();

    // Standalone matrices are nested arrays with no envelope in both modes,
    // the dimensions are implicit in the nesting.
    assert_eq!(
        encode(&ctx, |e| e.encode_matrix(None, &matrix_2d)),
        "[[0,1],[2,3]]"
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_matrix(None, &matrix_3d)),
        "[[[0,1],[2,3]],[[4,5],[6,7]]]"
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_matrix(Some("foo"), &matrix_2d)?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":[[0,1],[2,3]]}"#);

    // A matrix whose dimensions do not match its element count is rejected.
    let broken = Array {
        value_type: VariantScalarTypeId::Int32,
        values: vec![Variant::from(1), Variant::from(2)],
        dimensions: Some(vec![2, 3]),
    };
    let err = try_encode(&ctx, true, |e| e.encode_matrix(None, &broken)).unwrap_err();
    assert!(matches!(err, EncodingError::InvalidState(_)));
}

#[test]
fn serialize_diagnostic_info() {
    let ctx = ctx();

    let diagnostic_info = DiagnosticInfo {
        symbolic_id: Some(1),
        namespace_uri: Some(0),
        locale: Some(2),
        localized_text: Some(3),
        additional_info: Some(UAString::from("foo")),
        ..Default::default()
    };
    assert_eq!(
        encode(&ctx, |e| e.encode_diagnostic_info(None, &diagnostic_info)),
        r#"{"SymbolicId":1,"NamespaceUri":0,"Locale":2,"LocalizedText":3,"AdditionalInfo":"foo"}"#
    );

    let nested = DiagnosticInfo {
        symbolic_id: Some(5),
        namespace_uri: Some(4),
        locale: Some(6),
        localized_text: Some(7),
        additional_info: Some(UAString::from("bar")),
        inner_status_code: Some(StatusCode::Good),
        inner_diagnostic_info: Some(Box::new(diagnostic_info.clone())),
    };
    assert_eq!(
        encode(&ctx, |e| e.encode_diagnostic_info(None, &nested)),
        r#"{"SymbolicId":5,"NamespaceUri":4,"Locale":6,"LocalizedText":7,"AdditionalInfo":"bar","InnerStatusCode":0,"InnerDiagnosticInfo":{"SymbolicId":1,"NamespaceUri":0,"Locale":2,"LocalizedText":3,"AdditionalInfo":"foo"}}"#
    );

    // A negative index is the unset sentinel.
    let negative = DiagnosticInfo {
        symbolic_id: Some(-1),
        locale: Some(2),
        ..Default::default()
    };
    assert_eq!(
        encode(&ctx, |e| e.encode_diagnostic_info(None, &negative)),
        r#"{"Locale":2}"#
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_diagnostic_info(Some("foo"), &diagnostic_info)?;
        e.end_object()
    });
    assert_eq!(
        json,
        r#"{"foo":{"SymbolicId":1,"NamespaceUri":0,"Locale":2,"LocalizedText":3,"AdditionalInfo":"foo"}}"#
    );
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum ApplicationType {
    Server = 0,
    Client = 1,
    ClientAndServer = 2,
    DiscoveryServer = 3,
}

impl UaEnum for ApplicationType {
    type Repr = i32;

    fn from_repr(repr: i32) -> EncodingResult<Self> {
        match repr {
            0 => Ok(Self::Server),
            1 => Ok(Self::Client),
            2 => Ok(Self::ClientAndServer),
            3 => Ok(Self::DiscoveryServer),
            r => Err(EncodingError::unknown_type(format!(
                "{} is not a valid ApplicationType",
                r
            ))),
        }
    }

    fn into_repr(self) -> i32 {
        self as i32
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::Server => "Server_0",
            Self::Client => "Client_1",
            Self::ClientAndServer => "ClientAndServer_2",
            Self::DiscoveryServer => "DiscoveryServer_3",
        }
    }

    fn from_str(val: &str) -> EncodingResult<Self> {
        match val {
            "Server_0" => Ok(Self::Server),
            "Client_1" => Ok(Self::Client),
            "ClientAndServer_2" => Ok(Self::ClientAndServer),
            "DiscoveryServer_3" => Ok(Self::DiscoveryServer),
            r => Err(EncodingError::unknown_type(format!(
                "{} is not a valid ApplicationType",
                r
            ))),
        }
    }
}

#[test]
fn serialize_enum() {
    let ctx = ctx();

    for variant in [
        ApplicationType::Server,
        ApplicationType::Client,
        ApplicationType::ClientAndServer,
        ApplicationType::DiscoveryServer,
    ] {
        assert_eq!(
            encode(&ctx, |e| e.encode_enum(None, variant)),
            (variant as i32).to_string()
        );
        assert_eq!(
            encode_non_reversible(&ctx, |e| e.encode_enum(None, variant)),
            format!("\"{}\"", variant.as_str())
        );
    }

    let json = encode_non_reversible(&ctx, |e| {
        e.begin_object()?;
        e.encode_enum(Some("foo"), ApplicationType::ClientAndServer)?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":"ClientAndServer_2"}"#);
}

const ARGUMENT_TYPE_ID: u32 = 296;
const ARGUMENT_JSON_ENCODING_ID: u32 = 15081;

#[derive(Debug, Clone, PartialEq)]
struct Argument {
    name: UAString,
    data_type: NodeId,
    value_rank: i32,
    array_dimensions: Option<Vec<u32>>,
    description: LocalizedText,
}

impl DynStruct for Argument {
    fn json_encoding_id(&self) -> ExpandedNodeId {
        ExpandedNodeId::from(NodeId::new(0, ARGUMENT_JSON_ENCODING_ID))
    }

    fn as_dyn_any_ref(&self) -> &(dyn Any + Send + Sync) {
        self
    }
}

struct ArgumentCodec;

impl StructureCodec for ArgumentCodec {
    fn encode(&self, encoder: &mut JsonEncoder<'_>, value: &dyn DynStruct) -> EncodingResult<()> {
        let Some(value) = value.as_dyn_any_ref().downcast_ref::<Argument>() else {
            return Err(EncodingError::unknown_type("value is not an Argument"));
        };
        if !value.name.is_ua_null() {
            encoder.encode_string(Some("Name"), &value.name)?;
        }
        if !value.data_type.is_ua_null() {
            encoder.encode_node_id(Some("DataType"), &value.data_type)?;
        }
        if !value.value_rank.is_ua_null() {
            encoder.encode_int32(Some("ValueRank"), value.value_rank)?;
        }
        encoder.encode_array(
            Some("ArrayDimensions"),
            value.array_dimensions.as_deref(),
            |e, v| e.encode_uint32(None, *v),
        )?;
        if !value.description.is_ua_null() {
            encoder.encode_localized_text(Some("Description"), &value.description)?;
        }
        Ok(())
    }
}

fn ctx_with_argument_codec() -> ContextOwned {
    let mut ctx = ContextOwned::default();
    ctx.type_manager_mut().add_codec(
        NodeId::new(0, ARGUMENT_TYPE_ID),
        NodeId::new(0, ARGUMENT_JSON_ENCODING_ID),
        Arc::new(ArgumentCodec),
    );
    ctx
}

#[test]
fn serialize_struct() {
    let ctx = ctx_with_argument_codec();

    let argument = Argument {
        name: UAString::from("foo"),
        data_type: NodeId::new(0, 6u32),
        value_rank: -1,
        array_dimensions: None,
        description: LocalizedText::english("foo desc"),
    };

    // Fields come in the codec's declaration order, null fields are left
    // out entirely.
    assert_eq!(
        encode(&ctx, |e| e.encode_struct(
            None,
            &argument,
            &NodeId::new(0, ARGUMENT_TYPE_ID)
        )),
        r#"{"Name":"foo","DataType":{"Id":6},"ValueRank":-1,"Description":{"Locale":"en","Text":"foo desc"}}"#
    );

    // The codec is registered under the encoding id as well.
    let with_dimensions = Argument {
        array_dimensions: Some(vec![3]),
        ..argument
    };
    assert_eq!(
        encode(&ctx, |e| e.encode_struct(
            None,
            &with_dimensions,
            &NodeId::new(0, ARGUMENT_JSON_ENCODING_ID)
        )),
        r#"{"Name":"foo","DataType":{"Id":6},"ValueRank":-1,"ArrayDimensions":[3],"Description":{"Locale":"en","Text":"foo desc"}}"#
    );
}

#[test]
fn serialize_struct_unknown_codec() {
    let ctx = ctx();
    let argument = Argument {
        name: UAString::from("foo"),
        data_type: NodeId::new(0, 6u32),
        value_rank: -1,
        array_dimensions: None,
        description: LocalizedText::null(),
    };
    let err = try_encode(&ctx, true, |e| {
        e.encode_struct(None, &argument, &NodeId::new(0, ARGUMENT_TYPE_ID))
    })
    .unwrap_err();
    assert!(matches!(err, EncodingError::UnknownType(_)));
}

const TEST_REQUEST_TYPE_ID: u32 = 62540;
const TEST_REQUEST_JSON_ENCODING_ID: u32 = 62541;

#[derive(Debug, Clone, PartialEq)]
struct TestRequest {
    request_handle: u32,
    timestamp: DateTime,
    audit_entry_id: UAString,
    max_age: f64,
}

impl DynStruct for TestRequest {
    fn json_encoding_id(&self) -> ExpandedNodeId {
        ExpandedNodeId::from(NodeId::new(0, TEST_REQUEST_JSON_ENCODING_ID))
    }

    fn as_dyn_any_ref(&self) -> &(dyn Any + Send + Sync) {
        self
    }
}

struct TestRequestCodec;

impl StructureCodec for TestRequestCodec {
    fn encode(&self, encoder: &mut JsonEncoder<'_>, value: &dyn DynStruct) -> EncodingResult<()> {
        let Some(value) = value.as_dyn_any_ref().downcast_ref::<TestRequest>() else {
            return Err(EncodingError::unknown_type("value is not a TestRequest"));
        };
        if !value.request_handle.is_ua_null() {
            encoder.encode_uint32(Some("RequestHandle"), value.request_handle)?;
        }
        if !value.timestamp.is_ua_null() {
            encoder.encode_date_time(Some("Timestamp"), value.timestamp)?;
        }
        if !value.audit_entry_id.is_ua_null() {
            encoder.encode_string(Some("AuditEntryId"), &value.audit_entry_id)?;
        }
        if !value.max_age.is_ua_null() {
            encoder.encode_double(Some("MaxAge"), value.max_age)?;
        }
        Ok(())
    }
}

#[test]
fn serialize_message() {
    let mut ctx = ContextOwned::default();
    ctx.type_manager_mut().add_codec(
        NodeId::new(0, TEST_REQUEST_TYPE_ID),
        NodeId::new(0, TEST_REQUEST_JSON_ENCODING_ID),
        Arc::new(TestRequestCodec),
    );

    let message = TestRequest {
        request_handle: 0,
        timestamp: DateTime::null(),
        audit_entry_id: UAString::from("foo"),
        max_age: 0.0,
    };

    // The message is wrapped with the NodeId of its encoding. Defaulted
    // fields are skipped by the codec, but the epoch timestamp is a real
    // instant and stays.
    assert_eq!(
        encode(&ctx, |e| e.encode_message(None, &message)),
        r#"{"TypeId":{"Id":62541},"Body":{"Timestamp":"1601-01-01T00:00:00Z","AuditEntryId":"foo"}}"#
    );
}

#[test]
fn serialize_array() {
    let ctx = ctx();

    // A null array produces no output at all, an empty array is `[]`.
    assert_eq!(
        encode(&ctx, |e| e.encode_array::<bool, _>(None, None, |e, v| e
            .encode_boolean(None, *v))),
        ""
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_array(None, Some(&[] as &[bool]), |e, v| e
            .encode_boolean(None, *v))),
        "[]"
    );
    assert_eq!(
        encode(&ctx, |e| e.encode_array(None, Some([true, false, true].as_slice()), |e, v| e
            .encode_boolean(None, *v))),
        "[true,false,true]"
    );

    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_array(Some("foo"), Some([true, false, true].as_slice()), |e, v| {
            e.encode_boolean(None, *v)
        })?;
        e.end_object()
    });
    assert_eq!(json, r#"{"foo":[true,false,true]}"#);

    // Omitted when keyed and null.
    let json = encode(&ctx, |e| {
        e.begin_object()?;
        e.encode_array::<bool, _>(Some("foo"), None, |e, v| e.encode_boolean(None, *v))?;
        e.end_object()
    });
    assert_eq!(json, "{}");
}

#[test]
fn invalid_encoder_states() {
    let ctx = ctx();

    // A keyed emit is only legal inside an object.
    let err = try_encode(&ctx, true, |e| e.encode_boolean(Some("foo"), true)).unwrap_err();
    assert!(matches!(err, EncodingError::InvalidState(_)));

    // A value inside an object requires a field name.
    let err = try_encode(&ctx, true, |e| {
        e.begin_object()?;
        e.encode_boolean(None, true)
    })
    .unwrap_err();
    assert!(matches!(err, EncodingError::InvalidState(_)));

    // Only one top-level value per document.
    let err = try_encode(&ctx, true, |e| {
        e.encode_boolean(None, true)?;
        e.encode_boolean(None, false)
    })
    .unwrap_err();
    assert!(matches!(err, EncodingError::InvalidState(_)));

    // An unclosed object fails on finish.
    let err = try_encode(&ctx, true, |e| e.begin_object()).unwrap_err();
    assert!(matches!(err, EncodingError::InvalidState(_)));

    // Unbalanced end calls are rejected.
    let err = try_encode(&ctx, true, |e| {
        e.begin_array()?;
        e.end_object()
    })
    .unwrap_err();
    assert!(matches!(err, EncodingError::InvalidState(_)));
}

#[test]
fn encoding_limits() {
    let mut ctx = ContextOwned::default();
    ctx.limits_mut().max_string_length = 4;
    let err = try_encode(&ctx, true, |e| {
        e.encode_string(None, &UAString::from("hello"))
    })
    .unwrap_err();
    assert!(matches!(err, EncodingError::LimitExceeded(_)));
    // Four bytes is still within the limit.
    assert_eq!(
        encode(&ctx, |e| e.encode_string(None, &UAString::from("hell"))),
        r#""hell""#
    );

    let mut ctx = ContextOwned::default();
    ctx.limits_mut().max_array_length = 2;
    let err = try_encode(&ctx, true, |e| {
        e.encode_variant(None, &Variant::from(vec![1, 2, 3]))
    })
    .unwrap_err();
    assert!(matches!(err, EncodingError::LimitExceeded(_)));

    let mut ctx = ContextOwned::default();
    ctx.limits_mut().max_byte_string_length = 2;
    let err = try_encode(&ctx, true, |e| {
        e.encode_byte_string(None, &ByteString::from(vec![1, 2, 3]))
    })
    .unwrap_err();
    assert!(matches!(err, EncodingError::LimitExceeded(_)));
}

#[test]
fn nesting_depth_limit() {
    let ctx = ctx();
    let max_depth = ctx.limits().max_nesting_depth;

    // A variant nested deeper than the depth limit fails instead of
    // recursing without bound.
    let deep = (0..max_depth + 10).fold(Variant::Double(1.0), |acc, _| {
        Variant::Variant(Box::new(acc))
    });
    let err = try_encode(&ctx, true, |e| e.encode_variant(None, &deep)).unwrap_err();
    assert!(matches!(err, EncodingError::LimitExceeded(_)));

    // A shallow nesting is fine.
    let shallow = Variant::Variant(Box::new(Variant::Variant(Box::new(Variant::Double(1.0)))));
    assert_eq!(
        encode(&ctx, |e| e.encode_variant(None, &shallow)),
        r#"{"Type":24,"Body":{"Type":24,"Body":{"Type":11,"Body":1.0}}}"#
    );
}

#[test]
fn unknown_variant_type_id() {
    assert!(VariantScalarTypeId::try_from(0).is_err());
    assert!(VariantScalarTypeId::try_from(26).is_err());
    assert_eq!(
        VariantScalarTypeId::try_from(25).unwrap(),
        VariantScalarTypeId::DiagnosticInfo
    );
}

#[test]
fn output_is_deterministic() {
    let ctx = ctx_with_namespaces();
    let value = DataValue {
        value: Some(Variant::from(vec![
            LocalizedText::new("en", "Test"),
            LocalizedText::new("de", "Test2"),
        ])),
        status: Some(StatusCode::UncertainInitialValue),
        source_timestamp: Some(DateTime::ymd(2020, 1, 1)),
        ..Default::default()
    };

    let first = encode(&ctx, |e| e.encode_data_value(None, &value));
    for _ in 0..10 {
        assert_eq!(first, encode(&ctx, |e| e.encode_data_value(None, &value)));
    }
    // And the result parses as JSON.
    assert!(serde_json::from_str::<Value>(&first).is_ok());
}
