//! The OPC-UA JSON encoder.
//!
//! The encoder is bound to one output sink and one encoding context, and
//! writes either the reversible or the non-reversible form of the OPC-UA
//! JSON encoding. Every typed emitter comes in two forms selected by the
//! `field` parameter: `None` writes the value alone, `Some(name)` writes
//! `"name": value` inside the currently open object. When the encoding
//! rules say a value is to be omitted, a keyed emit writes no name either.

use std::{
    io::{Cursor, Read, Write},
    sync::Arc,
};

use struson::{
    reader::{JsonReader, JsonStreamReader},
    writer::{JsonStreamWriter, JsonWriter},
};

use crate::{
    Array, ByteString, Context, DataValue, DateTime, DiagnosticInfo, DynStruct, EncodingError,
    EncodingResult, ExpandedNodeId, ExtensionObject, ExtensionObjectBody, Guid, Identifier,
    LocalizedText, NodeId, QualifiedName, StatusCode, StructureCodec, UAString, UaEnum, UaNullable,
    Variant, VariantScalarTypeId, VariantTypeId, XmlElement,
};

const VALUE_INFINITY: &str = "Infinity";
const VALUE_NEG_INFINITY: &str = "-Infinity";
const VALUE_NAN: &str = "NaN";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Container {
    Object,
    Array,
}

/// Streaming encoder for the OPC-UA JSON encoding.
///
/// The encoder is single threaded and non-suspending. Output is produced in
/// the exact textual order of the emit calls, buffered only by the inner
/// token writer. After any error the encoder is in an unspecified state and
/// must be [`reset`](Self::reset) before further use.
pub struct JsonEncoder<'a> {
    writer: JsonStreamWriter<&'a mut dyn Write>,
    ctx: Context<'a>,
    reversible: bool,
    stack: Vec<Container>,
    depth: u64,
    started: bool,
}

impl<'a> JsonEncoder<'a> {
    /// Create a new encoder writing to `sink`, in reversible mode.
    pub fn new(ctx: Context<'a>, sink: &'a mut dyn Write) -> Self {
        Self {
            writer: JsonStreamWriter::new(sink),
            ctx,
            reversible: true,
            stack: Vec::new(),
            depth: 0,
            started: false,
        }
    }

    /// Rebind the encoder to a new sink. Discards any internal buffering and
    /// opens a fresh top-level context.
    pub fn reset(&mut self, sink: &'a mut dyn Write) {
        self.writer = JsonStreamWriter::new(sink);
        self.stack.clear();
        self.depth = 0;
        self.started = false;
    }

    /// Toggle between the reversible and non-reversible form. Must only be
    /// changed between top-level encodings.
    pub fn set_reversible(&mut self, reversible: bool) {
        self.reversible = reversible;
    }

    /// Whether the encoder writes the reversible form.
    pub fn is_reversible(&self) -> bool {
        self.reversible
    }

    /// The encoding context this encoder was created with.
    pub fn context(&self) -> &Context<'a> {
        &self.ctx
    }

    /// Direct access to the inner token writer, for callers that assemble
    /// enclosing values manually. Note that the encoder cannot track state
    /// changes made through the raw writer; prefer [`Self::begin_object`]
    /// and friends.
    pub fn writer(&mut self) -> &mut JsonStreamWriter<&'a mut dyn Write> {
        &mut self.writer
    }

    /// Complete the document and flush all buffered output to the sink.
    /// When nothing was emitted the output stays empty.
    pub fn finish(self) -> EncodingResult<()> {
        if !self.stack.is_empty() {
            return Err(EncodingError::invalid_state(
                "unclosed object or array at the end of the document",
            ));
        }
        if self.started {
            self.writer.finish_document()?;
        }
        Ok(())
    }

    /// Prepare for writing one value: emit the field name for keyed emits,
    /// and verify the emit is legal where the encoder currently is.
    fn pre_value(&mut self, field: Option<&str>) -> EncodingResult<()> {
        match field {
            Some(name) => {
                if !matches!(self.stack.last(), Some(Container::Object)) {
                    return Err(EncodingError::invalid_state(format!(
                        "field \"{}\" written outside of an object",
                        name
                    )));
                }
                self.writer.name(name)?;
            }
            None => match self.stack.last() {
                Some(Container::Object) => {
                    return Err(EncodingError::invalid_state(
                        "a value inside an object requires a field name",
                    ));
                }
                None if self.started => {
                    return Err(EncodingError::invalid_state(
                        "the top-level value has already been written",
                    ));
                }
                _ => {}
            },
        }
        self.started = true;
        Ok(())
    }

    fn open_object(&mut self, field: Option<&str>) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.begin_object()?;
        self.stack.push(Container::Object);
        Ok(())
    }

    fn open_array(&mut self, field: Option<&str>) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.begin_array()?;
        self.stack.push(Container::Array);
        Ok(())
    }

    /// Begin an object as the next value.
    pub fn begin_object(&mut self) -> EncodingResult<()> {
        self.open_object(None)
    }

    /// End the current object.
    pub fn end_object(&mut self) -> EncodingResult<()> {
        match self.stack.last() {
            Some(Container::Object) => {
                self.stack.pop();
                self.writer.end_object()?;
                Ok(())
            }
            _ => Err(EncodingError::invalid_state(
                "end_object without a matching begin_object",
            )),
        }
    }

    /// Begin an array as the next value.
    pub fn begin_array(&mut self) -> EncodingResult<()> {
        self.open_array(None)
    }

    /// End the current array.
    pub fn end_array(&mut self) -> EncodingResult<()> {
        match self.stack.last() {
            Some(Container::Array) => {
                self.stack.pop();
                self.writer.end_array()?;
                Ok(())
            }
            _ => Err(EncodingError::invalid_state(
                "end_array without a matching begin_array",
            )),
        }
    }

    fn field_string(&mut self, name: &str, value: &str) -> EncodingResult<()> {
        self.pre_value(Some(name))?;
        self.writer.string_value(value)?;
        Ok(())
    }

    fn enter(&mut self) -> EncodingResult<()> {
        self.depth += 1;
        let max = self.ctx.limits().max_nesting_depth;
        if self.depth > max {
            Err(EncodingError::limit_exceeded(format!(
                "maximum nesting depth {} exceeded",
                max
            )))
        } else {
            Ok(())
        }
    }

    fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn check_string_limit(&self, length: usize) -> EncodingResult<()> {
        let max = self.ctx.limits().max_string_length;
        if length > max {
            Err(EncodingError::limit_exceeded(format!(
                "string length {} exceeds limit {}",
                length, max
            )))
        } else {
            Ok(())
        }
    }

    fn check_byte_string_limit(&self, length: usize) -> EncodingResult<()> {
        let max = self.ctx.limits().max_byte_string_length;
        if length > max {
            Err(EncodingError::limit_exceeded(format!(
                "byte string length {} exceeds limit {}",
                length, max
            )))
        } else {
            Ok(())
        }
    }

    fn check_array_limit(&self, length: usize) -> EncodingResult<()> {
        let max = self.ctx.limits().max_array_length;
        if length > max {
            Err(EncodingError::limit_exceeded(format!(
                "array length {} exceeds limit {}",
                length, max
            )))
        } else {
            Ok(())
        }
    }

    /// Encode a boolean as `true` or `false`.
    pub fn encode_boolean(&mut self, field: Option<&str>, value: bool) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.bool_value(value)?;
        Ok(())
    }

    /// Encode a signed byte as a JSON number.
    pub fn encode_sbyte(&mut self, field: Option<&str>, value: i8) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.number_value(value)?;
        Ok(())
    }

    /// Encode an unsigned byte as a JSON number.
    pub fn encode_byte(&mut self, field: Option<&str>, value: u8) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.number_value(value)?;
        Ok(())
    }

    /// Encode a 16-bit integer as a JSON number.
    pub fn encode_int16(&mut self, field: Option<&str>, value: i16) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.number_value(value)?;
        Ok(())
    }

    /// Encode an unsigned 16-bit integer as a JSON number.
    pub fn encode_uint16(&mut self, field: Option<&str>, value: u16) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.number_value(value)?;
        Ok(())
    }

    /// Encode a 32-bit integer as a JSON number.
    pub fn encode_int32(&mut self, field: Option<&str>, value: i32) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.number_value(value)?;
        Ok(())
    }

    /// Encode an unsigned 32-bit integer as a JSON number.
    pub fn encode_uint32(&mut self, field: Option<&str>, value: u32) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.number_value(value)?;
        Ok(())
    }

    /// Encode a 64-bit integer. 64-bit values are formatted as a decimal
    /// number in a JSON string, to preserve precision in consumers that read
    /// all JSON numbers as 64-bit floats.
    pub fn encode_int64(&mut self, field: Option<&str>, value: i64) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.string_value(&value.to_string())?;
        Ok(())
    }

    /// Encode an unsigned 64-bit integer as a decimal number in a JSON
    /// string.
    pub fn encode_uint64(&mut self, field: Option<&str>, value: u64) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.string_value(&value.to_string())?;
        Ok(())
    }

    /// Encode a 32-bit float. Finite values become JSON numbers, always with
    /// a fractional part or exponent. The non-finite values become the
    /// strings `"Infinity"`, `"-Infinity"` and `"NaN"`.
    pub fn encode_float(&mut self, field: Option<&str>, value: f32) -> EncodingResult<()> {
        self.pre_value(field)?;
        if value.is_infinite() {
            self.writer.string_value(if value.is_sign_positive() {
                VALUE_INFINITY
            } else {
                VALUE_NEG_INFINITY
            })?;
        } else if value.is_nan() {
            self.writer.string_value(VALUE_NAN)?;
        } else {
            self.writer.number_value_from_string(&format!("{:?}", value))?;
        }
        Ok(())
    }

    /// Encode a 64-bit float, with the same special value handling as
    /// [`Self::encode_float`].
    pub fn encode_double(&mut self, field: Option<&str>, value: f64) -> EncodingResult<()> {
        self.pre_value(field)?;
        if value.is_infinite() {
            self.writer.string_value(if value.is_sign_positive() {
                VALUE_INFINITY
            } else {
                VALUE_NEG_INFINITY
            })?;
        } else if value.is_nan() {
            self.writer.string_value(VALUE_NAN)?;
        } else {
            self.writer.number_value_from_string(&format!("{:?}", value))?;
        }
        Ok(())
    }

    /// Encode a string as a JSON string, or null.
    pub fn encode_string(&mut self, field: Option<&str>, value: &UAString) -> EncodingResult<()> {
        match value.value() {
            Some(s) => {
                self.check_string_limit(s.len())?;
                self.pre_value(field)?;
                self.writer.string_value(s)?;
            }
            None => {
                self.pre_value(field)?;
                self.writer.null_value()?;
            }
        }
        Ok(())
    }

    /// Encode a date/time as an ISO 8601 string with seconds precision,
    /// clamped to the representable range.
    pub fn encode_date_time(&mut self, field: Option<&str>, value: DateTime) -> EncodingResult<()> {
        self.pre_value(field)?;
        self.writer.string_value(&value.to_iso8601_string())?;
        Ok(())
    }

    /// Encode a GUID as an upper-case hyphenated string.
    pub fn encode_guid(&mut self, field: Option<&str>, value: &Guid) -> EncodingResult<()> {
        self.pre_value(field)?;
        let mut buf = uuid::Uuid::encode_buffer();
        self.writer
            .string_value(value.as_uuid().as_hyphenated().encode_upper(&mut buf))?;
        Ok(())
    }

    /// Encode a byte string as base64, or null.
    pub fn encode_byte_string(
        &mut self,
        field: Option<&str>,
        value: &ByteString,
    ) -> EncodingResult<()> {
        if value.is_null() {
            self.pre_value(field)?;
            self.writer.null_value()?;
        } else {
            self.check_byte_string_limit(value.len())?;
            self.pre_value(field)?;
            self.writer.string_value(&value.as_base64())?;
        }
        Ok(())
    }

    /// Encode an XML element as a JSON string carrying the XML text, or
    /// null.
    pub fn encode_xml_element(
        &mut self,
        field: Option<&str>,
        value: &XmlElement,
    ) -> EncodingResult<()> {
        match value.value() {
            Some(s) => {
                self.check_string_limit(s.len())?;
                self.pre_value(field)?;
                self.writer.string_value(s)?;
            }
            None => {
                self.pre_value(field)?;
                self.writer.null_value()?;
            }
        }
        Ok(())
    }

    fn encode_identifier(&mut self, identifier: &Identifier) -> EncodingResult<()> {
        match identifier {
            // IdType 0 is the default and omitted for numeric identifiers.
            Identifier::Numeric(n) => self.encode_uint32(Some("Id"), *n),
            Identifier::String(s) => {
                self.encode_uint32(Some("IdType"), 1)?;
                self.encode_string(Some("Id"), s)
            }
            Identifier::Guid(g) => {
                self.encode_uint32(Some("IdType"), 2)?;
                self.encode_guid(Some("Id"), g)
            }
            Identifier::ByteString(b) => {
                self.encode_uint32(Some("IdType"), 3)?;
                self.encode_byte_string(Some("Id"), b)
            }
        }
    }

    fn encode_namespace_index(&mut self, name: &str, index: u16) -> EncodingResult<()> {
        if index == 0 {
            return Ok(());
        }
        if self.reversible {
            return self.encode_uint16(Some(name), index);
        }
        // An index of 1 is always encoded as a number, higher indexes
        // resolve to the namespace URI when the table knows it.
        let namespaces = self.ctx.namespaces();
        match namespaces.uri_by_index(index).filter(|_| index > 1) {
            Some(uri) => self.field_string(name, uri),
            None => self.encode_uint16(Some(name), index),
        }
    }

    /// Encode a node id. Fields in output order are `IdType`, `Id` and
    /// `Namespace`, each omitted when at its default.
    pub fn encode_node_id(&mut self, field: Option<&str>, value: &NodeId) -> EncodingResult<()> {
        self.open_object(field)?;
        self.encode_identifier(&value.identifier)?;
        self.encode_namespace_index("Namespace", value.namespace)?;
        self.end_object()
    }

    /// Encode an expanded node id. An explicit namespace URI overrides the
    /// namespace index in both modes, and a non-zero server index is written
    /// to `ServerUri`.
    pub fn encode_expanded_node_id(
        &mut self,
        field: Option<&str>,
        value: &ExpandedNodeId,
    ) -> EncodingResult<()> {
        self.open_object(field)?;
        self.encode_identifier(&value.node_id.identifier)?;
        if let Some(uri) = value.namespace_uri.value() {
            self.field_string("Namespace", uri)?;
        } else {
            self.encode_namespace_index("Namespace", value.node_id.namespace)?;
        }
        if value.server_index != 0 {
            if self.reversible {
                self.encode_uint32(Some("ServerUri"), value.server_index)?;
            } else {
                let servers = self.ctx.servers();
                match servers.uri_by_index(value.server_index) {
                    Some(uri) => self.field_string("ServerUri", uri)?,
                    None => self.encode_uint32(Some("ServerUri"), value.server_index)?,
                }
            }
        }
        self.end_object()
    }

    /// Encode a status code. The reversible form is the bare numeric code.
    /// The non-reversible form omits `Good` entirely and writes other codes
    /// as an object of `Code` and `Symbol`.
    pub fn encode_status_code(
        &mut self,
        field: Option<&str>,
        value: StatusCode,
    ) -> EncodingResult<()> {
        if self.reversible {
            self.pre_value(field)?;
            self.writer.number_value(value.bits())?;
            return Ok(());
        }
        if value == StatusCode::Good {
            // Omitted entirely, key and value.
            return Ok(());
        }
        self.open_object(field)?;
        self.encode_uint32(Some("Code"), value.bits())?;
        if let Some(symbol) = value.symbol_name() {
            self.field_string("Symbol", symbol)?;
        }
        self.end_object()
    }

    /// Encode a qualified name as an object of `Name` and `Uri`.
    pub fn encode_qualified_name(
        &mut self,
        field: Option<&str>,
        value: &QualifiedName,
    ) -> EncodingResult<()> {
        self.open_object(field)?;
        if !value.name.is_null() {
            self.encode_string(Some("Name"), &value.name)?;
        }
        if value.namespace_index != 0 {
            if self.reversible {
                self.encode_uint16(Some("Uri"), value.namespace_index)?;
            } else {
                let namespaces = self.ctx.namespaces();
                match namespaces
                    .uri_by_index(value.namespace_index)
                    .filter(|_| value.namespace_index > 1)
                {
                    Some(uri) => self.field_string("Uri", uri)?,
                    None => self.encode_uint16(Some("Uri"), value.namespace_index)?,
                }
            }
        }
        self.end_object()
    }

    /// Encode a localized text. The reversible form is an object of `Locale`
    /// and `Text` with null fields omitted, the non-reversible form is the
    /// text alone.
    pub fn encode_localized_text(
        &mut self,
        field: Option<&str>,
        value: &LocalizedText,
    ) -> EncodingResult<()> {
        if self.reversible {
            self.open_object(field)?;
            if !value.locale.is_null() {
                self.encode_string(Some("Locale"), &value.locale)?;
            }
            if !value.text.is_null() {
                self.encode_string(Some("Text"), &value.text)?;
            }
            self.end_object()
        } else {
            self.encode_string(field, &value.text)
        }
    }

    fn raw_json_value(&mut self, raw: &str) -> EncodingResult<()> {
        let mut cursor = Cursor::new(raw.as_bytes());
        let mut reader = JsonStreamReader::new(&mut cursor as &mut dyn Read);
        reader.transfer_to(&mut self.writer)?;
        Ok(())
    }

    /// Encode an extension object. The reversible form wraps the body with
    /// its `TypeId` and, for binary and XML bodies, an `Encoding` tag. The
    /// non-reversible form is the body alone. A null extension object is
    /// JSON null.
    pub fn encode_extension_object(
        &mut self,
        field: Option<&str>,
        value: &ExtensionObject,
    ) -> EncodingResult<()> {
        if value.is_null() {
            self.pre_value(field)?;
            self.writer.null_value()?;
            return Ok(());
        }
        self.enter()?;
        let result = self.encode_extension_object_inner(field, value);
        self.leave();
        result
    }

    fn encode_extension_object_inner(
        &mut self,
        field: Option<&str>,
        value: &ExtensionObject,
    ) -> EncodingResult<()> {
        if !self.reversible {
            return match &value.body {
                ExtensionObjectBody::Json(raw) => {
                    self.pre_value(field)?;
                    self.raw_json_value(raw)
                }
                ExtensionObjectBody::XmlElement(xml) => self.encode_xml_element(field, xml),
                ExtensionObjectBody::ByteString(bytes) => self.encode_byte_string(field, bytes),
                ExtensionObjectBody::None => {
                    self.pre_value(field)?;
                    self.writer.null_value()?;
                    Ok(())
                }
            };
        }
        self.open_object(field)?;
        self.encode_node_id(Some("TypeId"), &value.type_id)?;
        match &value.body {
            // A JSON body carries no Encoding field.
            ExtensionObjectBody::Json(raw) => {
                self.pre_value(Some("Body"))?;
                self.raw_json_value(raw)?;
            }
            ExtensionObjectBody::XmlElement(xml) => {
                self.encode_uint32(Some("Encoding"), 2)?;
                self.encode_xml_element(Some("Body"), xml)?;
            }
            ExtensionObjectBody::ByteString(bytes) => {
                self.encode_uint32(Some("Encoding"), 1)?;
                self.encode_byte_string(Some("Body"), bytes)?;
            }
            ExtensionObjectBody::None => {}
        }
        self.end_object()
    }

    /// Encode a data value. Each field is omitted when it equals its
    /// default. A data value with every field at its default produces no
    /// output at all, and is omitted entirely when keyed.
    pub fn encode_data_value(
        &mut self,
        field: Option<&str>,
        value: &DataValue,
    ) -> EncodingResult<()> {
        if value.is_ua_null() {
            return Ok(());
        }
        self.open_object(field)?;
        if let Some(v) = &value.value {
            self.encode_variant(Some("Value"), v)?;
        }
        if let Some(status) = value.status {
            if status != StatusCode::Good {
                self.encode_status_code(Some("Status"), status)?;
            }
        }
        if let Some(ts) = value.source_timestamp {
            self.encode_date_time(Some("SourceTimestamp"), ts)?;
        }
        if let Some(picoseconds) = value.source_picoseconds {
            self.encode_uint16(Some("SourcePicoseconds"), picoseconds)?;
        }
        if let Some(ts) = value.server_timestamp {
            self.encode_date_time(Some("ServerTimestamp"), ts)?;
        }
        if let Some(picoseconds) = value.server_picoseconds {
            self.encode_uint16(Some("ServerPicoseconds"), picoseconds)?;
        }
        self.end_object()
    }

    /// Encode a variant. The reversible form is an object of `Type`, `Body`
    /// and, for matrices, `Dimensions` with the elements flattened in row
    /// major order. The non-reversible form is the bare value, with arrays
    /// and matrices written as nested JSON arrays matching their logical
    /// shape. A null variant is JSON null, omitted entirely when keyed.
    pub fn encode_variant(&mut self, field: Option<&str>, value: &Variant) -> EncodingResult<()> {
        if value.is_empty() {
            if field.is_none() {
                self.pre_value(None)?;
                self.writer.null_value()?;
            }
            return Ok(());
        }
        self.enter()?;
        let result = self.encode_variant_inner(field, value);
        self.leave();
        result
    }

    fn encode_variant_inner(&mut self, field: Option<&str>, value: &Variant) -> EncodingResult<()> {
        if !self.reversible {
            return match value {
                Variant::Array(array) => self.encode_matrix(field, array),
                scalar => self.encode_variant_value(field, scalar),
            };
        }

        let type_id = match value.type_id() {
            // Handled by the caller.
            VariantTypeId::Empty => return Ok(()),
            VariantTypeId::Scalar(s) => s,
            VariantTypeId::Array(s, _) => s,
        };

        self.open_object(field)?;
        self.encode_uint32(Some("Type"), type_id as u32)?;
        match value {
            Variant::Array(array) => {
                self.check_array_limit(array.values.len())?;
                self.open_array(Some("Body"))?;
                for element in &array.values {
                    self.encode_array_element(array.value_type, element)?;
                }
                self.end_array()?;
                if let Some(dimensions) = array.dimensions.as_ref().filter(|d| d.len() > 1) {
                    self.open_array(Some("Dimensions"))?;
                    for dimension in dimensions {
                        self.encode_uint32(None, *dimension)?;
                    }
                    self.end_array()?;
                }
            }
            scalar => self.encode_variant_value(Some("Body"), scalar)?,
        }
        self.end_object()
    }

    /// Encode the value of a variant without the type envelope, dispatching
    /// on the payload kind.
    fn encode_variant_value(&mut self, field: Option<&str>, value: &Variant) -> EncodingResult<()> {
        match value {
            Variant::Empty => {
                self.pre_value(field)?;
                self.writer.null_value()?;
                Ok(())
            }
            Variant::Boolean(v) => self.encode_boolean(field, *v),
            Variant::SByte(v) => self.encode_sbyte(field, *v),
            Variant::Byte(v) => self.encode_byte(field, *v),
            Variant::Int16(v) => self.encode_int16(field, *v),
            Variant::UInt16(v) => self.encode_uint16(field, *v),
            Variant::Int32(v) => self.encode_int32(field, *v),
            Variant::UInt32(v) => self.encode_uint32(field, *v),
            Variant::Int64(v) => self.encode_int64(field, *v),
            Variant::UInt64(v) => self.encode_uint64(field, *v),
            Variant::Float(v) => self.encode_float(field, *v),
            Variant::Double(v) => self.encode_double(field, *v),
            Variant::String(v) => self.encode_string(field, v),
            Variant::DateTime(v) => self.encode_date_time(field, **v),
            Variant::Guid(v) => self.encode_guid(field, v),
            Variant::StatusCode(v) => self.encode_status_code(field, *v),
            Variant::ByteString(v) => self.encode_byte_string(field, v),
            Variant::XmlElement(v) => self.encode_xml_element(field, v),
            Variant::QualifiedName(v) => self.encode_qualified_name(field, v),
            Variant::LocalizedText(v) => self.encode_localized_text(field, v),
            Variant::NodeId(v) => self.encode_node_id(field, v),
            Variant::ExpandedNodeId(v) => self.encode_expanded_node_id(field, v),
            Variant::ExtensionObject(v) => self.encode_extension_object(field, v),
            Variant::Variant(inner) => {
                // A nested variant is written as a full variant in the
                // reversible form, null when it is empty.
                if inner.is_empty() {
                    self.pre_value(field)?;
                    self.writer.null_value()?;
                    Ok(())
                } else {
                    self.encode_variant(field, inner)
                }
            }
            Variant::DataValue(v) => self.encode_data_value(field, v),
            Variant::DiagnosticInfo(v) => self.encode_diagnostic_info(field, v),
            Variant::Array(array) => {
                // Nested arrays are rejected by Array construction, but
                // there's a reasonable fallback.
                self.check_array_limit(array.values.len())?;
                self.open_array(field)?;
                for element in &array.values {
                    self.encode_variant_value(None, element)?;
                }
                self.end_array()
            }
        }
    }

    fn encode_array_element(
        &mut self,
        value_type: VariantScalarTypeId,
        element: &Variant,
    ) -> EncodingResult<()> {
        // Elements of a variant array are whole variants themselves.
        if value_type == VariantScalarTypeId::Variant {
            self.encode_variant(None, element)
        } else {
            self.encode_variant_value(None, element)
        }
    }

    /// Encode a matrix as nested JSON arrays of the rank given by its
    /// dimensions, with no envelope. A plain array encodes as a flat JSON
    /// array.
    pub fn encode_matrix(&mut self, field: Option<&str>, value: &Array) -> EncodingResult<()> {
        self.check_array_limit(value.values.len())?;
        match value.dimensions.as_deref() {
            Some(dimensions) => {
                if !value.is_valid() {
                    return Err(EncodingError::invalid_state(
                        "matrix dimensions do not match the element count",
                    ));
                }
                let mut index = 0;
                self.encode_matrix_level(field, value, dimensions, &mut index)
            }
            None => {
                self.open_array(field)?;
                for element in &value.values {
                    self.encode_array_element(value.value_type, element)?;
                }
                self.end_array()
            }
        }
    }

    fn encode_matrix_level(
        &mut self,
        field: Option<&str>,
        array: &Array,
        dimensions: &[u32],
        index: &mut usize,
    ) -> EncodingResult<()> {
        self.open_array(field)?;
        match dimensions {
            [] => {}
            [count] => {
                for _ in 0..*count {
                    let element = &array.values[*index];
                    *index += 1;
                    self.encode_array_element(array.value_type, element)?;
                }
            }
            [count, rest @ ..] => {
                for _ in 0..*count {
                    self.encode_matrix_level(None, array, rest, index)?;
                }
            }
        }
        self.end_array()
    }

    /// Encode a diagnostic info. Index fields are included iff present and
    /// non-negative, inner fields recurse and count against the nesting
    /// depth limit.
    pub fn encode_diagnostic_info(
        &mut self,
        field: Option<&str>,
        value: &DiagnosticInfo,
    ) -> EncodingResult<()> {
        self.enter()?;
        let result = self.encode_diagnostic_info_inner(field, value);
        self.leave();
        result
    }

    fn encode_diagnostic_info_inner(
        &mut self,
        field: Option<&str>,
        value: &DiagnosticInfo,
    ) -> EncodingResult<()> {
        self.open_object(field)?;
        if let Some(v) = value.symbolic_id.filter(|v| *v >= 0) {
            self.encode_int32(Some("SymbolicId"), v)?;
        }
        if let Some(v) = value.namespace_uri.filter(|v| *v >= 0) {
            self.encode_int32(Some("NamespaceUri"), v)?;
        }
        if let Some(v) = value.locale.filter(|v| *v >= 0) {
            self.encode_int32(Some("Locale"), v)?;
        }
        if let Some(v) = value.localized_text.filter(|v| *v >= 0) {
            self.encode_int32(Some("LocalizedText"), v)?;
        }
        if let Some(info) = &value.additional_info {
            if !info.is_null() {
                self.encode_string(Some("AdditionalInfo"), info)?;
            }
        }
        if let Some(code) = value.inner_status_code {
            self.encode_status_code(Some("InnerStatusCode"), code)?;
        }
        if let Some(inner) = &value.inner_diagnostic_info {
            self.encode_diagnostic_info(Some("InnerDiagnosticInfo"), inner)?;
        }
        self.end_object()
    }

    /// Encode an enumeration. The reversible form is the bare ordinal, the
    /// non-reversible form is the `"Name_Value"` string.
    pub fn encode_enum<T>(&mut self, field: Option<&str>, value: T) -> EncodingResult<()>
    where
        T: UaEnum,
        T::Repr: Into<i64>,
    {
        self.pre_value(field)?;
        if self.reversible {
            let repr: i64 = value.into_repr().into();
            self.writer.number_value(repr)?;
        } else {
            self.writer.string_value(value.as_str())?;
        }
        Ok(())
    }

    /// Encode a structured value by dispatching to the codec registered for
    /// `type_id` in the data type manager. The encoder writes the
    /// surrounding object, the codec emits the fields.
    pub fn encode_struct(
        &mut self,
        field: Option<&str>,
        value: &dyn DynStruct,
        type_id: &NodeId,
    ) -> EncodingResult<()> {
        let codec = match self.ctx.type_manager().codec_for(type_id) {
            Some(codec) => codec.clone(),
            None => {
                return Err(EncodingError::unknown_type(format!(
                    "no codec registered for type {}",
                    type_id
                )));
            }
        };
        self.enter()?;
        let result = self.encode_struct_inner(field, &codec, value);
        self.leave();
        result
    }

    fn encode_struct_inner(
        &mut self,
        field: Option<&str>,
        codec: &Arc<dyn StructureCodec>,
        value: &dyn DynStruct,
    ) -> EncodingResult<()> {
        self.open_object(field)?;
        codec.encode(self, value)?;
        self.end_object()
    }

    /// Encode a top-level request or response message, wrapped with the
    /// NodeId of its encoding as `{"TypeId": ..., "Body": ...}`.
    pub fn encode_message(
        &mut self,
        field: Option<&str>,
        message: &dyn DynStruct,
    ) -> EncodingResult<()> {
        let encoding_id = message.json_encoding_id();
        let Some(type_id) = encoding_id.try_resolve(self.ctx.namespaces()) else {
            return Err(EncodingError::unknown_type(format!(
                "unresolvable message encoding ID {}",
                encoding_id
            )));
        };
        let type_id = type_id.into_owned();
        self.open_object(field)?;
        self.encode_node_id(Some("TypeId"), &type_id)?;
        self.encode_struct(Some("Body"), message, &type_id)?;
        self.end_object()
    }

    /// Encode an array of values through `emit`. A null array is omitted
    /// when keyed and produces no output when unkeyed.
    pub fn encode_array<T, F>(
        &mut self,
        field: Option<&str>,
        values: Option<&[T]>,
        mut emit: F,
    ) -> EncodingResult<()>
    where
        F: FnMut(&mut Self, &T) -> EncodingResult<()>,
    {
        let Some(values) = values else {
            return Ok(());
        };
        self.check_array_limit(values.len())?;
        self.open_array(field)?;
        for value in values {
            emit(self, value)?;
        }
        self.end_array()
    }
}
