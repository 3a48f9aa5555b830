//! Conversions from Rust and OPC UA values into [`Variant`].

use log::error;

use crate::{
    Array, ByteString, DataValue, DateTime, DiagnosticInfo, ExpandedNodeId, ExtensionObject, Guid,
    LocalizedText, NodeId, QualifiedName, StatusCode, UAString, XmlElement,
};

use super::{Variant, VariantType};

macro_rules! impl_from_scalar {
    ($tp: ty, $vt: ident) => {
        impl From<$tp> for Variant {
            fn from(value: $tp) -> Self {
                Variant::$vt(value)
            }
        }
    };
}

macro_rules! impl_from_boxed {
    ($tp: ty, $vt: ident) => {
        impl From<$tp> for Variant {
            fn from(value: $tp) -> Self {
                Variant::$vt(Box::new(value))
            }
        }
    };
}

impl_from_scalar!(bool, Boolean);
impl_from_scalar!(i8, SByte);
impl_from_scalar!(u8, Byte);
impl_from_scalar!(i16, Int16);
impl_from_scalar!(u16, UInt16);
impl_from_scalar!(i32, Int32);
impl_from_scalar!(u32, UInt32);
impl_from_scalar!(i64, Int64);
impl_from_scalar!(u64, UInt64);
impl_from_scalar!(f32, Float);
impl_from_scalar!(f64, Double);
impl_from_scalar!(UAString, String);
impl_from_scalar!(StatusCode, StatusCode);
impl_from_scalar!(ByteString, ByteString);
impl_from_scalar!(XmlElement, XmlElement);
impl_from_scalar!(ExtensionObject, ExtensionObject);
impl_from_boxed!(DateTime, DateTime);
impl_from_boxed!(Guid, Guid);
impl_from_boxed!(QualifiedName, QualifiedName);
impl_from_boxed!(LocalizedText, LocalizedText);
impl_from_boxed!(NodeId, NodeId);
impl_from_boxed!(ExpandedNodeId, ExpandedNodeId);
impl_from_boxed!(DataValue, DataValue);
impl_from_boxed!(DiagnosticInfo, DiagnosticInfo);

impl<'a> From<&'a str> for Variant {
    fn from(value: &'a str) -> Self {
        Variant::String(UAString::from(value))
    }
}

impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(UAString::from(value))
    }
}

impl From<Array> for Variant {
    fn from(value: Array) -> Self {
        Variant::Array(Box::new(value))
    }
}

impl<T> From<Vec<T>> for Variant
where
    T: Into<Variant> + VariantType,
{
    fn from(values: Vec<T>) -> Self {
        let values: Vec<_> = values.into_iter().map(|v| v.into()).collect();
        match Array::new(T::variant_type_id(), values) {
            Ok(array) => array.into(),
            Err(e) => {
                error!("Unable to build array from vec: {}", e);
                Variant::Empty
            }
        }
    }
}
