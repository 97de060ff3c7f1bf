use crate::error::SerializationError;
use serde::ser::{
    SerializeMap, SerializeSeq, SerializeStruct, SerializeStructVariant, SerializeTuple,
    SerializeTupleStruct, SerializeTupleVariant, Serializer,
};
use serde::Serialize;

/// Fails when any float in `record` is NaN or infinite.
///
/// JSON has no encoding for these values, so the intermediate value tree would
/// carry them as `null` and the field would vanish from the query string.
pub(super) fn ensure_finite<T>(record: &T) -> Result<(), SerializationError>
where
    T: Serialize + ?Sized,
{
    record.serialize(FiniteCheck { field: None })
}

/// Walks a value without producing output. `field` is the top-level wire name
/// the walk is currently under, `None` at the record itself.
struct FiniteCheck<'a> {
    field: Option<&'a str>,
}

impl<'a> FiniteCheck<'a> {
    fn nested(self) -> FiniteFields<'a> {
        FiniteFields {
            field: self.field,
            key: None,
        }
    }

    fn float(self, finite: bool) -> Result<(), SerializationError> {
        if finite {
            return Ok(());
        }
        Err(SerializationError::UnsupportedValue {
            field: self.field.unwrap_or("record").to_string(),
            kind: "non-finite number",
        })
    }
}

struct FiniteFields<'a> {
    field: Option<&'a str>,
    key: Option<String>,
}

impl<'a> Serializer for FiniteCheck<'a> {
    type Ok = ();
    type Error = SerializationError;
    type SerializeSeq = FiniteFields<'a>;
    type SerializeTuple = FiniteFields<'a>;
    type SerializeTupleStruct = FiniteFields<'a>;
    type SerializeTupleVariant = FiniteFields<'a>;
    type SerializeMap = FiniteFields<'a>;
    type SerializeStruct = FiniteFields<'a>;
    type SerializeStructVariant = FiniteFields<'a>;

    fn serialize_bool(self, _v: bool) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i8(self, _v: i8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i16(self, _v: i16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i32(self, _v: i32) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i64(self, _v: i64) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_i128(self, _v: i128) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u8(self, _v: u8) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u16(self, _v: u16) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u32(self, _v: u32) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u64(self, _v: u64) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_u128(self, _v: u128) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_f32(self, v: f32) -> Result<(), Self::Error> {
        self.float(v.is_finite())
    }

    fn serialize_f64(self, v: f64) -> Result<(), Self::Error> {
        self.float(v.is_finite())
    }

    fn serialize_char(self, _v: char) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_str(self, _v: &str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_none(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_some<T>(self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<(), Self::Error> {
        Ok(())
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        value: &T,
    ) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(self)
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Self::SerializeSeq, Self::Error> {
        Ok(self.nested())
    }

    fn serialize_tuple(self, _len: usize) -> Result<Self::SerializeTuple, Self::Error> {
        Ok(self.nested())
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleStruct, Self::Error> {
        Ok(self.nested())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeTupleVariant, Self::Error> {
        Ok(self.nested())
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Self::SerializeMap, Self::Error> {
        Ok(self.nested())
    }

    fn serialize_struct(
        self,
        _name: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStruct, Self::Error> {
        Ok(self.nested())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Self::SerializeStructVariant, Self::Error> {
        Ok(self.nested())
    }
}

impl FiniteFields<'_> {
    fn element<T>(&self, value: &T) -> Result<(), SerializationError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck { field: self.field })
    }

    fn named<T>(&self, key: &str, value: &T) -> Result<(), SerializationError>
    where
        T: Serialize + ?Sized,
    {
        value.serialize(FiniteCheck {
            field: Some(self.field.unwrap_or(key)),
        })
    }
}

impl SerializeSeq for FiniteFields<'_> {
    type Ok = ();
    type Error = SerializationError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeTuple for FiniteFields<'_> {
    type Ok = ();
    type Error = SerializationError;

    fn serialize_element<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeTupleStruct for FiniteFields<'_> {
    type Ok = ();
    type Error = SerializationError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeTupleVariant for FiniteFields<'_> {
    type Ok = ();
    type Error = SerializationError;

    fn serialize_field<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.element(value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeMap for FiniteFields<'_> {
    type Ok = ();
    type Error = SerializationError;

    fn serialize_key<T>(&mut self, key: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        if self.field.is_none() {
            self.key = serde_json::to_value(key)
                .ok()
                .and_then(|key| key.as_str().map(str::to_string));
        }
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        match &self.key {
            Some(key) => self.named(key, value),
            None => self.element(value),
        }
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeStruct for FiniteFields<'_> {
    type Ok = ();
    type Error = SerializationError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.named(key, value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl SerializeStructVariant for FiniteFields<'_> {
    type Ok = ();
    type Error = SerializationError;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<(), Self::Error>
    where
        T: Serialize + ?Sized,
    {
        self.named(key, value)
    }

    fn end(self) -> Result<(), Self::Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Bounds {
        low: f64,
        high: Option<f32>,
        label: &'static str,
    }

    #[derive(Serialize)]
    struct Outer {
        inner: Bounds,
    }

    fn unsupported_field(err: SerializationError) -> String {
        match err {
            SerializationError::UnsupportedValue { field, kind } => {
                assert_eq!(kind, "non-finite number");
                field
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn finite_values_pass() {
        let record = Bounds {
            low: -1.5,
            high: Some(2.0),
            label: "x",
        };
        ensure_finite(&record).expect("finite");
    }

    #[test]
    fn reports_field_of_non_finite_float() {
        let record = Bounds {
            low: 0.0,
            high: Some(f32::NEG_INFINITY),
            label: "x",
        };
        let err = ensure_finite(&record).expect_err("infinite");
        assert_eq!(unsupported_field(err), "high");
    }

    #[test]
    fn nested_values_report_top_level_field() {
        let record = Outer {
            inner: Bounds {
                low: f64::NAN,
                high: None,
                label: "x",
            },
        };
        let err = ensure_finite(&record).expect_err("nan");
        assert_eq!(unsupported_field(err), "inner");
    }

    #[test]
    fn map_records_report_their_key() {
        let mut record = BTreeMap::new();
        record.insert("ok", 1.0);
        record.insert("ratio", f64::INFINITY);
        let err = ensure_finite(&record).expect_err("infinite");
        assert_eq!(unsupported_field(err), "ratio");
    }
}
