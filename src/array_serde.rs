// Copyright 2014-2016 bluss and ndarray developers.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.
use serde::de::{self, EnumAccess, MapAccess, SeqAccess, VariantAccess, Visitor};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::marker::PhantomData;

use crate::imp_prelude::*;

/// Format version of the serialized representation.
const ARRAY_FORMAT_VERSION: u8 = 1;

/// Verifies that the version of the deserialized array matches the current
/// `ARRAY_FORMAT_VERSION`.
fn verify_version<E>(v: u8) -> Result<(), E>
where E: de::Error
{
    if v != ARRAY_FORMAT_VERSION {
        let err_msg = format!("unknown array version: {}", v);
        Err(de::Error::custom(err_msg))
    } else {
        Ok(())
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for Shape
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        [self.rows, self.cols].serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Shape
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        <[usize; 2]>::deserialize(deserializer).map(Shape::from)
    }
}

/// **Requires crate feature `"serde"`**
impl Serialize for Slice
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        [self.start, self.stop, self.step].serialize(serializer)
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Slice
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        let [start, stop, step] = <[isize; 3]>::deserialize(deserializer)?;
        Ok(Slice::new(start, stop, step))
    }
}

static AXIS_NAMES: &[&str] = &["None", "Row", "Col"];

/// **Requires crate feature `"serde"`**
impl Serialize for Axis
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        let index = match self {
            Axis::None => 0,
            Axis::Row => 1,
            Axis::Col => 2,
        };
        serializer.serialize_unit_variant("Axis", index, AXIS_NAMES[index as usize])
    }
}

/// **Requires crate feature `"serde"`**
impl<'de> Deserialize<'de> for Axis
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_enum("Axis", AXIS_NAMES, AxisVisitor)
    }
}

struct AxisVisitor;

impl<'de> Visitor<'de> for AxisVisitor
{
    type Value = Axis;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("an Axis variant")
    }

    fn visit_enum<Ea>(self, data: Ea) -> Result<Axis, Ea::Error>
    where Ea: EnumAccess<'de>
    {
        let (AxisVariant(axis), variant) = data.variant()?;
        variant.unit_variant()?;
        Ok(axis)
    }
}

/// Variant tag of a serialized `Axis`, by name or by index.
struct AxisVariant(Axis);

impl<'de> Deserialize<'de> for AxisVariant
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where D: Deserializer<'de>
    {
        struct AxisVariantVisitor;

        impl<'de> Visitor<'de> for AxisVariantVisitor
        {
            type Value = AxisVariant;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
            {
                formatter.write_str(r#""None", "Row", or "Col""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<AxisVariant, E>
            where E: de::Error
            {
                match value {
                    "None" => Ok(AxisVariant(Axis::None)),
                    "Row" => Ok(AxisVariant(Axis::Row)),
                    "Col" => Ok(AxisVariant(Axis::Col)),
                    other => Err(de::Error::unknown_variant(other, AXIS_NAMES)),
                }
            }

            fn visit_u64<E>(self, value: u64) -> Result<AxisVariant, E>
            where E: de::Error
            {
                match value {
                    0 => Ok(AxisVariant(Axis::None)),
                    1 => Ok(AxisVariant(Axis::Row)),
                    2 => Ok(AxisVariant(Axis::Col)),
                    _ => Err(de::Error::invalid_value(de::Unexpected::Unsigned(value), &self)),
                }
            }
        }

        deserializer.deserialize_identifier(AxisVariantVisitor)
    }
}

/// **Requires crate feature `"serde"`**
impl<A> Serialize for NdArray<A>
where A: Serialize
{
    fn serialize<Se>(&self, serializer: Se) -> Result<Se::Ok, Se::Error>
    where Se: Serializer
    {
        let mut state = serializer.serialize_struct("NdArray", 3)?;
        state.serialize_field("v", &ARRAY_FORMAT_VERSION)?;
        state.serialize_field("dim", &self.shape())?;
        state.serialize_field("data", self.as_slice())?;
        state.end()
    }
}

struct ArrayVisitor<A>
{
    _marker: PhantomData<A>,
}

enum ArrayField
{
    Version,
    Dim,
    Data,
}

impl<A> ArrayVisitor<A>
{
    fn new() -> Self
    {
        ArrayVisitor { _marker: PhantomData }
    }
}

static ARRAY_FIELDS: &[&str] = &["v", "dim", "data"];

/// **Requires crate feature `"serde"`**
impl<'de, A> Deserialize<'de> for NdArray<A>
where A: Deserialize<'de>
{
    fn deserialize<D>(deserializer: D) -> Result<NdArray<A>, D::Error>
    where D: Deserializer<'de>
    {
        deserializer.deserialize_struct("NdArray", ARRAY_FIELDS, ArrayVisitor::new())
    }
}

impl<'de> Deserialize<'de> for ArrayField
{
    fn deserialize<D>(deserializer: D) -> Result<ArrayField, D::Error>
    where D: Deserializer<'de>
    {
        struct ArrayFieldVisitor;

        impl<'de> Visitor<'de> for ArrayFieldVisitor
        {
            type Value = ArrayField;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
            {
                formatter.write_str(r#""v", "dim", or "data""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<ArrayField, E>
            where E: de::Error
            {
                match value {
                    "v" => Ok(ArrayField::Version),
                    "dim" => Ok(ArrayField::Dim),
                    "data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(other, ARRAY_FIELDS)),
                }
            }

            fn visit_bytes<E>(self, value: &[u8]) -> Result<ArrayField, E>
            where E: de::Error
            {
                match value {
                    b"v" => Ok(ArrayField::Version),
                    b"dim" => Ok(ArrayField::Dim),
                    b"data" => Ok(ArrayField::Data),
                    other => Err(de::Error::unknown_field(&String::from_utf8_lossy(other), ARRAY_FIELDS)),
                }
            }
        }

        deserializer.deserialize_identifier(ArrayFieldVisitor)
    }
}

fn assemble<A, E>(dim: Shape, data: Vec<A>) -> Result<NdArray<A>, E>
where E: de::Error
{
    NdArray::from_shape_vec(dim, data).map_err(|_| de::Error::custom("data and dimension must match in size"))
}

impl<'de, A> Visitor<'de> for ArrayVisitor<A>
where A: Deserialize<'de>
{
    type Value = NdArray<A>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        formatter.write_str("ndmat representation")
    }

    fn visit_seq<V>(self, mut visitor: V) -> Result<NdArray<A>, V::Error>
    where V: SeqAccess<'de>
    {
        let v: u8 = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(0, &self)),
        };

        verify_version(v)?;

        let dim: Shape = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(1, &self)),
        };

        let data: Vec<A> = match visitor.next_element()? {
            Some(value) => value,
            None => return Err(de::Error::invalid_length(2, &self)),
        };

        assemble(dim, data)
    }

    fn visit_map<V>(self, mut visitor: V) -> Result<NdArray<A>, V::Error>
    where V: MapAccess<'de>
    {
        let mut v: Option<u8> = None;
        let mut data: Option<Vec<A>> = None;
        let mut dim: Option<Shape> = None;

        while let Some(key) = visitor.next_key()? {
            match key {
                ArrayField::Version => {
                    let val = visitor.next_value()?;
                    verify_version(val)?;
                    v = Some(val);
                }
                ArrayField::Data => {
                    data = Some(visitor.next_value()?);
                }
                ArrayField::Dim => {
                    dim = Some(visitor.next_value()?);
                }
            }
        }

        if v.is_none() {
            return Err(de::Error::missing_field("v"));
        }
        let data = data.ok_or_else(|| de::Error::missing_field("data"))?;
        let dim = dim.ok_or_else(|| de::Error::missing_field("dim"))?;

        assemble(dim, data)
    }
}

