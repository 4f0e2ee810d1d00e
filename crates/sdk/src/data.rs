//! Property value types
//!
//! [`Data`] is the tagged value carried by data and table events (old and new
//! value of a property or cell). [`DataList`] is the argument list carried by
//! class events.

use std::fmt;

use crate::guid::Guid;

/// Data type tag
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataType {
    Null = 0,
    Bool = 1,
    Int = 2,
    Int64 = 3,
    Float = 4,
    Double = 5,
    String = 6,
    Guid = 7,
}

impl DataType {
    /// Stable lowercase name, used in log fields
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::Float => "float",
            Self::Double => "double",
            Self::String => "string",
            Self::Guid => "guid",
        }
    }
}

/// A single property value
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Data {
    #[default]
    Null,
    Bool(bool),
    Int(i32),
    Int64(i64),
    Float(f32),
    Double(f64),
    String(String),
    Guid(Guid),
}

impl Data {
    /// Get the type tag of this value
    pub fn data_type(&self) -> DataType {
        match self {
            Self::Null => DataType::Null,
            Self::Bool(_) => DataType::Bool,
            Self::Int(_) => DataType::Int,
            Self::Int64(_) => DataType::Int64,
            Self::Float(_) => DataType::Float,
            Self::Double(_) => DataType::Double,
            Self::String(_) => DataType::String,
            Self::Guid(_) => DataType::Guid,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get an integer value, widening `Int` to `i64`
    pub fn as_int64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(i64::from(*v)),
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get a floating point value, widening `Float` to `f64`
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(f64::from(*v)),
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_guid(&self) -> Option<Guid> {
        match self {
            Self::Guid(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<bool> for Data {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Data {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<i64> for Data {
    fn from(v: i64) -> Self {
        Self::Int64(v)
    }
}

impl From<f32> for Data {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<f64> for Data {
    fn from(v: f64) -> Self {
        Self::Double(v)
    }
}

impl From<&str> for Data {
    fn from(v: &str) -> Self {
        Self::String(v.to_string())
    }
}

impl From<String> for Data {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Guid> for Data {
    fn from(v: Guid) -> Self {
        Self::Guid(v)
    }
}

impl fmt::Display for Data {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(v) => write!(f, "{}", v),
            Self::Int(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{}", v),
            Self::Double(v) => write!(f, "{}", v),
            Self::String(v) => f.write_str(v),
            Self::Guid(v) => write!(f, "guid:{}", v),
        }
    }
}

/// Ordered argument list attached to a class event
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DataList {
    values: Vec<Data>,
}

impl DataList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value
    pub fn push(&mut self, value: impl Into<Data>) {
        self.values.push(value.into());
    }

    /// Builder-style append
    ///
    /// ```
    /// use ark_sdk::DataList;
    ///
    /// let args = DataList::new().with(1).with("spawn");
    /// assert_eq!(args.len(), 2);
    /// ```
    pub fn with(mut self, value: impl Into<Data>) -> Self {
        self.push(value);
        self
    }

    pub fn get(&self, index: usize) -> Option<&Data> {
        self.values.get(index)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Data> {
        self.values.iter()
    }
}

impl FromIterator<Data> for DataList {
    fn from_iter<I: IntoIterator<Item = Data>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Data>> for DataList {
    fn from(values: Vec<Data>) -> Self {
        Self { values }
    }
}

impl<'a> IntoIterator for &'a DataList {
    type Item = &'a Data;
    type IntoIter = std::slice::Iter<'a, Data>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_tags() {
        assert_eq!(Data::Null.data_type(), DataType::Null);
        assert_eq!(Data::from(true).data_type(), DataType::Bool);
        assert_eq!(Data::from(10).data_type(), DataType::Int);
        assert_eq!(Data::from(10_i64).data_type(), DataType::Int64);
        assert_eq!(Data::from(1.5_f32).data_type(), DataType::Float);
        assert_eq!(Data::from(1.5_f64).data_type(), DataType::Double);
        assert_eq!(Data::from("hp").data_type(), DataType::String);
        assert_eq!(Data::from(Guid::new(3)).data_type(), DataType::Guid);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Data::Int(8).as_int(), Some(8));
        assert_eq!(Data::Int(8).as_int64(), Some(8));
        assert_eq!(Data::Float(0.5).as_double(), Some(0.5));
        assert_eq!(Data::from("name").as_str(), Some("name"));
        assert_eq!(Data::Int(8).as_str(), None);
        assert!(Data::default().is_null());
    }

    #[test]
    fn test_data_list() {
        let list = DataList::new().with(1).with("two").with(Guid::new(3));
        assert_eq!(list.len(), 3);
        assert_eq!(list.get(1), Some(&Data::String("two".to_string())));
        assert_eq!(list.get(3), None);

        let collected: DataList = list.iter().cloned().collect();
        assert_eq!(collected, list);
        assert!(DataList::new().is_empty());
    }

    #[test]
    fn test_display() {
        assert_eq!(Data::Int(10).to_string(), "10");
        assert_eq!(Data::Null.to_string(), "null");
        assert_eq!(Data::Guid(Guid::new(5)).to_string(), "guid:5");
    }
}
