//! The `Variant` tagged union.

/// Ordered name→value pairs of a [`Variant::Struct`].
///
/// A pair vector rather than a map: insertion order is the document order,
/// and re-adding an existing name appends a second entry instead of
/// overwriting the first.
pub type VariantStruct = Vec<(String, Variant)>;

/// Ordered elements of a [`Variant::List`].
pub type VariantList = Vec<Variant>;

/// A dynamic value capable of representing any primitive, any primitive
/// array, an ordered struct, or an ordered list of values.
///
/// The kind always matches the stored payload; the enum representation makes
/// any other combination unrepresentable.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Variant {
    #[default]
    Empty,
    Bool(bool),
    Int32(i32),
    UInt32(u32),
    Int64(i64),
    UInt64(u64),
    Float(f32),
    Double(f64),
    Str(String),
    Bytes(Vec<u8>),
    ArrayBool(Vec<bool>),
    ArrayInt32(Vec<i32>),
    ArrayUInt32(Vec<u32>),
    ArrayInt64(Vec<i64>),
    ArrayUInt64(Vec<u64>),
    ArrayFloat(Vec<f32>),
    ArrayDouble(Vec<f64>),
    ArrayString(Vec<String>),
    ArrayBytes(Vec<Vec<u8>>),
    Struct(VariantStruct),
    List(VariantList),
}

impl Variant {
    pub fn is_empty_kind(&self) -> bool {
        matches!(self, Variant::Empty)
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Variant::Struct(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Variant::List(_))
    }

    /// First entry named `name` in a `Struct`, `None` for other kinds.
    pub fn get(&self, name: &str) -> Option<&Variant> {
        match self {
            Variant::Struct(entries) => entries
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Element at `index` in a `List`, `None` for other kinds.
    pub fn at(&self, index: usize) -> Option<&Variant> {
        match self {
            Variant::List(items) => items.get(index),
            _ => None,
        }
    }

    /// Dot-separated descent through nested structs and lists.
    ///
    /// Numeric segments index `List` nodes, all other segments name
    /// `Struct` entries: `root.get_path("items.1.x")`.
    pub fn get_path(&self, path: &str) -> Option<&Variant> {
        let mut node = self;
        for segment in path.split('.') {
            node = match node {
                Variant::Struct(_) => node.get(segment)?,
                Variant::List(_) => node.at(segment.parse().ok()?)?,
                _ => return None,
            };
        }
        Some(node)
    }
}

macro_rules! variant_from {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl From<$ty> for Variant {
                fn from(value: $ty) -> Self {
                    Variant::$kind(value)
                }
            }
        )*
    };
}

variant_from! {
    bool => Bool,
    i32 => Int32,
    u32 => UInt32,
    i64 => Int64,
    u64 => UInt64,
    f32 => Float,
    f64 => Double,
    String => Str,
    Vec<u8> => Bytes,
    Vec<bool> => ArrayBool,
    Vec<i32> => ArrayInt32,
    Vec<u32> => ArrayUInt32,
    Vec<i64> => ArrayInt64,
    Vec<u64> => ArrayUInt64,
    Vec<f32> => ArrayFloat,
    Vec<f64> => ArrayDouble,
    Vec<String> => ArrayString,
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::Str(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Variant {
        Variant::Struct(vec![
            ("name".into(), Variant::Str("hub".into())),
            (
                "items".into(),
                Variant::List(vec![
                    Variant::Struct(vec![("x".into(), Variant::Int32(5))]),
                    Variant::Struct(vec![("x".into(), Variant::Int32(6))]),
                ]),
            ),
        ])
    }

    #[test]
    fn get_and_at() {
        let v = sample();
        assert_eq!(v.get("name"), Some(&Variant::Str("hub".into())));
        assert!(v.get("missing").is_none());
        let items = v.get("items").unwrap();
        assert!(items.at(1).unwrap().is_struct());
        assert!(items.at(2).is_none());
    }

    #[test]
    fn path_descent() {
        let v = sample();
        assert_eq!(v.get_path("items.1.x"), Some(&Variant::Int32(6)));
        assert!(v.get_path("items.x").is_none());
        assert!(v.get_path("name.anything").is_none());
    }

    #[test]
    fn duplicate_names_resolve_to_first() {
        let v = Variant::Struct(vec![
            ("a".into(), Variant::Int32(1)),
            ("a".into(), Variant::Int32(2)),
        ]);
        assert_eq!(v.get("a"), Some(&Variant::Int32(1)));
    }

    #[test]
    fn default_is_empty() {
        assert!(Variant::default().is_empty_kind());
    }
}
