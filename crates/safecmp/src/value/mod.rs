mod compare;
mod display;
mod numeric;
mod tag;
mod wire;


use std::{
    any::{Any, TypeId},
    borrow::Borrow,
    cmp::Ordering,
    fmt,
    sync::Arc,
};

// re-exports
pub(crate) use compare::{Incomparable, native_cmp, native_eq};
pub use tag::ValueTag;

///
/// Value
///
/// Dynamically typed datum. Equality and `PartialOrd` follow native
/// semantics: numbers compare across variants by exact value, sequences
/// compare lexicographically, and everything else refuses ordering
/// (`partial_cmp` returns `None`). Use `compare` for a total order.
///
/// Null    → absent value; sorts before everything in the fallback order.
/// Map     → equality only, never orderable.
/// Object  → opaque user value; equality is identity.
///

#[derive(Clone, Debug)]
pub enum Value {
    Blob(Vec<u8>),
    Bool(bool),
    Float(f64),
    Int(i64),
    /// Ordered sequence. Never comparable to a `Tuple`.
    List(Vec<Self>),
    /// Entry list; duplicate keys are collapsed by `Value::from_map`.
    Map(Vec<(Self, Self)>),
    Null,
    Object(ValueObject),
    Text(String),
    Tuple(Vec<Self>),
    Uint(u64),
}

impl Value {
    ///
    /// CONSTRUCTION
    ///

    /// Build a `Value::List` from anything convertible.
    pub fn list<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(items.into_iter().map(Into::into).collect())
    }

    /// Build a `Value::Tuple` from anything convertible.
    pub fn tuple<I, T>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Tuple(items.into_iter().map(Into::into).collect())
    }

    pub fn blob(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Blob(bytes.into())
    }

    /// Wrap an arbitrary Rust value as an opaque object.
    pub fn object<T: Any + Send + Sync>(value: T) -> Self {
        Self::Object(ValueObject::new(value))
    }

    /// Build a `Value::Map`; a later entry replaces an earlier one with an
    /// equal key, keeping the earlier position.
    #[must_use]
    pub fn from_map(entries: Vec<(Self, Self)>) -> Self {
        let mut map: Vec<(Self, Self)> = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            match map.iter_mut().find(|(existing, _)| native_eq(existing, &key)) {
                Some((_, slot)) => *slot = value,
                None => map.push((key, value)),
            }
        }

        Self::Map(map)
    }

    ///
    /// INSPECTION
    ///

    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        tag::tag_of(self)
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True when the value is unequal to itself: a NaN float, or a sequence
    /// holding one.
    #[must_use]
    pub fn is_nan_like(&self) -> bool {
        !native_eq(self, self)
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(s) = self {
            Some(s.as_str())
        } else {
            None
        }
    }

    #[must_use]
    pub const fn as_list(&self) -> Option<&[Self]> {
        if let Self::List(items) = self {
            Some(items.as_slice())
        } else {
            None
        }
    }
}

/// Borrow any `Borrow<Value>` item as a `&Value`.
pub(crate) fn value_of<T: Borrow<Value>>(item: &T) -> &Value {
    Borrow::<Value>::borrow(item)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        native_eq(self, other)
    }
}

// NOTE:
// This is the native, partial order. Cross-family pairs and NaN both return
// None here; `compare` is the total order built on top of it.
impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        native_cmp(self, other).ok().flatten()
    }
}

macro_rules! impl_from_for {
    ( $( $type:ty => $variant:ident ),* $(,)? ) => {
        $(
            impl From<$type> for Value {
                fn from(v: $type) -> Self {
                    Self::$variant(v.into())
                }
            }
        )*
    };
}

impl_from_for! {
    bool   => Bool,
    f32    => Float,
    f64    => Float,
    i8     => Int,
    i16    => Int,
    i32    => Int,
    i64    => Int,
    u8     => Uint,
    u16    => Uint,
    u32    => Uint,
    u64    => Uint,
    &str   => Text,
    String => Text,
}

impl From<Vec<Self>> for Value {
    fn from(vec: Vec<Self>) -> Self {
        Self::List(vec)
    }
}

impl From<ValueObject> for Value {
    fn from(object: ValueObject) -> Self {
        Self::Object(object)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Null
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

///
/// ValueObject
///
/// Shared handle to an arbitrary `'static` value. Objects never order
/// natively; two handles are equal only if they point at the same allocation.
///

#[derive(Clone)]
pub struct ValueObject {
    type_name: &'static str,
    type_id: TypeId,
    inner: Arc<dyn Any + Send + Sync>,
}

impl ValueObject {
    pub fn new<T: Any + Send + Sync>(value: T) -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            type_id: TypeId::of::<T>(),
            inner: Arc::new(value),
        }
    }

    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    #[must_use]
    pub const fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[must_use]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.inner.downcast_ref::<T>()
    }

    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ValueObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ValueObject({})", self.type_name)
    }
}
