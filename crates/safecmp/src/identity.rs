//! Process-wide type identities used to order values whose types refuse
//! native comparison.
//!
//! Ids are handed out on first encounter, so they depend on the order in
//! which types are first compared. They are unique and stable for the
//! lifetime of the process and mean nothing across processes.
use crate::value::{Value, ValueTag};
use derive_more::Display;
use log::debug;
use std::{
    any::TypeId,
    collections::HashMap,
    sync::{LazyLock, Mutex, PoisonError},
};

///
/// TYPE_TABLE is lazily initiated with a Mutex
/// it only ever grows, so a poisoned lock still holds a valid table
///

static TYPE_TABLE: LazyLock<Mutex<TypeTable>> = LazyLock::new(|| Mutex::new(TypeTable::default()));

///
/// TypeKey
///
/// Fallback ordering key: type name first, then the process-assigned id.
/// Field order matters; the derived `Ord` compares `name` before `id`.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{name}#{id}")]
pub struct TypeKey {
    name: &'static str,
    id: u64,
}

impl TypeKey {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }
}

/// Return the type identity key of a value, assigning a fresh id the first
/// time its type is seen.
#[must_use]
pub fn type_key(value: &Value) -> TypeKey {
    let (descriptor, name) = match value {
        Value::Object(object) => (
            TypeDescriptor::Object(object.type_id()),
            object.type_name(),
        ),
        other => {
            let tag = other.tag().identity();
            (TypeDescriptor::Builtin(tag), tag.label())
        }
    };

    let id = TYPE_TABLE
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .id_for(descriptor, name);

    TypeKey { name, id }
}

///
/// TypeDescriptor
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
enum TypeDescriptor {
    Builtin(ValueTag),
    Object(TypeId),
}

///
/// TypeTable
///

#[derive(Default)]
struct TypeTable {
    ids: HashMap<TypeDescriptor, u64>,
    next_id: u64,
}

impl TypeTable {
    fn id_for(&mut self, descriptor: TypeDescriptor, name: &'static str) -> u64 {
        *self.ids.entry(descriptor).or_insert_with(|| {
            self.next_id += 1;
            debug!("assigned type id {} to {name}", self.next_id);

            self.next_id
        })
    }
}

///
/// TESTS
///
