use super::{Association, Collection, Field};
use crate::{Entity, Factory};

use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

use std::fmt;
use std::sync::Arc;

/// The mapping definition for one entity type, keyed by `map_id`.
///
/// Definitions reference each other symbolically through associations and
/// collections; [`Schema`](super::Schema) resolves the references. The
/// schema graph must not be recursive: a definition reaching itself through
/// any chain of relations is unsupported.
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityMap {
    /// Unique id other definitions reference.
    pub map_id: String,

    /// Constructor for new entities; `Entity::new()` when absent. Not part
    /// of the declarative format.
    #[serde(skip)]
    pub factory: Option<Arc<dyn Factory>>,

    /// Ordered components whose column values identify one entity instance.
    /// Never empty; defaults to the single `id` field.
    #[serde(
        default = "default_identity",
        alias = "idProperty",
        deserialize_with = "identity_entries"
    )]
    pub identity: Vec<Field>,

    /// Scalar fields copied from row columns.
    #[serde(default, alias = "properties")]
    pub fields: Vec<Field>,

    /// To-one relations.
    #[serde(default)]
    pub associations: Vec<Association>,

    /// To-many relations.
    #[serde(default)]
    pub collections: Vec<Collection>,
}

impl EntityMap {
    pub fn new(map_id: impl Into<String>) -> Self {
        Self {
            map_id: map_id.into(),
            factory: None,
            identity: default_identity(),
            fields: Vec::new(),
            associations: Vec::new(),
            collections: Vec::new(),
        }
    }

    /// Replaces the identity with a single component.
    pub fn identity(self, part: impl Into<Field>) -> Self {
        self.identity_composite([part])
    }

    /// Replaces the identity with the given components, order-significant.
    pub fn identity_composite<I>(mut self, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Field>,
    {
        self.identity = parts.into_iter().map(Into::into).collect();
        assert!(!self.identity.is_empty(), "identity must not be empty");
        self
    }

    /// Appends a scalar field.
    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields.push(field.into());
        self
    }

    /// Appends a to-one relation.
    pub fn association(
        mut self,
        name: impl Into<String>,
        map_id: impl Into<String>,
        column_prefix: impl Into<String>,
    ) -> Self {
        self.associations
            .push(Association::new(name, map_id, column_prefix));
        self
    }

    /// Appends a to-many relation.
    pub fn collection(
        mut self,
        name: impl Into<String>,
        map_id: impl Into<String>,
        column_prefix: impl Into<String>,
    ) -> Self {
        self.collections
            .push(Collection::new(name, map_id, column_prefix));
        self
    }

    /// Sets the entity factory.
    pub fn factory(mut self, factory: impl Factory + 'static) -> Self {
        self.factory = Some(Arc::new(factory));
        self
    }

    /// Creates a fresh entity via the factory, or empty when none is set.
    pub fn instantiate(&self) -> Entity {
        match &self.factory {
            Some(factory) => factory.create(),
            None => Entity::new(),
        }
    }
}

impl fmt::Debug for EntityMap {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("EntityMap")
            .field("map_id", &self.map_id)
            .field("factory", &self.factory.as_ref().map(|_| ".."))
            .field("identity", &self.identity)
            .field("fields", &self.fields)
            .field("associations", &self.associations)
            .field("collections", &self.collections)
            .finish()
    }
}

fn default_identity() -> Vec<Field> {
    vec![Field::new("id")]
}

/// Deserializes the `identity` entry: a single field or a list of fields,
/// each in string or object form.
fn identity_entries<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Field>, D::Error> {
    struct IdentityVisitor;

    impl<'de> Visitor<'de> for IdentityVisitor {
        type Value = Vec<Field>;

        fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
            f.write_str("an identity entry or a non-empty list of identity entries")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Vec<Field>, E> {
            Ok(vec![Field::new(v)])
        }

        fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Vec<Field>, A::Error> {
            let field = Field::deserialize(de::value::MapAccessDeserializer::new(access))?;
            Ok(vec![field])
        }

        fn visit_seq<A: SeqAccess<'de>>(self, access: A) -> Result<Vec<Field>, A::Error> {
            let fields =
                Vec::<Field>::deserialize(de::value::SeqAccessDeserializer::new(access))?;
            if fields.is_empty() {
                return Err(de::Error::invalid_length(0, &self));
            }
            Ok(fields)
        }
    }

    deserializer.deserialize_any(IdentityVisitor)
}
