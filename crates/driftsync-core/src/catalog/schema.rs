//! Model schema definitions.

use super::association::{AssociationDef, AssociationKind};
use super::field::FieldDef;

/// Schema for one record type: primary-key field, fields, and
/// declaration-ordered associations.
///
/// Immutable once registered; the registry hands out shared references
/// and the resolver only borrows one for the duration of a traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelSchema {
    /// Model name (unique within the catalog; doubles as the table name).
    pub name: String,
    /// Name of the primary-key field.
    pub primary_key_field: String,
    /// Field definitions.
    pub fields: Vec<FieldDef>,
    /// Association definitions, in declaration order.
    pub associations: Vec<AssociationDef>,
}

impl ModelSchema {
    /// Create a new schema with the given name and primary-key field.
    pub fn new(name: impl Into<String>, primary_key_field: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            primary_key_field: primary_key_field.into(),
            fields: Vec::new(),
            associations: Vec::new(),
        }
    }

    /// Add a field.
    pub fn with_field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }

    /// Add multiple fields.
    pub fn with_fields(mut self, fields: impl IntoIterator<Item = FieldDef>) -> Self {
        self.fields.extend(fields);
        self
    }

    /// Add an association.
    pub fn with_association(mut self, association: AssociationDef) -> Self {
        self.associations.push(association);
        self
    }

    /// Add a has-one association to `target`.
    pub fn with_has_one(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.with_association(AssociationDef::has_one(name, target))
    }

    /// Add a has-many association to `target`.
    pub fn with_has_many(self, name: impl Into<String>, target: impl Into<String>) -> Self {
        self.with_association(AssociationDef::has_many(name, target))
    }

    /// Add a belongs-to association to `target` through `foreign_key`.
    pub fn with_belongs_to(
        self,
        name: impl Into<String>,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> Self {
        self.with_association(AssociationDef::belongs_to(name, target, foreign_key))
    }

    /// Get a field by name.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get an association by name.
    pub fn get_association(&self, name: &str) -> Option<&AssociationDef> {
        self.associations.iter().find(|a| a.name == name)
    }

    /// Find the belongs-to association pointing back at `parent`, if any.
    ///
    /// This is how a downward association on the parent is resolved to
    /// the concrete foreign-key field on the child side.
    pub fn belongs_to_targeting(&self, parent: &str) -> Option<&AssociationDef> {
        self.associations.iter().find(|a| {
            matches!(&a.kind, AssociationKind::BelongsTo { target, .. } if target == parent)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ScalarType;

    fn post_schema() -> ModelSchema {
        ModelSchema::new("Post", "id")
            .with_field(FieldDef::new("id", ScalarType::String))
            .with_field(FieldDef::new("title", ScalarType::String))
            .with_field(FieldDef::new("author_id", ScalarType::String))
            .with_belongs_to("author", "User", "author_id")
            .with_has_many("comments", "Comment")
    }

    #[test]
    fn test_schema_builder() {
        let post = post_schema();
        assert_eq!(post.name, "Post");
        assert_eq!(post.primary_key_field, "id");
        assert_eq!(post.fields.len(), 3);
        assert_eq!(post.associations.len(), 2);
    }

    #[test]
    fn test_get_field_and_association() {
        let post = post_schema();
        assert!(post.get_field("title").is_some());
        assert!(post.get_field("missing").is_none());
        assert!(post.get_association("comments").is_some());
        assert!(post.get_association("missing").is_none());
    }

    #[test]
    fn test_belongs_to_targeting() {
        let post = post_schema();
        let back = post.belongs_to_targeting("User").unwrap();
        assert_eq!(back.name, "author");
        assert!(post.belongs_to_targeting("Comment").is_none());
    }

    #[test]
    fn test_association_declaration_order_is_kept() {
        let post = post_schema();
        let names: Vec<&str> = post.associations.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["author", "comments"]);
    }
}
