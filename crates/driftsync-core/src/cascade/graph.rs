//! Association graph: downward edges of a schema, resolved to the
//! concrete foreign-key field on the child side.

use std::sync::Arc;

use crate::catalog::{AssociationKind, ModelSchema, SchemaRegistry};
use crate::error::Error;

/// One downward edge out of a schema.
#[derive(Debug, Clone)]
pub struct DownwardLink {
    /// Name of the association on the parent.
    pub association: String,
    /// Child schema on the other end.
    pub child: Arc<ModelSchema>,
    /// Field on the child holding the parent's primary key.
    pub foreign_key: String,
}

/// Materialize the downward associations of `schema`.
///
/// Each has-one / has-many is resolved by cross-referencing the child
/// schema's own associations for a belongs-to pointing back at the
/// parent; that belongs-to names the foreign-key field to filter on.
/// Belongs-to associations on the parent itself are upward edges and
/// are skipped.
///
/// A downward association whose child lacks the reciprocal belongs-to
/// is a fatal configuration error ([`Error::SchemaInconsistency`]):
/// skipping it silently could hide real dependents, so the whole
/// resolve call must abort instead.
pub fn downward_links(
    registry: &SchemaRegistry,
    schema: &ModelSchema,
) -> Result<Vec<DownwardLink>, Error> {
    let mut links = Vec::new();

    for association in &schema.associations {
        if !association.kind.is_downward() {
            continue;
        }

        let child = registry.schema_for(association.kind.target())?;
        let foreign_key = match child.belongs_to_targeting(&schema.name).map(|a| &a.kind) {
            Some(AssociationKind::BelongsTo { foreign_key, .. }) => foreign_key.clone(),
            _ => {
                return Err(Error::SchemaInconsistency {
                    parent: schema.name.clone(),
                    association: association.name.clone(),
                    child: child.name.clone(),
                })
            }
        };

        links.push(DownwardLink {
            association: association.name.clone(),
            child,
            foreign_key,
        });
    }

    Ok(links)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downward_links_resolve_foreign_keys() {
        let registry = SchemaRegistry::new();
        let user = registry.register(
            ModelSchema::new("User", "id")
                .with_has_many("posts", "Post")
                .with_has_one("profile", "Profile"),
        );
        registry.register(
            ModelSchema::new("Post", "id").with_belongs_to("author", "User", "author_id"),
        );
        registry.register(
            ModelSchema::new("Profile", "id").with_belongs_to("owner", "User", "user_id"),
        );

        let links = downward_links(&registry, &user).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0].child.name, "Post");
        assert_eq!(links[0].foreign_key, "author_id");
        assert_eq!(links[1].child.name, "Profile");
        assert_eq!(links[1].foreign_key, "user_id");
    }

    #[test]
    fn test_belongs_to_is_not_descended() {
        let registry = SchemaRegistry::new();
        registry.register(ModelSchema::new("User", "id"));
        let post = registry.register(
            ModelSchema::new("Post", "id").with_belongs_to("author", "User", "author_id"),
        );

        assert!(downward_links(&registry, &post).unwrap().is_empty());
    }

    #[test]
    fn test_missing_reciprocal_is_fatal() {
        let registry = SchemaRegistry::new();
        let user = registry.register(ModelSchema::new("User", "id").with_has_many("posts", "Post"));
        // Post forgot its belongs-to back to User.
        registry.register(ModelSchema::new("Post", "id"));

        let err = downward_links(&registry, &user).unwrap_err();
        assert!(matches!(
            err,
            Error::SchemaInconsistency { parent, association, child }
                if parent == "User" && association == "posts" && child == "Post"
        ));
    }

    #[test]
    fn test_unregistered_child_is_fatal() {
        let registry = SchemaRegistry::new();
        let user = registry.register(ModelSchema::new("User", "id").with_has_many("posts", "Post"));

        let err = downward_links(&registry, &user).unwrap_err();
        assert!(matches!(err, Error::SchemaNotFound { model } if model == "Post"));
    }
}
