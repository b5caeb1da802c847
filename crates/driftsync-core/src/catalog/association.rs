//! Association definitions between model schemas.

/// Kind of a declared association, as a closed variant.
///
/// `HasOne` and `HasMany` point downward (parent to child) and are the
/// edges a cascade descends through. `BelongsTo` points upward (child to
/// parent) and is never descended; it carries the foreign-key field on
/// the declaring schema that references the parent's primary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssociationKind {
    /// One child record referencing this schema.
    HasOne {
        /// Target (child) model name.
        target: String,
    },
    /// Many child records referencing this schema.
    HasMany {
        /// Target (child) model name.
        target: String,
    },
    /// Upward reference to a parent record.
    BelongsTo {
        /// Target (parent) model name.
        target: String,
        /// Field on the declaring schema holding the parent's primary key.
        foreign_key: String,
    },
}

impl AssociationKind {
    /// The model name on the other end of the association.
    pub fn target(&self) -> &str {
        match self {
            Self::HasOne { target }
            | Self::HasMany { target }
            | Self::BelongsTo { target, .. } => target,
        }
    }

    /// Whether a cascade descends through this association.
    pub fn is_downward(&self) -> bool {
        matches!(self, Self::HasOne { .. } | Self::HasMany { .. })
    }
}

/// A named association within a model schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssociationDef {
    /// Association name (unique within the schema, declaration-ordered).
    pub name: String,
    /// Association kind and endpoints.
    pub kind: AssociationKind,
}

impl AssociationDef {
    /// Declare a has-one association to `target`.
    pub fn has_one(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AssociationKind::HasOne {
                target: target.into(),
            },
        }
    }

    /// Declare a has-many association to `target`.
    pub fn has_many(name: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: AssociationKind::HasMany {
                target: target.into(),
            },
        }
    }

    /// Declare a belongs-to association to `target` through `foreign_key`.
    pub fn belongs_to(
        name: impl Into<String>,
        target: impl Into<String>,
        foreign_key: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: AssociationKind::BelongsTo {
                target: target.into(),
                foreign_key: foreign_key.into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_downward_kinds() {
        assert!(AssociationDef::has_one("profile", "Profile").kind.is_downward());
        assert!(AssociationDef::has_many("posts", "Post").kind.is_downward());
        assert!(!AssociationDef::belongs_to("author", "User", "author_id")
            .kind
            .is_downward());
    }

    #[test]
    fn test_target() {
        let assoc = AssociationDef::belongs_to("author", "User", "author_id");
        assert_eq!(assoc.kind.target(), "User");
        assert_eq!(
            AssociationDef::has_many("posts", "Post").kind.target(),
            "Post"
        );
    }
}
