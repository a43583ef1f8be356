//! Explicit projections of the [`User`](super::User) entity.
//!
//! The entity has two external shapes: the `users` table and the GraphQL
//! `User` object type. Both are declared here as plain tables and checked
//! against the ORM table definition and the generated SDL at startup, so a
//! renamed column or field fails fast instead of at the first request.

/// Fields of the `User` entity, in declaration order.
pub const USER_ENTITY_FIELDS: [&str; 3] = ["id", "name", "email"];

/// Storage table holding users.
pub const USER_TABLE: &str = "users";

/// GraphQL object type exposing users.
pub const USER_GRAPHQL_TYPE: &str = "User";

/// One entity field stored in one table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Entity field name.
    pub field: &'static str,
    /// Column name in [`USER_TABLE`].
    pub column: &'static str,
}

/// One entity field exposed as one GraphQL field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphqlFieldMapping {
    /// Entity field name.
    pub field: &'static str,
    /// Field name on [`USER_GRAPHQL_TYPE`].
    pub graphql_name: &'static str,
    /// GraphQL type reference, including nullability.
    pub graphql_type: &'static str,
}

/// Entity-to-column mapping for the `users` table.
pub const USER_COLUMNS: [ColumnMapping; 3] = [
    ColumnMapping { field: "id", column: "id" },
    ColumnMapping { field: "name", column: "name" },
    ColumnMapping { field: "email", column: "email" },
];

/// Entity-to-field mapping for the GraphQL `User` type.
pub const USER_GRAPHQL_FIELDS: [GraphqlFieldMapping; 3] = [
    GraphqlFieldMapping { field: "id", graphql_name: "id", graphql_type: "Int!" },
    GraphqlFieldMapping { field: "name", graphql_name: "name", graphql_type: "String!" },
    GraphqlFieldMapping { field: "email", graphql_name: "email", graphql_type: "String!" },
];

/// Mismatch between the declared projections and what was actually built.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityMappingError {
    /// An entity field has no entry in a projection.
    #[error("{projection} mapping does not cover entity field `{field}`")]
    UnmappedField {
        /// Projection being checked (`storage` or `graphql`).
        projection: &'static str,
        /// Entity field left out.
        field: &'static str,
    },
    /// An entity field appears more than once in a projection.
    #[error("{projection} mapping lists entity field `{field}` more than once")]
    DuplicateField {
        /// Projection being checked (`storage` or `graphql`).
        projection: &'static str,
        /// Entity field repeated.
        field: &'static str,
    },
    /// A mapped column is not part of the ORM table definition.
    #[error("column `{column}` is not defined on table `{table}`")]
    MissingColumn {
        /// Table checked.
        table: &'static str,
        /// Column expected.
        column: &'static str,
    },
    /// The SDL has no object type with the expected name.
    #[error("GraphQL schema has no `{type_name}` object type")]
    MissingGraphqlType {
        /// Object type expected.
        type_name: &'static str,
    },
    /// A mapped field is absent from the object type, or has another type.
    #[error("GraphQL type `{type_name}` lacks field `{field}: {graphql_type}`")]
    MissingGraphqlField {
        /// Object type checked.
        type_name: &'static str,
        /// Field expected.
        field: &'static str,
        /// Type reference expected.
        graphql_type: &'static str,
    },
}

/// Validate the shipped mapping tables.
///
/// `storage_columns` lists the columns of the ORM `users` table definition
/// and `sdl` is the SDL rendered from the GraphQL schema.
///
/// # Errors
/// Returns the first [`EntityMappingError`] found.
pub fn validate_entity_mappings(
    storage_columns: &[&str],
    sdl: &str,
) -> Result<(), EntityMappingError> {
    validate_mappings(&USER_COLUMNS, &USER_GRAPHQL_FIELDS, storage_columns, sdl)
}

fn validate_mappings(
    columns: &[ColumnMapping],
    fields: &[GraphqlFieldMapping],
    storage_columns: &[&str],
    sdl: &str,
) -> Result<(), EntityMappingError> {
    check_coverage("storage", columns.iter().map(|mapping| mapping.field))?;
    check_coverage("graphql", fields.iter().map(|mapping| mapping.field))?;

    for mapping in columns {
        if !storage_columns.contains(&mapping.column) {
            return Err(EntityMappingError::MissingColumn {
                table: USER_TABLE,
                column: mapping.column,
            });
        }
    }

    let object_fields =
        object_type_fields(sdl, USER_GRAPHQL_TYPE).ok_or(EntityMappingError::MissingGraphqlType {
            type_name: USER_GRAPHQL_TYPE,
        })?;
    for mapping in fields {
        let expected = format!("{}: {}", mapping.graphql_name, mapping.graphql_type);
        if !object_fields.iter().any(|line| *line == expected) {
            return Err(EntityMappingError::MissingGraphqlField {
                type_name: USER_GRAPHQL_TYPE,
                field: mapping.graphql_name,
                graphql_type: mapping.graphql_type,
            });
        }
    }
    Ok(())
}

fn check_coverage<'a>(
    projection: &'static str,
    mapped: impl Iterator<Item = &'a str> + Clone,
) -> Result<(), EntityMappingError> {
    for field in USER_ENTITY_FIELDS {
        match mapped.clone().filter(|candidate| *candidate == field).count() {
            0 => return Err(EntityMappingError::UnmappedField { projection, field }),
            1 => {}
            _ => return Err(EntityMappingError::DuplicateField { projection, field }),
        }
    }
    Ok(())
}

/// Trimmed body lines of `type <name> { ... }` in an SDL document.
fn object_type_fields<'a>(sdl: &'a str, type_name: &str) -> Option<Vec<&'a str>> {
    let header = format!("type {type_name} {{");
    let mut lines = sdl.lines().map(str::trim);
    lines.by_ref().find(|line| *line == header)?;
    Some(
        lines
            .take_while(|line| *line != "}")
            .filter(|line| !line.is_empty())
            .collect(),
    )
}
