//! Shared entity fixtures and a capturing executor for unit tests.
//!
//! These are hand-written trait implementations (no derive) so the
//! runtime crate's tests stay independent of `drydock-derive`. The derive
//! macro produces equivalent items; its own tests live in
//! `drydock-derive/tests/`.

use crate::executor::{DockError, DockExecutor};
use may_postgres::types::ToSql;
use may_postgres::Row;
use std::sync::{Arc, Mutex};

/// Capturing executor: records SQL text and parameter counts, returns no
/// rows. `query_one` reports "no rows" so `find_one` paths can be
/// exercised without a database.
pub struct MockExecutor {
    captured_sql: Arc<Mutex<Vec<String>>>,
    captured_param_counts: Arc<Mutex<Vec<usize>>>,
    rows_affected: u64,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self {
            captured_sql: Arc::new(Mutex::new(Vec::new())),
            captured_param_counts: Arc::new(Mutex::new(Vec::new())),
            rows_affected: 0,
        }
    }

    pub fn with_rows_affected(rows_affected: u64) -> Self {
        Self {
            rows_affected,
            ..Self::new()
        }
    }

    pub fn captured_sql(&self) -> Vec<String> {
        self.captured_sql.lock().unwrap().clone()
    }

    pub fn captured_param_counts(&self) -> Vec<usize> {
        self.captured_param_counts.lock().unwrap().clone()
    }
}

impl DockExecutor for MockExecutor {
    fn execute(&self, query: &str, params: &[&dyn ToSql]) -> Result<u64, DockError> {
        self.captured_sql.lock().unwrap().push(query.to_string());
        self.captured_param_counts.lock().unwrap().push(params.len());
        Ok(self.rows_affected)
    }

    fn query_one(&self, query: &str, params: &[&dyn ToSql]) -> Result<Row, DockError> {
        self.captured_sql.lock().unwrap().push(query.to_string());
        self.captured_param_counts.lock().unwrap().push(params.len());
        // Row cannot be constructed without a connection; report no rows.
        Err(DockError::Query(
            "MockExecutor: no rows available".to_string(),
        ))
    }

    fn query_all(&self, query: &str, params: &[&dyn ToSql]) -> Result<Vec<Row>, DockError> {
        self.captured_sql.lock().unwrap().push(query.to_string());
        self.captured_param_counts.lock().unwrap().push(params.len());
        Ok(vec![])
    }
}

/// `users`: identity key, one optional column, one skipped field.
pub mod users {
    use crate::metadata::{ColumnMeta, EntityMetadata};
    use crate::model::ModelTrait;
    use crate::query::{DockEntity, DockEntityName, FromRow};
    use once_cell::sync::Lazy;
    use sea_query::Value;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct Entity;

    impl DockEntityName for Entity {
        fn table_name(&self) -> &'static str {
            "users"
        }
    }

    impl sea_query::Iden for Entity {
        fn unquoted(&self) -> &str {
            "users"
        }
    }

    impl sea_query::IdenStatic for Entity {
        fn as_str(&self) -> &'static str {
            "users"
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Column {
        Id,
        Email,
        Name,
    }

    impl sea_query::Iden for Column {
        fn unquoted(&self) -> &str {
            match self {
                Column::Id => "id",
                Column::Email => "email",
                Column::Name => "name",
            }
        }
    }

    impl sea_query::IdenStatic for Column {
        fn as_str(&self) -> &'static str {
            match self {
                Column::Id => "id",
                Column::Email => "email",
                Column::Name => "name",
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct UserModel {
        pub id: i32,
        pub email: String,
        pub name: Option<String>,
        pub session_token: Option<String>,
    }

    impl FromRow for UserModel {
        fn from_row(row: &may_postgres::Row) -> Result<Self, may_postgres::Error> {
            Ok(Self {
                id: row.try_get::<&str, i32>("id")?,
                email: row.try_get::<&str, String>("email")?,
                name: row.try_get::<&str, Option<String>>("name")?,
                session_token: None,
            })
        }
    }

    impl ModelTrait for UserModel {
        type Entity = Entity;

        fn get(&self, column: Column) -> Value {
            match column {
                Column::Id => self.id.into(),
                Column::Email => self.email.clone().into(),
                Column::Name => self.name.clone().into(),
            }
        }

        fn get_by_column_name(&self, column_name: &str) -> Option<Value> {
            match column_name {
                "id" => Some(self.get(Column::Id)),
                "email" => Some(self.get(Column::Email)),
                "name" => Some(self.get(Column::Name)),
                _ => None,
            }
        }

        fn primary_key_values(&self) -> Vec<Value> {
            vec![self.id.into()]
        }
    }

    impl DockEntity for Entity {
        type Model = UserModel;
        type Column = Column;

        fn metadata() -> &'static EntityMetadata {
            static META: Lazy<EntityMetadata> = Lazy::new(|| EntityMetadata {
                table: "users",
                columns: vec![
                    ColumnMeta {
                        field: "id",
                        name: "id",
                        primary_key: true,
                        auto_increment: true,
                        skipped: false,
                        soft_delete: false,
                    },
                    ColumnMeta {
                        field: "email",
                        name: "email",
                        primary_key: false,
                        auto_increment: false,
                        skipped: false,
                        soft_delete: false,
                    },
                    ColumnMeta {
                        field: "name",
                        name: "name",
                        primary_key: false,
                        auto_increment: false,
                        skipped: false,
                        soft_delete: false,
                    },
                    ColumnMeta {
                        field: "session_token",
                        name: "session_token",
                        primary_key: false,
                        auto_increment: false,
                        skipped: true,
                        soft_delete: false,
                    },
                ],
            });
            &META
        }
    }

    pub fn sample_model() -> UserModel {
        UserModel {
            id: 5,
            email: "alice@example.com".to_string(),
            name: Some("Alice".to_string()),
            session_token: None,
        }
    }
}

/// `soft_docs`: soft-delete marker column.
pub mod soft_docs {
    use crate::metadata::{ColumnMeta, EntityMetadata};
    use crate::model::ModelTrait;
    use crate::query::{DockEntity, DockEntityName, FromRow};
    use once_cell::sync::Lazy;
    use sea_query::Value;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct Entity;

    impl DockEntityName for Entity {
        fn table_name(&self) -> &'static str {
            "soft_docs"
        }
    }

    impl sea_query::Iden for Entity {
        fn unquoted(&self) -> &str {
            "soft_docs"
        }
    }

    impl sea_query::IdenStatic for Entity {
        fn as_str(&self) -> &'static str {
            "soft_docs"
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Column {
        Id,
        Title,
        Deleted,
    }

    impl sea_query::Iden for Column {
        fn unquoted(&self) -> &str {
            match self {
                Column::Id => "id",
                Column::Title => "title",
                Column::Deleted => "deleted",
            }
        }
    }

    impl sea_query::IdenStatic for Column {
        fn as_str(&self) -> &'static str {
            match self {
                Column::Id => "id",
                Column::Title => "title",
                Column::Deleted => "deleted",
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct SoftDocModel {
        pub id: i32,
        pub title: String,
        pub deleted: bool,
    }

    impl FromRow for SoftDocModel {
        fn from_row(row: &may_postgres::Row) -> Result<Self, may_postgres::Error> {
            Ok(Self {
                id: row.try_get::<&str, i32>("id")?,
                title: row.try_get::<&str, String>("title")?,
                deleted: row.try_get::<&str, bool>("deleted")?,
            })
        }
    }

    impl ModelTrait for SoftDocModel {
        type Entity = Entity;

        fn get(&self, column: Column) -> Value {
            match column {
                Column::Id => self.id.into(),
                Column::Title => self.title.clone().into(),
                Column::Deleted => self.deleted.into(),
            }
        }

        fn get_by_column_name(&self, column_name: &str) -> Option<Value> {
            match column_name {
                "id" => Some(self.get(Column::Id)),
                "title" => Some(self.get(Column::Title)),
                "deleted" => Some(self.get(Column::Deleted)),
                _ => None,
            }
        }

        fn primary_key_values(&self) -> Vec<Value> {
            vec![self.id.into()]
        }
    }

    impl DockEntity for Entity {
        type Model = SoftDocModel;
        type Column = Column;

        fn metadata() -> &'static EntityMetadata {
            static META: Lazy<EntityMetadata> = Lazy::new(|| EntityMetadata {
                table: "soft_docs",
                columns: vec![
                    ColumnMeta {
                        field: "id",
                        name: "id",
                        primary_key: true,
                        auto_increment: false,
                        skipped: false,
                        soft_delete: false,
                    },
                    ColumnMeta {
                        field: "title",
                        name: "title",
                        primary_key: false,
                        auto_increment: false,
                        skipped: false,
                        soft_delete: false,
                    },
                    ColumnMeta {
                        field: "deleted",
                        name: "deleted",
                        primary_key: false,
                        auto_increment: false,
                        skipped: false,
                        soft_delete: true,
                    },
                ],
            });
            &META
        }
    }

    pub fn sample_model() -> SoftDocModel {
        SoftDocModel {
            id: 5,
            title: "handbook".to_string(),
            deleted: false,
        }
    }
}

/// `user_roles`: composite primary key.
pub mod user_roles {
    use crate::metadata::{ColumnMeta, EntityMetadata};
    use crate::model::ModelTrait;
    use crate::query::{DockEntity, DockEntityName, FromRow};
    use once_cell::sync::Lazy;
    use sea_query::Value;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct Entity;

    impl DockEntityName for Entity {
        fn table_name(&self) -> &'static str {
            "user_roles"
        }
    }

    impl sea_query::Iden for Entity {
        fn unquoted(&self) -> &str {
            "user_roles"
        }
    }

    impl sea_query::IdenStatic for Entity {
        fn as_str(&self) -> &'static str {
            "user_roles"
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Column {
        UserId,
        RoleId,
        Note,
    }

    impl sea_query::Iden for Column {
        fn unquoted(&self) -> &str {
            match self {
                Column::UserId => "user_id",
                Column::RoleId => "role_id",
                Column::Note => "note",
            }
        }
    }

    impl sea_query::IdenStatic for Column {
        fn as_str(&self) -> &'static str {
            match self {
                Column::UserId => "user_id",
                Column::RoleId => "role_id",
                Column::Note => "note",
            }
        }
    }

    #[derive(Debug, Clone)]
    pub struct UserRoleModel {
        pub user_id: i32,
        pub role_id: i32,
        pub note: Option<String>,
    }

    impl FromRow for UserRoleModel {
        fn from_row(row: &may_postgres::Row) -> Result<Self, may_postgres::Error> {
            Ok(Self {
                user_id: row.try_get::<&str, i32>("user_id")?,
                role_id: row.try_get::<&str, i32>("role_id")?,
                note: row.try_get::<&str, Option<String>>("note")?,
            })
        }
    }

    impl ModelTrait for UserRoleModel {
        type Entity = Entity;

        fn get(&self, column: Column) -> Value {
            match column {
                Column::UserId => self.user_id.into(),
                Column::RoleId => self.role_id.into(),
                Column::Note => self.note.clone().into(),
            }
        }

        fn get_by_column_name(&self, column_name: &str) -> Option<Value> {
            match column_name {
                "user_id" => Some(self.get(Column::UserId)),
                "role_id" => Some(self.get(Column::RoleId)),
                "note" => Some(self.get(Column::Note)),
                _ => None,
            }
        }

        fn primary_key_values(&self) -> Vec<Value> {
            vec![self.user_id.into(), self.role_id.into()]
        }
    }

    impl DockEntity for Entity {
        type Model = UserRoleModel;
        type Column = Column;

        fn metadata() -> &'static EntityMetadata {
            static META: Lazy<EntityMetadata> = Lazy::new(|| EntityMetadata {
                table: "user_roles",
                columns: vec![
                    ColumnMeta {
                        field: "user_id",
                        name: "user_id",
                        primary_key: true,
                        auto_increment: false,
                        skipped: false,
                        soft_delete: false,
                    },
                    ColumnMeta {
                        field: "role_id",
                        name: "role_id",
                        primary_key: true,
                        auto_increment: false,
                        skipped: false,
                        soft_delete: false,
                    },
                    ColumnMeta {
                        field: "note",
                        name: "note",
                        primary_key: false,
                        auto_increment: false,
                        skipped: false,
                        soft_delete: false,
                    },
                ],
            });
            &META
        }
    }

    pub fn sample_model() -> UserRoleModel {
        UserRoleModel {
            user_id: 1,
            role_id: 2,
            note: None,
        }
    }
}

/// `audit_log`: no primary key; key-based statements must fail.
pub mod audit_log {
    use crate::metadata::{ColumnMeta, EntityMetadata};
    use crate::model::ModelTrait;
    use crate::query::{DockEntity, DockEntityName, FromRow};
    use once_cell::sync::Lazy;
    use sea_query::Value;

    #[derive(Copy, Clone, Debug, Default)]
    pub struct Entity;

    impl DockEntityName for Entity {
        fn table_name(&self) -> &'static str {
            "audit_log"
        }
    }

    impl sea_query::Iden for Entity {
        fn unquoted(&self) -> &str {
            "audit_log"
        }
    }

    impl sea_query::IdenStatic for Entity {
        fn as_str(&self) -> &'static str {
            "audit_log"
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub enum Column {
        Message,
    }

    impl sea_query::Iden for Column {
        fn unquoted(&self) -> &str {
            "message"
        }
    }

    impl sea_query::IdenStatic for Column {
        fn as_str(&self) -> &'static str {
            "message"
        }
    }

    #[derive(Debug, Clone)]
    pub struct AuditLogModel {
        pub message: String,
    }

    impl FromRow for AuditLogModel {
        fn from_row(row: &may_postgres::Row) -> Result<Self, may_postgres::Error> {
            Ok(Self {
                message: row.try_get::<&str, String>("message")?,
            })
        }
    }

    impl ModelTrait for AuditLogModel {
        type Entity = Entity;

        fn get(&self, column: Column) -> Value {
            match column {
                Column::Message => self.message.clone().into(),
            }
        }

        fn get_by_column_name(&self, column_name: &str) -> Option<Value> {
            match column_name {
                "message" => Some(self.get(Column::Message)),
                _ => None,
            }
        }

        fn primary_key_values(&self) -> Vec<Value> {
            vec![]
        }
    }

    impl DockEntity for Entity {
        type Model = AuditLogModel;
        type Column = Column;

        fn metadata() -> &'static EntityMetadata {
            static META: Lazy<EntityMetadata> = Lazy::new(|| EntityMetadata {
                table: "audit_log",
                columns: vec![ColumnMeta {
                    field: "message",
                    name: "message",
                    primary_key: false,
                    auto_increment: false,
                    skipped: false,
                    soft_delete: false,
                }],
            });
            &META
        }
    }

    pub fn sample_model() -> AuditLogModel {
        AuditLogModel {
            message: "created".to_string(),
        }
    }
}
