mod schema;
mod schema_build_error;
mod schema_builder;

pub use schema::Schema;
pub use schema_build_error::SchemaBuildError;
pub use schema_build_error::SchemaBuildErrors;
pub use schema_builder::SchemaBuilder;
