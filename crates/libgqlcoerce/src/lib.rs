pub mod ast;
pub mod coercion;
pub mod loc;
mod named_ref;
pub mod schema;
pub mod types;
mod value;

pub use named_ref::DerefByName;
pub use named_ref::DerefByNameError;
pub use named_ref::NamedRef;
pub use value::Value;
