mod builtin_scalars;
mod coerced_value;
mod coercion_error;
mod coercion_options;
mod input_path;
mod input_value_coercer;

pub use coerced_value::CoercedValue;
pub use coercion_error::CoercionError;
pub use coercion_error::CoercionErrorKind;
pub use coercion_options::CoercionOptions;
pub use coercion_options::ListCoercion;
pub use input_path::InputPath;
pub use input_path::PathSegment;
pub use input_value_coercer::InputValueCoercer;

#[cfg(test)]
mod tests;
