//! Helpers for turning Rust type information into JSON Schema. The schema is
//! produced with [`schemars`] and documents the shape of input records (field
//! names, option labels) for whoever fills them in.

use schemars::{
    r#gen::{SchemaGenerator, SchemaSettings},
    JsonSchema,
};
use serde_json::Value;

use crate::error::{AssessError, Result};

/// Generate a JSON Schema for the given `T` **inline**, i.e. without `$ref`
/// pointers to external definitions.
///
/// # Example
///
/// ```
/// use neuroassess_core::schema_util::derive_input_schema;
/// use schemars::JsonSchema;
///
/// #[derive(JsonSchema)]
/// struct Foo { bar: String }
///
/// let schema = derive_input_schema::<Foo>().unwrap();
/// assert_eq!(schema["type"], "object");
/// ```
pub fn derive_input_schema<T>() -> Result<Value>
where
    T: JsonSchema + 'static,
{
    let mut settings = SchemaSettings::draft07();
    settings.inline_subschemas = true;

    let generator = SchemaGenerator::new(settings);
    let root = generator.into_root_schema_for::<T>();

    serde_json::to_value(root)
        .map_err(|err| AssessError::InvalidRequest(format!("schema is not serialisable: {err}")))
}
