//! Schema adapter trait and the object schema used by derived builders
//!
//! Copyright (c) 2025 Fieldsmith Team
//! Licensed under the Apache-2.0 license

use crate::error::{ValidationError, ValidationResult, Violation};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::debug;

/// Field data accumulated by a builder, keyed by field name
pub type FieldMap = Map<String, Value>;

/// Per-field validator capability
///
/// Implemented for every `Fn(&Value) -> Result<(), Violation>` closure and for
/// the stock [`Rule`](crate::validators::Rule)s.
pub trait FieldValidator: Send + Sync {
    /// Check one candidate value for the field
    fn validate(&self, value: &Value) -> Result<(), Violation>;
}

impl<F> FieldValidator for F
where
    F: Fn(&Value) -> Result<(), Violation> + Send + Sync,
{
    fn validate(&self, value: &Value) -> Result<(), Violation> {
        self(value)
    }
}

/// Schema adapter consumed by builders
///
/// A schema knows its fields, validates one field value at a time, and
/// validates the whole accumulated object when a builder finishes.
pub trait Schema: Send + Sync {
    /// The fully-typed object produced by a successful whole-object check
    type Output;

    /// Field names in declaration order
    fn field_names(&self) -> Vec<&str>;

    /// Whether `field` belongs to this schema
    fn has_field(&self, field: &str) -> bool {
        self.field_names().contains(&field)
    }

    /// Whether `field` must be present for the object to be valid
    fn is_required(&self, field: &str) -> bool;

    /// Validate one value for one field
    fn validate_field(&self, field: &str, value: &Value) -> Result<(), Violation>;

    /// Validate the whole accumulated object and produce the typed output
    fn parse_whole(&self, data: &FieldMap) -> ValidationResult<Self::Output>;
}

/// A single field of an [`ObjectSchema`]
#[derive(Clone)]
pub struct FieldSpec {
    name: String,
    required: bool,
    validator: Arc<dyn FieldValidator>,
}

impl FieldSpec {
    /// Create a field specification
    pub fn new<V>(name: impl Into<String>, required: bool, validator: V) -> Self
    where
        V: FieldValidator + 'static,
    {
        Self {
            name: name.into(),
            required,
            validator: Arc::new(validator),
        }
    }

    /// Field name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether the field must be present
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a value for this field
    ///
    /// `null` is accepted for optional fields without consulting the validator.
    pub fn validate(&self, value: &Value) -> Result<(), Violation> {
        if !self.required && value.is_null() {
            return Ok(());
        }
        self.validator.validate(value)
    }
}

impl fmt::Debug for FieldSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldSpec")
            .field("name", &self.name)
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// Declarative object schema: ordered fields, each with its own validator
///
/// The whole-object check validates every field in declaration order,
/// reports the first violation, and then deserializes the accumulated data
/// into `T`.
///
/// # Examples
///
/// ```rust
/// use fieldsmith_schema::{validators, ObjectSchema, Schema};
/// use serde::Deserialize;
/// use serde_json::json;
///
/// #[derive(Debug, Deserialize, PartialEq)]
/// struct Tag {
///     label: String,
/// }
///
/// let schema = ObjectSchema::<Tag>::new("tag").field("label", validators::non_empty());
/// let data = json!({"label": "rust"}).as_object().cloned().unwrap();
/// assert_eq!(schema.parse_whole(&data).unwrap(), Tag { label: "rust".into() });
/// ```
pub struct ObjectSchema<T> {
    name: String,
    fields: Vec<FieldSpec>,
    _output: PhantomData<fn() -> T>,
}

impl<T> ObjectSchema<T> {
    /// Create an empty schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            _output: PhantomData,
        }
    }

    /// Add a required field
    pub fn field<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: FieldValidator + 'static,
    {
        self.push(FieldSpec::new(name, true, validator))
    }

    /// Add an optional field
    pub fn optional_field<V>(self, name: impl Into<String>, validator: V) -> Self
    where
        V: FieldValidator + 'static,
    {
        self.push(FieldSpec::new(name, false, validator))
    }

    /// Add a field specification; a name that is already present keeps its
    /// first registration
    pub fn push(mut self, spec: FieldSpec) -> Self {
        if self.get(spec.name()).is_some() {
            debug!(schema = %self.name, field = spec.name(), "Field already registered, ignoring");
            return self;
        }
        self.fields.push(spec);
        self
    }

    /// Schema name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fields in declaration order
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Look up a field by name
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|spec| spec.name == name)
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the schema has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Validate accumulated data field by field, stopping at the first violation
    pub fn check(&self, data: &FieldMap) -> ValidationResult<()> {
        for spec in &self.fields {
            match data.get(spec.name()) {
                Some(value) => spec
                    .validate(value)
                    .map_err(|violation| ValidationError::object_violation(violation.at(spec.name())))?,
                None if spec.is_required() => {
                    return Err(ValidationError::object_violation(
                        Violation::new("required", "a value", "nothing").at(spec.name()),
                    ));
                }
                None => {}
            }
        }
        Ok(())
    }
}

impl<T> fmt::Debug for ObjectSchema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectSchema")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .finish()
    }
}

impl<T: DeserializeOwned> Schema for ObjectSchema<T> {
    type Output = T;

    fn field_names(&self) -> Vec<&str> {
        self.fields.iter().map(FieldSpec::name).collect()
    }

    fn has_field(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    fn is_required(&self, field: &str) -> bool {
        self.get(field).is_some_and(FieldSpec::is_required)
    }

    fn validate_field(&self, field: &str, value: &Value) -> Result<(), Violation> {
        match self.get(field) {
            Some(spec) => spec.validate(value),
            None => Err(Violation::new(
                "unknown_field",
                format!("a field of schema '{}'", self.name),
                format!("field '{}'", field),
            )),
        }
    }

    fn parse_whole(&self, data: &FieldMap) -> ValidationResult<T> {
        self.check(data)?;
        serde_json::from_value(Value::Object(data.clone())).map_err(|e| {
            ValidationError::object(format!("cannot assemble '{}': {}", self.name, e))
        })
    }
}
