//! Field-level validation of submitted records.
//!
//! Validators are registered with a [`ValidatorRegistry`], which routes a
//! target only to validators whose [`Validator::supports`] accepts its type.

use std::any::{Any, TypeId};

use serde::{Deserialize, Serialize};

use crate::models::Visit;

/// Error code for a missing mandatory field.
pub const REQUIRED: &str = "required";

/// Error code for a value that could not be converted to the field's type.
pub const TYPE_MISMATCH: &str = "typeMismatch";

/// A rejected value on one form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldError {
    pub field: String,
    pub code: String,
    pub message: String,
}

/// Field errors collected while binding and validating one submission.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BindingResult {
    pub errors: Vec<FieldError>,
}

impl BindingResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error against `field`.
    pub fn reject(&mut self, field: &str, code: &str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field: field.to_string(),
            code: code.to_string(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_field_error(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }

    /// Errors recorded against `field`, in the order they were raised.
    pub fn field_errors<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a FieldError> + 'a {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn merge(&mut self, other: BindingResult) {
        self.errors.extend(other.errors);
    }
}

/// A validator for one kind of record.
pub trait Validator: Send + Sync {
    /// Whether this validator can check values of type `target`.
    fn supports(&self, target: TypeId) -> bool;

    /// Check `target`, recording problems in `errors`.
    ///
    /// Only called with targets whose type passed [`Validator::supports`].
    fn validate(&self, target: &dyn Any, errors: &mut BindingResult);
}

/// Required-field rules for visit forms.
#[derive(Debug, Default, Clone, Copy)]
pub struct VisitValidator;

impl VisitValidator {
    pub const DESCRIPTION: &'static str = "description";
    pub const VET: &'static str = "vet";

    /// Check a visit and return every rule it breaks.
    pub fn check(&self, visit: &Visit) -> BindingResult {
        let mut errors = BindingResult::new();

        if visit.description.trim().is_empty() {
            errors.reject(Self::DESCRIPTION, REQUIRED, REQUIRED);
        }

        // Only a brand-new visit must name a vet; edits may leave it unset.
        if visit.is_new() && visit.vet.is_none() {
            errors.reject(Self::VET, REQUIRED, REQUIRED);
        }

        errors
    }
}

impl Validator for VisitValidator {
    fn supports(&self, target: TypeId) -> bool {
        target == TypeId::of::<Visit>()
    }

    fn validate(&self, target: &dyn Any, errors: &mut BindingResult) {
        if let Some(visit) = target.downcast_ref::<Visit>() {
            errors.merge(self.check(visit));
        }
    }
}

/// Dispatches a target to every registered validator that supports it.
#[derive(Default)]
pub struct ValidatorRegistry {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the validators the visit workflow needs.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(VisitValidator);
        registry
    }

    pub fn register<V: Validator + 'static>(&mut self, validator: V) {
        self.validators.push(Box::new(validator));
    }

    /// Run every supporting validator over `target`, adding to `errors`.
    pub fn validate_into<T: Any>(&self, target: &T, errors: &mut BindingResult) {
        let type_id = TypeId::of::<T>();
        for validator in self.validators.iter().filter(|v| v.supports(type_id)) {
            validator.validate(target, errors);
        }
    }

    /// Run every supporting validator over `target`.
    pub fn validate<T: Any>(&self, target: &T) -> BindingResult {
        let mut errors = BindingResult::new();
        self.validate_into(target, &mut errors);
        errors
    }
}
