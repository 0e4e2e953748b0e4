//! Declarative validation rules for form fields.
//!
//! A form lists its fields with a [`ValidationRules`] value each and runs them
//! through [`FieldErrors`]; the result is the per-field error list shown
//! inline next to the inputs. Nothing is sent to the server while it is not
//! empty.

use serde::{Deserialize, Serialize};

/// Validation rules for a field
/// Copy trait for efficient passing
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub exact_length: Option<usize>,
    pub digits_only: bool,
    pub email: bool,
    pub one_of: Option<&'static [&'static str]>,
    pub custom_error: Option<&'static str>,
}

impl ValidationRules {
    /// Create empty validation rules (all optional, no constraints)
    pub const fn none() -> Self {
        Self {
            required: false,
            min: None,
            max: None,
            min_length: None,
            max_length: None,
            exact_length: None,
            digits_only: false,
            email: false,
            one_of: None,
            custom_error: None,
        }
    }

    /// Create validation rules for required field
    pub const fn required() -> Self {
        let mut rules = Self::none();
        rules.required = true;
        rules
    }

    pub const fn min_length(mut self, n: usize) -> Self {
        self.min_length = Some(n);
        self
    }

    pub const fn max_length(mut self, n: usize) -> Self {
        self.max_length = Some(n);
        self
    }

    pub const fn exact_length(mut self, n: usize) -> Self {
        self.exact_length = Some(n);
        self
    }

    pub const fn digits(mut self) -> Self {
        self.digits_only = true;
        self
    }

    pub const fn email(mut self) -> Self {
        self.email = true;
        self
    }

    pub const fn range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    pub const fn at_least(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub const fn one_of(mut self, values: &'static [&'static str]) -> Self {
        self.one_of = Some(values);
        self
    }

    /// Replaces every generated message with a fixed one
    pub const fn message(mut self, text: &'static str) -> Self {
        self.custom_error = Some(text);
        self
    }

    /// Check if field is required
    pub const fn is_required(&self) -> bool {
        self.required
    }

    fn fail(&self, generated: String) -> Result<(), String> {
        Err(self.custom_error.map(str::to_string).unwrap_or(generated))
    }

    /// Validate a string value against the rules
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return self.fail(format!("{} es obligatorio", field_label));
            }
            return Ok(());
        }

        // lengths are counted in characters, not bytes
        let len = trimmed.chars().count();

        if let Some(exact) = self.exact_length {
            if len != exact {
                return self.fail(format!("{} debe tener {} caracteres", field_label, exact));
            }
        }

        if let Some(min) = self.min_length {
            if len < min {
                return self.fail(format!(
                    "{} debe tener al menos {} caracteres",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return self.fail(format!(
                    "{} no debe superar {} caracteres",
                    field_label, max
                ));
            }
        }

        if self.digits_only && !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return self.fail(format!("{} solo admite dígitos", field_label));
        }

        if self.email && !is_valid_email(trimmed) {
            return self.fail(format!("{} no es un correo válido", field_label));
        }

        if let Some(allowed) = self.one_of {
            if !allowed.contains(&trimmed) {
                return self.fail(format!("{} tiene un valor no permitido", field_label));
            }
        }

        Ok(())
    }

    /// Validate a numeric value against min/max rules
    pub fn validate_number(&self, value: f64, field_label: &str) -> Result<(), String> {
        if !value.is_finite() {
            return self.fail(format!("{} debe ser un número", field_label));
        }

        if let Some(min) = self.min {
            if value < min {
                return self.fail(format!("{} debe ser al menos {}", field_label, min));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return self.fail(format!("{} no debe superar {}", field_label, max));
            }
        }

        Ok(())
    }
}

fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .map(|(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
            .unwrap_or(false)
}

/// One failed constraint, keyed by the form field name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Ordered list of field errors; at most one error per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        if self.get(field).is_some() {
            return;
        }
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.into(),
        });
    }

    pub fn check_string(&mut self, field: &str, label: &str, rules: ValidationRules, value: &str) {
        if let Err(message) = rules.validate_string(value, label) {
            self.add(field, message);
        }
    }

    pub fn check_number(&mut self, field: &str, label: &str, rules: ValidationRules, value: f64) {
        if let Err(message) = rules.validate_number(value, label) {
            self.add(field, message);
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Forms that validate themselves before submission
pub trait Validate {
    fn validate(&self) -> FieldErrors;

    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_blank() {
        let rules = ValidationRules::required();
        assert!(rules.validate_string("   ", "Nombre").is_err());
        assert!(rules.validate_string("Ana", "Nombre").is_ok());
        assert!(ValidationRules::none().validate_string("", "Nombre").is_ok());
    }

    #[test]
    fn test_lengths_count_chars() {
        let rules = ValidationRules::required().min_length(3).max_length(5);
        assert!(rules.validate_string("ñuñ", "Nombre").is_ok());
        assert!(rules.validate_string("ñu", "Nombre").is_err());
        assert!(rules.validate_string("ñuñuñu", "Nombre").is_err());
    }

    #[test]
    fn test_exact_digits() {
        let rules = ValidationRules::required().exact_length(8).digits();
        assert!(rules.validate_string("12345678", "DNI").is_ok());
        assert_eq!(
            rules.validate_string("1234567", "DNI"),
            Err("DNI debe tener 8 caracteres".to_string())
        );
        assert!(rules.validate_string("1234567a", "DNI").is_err());
    }

    #[test]
    fn test_custom_message_wins() {
        let rules = ValidationRules::required()
            .exact_length(8)
            .message("El DNI debe tener 8 caracteres");
        assert_eq!(
            rules.validate_string("123", "DNI"),
            Err("El DNI debe tener 8 caracteres".to_string())
        );
    }

    #[test]
    fn test_email() {
        let rules = ValidationRules::required().email();
        assert!(rules.validate_string("ana@tienda.pe", "Correo").is_ok());
        assert!(rules.validate_string("ana@tienda", "Correo").is_err());
        assert!(rules.validate_string("@tienda.pe", "Correo").is_err());
        assert!(rules.validate_string("ana @tienda.pe", "Correo").is_err());
        assert!(rules.validate_string("ana@@tienda.pe", "Correo").is_err());
    }

    #[test]
    fn test_number_bounds() {
        let rules = ValidationRules::none().range(1.0, 100.0);
        assert!(rules.validate_number(1.0, "Límite").is_ok());
        assert!(rules.validate_number(0.0, "Límite").is_err());
        assert!(rules.validate_number(101.0, "Límite").is_err());
        assert!(rules.validate_number(f64::NAN, "Límite").is_err());
    }

    #[test]
    fn test_field_errors_keep_first_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("dni", "primero");
        errors.add("dni", "segundo");
        errors.add("email", "otro");
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("dni"), Some("primero"));
        assert!(errors.into_result().is_err());
    }
}
