use serde::{Deserialize, Serialize};

use crate::shared::serde_helpers::flag_string;
use crate::shared::validation::{FieldErrors, Validate, ValidationRules};

pub const ROLE_ADMIN: &str = "1";
pub const ROLE_CLIENT: &str = "0";
pub const STATUS_ACTIVE: &str = "1";
pub const STATUS_INACTIVE: &str = "0";

const FLAG_VALUES: &[&str] = &["0", "1"];

const DNI: ValidationRules = ValidationRules::required()
    .exact_length(8)
    .digits()
    .message("El DNI debe tener 8 dígitos");
const PERSON_NAME: ValidationRules = ValidationRules::required().min_length(2).max_length(100);
const EMAIL: ValidationRules = ValidationRules::required().email();
const PHONE: ValidationRules = ValidationRules::required()
    .exact_length(9)
    .digits()
    .message("El celular debe tener 9 dígitos");
const FLAG: ValidationRules = ValidationRules::required().one_of(FLAG_VALUES);
const PASSWORD: ValidationRules = ValidationRules::required()
    .min_length(8)
    .message("La contraseña debe tener mínimo 8 caracteres");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub dni: String,
    #[serde(rename = "nombre", default)]
    pub first_name: String,
    #[serde(rename = "apellidos", default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(rename = "celular", default)]
    pub phone: String,
    #[serde(rename = "rol", deserialize_with = "flag_string", default)]
    pub role: String,
    #[serde(rename = "estado", deserialize_with = "flag_string", default)]
    pub status: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }

    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    pub fn is_active(&self) -> bool {
        self.status == STATUS_ACTIVE
    }
}

/// Body of the create user request; field names follow the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserForm {
    pub dni: String,
    pub name: String,
    pub last_name: String,
    pub email: String,
    pub number: String,
    pub role: String,
    pub status: String,
    pub password: String,
    pub confirm_password: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            dni: String::new(),
            name: String::new(),
            last_name: String::new(),
            email: String::new(),
            number: String::new(),
            role: ROLE_ADMIN.to_string(),
            status: STATUS_ACTIVE.to_string(),
            password: String::new(),
            confirm_password: String::new(),
        }
    }
}

impl UserForm {
    /// Fills identity fields from a confirmed DNI lookup
    pub fn apply_dni_record(&mut self, record: &DniRecord) {
        self.dni = record.document_number.clone();
        self.name = record.first_names.clone();
        self.last_name = record.last_names();
    }
}

impl Validate for UserForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check_string("dni", "DNI", DNI, &self.dni);
        errors.check_string("name", "Nombres", PERSON_NAME, &self.name);
        errors.check_string("lastName", "Apellidos", PERSON_NAME, &self.last_name);
        errors.check_string("email", "Correo", EMAIL, &self.email);
        errors.check_string("number", "Celular", PHONE, &self.number);
        errors.check_string("role", "Rol", FLAG, &self.role);
        errors.check_string("status", "Estado", FLAG, &self.status);
        check_password_pair(&mut errors, &self.password, &self.confirm_password);
        errors
    }
}

fn check_password_pair(errors: &mut FieldErrors, password: &str, confirmation: &str) {
    errors.check_string("password", "Contraseña", PASSWORD, password);
    if password != confirmation {
        errors.add("confirmPassword", "Las contraseñas no coinciden");
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordForm {
    pub password: String,
    pub confirm_password: String,
}

impl Validate for ChangePasswordForm {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        check_password_pair(&mut errors, &self.password, &self.confirm_password);
        errors
    }
}

/// DNI lookup form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DniQuery {
    pub dni: String,
}

impl Validate for DniQuery {
    fn validate(&self) -> FieldErrors {
        let mut errors = FieldErrors::new();
        errors.check_string(
            "dni",
            "DNI",
            ValidationRules::required()
                .exact_length(8)
                .message("El DNI debe tener 8 caracteres"),
            &self.dni,
        );
        errors
    }
}

/// Identity record returned by the national registry lookup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DniRecord {
    #[serde(rename = "numeroDocumento", default)]
    pub document_number: String,
    #[serde(rename = "nombres", default)]
    pub first_names: String,
    #[serde(rename = "apellidoPaterno", default)]
    pub paternal_surname: String,
    #[serde(rename = "apellidoMaterno", default)]
    pub maternal_surname: String,
}

impl DniRecord {
    /// The registry answers 200 with empty names for unknown numbers
    pub fn is_complete(&self) -> bool {
        !self.first_names.trim().is_empty()
            && !self.paternal_surname.trim().is_empty()
            && !self.maternal_surname.trim().is_empty()
    }

    pub fn last_names(&self) -> String {
        format!("{} {}", self.paternal_surname, self.maternal_surname)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> UserForm {
        UserForm {
            dni: "45678912".to_string(),
            name: "Rosa".to_string(),
            last_name: "Quispe Mamani".to_string(),
            email: "rosa@tienda.pe".to_string(),
            number: "987654321".to_string(),
            password: "secreta123".to_string(),
            confirm_password: "secreta123".to_string(),
            ..UserForm::default()
        }
    }

    #[test]
    fn test_valid_user_form() {
        assert!(valid_form().is_valid());
    }

    #[test]
    fn test_user_form_errors() {
        let form = UserForm {
            dni: "1234".to_string(),
            number: "98765".to_string(),
            password: "corta".to_string(),
            confirm_password: "otra".to_string(),
            ..valid_form()
        };
        let errors = form.validate();
        assert_eq!(errors.get("dni"), Some("El DNI debe tener 8 dígitos"));
        assert_eq!(errors.get("number"), Some("El celular debe tener 9 dígitos"));
        assert_eq!(
            errors.get("password"),
            Some("La contraseña debe tener mínimo 8 caracteres")
        );
        assert_eq!(errors.get("confirmPassword"), Some("Las contraseñas no coinciden"));
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn test_user_form_wire_names() {
        let json = serde_json::to_value(valid_form()).unwrap();
        assert_eq!(json["lastName"], "Quispe Mamani");
        assert_eq!(json["confirmPassword"], "secreta123");
        assert_eq!(json["role"], "1");
    }

    #[test]
    fn test_change_password_form() {
        let ok = ChangePasswordForm {
            password: "nuevaClave1".to_string(),
            confirm_password: "nuevaClave1".to_string(),
        };
        assert!(ok.is_valid());
        let mismatch = ChangePasswordForm {
            password: "nuevaClave1".to_string(),
            confirm_password: "nuevaClave2".to_string(),
        };
        assert_eq!(mismatch.validate().len(), 1);
    }

    #[test]
    fn test_dni_query_length() {
        assert!(DniQuery { dni: "12345678".to_string() }.is_valid());
        assert!(!DniQuery { dni: "123".to_string() }.is_valid());
    }

    #[test]
    fn test_dni_record_fills_form() {
        let json = r#"{"numeroDocumento":"45678912","nombres":"ROSA","apellidoPaterno":"QUISPE","apellidoMaterno":"MAMANI"}"#;
        let record: DniRecord = serde_json::from_str(json).unwrap();
        assert!(record.is_complete());

        let mut form = UserForm::default();
        form.apply_dni_record(&record);
        assert_eq!(form.dni, "45678912");
        assert_eq!(form.name, "ROSA");
        assert_eq!(form.last_name, "QUISPE MAMANI");
    }

    #[test]
    fn test_incomplete_dni_record() {
        let record: DniRecord = serde_json::from_str(r#"{"numeroDocumento":"1"}"#).unwrap();
        assert!(!record.is_complete());
    }

    #[test]
    fn test_user_flags_from_numbers() {
        let json = r#"{"id":1,"dni":"45678912","nombre":"Rosa","apellidos":"Quispe","email":"r@t.pe","celular":"987654321","rol":1,"estado":0}"#;
        let user: User = serde_json::from_str(json).unwrap();
        assert!(user.is_admin());
        assert!(!user.is_active());
        assert_eq!(user.full_name(), "Rosa Quispe");
    }
}
