use contracts::domain::a001_product::{Product, ProductForm};
use contracts::shared::validation::{FieldErrors, Validate};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::File;

use crate::domain::a001_product::api;
use crate::shared::notify::Notifier;

/// Decimal typed by the user; a comma is accepted as separator
pub fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

pub fn parse_limit(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

/// Form state of the product edit page.
/// Numeric fields are held as typed text and parsed on submit.
#[derive(Clone, Copy)]
pub struct ProductEditViewModel {
    pub original: RwSignal<Option<Product>>,
    pub name: RwSignal<String>,
    pub description: RwSignal<String>,
    pub category: RwSignal<String>,
    pub enabled: RwSignal<bool>,
    pub price: RwSignal<String>,
    pub order_limit: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
}

impl ProductEditViewModel {
    pub fn new() -> Self {
        Self {
            original: RwSignal::new(None),
            name: RwSignal::new(String::new()),
            description: RwSignal::new(String::new()),
            category: RwSignal::new(String::new()),
            enabled: RwSignal::new(false),
            price: RwSignal::new(String::new()),
            order_limit: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::new()),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
        }
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }

    pub fn is_busy(&self) -> bool {
        self.loading.get() || self.saving.get()
    }

    fn fill(&self, product: &Product) {
        let form = ProductForm::from(product);
        self.name.set(form.name);
        self.description.set(form.description);
        self.category.set(form.category);
        self.enabled.set(form.enabled);
        self.price.set(form.price.to_string());
        self.order_limit.set(form.order_limit.to_string());
        self.errors.set(FieldErrors::new());
    }

    pub fn load(&self, id: String, notifier: Notifier) {
        let vm = *self;
        vm.loading.set(true);
        spawn_local(async move {
            match api::fetch_product(&id).await {
                Ok(product) => {
                    vm.fill(&product);
                    vm.original.set(Some(product));
                }
                Err(e) => notifier.error(e.to_string()),
            }
            vm.loading.set(false);
        });
    }

    /// Current inputs as a form; unparsable numbers are reported per field
    pub fn read_form(&self) -> Result<ProductForm, FieldErrors> {
        let mut errors = FieldErrors::new();
        let price = parse_price(&self.price.get_untracked()).unwrap_or_else(|| {
            errors.add("price", "Ingresa un precio válido");
            0.0
        });
        let order_limit = parse_limit(&self.order_limit.get_untracked()).unwrap_or_else(|| {
            errors.add("order_limit", "Ingresa un número entero");
            0
        });
        let form = ProductForm {
            name: self.name.get_untracked(),
            description: self.description.get_untracked(),
            price,
            category: self.category.get_untracked(),
            enabled: self.enabled.get_untracked(),
            order_limit,
        };
        for e in form.validate().iter() {
            errors.add(&e.field, e.message.clone());
        }
        if errors.is_empty() {
            Ok(form)
        } else {
            Err(errors)
        }
    }

    /// Validates, skips unchanged forms and sends the update
    pub fn save_command(
        &self,
        image: Option<File>,
        notifier: Notifier,
        on_saved: impl FnOnce() + 'static,
    ) {
        let Some(original) = self.original.get_untracked() else {
            notifier.error("Error al obtener el producto");
            return;
        };
        let form = match self.read_form() {
            Ok(form) => form,
            Err(errors) => {
                self.errors.set(errors);
                return;
            }
        };
        self.errors.set(FieldErrors::new());
        if image.is_none() && form.is_unchanged(&original) {
            notifier.warning("No se está actualizando nada en los datos del producto");
            return;
        }

        let saving = self.saving;
        saving.set(true);
        spawn_local(async move {
            match api::update_product(original.id, &form, image).await {
                Ok(()) => {
                    notifier.success("Producto actualizado correctamente");
                    on_saved();
                }
                Err(e) => notifier.error(e.to_string()),
            }
            saving.set(false);
        });
    }
}

impl Default for ProductEditViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.50"), Some(12.5));
        assert_eq!(parse_price(" 7,9 "), Some(7.9));
        assert_eq!(parse_price("abc"), None);
        assert_eq!(parse_price("inf"), None);
    }

    #[test]
    fn test_parse_limit() {
        assert_eq!(parse_limit("10"), Some(10));
        assert_eq!(parse_limit("-1"), None);
        assert_eq!(parse_limit("1.5"), None);
    }
}
