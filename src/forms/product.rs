// src/forms/product.rs
use std::collections::BTreeMap;
use std::str::FromStr;

use rust_decimal::Decimal;

use crate::models::product::{NewProduct, Product};

pub const NAME_MAX_CHARS: usize = 200;
pub const PRICE_MAX_DIGITS: u32 = 10;
pub const PRICE_DECIMAL_PLACES: u32 = 2;

const REQUIRED: &str = "This field is required.";
const NULL_CHARACTERS: &str = "Null characters are not allowed.";

/// Raw create/edit submission. Absent fields stay empty so that they surface
/// as field errors instead of a rejected request.
#[derive(Debug, Clone, Default)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub quantity: String,
    pub unit_price: String,
}

/// Field name to error messages, in field order of the map.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
}

impl FormErrors {
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn get(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl ProductForm {
    /// Initial values for the create form.
    pub fn empty() -> Self {
        Self {
            quantity: "0".to_string(),
            ..Self::default()
        }
    }

    /// Builds a form from decoded `key=value` pairs. Unknown keys are
    /// ignored and a repeated key keeps its last value.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "name" => form.name = value,
                "description" => form.description = value,
                "quantity" => form.quantity = value,
                "unit_price" => form.unit_price = value,
                _ => {}
            }
        }
        form
    }

    pub fn validate(&self) -> Result<NewProduct, FormErrors> {
        let mut errors = FormErrors::default();

        let name = self.name.trim();
        if name.is_empty() {
            errors.add("name", REQUIRED);
        } else {
            let len = name.chars().count();
            if len > NAME_MAX_CHARS {
                errors.add(
                    "name",
                    format!("Ensure this value has at most {NAME_MAX_CHARS} characters (it has {len})."),
                );
            }
        }
        // Postgres text columns cannot hold NUL.
        if name.contains('\0') {
            errors.add("name", NULL_CHARACTERS);
        }
        let description = self.description.trim();
        if description.contains('\0') {
            errors.add("description", NULL_CHARACTERS);
        }

        let quantity = parse_quantity(&self.quantity).map_err(|msg| errors.add("quantity", msg));
        let unit_price = parse_unit_price(&self.unit_price).map_err(|msg| errors.add("unit_price", msg));

        match (quantity, unit_price) {
            (Ok(quantity), Ok(unit_price)) if errors.is_empty() => Ok(NewProduct {
                name: name.to_string(),
                description: description.to_string(),
                quantity,
                unit_price,
            }),
            _ => Err(errors),
        }
    }
}

impl From<&Product> for ProductForm {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            quantity: product.quantity.to_string(),
            unit_price: product.unit_price.to_string(),
        }
    }
}

fn parse_quantity(raw: &str) -> Result<i32, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(REQUIRED.to_string());
    }

    let digits = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err("Enter a whole number.".to_string());
    }

    let below_min = || "Ensure this value is greater than or equal to 0.".to_string();
    let above_max = || format!("Ensure this value is less than or equal to {}.", i32::MAX);
    match raw.parse::<i64>() {
        Ok(v) if v < 0 => Err(below_min()),
        Ok(v) => i32::try_from(v).map_err(|_| above_max()),
        // Only overflow is left once the syntax is known to be valid.
        Err(_) if raw.starts_with('-') => Err(below_min()),
        Err(_) => Err(above_max()),
    }
}

fn parse_unit_price(raw: &str) -> Result<Decimal, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(REQUIRED.to_string());
    }

    let unsigned = raw.strip_prefix(['+', '-']).unwrap_or(raw);
    let (whole, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if whole.len() + fraction.len() == 0 || !is_digits(whole) || !is_digits(fraction) {
        return Err("Enter a number.".to_string());
    }

    // Count on the submitted text: Decimal parsing rounds past 28 digits.
    let whole = whole.trim_start_matches('0');
    let fraction = fraction.trim_end_matches('0');
    let max_digits = PRICE_MAX_DIGITS as usize;
    let max_places = PRICE_DECIMAL_PLACES as usize;
    let max_whole = max_digits - max_places;

    if whole.len() + fraction.len() > max_digits {
        return Err(format!(
            "Ensure that there are no more than {max_digits} digits in total."
        ));
    }
    if fraction.len() > max_places {
        return Err(format!(
            "Ensure that there are no more than {max_places} decimal places."
        ));
    }
    if whole.len() > max_whole {
        return Err(format!(
            "Ensure that there are no more than {max_whole} digits before the decimal point."
        ));
    }

    let sign = if raw.starts_with('-') { "-" } else { "" };
    let whole = if whole.is_empty() { "0" } else { whole };
    let canonical = if fraction.is_empty() {
        format!("{sign}{whole}")
    } else {
        format!("{sign}{whole}.{fraction}")
    };
    let mut value = Decimal::from_str(&canonical).map_err(|_| "Enter a number.".to_string())?;
    value.rescale(PRICE_DECIMAL_PLACES);
    Ok(value)
}
