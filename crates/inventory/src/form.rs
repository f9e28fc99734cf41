//! Raw form input → validated records.
//!
//! Screens hand over field text exactly as typed. Checks run in a fixed
//! order: numeric fields parse first, then the name, then min, then the
//! inventory level, then the company name of outsourced parts.

use stockroom_core::{DomainError, DomainResult, PartId, ProductId};

use crate::levels::StockLevels;
use crate::part::{Part, PartSource};
use crate::price::Price;
use crate::product::Product;

/// Text of the variant-specific part field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceInput {
    InHouse { machine_id: String },
    Outsourced { company_name: String },
}

/// Part form fields as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
    pub source: SourceInput,
}

/// Product form fields as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
    pub stock: String,
    pub min: String,
    pub max: String,
}

/// Validated fields shared by parts and products.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFields {
    pub name: String,
    pub price: Price,
    pub levels: StockLevels,
}

/// Validated part form, waiting for an id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPart {
    pub fields: RecordFields,
    pub source: PartSource,
}

impl ValidPart {
    pub fn into_part(self, id: PartId) -> Part {
        Part::new(id, self.fields.name, self.fields.price, self.fields.levels, self.source)
    }
}

impl RecordFields {
    pub fn into_product(self, id: ProductId) -> Product {
        Product::new(id, self.name, self.price, self.levels)
    }

    /// Overwrite a product's scalar fields; associations are left alone.
    pub fn apply_to(self, product: &mut Product) {
        product.set_name(self.name);
        product.set_price(self.price);
        product.set_levels(self.levels);
    }
}

impl PartForm {
    pub fn validate(&self) -> DomainResult<ValidPart> {
        let fields = parse_fields(&self.name, &self.price, &self.stock, &self.min, &self.max)?;
        let source = match &self.source {
            SourceInput::InHouse { machine_id } => {
                PartSource::in_house(machine_id.trim().parse::<i64>().unwrap_or(0))
            }
            SourceInput::Outsourced { company_name } => {
                let company_name = company_name.trim();
                if company_name.is_empty() {
                    return Err(DomainError::empty_name("company name"));
                }
                PartSource::outsourced(company_name)
            }
        };
        Ok(ValidPart { fields, source })
    }

    /// Prefill a form from an existing part (the modify screen).
    pub fn from_part(part: &Part) -> Self {
        let source = match part.source() {
            PartSource::InHouse { machine_id } => SourceInput::InHouse {
                machine_id: machine_id.to_string(),
            },
            PartSource::Outsourced { company_name } => SourceInput::Outsourced {
                company_name: company_name.clone(),
            },
        };
        Self {
            name: part.name().to_string(),
            price: part.price().to_string(),
            stock: part.stock().to_string(),
            min: part.min().to_string(),
            max: part.max().to_string(),
            source,
        }
    }
}

impl ProductForm {
    pub fn validate(&self) -> DomainResult<RecordFields> {
        parse_fields(&self.name, &self.price, &self.stock, &self.min, &self.max)
    }

    pub fn from_product(product: &Product) -> Self {
        Self {
            name: product.name().to_string(),
            price: product.price().to_string(),
            stock: product.stock().to_string(),
            min: product.min().to_string(),
            max: product.max().to_string(),
        }
    }
}

fn parse_fields(name: &str, price: &str, stock: &str, min: &str, max: &str) -> DomainResult<RecordFields> {
    let price: Price = price.parse()?;
    let stock = parse_int("inventory", stock)?;
    let min = parse_int("min", min)?;
    let max = parse_int("max", max)?;

    let name = name.trim();
    if name.is_empty() {
        return Err(DomainError::empty_name("name"));
    }

    let levels = StockLevels::new(stock, min, max);
    levels.validate()?;

    Ok(RecordFields {
        name: name.to_string(),
        price,
        levels,
    })
}

fn parse_int(field: &'static str, raw: &str) -> DomainResult<i64> {
    raw.trim()
        .parse()
        .map_err(|_| DomainError::invalid_numeric(field, raw))
}
