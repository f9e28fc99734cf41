use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, PartId};

use crate::levels::StockLevels;
use crate::price::Price;

/// Where a part comes from. Fixed when the part is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PartSource {
    /// Manufactured on one of our machines.
    InHouse { machine_id: u32 },
    /// Supplied by an outside company.
    Outsourced { company_name: String },
}

impl PartSource {
    /// In-house source; negative or out-of-range machine ids coerce to 0.
    pub fn in_house(machine_id: i64) -> Self {
        Self::InHouse {
            machine_id: u32::try_from(machine_id).unwrap_or(0),
        }
    }

    pub fn outsourced(company_name: impl Into<String>) -> Self {
        Self::Outsourced {
            company_name: company_name.into(),
        }
    }

    pub fn is_in_house(&self) -> bool {
        matches!(self, Self::InHouse { .. })
    }

    /// Label for the variant-specific field, as shown on part forms.
    pub fn field_label(&self) -> &'static str {
        match self {
            Self::InHouse { .. } => "Machine ID",
            Self::Outsourced { .. } => "Company Name",
        }
    }
}

/// A stocked component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    id: PartId,
    name: String,
    price: Price,
    #[serde(flatten)]
    levels: StockLevels,
    source: PartSource,
}

impl Part {
    pub fn new(
        id: PartId,
        name: impl Into<String>,
        price: Price,
        levels: StockLevels,
        source: PartSource,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            levels,
            source,
        }
    }

    pub fn id(&self) -> PartId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn levels(&self) -> StockLevels {
        self.levels
    }

    pub fn stock(&self) -> i64 {
        self.levels.stock
    }

    pub fn min(&self) -> i64 {
        self.levels.min
    }

    pub fn max(&self) -> i64 {
        self.levels.max
    }

    pub fn source(&self) -> &PartSource {
        &self.source
    }

    pub fn machine_id(&self) -> Option<u32> {
        match self.source {
            PartSource::InHouse { machine_id } => Some(machine_id),
            PartSource::Outsourced { .. } => None,
        }
    }

    pub fn company_name(&self) -> Option<&str> {
        match &self.source {
            PartSource::Outsourced { company_name } => Some(company_name),
            PartSource::InHouse { .. } => None,
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_price(&mut self, price: Price) {
        self.price = price;
    }

    pub fn set_levels(&mut self, levels: StockLevels) {
        self.levels = levels;
    }

    pub fn set_stock(&mut self, stock: i64) {
        self.levels.stock = stock;
    }

    pub fn set_min(&mut self, min: i64) {
        self.levels.min = min;
    }

    pub fn set_max(&mut self, max: i64) {
        self.levels.max = max;
    }

    /// Update the machine id of an in-house part (negative input coerces to 0).
    ///
    /// Returns `false` and leaves the part untouched when it is outsourced.
    pub fn set_machine_id(&mut self, machine_id: i64) -> bool {
        match &mut self.source {
            PartSource::InHouse { machine_id: current } => {
                *current = u32::try_from(machine_id).unwrap_or(0);
                true
            }
            PartSource::Outsourced { .. } => false,
        }
    }

    /// Update the supplier of an outsourced part.
    ///
    /// Returns `false` and leaves the part untouched when it is made in-house.
    pub fn set_company_name(&mut self, company_name: impl Into<String>) -> bool {
        match &mut self.source {
            PartSource::Outsourced { company_name: current } => {
                *current = company_name.into();
                true
            }
            PartSource::InHouse { .. } => false,
        }
    }
}

impl Entity for Part {
    type Id = PartId;

    fn id(&self) -> PartId {
        self.id
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl core::fmt::Display for Part {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "Part ID: {}\nPart Name: {}\nInventory Level: {}\nPrice: {}",
            self.id, self.name, self.levels.stock, self.price
        )
    }
}
