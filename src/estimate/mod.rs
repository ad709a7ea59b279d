//! Job cost estimation.
//!
//! The pipeline is fixed: materials, then labor, then overhead on the
//! subtotal, then profit on the overhead-inclusive subtotal. Reordering any
//! step changes the financial result.

mod catalog;
mod engine;
mod loader;

pub use catalog::MaterialCatalog;
pub use engine::{grand_total, labor_cost, material_costs, overhead_and_profit};
pub use loader::{load_price_list, parse_price_list};

use rust_decimal::Decimal;

/// One material on a job: a quantity and, when the catalog knows the
/// material, a unit price.
///
/// An unpriced line (no catalog match) stays visible in the breakdown but
/// contributes nothing to any total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialLine {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Option<Decimal>,
}

impl MaterialLine {
    /// A line with a known unit price.
    pub fn priced(name: impl Into<String>, quantity: Decimal, unit_price: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price: Some(unit_price),
        }
    }

    /// A line with no catalog price.
    pub fn unpriced(name: impl Into<String>, quantity: Decimal) -> Self {
        Self {
            name: name.into(),
            quantity,
            unit_price: None,
        }
    }

    /// `quantity × unit_price`, when priced.
    pub fn line_cost(&self) -> Option<Decimal> {
        self.unit_price.map(|price| self.quantity * price)
    }
}

/// Inputs for one estimate. Percentages are whole-number percent
/// (10 means 10%).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobEstimate {
    pub materials: Vec<MaterialLine>,
    pub labor_hours: Decimal,
    pub labor_rate: Decimal,
    pub overhead_pct: Decimal,
    pub profit_pct: Decimal,
}

impl JobEstimate {
    /// An estimate with no materials and everything zeroed.
    pub fn new() -> Self {
        Self {
            materials: Vec::new(),
            labor_hours: Decimal::ZERO,
            labor_rate: Decimal::ZERO,
            overhead_pct: Decimal::ZERO,
            profit_pct: Decimal::ZERO,
        }
    }

    pub fn with_materials(mut self, materials: Vec<MaterialLine>) -> Self {
        self.materials = materials;
        self
    }

    pub fn with_labor(mut self, hours: Decimal, rate: Decimal) -> Self {
        self.labor_hours = hours;
        self.labor_rate = rate;
        self
    }

    pub fn with_overhead_pct(mut self, pct: Decimal) -> Self {
        self.overhead_pct = pct;
        self
    }

    pub fn with_profit_pct(mut self, pct: Decimal) -> Self {
        self.profit_pct = pct;
        self
    }

    /// Run the cost pipeline over these inputs.
    pub fn compute(&self) -> EstimateResult {
        engine::compute(self)
    }
}

impl Default for JobEstimate {
    fn default() -> Self {
        Self::new()
    }
}

/// Computed cost for one material line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialCost {
    pub name: String,
    pub quantity: Decimal,
    pub unit_price: Option<Decimal>,
    /// `None` when the line is unpriced.
    pub cost: Option<Decimal>,
}

impl MaterialCost {
    /// Whether this line has no catalog price.
    pub fn is_unpriced(&self) -> bool {
        self.cost.is_none()
    }
}

/// The cost breakdown and total for one estimate. Never mutated after
/// creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstimateResult {
    pub material_total: Decimal,
    pub labor_cost: Decimal,
    pub overhead_amount: Decimal,
    pub profit_amount: Decimal,
    pub grand_total: Decimal,
    /// Per-material costs, in input order, unpriced lines included.
    pub breakdown: Vec<MaterialCost>,
}

impl EstimateResult {
    /// Names of materials that had no catalog price.
    pub fn unpriced_names(&self) -> Vec<&str> {
        self.breakdown
            .iter()
            .filter(|line| line.is_unpriced())
            .map(|line| line.name.as_str())
            .collect()
    }
}
