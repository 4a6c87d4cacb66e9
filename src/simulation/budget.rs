//! City budget bookkeeping
//!
//! Category totals are snapshots: the monthly tick walks the grid, builds a
//! fresh ledger, and records it here wholesale. Nothing accumulates between
//! months except the running balance.

use serde::{Deserialize, Serialize};

/// One month's category accumulation, produced by the grid walk.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonthlyLedger {
    pub residential_tax: i64,
    pub commercial_tax: i64,
    pub industrial_tax: i64,
    pub transportation_cost: i64,
    pub health_cost: i64,
    pub education_cost: i64,
    pub safety_cost: i64,
    pub utilities_cost: i64,
}

/// Category-separated budget rollup over all tiles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CityBudget {
    balance: i64,
    monthly_income: i64,
    monthly_expenses: i64,

    residential_tax: i64,
    commercial_tax: i64,
    industrial_tax: i64,

    transportation_cost: i64,
    health_cost: i64,
    education_cost: i64,
    safety_cost: i64,
    utilities_cost: i64,
}

impl CityBudget {
    pub fn new(starting_balance: i64) -> Self {
        Self {
            balance: starting_balance,
            monthly_income: 0,
            monthly_expenses: 0,
            residential_tax: 0,
            commercial_tax: 0,
            industrial_tax: 0,
            transportation_cost: 0,
            health_cost: 0,
            education_cost: 0,
            safety_cost: 0,
            utilities_cost: 0,
        }
    }

    /// Replace the category snapshots with this month's ledger and derive
    /// the budget-level income and expense sums from it.
    pub fn record_month(&mut self, ledger: &MonthlyLedger) {
        self.residential_tax = ledger.residential_tax;
        self.commercial_tax = ledger.commercial_tax;
        self.industrial_tax = ledger.industrial_tax;
        self.transportation_cost = ledger.transportation_cost;
        self.health_cost = ledger.health_cost;
        self.education_cost = ledger.education_cost;
        self.safety_cost = ledger.safety_cost;
        self.utilities_cost = ledger.utilities_cost;

        self.monthly_income =
            self.residential_tax + self.commercial_tax + self.industrial_tax;
        self.monthly_expenses = self.transportation_cost
            + self.health_cost
            + self.education_cost
            + self.safety_cost
            + self.utilities_cost;
    }

    /// Apply net income (positive or negative) to the running balance.
    pub fn add_income(&mut self, amount: i64) {
        self.balance += amount;
    }

    pub fn balance(&self) -> i64 {
        self.balance
    }

    pub fn monthly_income(&self) -> i64 {
        self.monthly_income
    }

    pub fn monthly_expenses(&self) -> i64 {
        self.monthly_expenses
    }

    pub fn net_income(&self) -> i64 {
        self.monthly_income - self.monthly_expenses
    }

    pub fn residential_tax(&self) -> i64 {
        self.residential_tax
    }

    pub fn commercial_tax(&self) -> i64 {
        self.commercial_tax
    }

    pub fn industrial_tax(&self) -> i64 {
        self.industrial_tax
    }

    pub fn transportation_cost(&self) -> i64 {
        self.transportation_cost
    }

    pub fn health_cost(&self) -> i64 {
        self.health_cost
    }

    pub fn education_cost(&self) -> i64 {
        self.education_cost
    }

    pub fn safety_cost(&self) -> i64 {
        self.safety_cost
    }

    pub fn utilities_cost(&self) -> i64 {
        self.utilities_cost
    }
}
