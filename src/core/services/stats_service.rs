//! Aggregation over raw records into the dashboard snapshot.

use std::collections::HashMap;

use crate::domain::{Budget, BudgetCategory, Expense, FinancialSnapshot, IncomeEntry, Reserve};

/// Derives income, expense, balance, savings, and reserve totals from the
/// recorded collections. Every function is total over well-typed input and
/// empty collections sum to zero, so the dashboard can always render.
pub struct StatsService;

impl StatsService {
    /// Sums positive category amounts plus every ad-hoc income entry.
    /// Negative budget lines are fixed outflows, not income.
    pub fn total_income(categories: &[BudgetCategory], income_entries: &[IncomeEntry]) -> f64 {
        let from_budget: f64 = categories
            .iter()
            .filter(|category| category.amount > 0.0)
            .map(|category| category.amount)
            .sum();
        let from_entries: f64 = income_entries.iter().map(|entry| entry.amount).sum();
        from_budget + from_entries
    }

    pub fn total_expenses(expenses: &[Expense]) -> f64 {
        expenses.iter().map(|expense| expense.amount).sum()
    }

    pub fn balance(total_income: f64, total_expenses: f64) -> f64 {
        total_income - total_expenses
    }

    /// Floors a negative balance at zero; debt never shows as negative
    /// savings.
    pub fn savings(balance: f64) -> f64 {
        balance.max(0.0)
    }

    pub fn total_reserves(reserves: &[Reserve]) -> f64 {
        reserves.iter().map(|reserve| reserve.amount).sum()
    }

    /// Composes the snapshot. Reserves are added on top of the floored
    /// balance, so they contribute to displayed savings even when the
    /// budget balance is negative.
    pub fn financial_stats(
        budget: &Budget,
        expenses: &[Expense],
        income_entries: &[IncomeEntry],
        reserves: &[Reserve],
    ) -> FinancialSnapshot {
        let total_income = Self::total_income(&budget.categories, income_entries);
        let total_expenses = Self::total_expenses(expenses);
        let balance = Self::balance(total_income, total_expenses);
        let total_reserves = Self::total_reserves(reserves);
        FinancialSnapshot {
            total_income,
            total_expenses,
            balance,
            savings: Self::savings(balance) + total_reserves,
            total_reserves,
        }
    }

    /// Groups expense totals by category name.
    pub fn expenses_by_category(expenses: &[Expense]) -> HashMap<String, f64> {
        let mut totals = HashMap::new();
        for expense in expenses {
            *totals.entry(expense.category.clone()).or_insert(0.0) += expense.amount;
        }
        totals
    }

    /// Spent share of a category budget in percent. Zero when the budget
    /// amount is not positive.
    pub fn category_progress(expenses: &[Expense], category: &str, budget_amount: f64) -> f64 {
        if budget_amount <= 0.0 {
            return 0.0;
        }
        (Self::category_total(expenses, category) / budget_amount) * 100.0
    }

    pub fn is_category_over_budget(
        expenses: &[Expense],
        category: &str,
        budget_amount: f64,
    ) -> bool {
        Self::category_progress(expenses, category, budget_amount) > 100.0
    }

    /// Remaining room in a category budget; negative once overspent.
    pub fn remaining_budget(expenses: &[Expense], category: &str, budget_amount: f64) -> f64 {
        budget_amount - Self::category_total(expenses, category)
    }

    fn category_total(expenses: &[Expense], category: &str) -> f64 {
        expenses
            .iter()
            .filter(|expense| expense.category == category)
            .map(|expense| expense.amount)
            .sum()
    }
}
