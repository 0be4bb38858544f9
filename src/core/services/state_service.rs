//! Pure reducers over the persisted application snapshot.
//!
//! Each reducer consumes a state and returns the next one; persistence is a
//! single save-after-reduce step owned by the caller, so a failed write can
//! never leave a half-mutated snapshot behind.

use uuid::Uuid;

use crate::core::services::{GoalService, Signal, StatsService};
use crate::domain::{AppState, Budget, Dream, Expense, FinancialSnapshot, IncomeEntry, Period, Reserve};

pub struct StateService;

impl StateService {
    pub fn save_budget(mut state: AppState, budget: Budget) -> AppState {
        state.budget = budget;
        state
    }

    pub fn complete_onboarding(mut state: AppState, period: Period) -> AppState {
        state.user.has_completed_onboarding = true;
        state.user.budget_period = period;
        state
    }

    pub fn add_expense(mut state: AppState, expense: Expense) -> AppState {
        state.expenses.push(expense);
        state
    }

    pub fn delete_expense(mut state: AppState, id: Uuid) -> AppState {
        state.expenses.retain(|expense| expense.id != id);
        state
    }

    pub fn add_income_entry(mut state: AppState, entry: IncomeEntry) -> AppState {
        state.income_entries.push(entry);
        state
    }

    pub fn delete_income_entry(mut state: AppState, id: Uuid) -> AppState {
        state.income_entries.retain(|entry| entry.id != id);
        state
    }

    pub fn add_reserve(mut state: AppState, reserve: Reserve) -> AppState {
        state.reserves.push(reserve);
        state
    }

    pub fn delete_reserve(mut state: AppState, id: Uuid) -> AppState {
        state.reserves.retain(|reserve| reserve.id != id);
        state
    }

    pub fn save_dreams(mut state: AppState, dreams: Vec<Dream>) -> AppState {
        state.dreams = dreams;
        state
    }

    pub fn set_global_goal(mut state: AppState, goal: Option<f64>) -> AppState {
        state.global_savings_goal = goal;
        state
    }

    /// Stores freshly derived savings, keeping the replaced value for trend
    /// comparison.
    pub fn record_savings(mut state: AppState, savings: f64) -> AppState {
        state.previous_savings = state.savings;
        state.savings = savings;
        state
    }

    /// Recomputes the snapshot and, when displayed savings changed, records
    /// the new value, emits signals against the replaced one, and applies
    /// the one-time achieved flip for dreams whose target was just reached.
    /// Unchanged savings return the state untouched with no signals.
    pub fn refresh(state: AppState) -> (AppState, FinancialSnapshot, Vec<Signal>) {
        let snapshot = StatsService::financial_stats(
            &state.budget,
            &state.expenses,
            &state.income_entries,
            &state.reserves,
        );
        if snapshot.savings == state.savings {
            return (state, snapshot, Vec::new());
        }
        let signals = GoalService::evaluate_signals(state.savings, snapshot.savings, &state.dreams);
        let mut state = Self::record_savings(state, snapshot.savings);
        for signal in &signals {
            if let Signal::DreamAchieved { dream_id, .. } = signal {
                if let Some(dream) = state.dreams.iter_mut().find(|dream| dream.id == *dream_id) {
                    dream.achieved = true;
                }
            }
        }
        (state, snapshot, signals)
    }
}
