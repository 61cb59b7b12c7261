//! Dashboard and report formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Category, Goal};
use crate::services::{CategorySlice, DailyFlow, DashboardMetrics, UpcomingBill};

/// Format the dashboard headline numbers
pub fn format_dashboard(metrics: &DashboardMetrics, year: i32, month: u32) -> String {
    let mut output = String::new();

    output.push_str(&format!("Dashboard {:04}-{:02}\n", year, month));
    output.push_str(&format!("Total balance:  {}\n", metrics.total_balance));
    output.push_str(&format!("  PF:           {}\n", metrics.pf_balance));
    output.push_str(&format!("  PJ:           {}\n", metrics.pj_balance));
    output.push_str(&format!("Month income:   {}\n", metrics.month_income));
    output.push_str(&format!("Month expenses: {}\n", metrics.month_expense));
    output.push_str(&format!(
        "Month net:      {}\n",
        metrics.month_income - metrics.month_expense
    ));

    output
}

/// Format the daily cash flow for a month, skipping empty days
pub fn format_daily_flow(flows: &[DailyFlow]) -> String {
    let mut output = String::new();
    output.push_str("Date        Income        Expense\n");

    let mut any = false;
    for flow in flows {
        if flow.income.is_zero() && flow.expense.is_zero() {
            continue;
        }
        any = true;
        output.push_str(&format!(
            "{}  {:>12}  {:>12}\n",
            flow.date.format("%Y-%m-%d"),
            flow.income.to_string(),
            flow.expense.to_string()
        ));
    }
    if !any {
        output.push_str("(no movement)\n");
    }

    output
}

/// Format the expense composition slices
pub fn format_composition(slices: &[CategorySlice]) -> String {
    if slices.is_empty() {
        return "No expenses in this period.\n".to_string();
    }

    let mut output = String::new();
    for slice in slices {
        output.push_str(&format!("{:24} {:>12}\n", slice.category, slice.total.to_string()));
    }
    output
}

/// Format upcoming bills
pub fn format_upcoming_bills(bills: &[UpcomingBill]) -> String {
    if bills.is_empty() {
        return "Nothing due in the next 30 days.\n".to_string();
    }

    let mut output = String::new();
    for bill in bills {
        output.push_str(&format!(
            "{}  {:>12}  {} ({})\n",
            bill.date.format("%Y-%m-%d"),
            bill.amount.to_string(),
            bill.description,
            bill.context
        ));
    }
    output
}

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Ctx")]
    context: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Target")]
    target: String,
    #[tabled(rename = "Progress")]
    progress: String,
    #[tabled(rename = "Deadline")]
    deadline: String,
}

/// Format savings goals with progress
pub fn format_goal_table(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "No goals found.\n".to_string();
    }

    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|g| GoalRow {
            name: g.name.clone(),
            context: g.context.to_string(),
            saved: g.current_amount.to_string(),
            target: g.target_amount.to_string(),
            progress: format!("{:.0}%", g.progress() * 100.0),
            deadline: g
                .deadline
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Scope")]
    scope: String,
}

/// Format the category list
pub fn format_category_table(categories: &[Category]) -> String {
    if categories.is_empty() {
        return "No categories found.\n".to_string();
    }

    let rows: Vec<CategoryRow> = categories
        .iter()
        .map(|c| CategoryRow {
            name: c.name.clone(),
            kind: c.kind.to_string(),
            scope: c.scope.to_string(),
        })
        .collect();
    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{}\n", table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AccountContext, Money};

    #[test]
    fn test_dashboard_shows_net() {
        let metrics = DashboardMetrics {
            total_balance: Money::from_cents(250000),
            pf_balance: Money::from_cents(50000),
            pj_balance: Money::from_cents(200000),
            month_income: Money::from_cents(800000),
            month_expense: Money::from_cents(300000),
        };
        let output = format_dashboard(&metrics, 2025, 6);
        assert!(output.contains("Dashboard 2025-06"));
        assert!(output.contains("R$ 2500.00"));
        assert!(output.contains("Month net:      R$ 5000.00"));
    }

    #[test]
    fn test_goal_table_progress() {
        let mut goal = Goal::new("Trip", Money::from_cents(100000), AccountContext::Pf);
        goal.apply_delta(Money::from_cents(25000));
        let table = format_goal_table(&[goal]);
        assert!(table.contains("Trip"));
        assert!(table.contains("25%"));
    }

    #[test]
    fn test_daily_flow_skips_quiet_days() {
        let flows = vec![
            DailyFlow {
                date: chrono::NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
                income: Money::zero(),
                expense: Money::zero(),
            },
            DailyFlow {
                date: chrono::NaiveDate::from_ymd_opt(2025, 6, 2).unwrap(),
                income: Money::from_cents(10000),
                expense: Money::zero(),
            },
        ];
        let output = format_daily_flow(&flows);
        assert!(!output.contains("2025-06-01"));
        assert!(output.contains("2025-06-02"));
    }
}
