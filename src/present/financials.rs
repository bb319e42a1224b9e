// src/present/financials.rs
use std::fmt;

use crate::api::models::{FilingValue, FinancialStatements};
use crate::transform::DisplayRecord;

/// Placeholder for any figure the filing data does not provide.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum StatementTab {
    #[default]
    Income,
    Balance,
    CashFlow,
    Equity,
}

impl StatementTab {
    pub const ALL: [StatementTab; 4] = [
        StatementTab::Income,
        StatementTab::Balance,
        StatementTab::CashFlow,
        StatementTab::Equity,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            StatementTab::Income => "Income Statement",
            StatementTab::Balance => "Balance Sheet",
            StatementTab::CashFlow => "Cash Flow Statement",
            StatementTab::Equity => "Statement of Shareholders' Equity",
        }
    }
}

impl fmt::Display for StatementTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Filing fields a template row can be bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Revenue,
    NetIncome,
    TotalAssets,
    TotalLiabilities,
    Debt,
    CashAndEquivalents,
}

impl Field {
    fn pick(self, fs: &FinancialStatements) -> Option<&FilingValue> {
        match self {
            Field::Revenue => fs.revenue.as_ref(),
            Field::NetIncome => fs.net_income.as_ref(),
            Field::TotalAssets => fs.total_assets.as_ref(),
            Field::TotalLiabilities => fs.total_liabilities.as_ref(),
            Field::Debt => fs.debt.as_ref(),
            Field::CashAndEquivalents => fs.cash_and_equivalents.as_ref(),
        }
    }
}

// (label, bound field) per row; unbound rows always show N/A
type Template = &'static [(&'static str, Option<Field>)];

const INCOME_TEMPLATE: Template = &[
    ("Revenue", Some(Field::Revenue)),
    ("Cost of Revenue", None),
    ("Gross Profit", None),
    ("Research and Development", None),
    ("Selling, General and Administrative", None),
    ("Operating Income", None),
    ("Interest Expense", None),
    ("Income Tax Expense", None),
    ("Net Income", Some(Field::NetIncome)),
];

const BALANCE_TEMPLATE: Template = &[
    ("Cash and Equivalents", Some(Field::CashAndEquivalents)),
    ("Accounts Receivable", None),
    ("Inventory", None),
    ("Total Current Assets", None),
    ("Total Assets", Some(Field::TotalAssets)),
    ("Accounts Payable", None),
    ("Total Current Liabilities", None),
    ("Total Debt", Some(Field::Debt)),
    ("Total Liabilities", Some(Field::TotalLiabilities)),
    ("Total Shareholders' Equity", None),
];

const CASH_FLOW_TEMPLATE: Template = &[
    ("Net Income", Some(Field::NetIncome)),
    ("Depreciation and Amortization", None),
    ("Changes in Working Capital", None),
    ("Net Cash from Operating Activities", None),
    ("Capital Expenditures", None),
    ("Net Cash from Investing Activities", None),
    ("Net Cash from Financing Activities", None),
    ("Net Change in Cash", None),
];

const EQUITY_TEMPLATE: Template = &[
    ("Beginning Balance", None),
    ("Net Income", Some(Field::NetIncome)),
    ("Dividends Paid", None),
    ("Share Repurchases", None),
    ("Stock-Based Compensation", None),
    ("Ending Balance", None),
];

fn template_for(tab: StatementTab) -> Template {
    match tab {
        StatementTab::Income => INCOME_TEMPLATE,
        StatementTab::Balance => BALANCE_TEMPLATE,
        StatementTab::CashFlow => CASH_FLOW_TEMPLATE,
        StatementTab::Equity => EQUITY_TEMPLATE,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementRow {
    pub label: &'static str,
    pub value: String,
}

impl StatementRow {
    pub fn is_available(&self) -> bool {
        self.value != NOT_AVAILABLE
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementTable {
    pub tab: StatementTab,
    pub period: String,
    pub rows: Vec<StatementRow>,
}

/// What the statements modal shows for a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinancialView {
    /// The record carries no filing data at all.
    NoData,
    Statements {
        active: StatementTab,
        tables: [StatementTable; 4],
    },
}

fn render_value(value: Option<&FilingValue>) -> String {
    match value {
        Some(number @ FilingValue::Number(_)) => format!("${}", number),
        Some(FilingValue::Text(s)) if !s.trim().is_empty() => s.trim().to_string(),
        _ => NOT_AVAILABLE.to_string(),
    }
}

fn build_table(tab: StatementTab, fs: &FinancialStatements) -> StatementTable {
    StatementTable {
        tab,
        period: fs
            .filing_date
            .as_deref()
            .filter(|d| !d.trim().is_empty())
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        rows: template_for(tab)
            .iter()
            .map(|&(label, field)| StatementRow {
                label,
                value: render_value(field.and_then(|f| f.pick(fs))),
            })
            .collect(),
    }
}

impl FinancialView {
    /// Builds the view from data already on the record; never touches the network.
    pub fn from_record(record: &DisplayRecord, active: StatementTab) -> Self {
        let Some(edgar) = record.edgar_data.as_ref() else {
            return FinancialView::NoData;
        };
        // An EDGAR block without statements still gets the tables, all N/A
        let empty = FinancialStatements::default();
        let fs = edgar.financial_statements.as_ref().unwrap_or(&empty);
        FinancialView::Statements {
            active,
            tables: StatementTab::ALL.map(|tab| build_table(tab, fs)),
        }
    }

    pub fn has_data(&self) -> bool {
        matches!(self, FinancialView::Statements { .. })
    }

    pub fn select_tab(&mut self, tab: StatementTab) {
        if let FinancialView::Statements { active, .. } = self {
            *active = tab;
        }
    }

    pub fn active_tab(&self) -> Option<StatementTab> {
        match self {
            FinancialView::Statements { active, .. } => Some(*active),
            FinancialView::NoData => None,
        }
    }

    pub fn active_table(&self) -> Option<&StatementTable> {
        match self {
            FinancialView::Statements { active, tables } => tables.iter().find(|t| t.tab == *active),
            FinancialView::NoData => None,
        }
    }
}
