//! The fixed cleaning / derivation rules, applied in order:
//!
//! 1. every Null cell becomes `0`;
//! 2. `profit = revenue - cost` when both columns are present;
//! 3. `profit_margin = round2(profit / revenue)` alongside `profit`;
//! 4. rows with a negative profit are dropped when `profit` exists.
//!
//! Every rule takes the table by value and hands back a new one, so
//! [`transform`] never touches its argument.

use crate::domain::model::{Table, Value};
use crate::utils::error::{EtlError, Result};

pub const REVENUE: &str = "revenue";
pub const COST: &str = "cost";
pub const PROFIT: &str = "profit";
pub const PROFIT_MARGIN: &str = "profit_margin";

pub fn transform(data: &Table) -> Result<Table> {
    let filled = fill_nulls(data.clone());

    if !(filled.has_column(REVENUE) && filled.has_column(COST)) {
        tracing::debug!("revenue/cost not both present, skipping derived columns");
        return Ok(filled);
    }

    let with_profit = derive_profit(filled)?;
    let with_margin = derive_profit_margin(with_profit)?;
    Ok(filter_negative_profit(with_margin))
}

/// Replaces Null with `0`: `Float(0.0)` in columns already holding floats,
/// `Int(0)` everywhere else.
pub fn fill_nulls(table: Table) -> Table {
    let float_columns: Vec<bool> = (0..table.column_count())
        .map(|index| {
            table
                .rows()
                .iter()
                .any(|row| matches!(row[index], Value::Float(_)))
        })
        .collect();

    table.map_values(|index, value| match value {
        Value::Null if float_columns[index] => Value::Float(0.0),
        Value::Null => Value::Int(0),
        other => other,
    })
}

pub fn derive_profit(table: Table) -> Result<Table> {
    let profits = table
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let revenue = numeric(row.get(REVENUE), REVENUE, index)?;
            let cost = numeric(row.get(COST), COST, index)?;
            Ok(subtract(revenue, cost))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(table.with_column(PROFIT, profits))
}

/// Division by a zero revenue is left to IEEE semantics: `±inf`, or NaN when
/// the profit is zero too.
pub fn derive_profit_margin(table: Table) -> Result<Table> {
    let margins = table
        .iter()
        .enumerate()
        .map(|(index, row)| {
            let profit = as_f64(numeric(row.get(PROFIT), PROFIT, index)?);
            let revenue = as_f64(numeric(row.get(REVENUE), REVENUE, index)?);
            Ok(Value::Float(round_half_even(profit / revenue, 2)))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(table.with_column(PROFIT_MARGIN, margins))
}

/// Keeps rows whose profit is `>= 0`. NaN profits fail the comparison and are
/// dropped with the negative ones.
pub fn filter_negative_profit(table: Table) -> Table {
    if !table.has_column(PROFIT) {
        return table;
    }

    let before = table.row_count();
    let filtered = table.retain_rows(|row| {
        row.get(PROFIT)
            .and_then(Value::as_f64)
            .map_or(false, |profit| profit >= 0.0)
    });

    let dropped = before - filtered.row_count();
    if dropped > 0 {
        tracing::debug!("Dropped {} rows with negative profit", dropped);
    }
    filtered
}

/// Rounds `value` to `decimals` places, resolving exact ties to the even
/// neighbour of the scaled value.
pub fn round_half_even(value: f64, decimals: i32) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let factor = 10f64.powi(decimals);
    (value * factor).round_ties_even() / factor
}

fn numeric<'a>(value: Option<&'a Value>, column: &str, row: usize) -> Result<&'a Value> {
    match value {
        Some(v) if v.is_numeric() => Ok(v),
        Some(v) => Err(EtlError::transform(format!(
            "column '{}' row {} is not numeric: {:?}",
            column, row, v
        ))),
        None => Err(EtlError::transform(format!("column '{}' is missing", column))),
    }
}

fn as_f64(value: &Value) -> f64 {
    value.as_f64().unwrap_or(f64::NAN)
}

fn subtract(revenue: &Value, cost: &Value) -> Value {
    match (revenue, cost) {
        (Value::Int(r), Value::Int(c)) => r
            .checked_sub(*c)
            .map(Value::Int)
            .unwrap_or_else(|| Value::Float(*r as f64 - *c as f64)),
        _ => Value::Float(as_f64(revenue) - as_f64(cost)),
    }
}
