//! Expense record types.

use rusqlite::types::Value;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A stored expense row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Expense {
    /// Store-assigned identifier, immutable once assigned.
    pub id: i64,
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

/// The caller-supplied fields of a new expense.
#[derive(Debug, Clone, PartialEq)]
pub struct NewExpense {
    pub date: String,
    pub amount: f64,
    pub category: String,
    pub subcategory: String,
    pub note: String,
}

impl NewExpense {
    /// An expense with empty subcategory and note.
    pub fn new(date: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            amount,
            category: category.into(),
            subcategory: String::new(),
            note: String::new(),
        }
    }
}

/// A partial update of an expense.
///
/// `None` leaves the column unchanged, `Some` overwrites it. The id is not
/// part of the patch and can never change.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpensePatch {
    pub date: Option<String>,
    pub amount: Option<f64>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub note: Option<String>,
}

impl ExpensePatch {
    /// True when no column would be touched.
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.amount.is_none()
            && self.category.is_none()
            && self.subcategory.is_none()
            && self.note.is_none()
    }

    /// Column/value pairs for the present fields, in column order.
    pub(super) fn assignments(&self) -> Vec<(&'static str, Value)> {
        let mut out = Vec::new();
        if let Some(date) = &self.date {
            out.push(("date", Value::Text(date.clone())));
        }
        if let Some(amount) = self.amount {
            out.push(("amount", Value::Real(amount)));
        }
        if let Some(category) = &self.category {
            out.push(("category", Value::Text(category.clone())));
        }
        if let Some(subcategory) = &self.subcategory {
            out.push(("subcategory", Value::Text(subcategory.clone())));
        }
        if let Some(note) = &self.note {
            out.push(("note", Value::Text(note.clone())));
        }
        out
    }
}

/// Sum of amounts for one category.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct CategoryTotal {
    pub category: String,
    pub total: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_patch() {
        assert!(ExpensePatch::default().is_empty());
    }

    #[test]
    fn test_patch_assignments_in_column_order() {
        let patch = ExpensePatch {
            note: Some("lunch".to_string()),
            amount: Some(20.0),
            ..Default::default()
        };
        let columns: Vec<_> = patch.assignments().into_iter().map(|(c, _)| c).collect();
        assert_eq!(columns, vec!["amount", "note"]);
        assert!(!patch.is_empty());
    }

    #[test]
    fn test_empty_string_is_a_real_update() {
        let patch = ExpensePatch {
            subcategory: Some(String::new()),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }
}
