//! Grocery item types and the derived views over a list of items

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::money::{calculate_item_total, format_price, percent_complete};
use crate::month::MonthLabel;

/// Fixed set of grocery categories, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum GroceryCategory {
    #[default]
    Produce,
    Dairy,
    Meat,
    Pantry,
    Frozen,
    Beverages,
    Snacks,
    Other,
}

impl GroceryCategory {
    pub const ALL: [GroceryCategory; 8] = [
        GroceryCategory::Produce,
        GroceryCategory::Dairy,
        GroceryCategory::Meat,
        GroceryCategory::Pantry,
        GroceryCategory::Frozen,
        GroceryCategory::Beverages,
        GroceryCategory::Snacks,
        GroceryCategory::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            GroceryCategory::Produce => "Produce",
            GroceryCategory::Dairy => "Dairy",
            GroceryCategory::Meat => "Meat",
            GroceryCategory::Pantry => "Pantry",
            GroceryCategory::Frozen => "Frozen",
            GroceryCategory::Beverages => "Beverages",
            GroceryCategory::Snacks => "Snacks",
            GroceryCategory::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .find(|c| c.label().eq_ignore_ascii_case(label.trim()))
            .copied()
    }

    /// Next category in display order, wrapping around
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Previous category in display order, wrapping around
    pub fn prev(&self) -> Self {
        let idx = Self::ALL.iter().position(|c| c == self).unwrap_or(0);
        Self::ALL[(idx + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for GroceryCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Identifier of a grocery item, unique within a list
pub type GroceryItemId = u64;

/// A single line on the grocery list.
///
/// Quantity and price are stored exactly as entered; see
/// [`calculate_item_total`] for how they are interpreted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroceryItem {
    pub id: GroceryItemId,
    pub name: String,
    pub quantity: String,
    pub price: Option<String>,
    pub category: GroceryCategory,
    pub is_checked: bool,
    /// Day the item was added; serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
}

impl GroceryItem {
    /// `price × quantity` for this line
    pub fn item_total(&self) -> f64 {
        calculate_item_total(self.price.as_deref(), &self.quantity)
    }

    pub fn month_label(&self) -> MonthLabel {
        MonthLabel::from_date(self.date)
    }

    /// Secondary text shown under the item name, e.g. `Qty: 3 • $4.99`
    pub fn detail_line(&self, currency_symbol: &str) -> String {
        match self.price.as_deref() {
            Some(price) if !price.is_empty() => {
                format!("Qty: {} • {}{}", self.quantity, currency_symbol, price)
            }
            _ => format!("Qty: {}", self.quantity),
        }
    }
}

/// The user-editable fields of a grocery item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryDraft {
    pub name: String,
    pub quantity: String,
    pub price: Option<String>,
    pub category: GroceryCategory,
}

impl GroceryDraft {
    pub fn from_item(item: &GroceryItem) -> Self {
        Self {
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            price: item.price.clone(),
            category: item.category,
        }
    }
}

/// Items of one category, in insertion order
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup<'a> {
    pub category: GroceryCategory,
    pub items: Vec<&'a GroceryItem>,
}

impl CategoryGroup<'_> {
    pub fn total(&self) -> f64 {
        self.items.iter().map(|i| i.item_total()).sum()
    }

    /// Formatted group total, or `None` when it would read `0.00`
    pub fn display_total(&self) -> Option<String> {
        let formatted = format_price(self.total());
        (formatted != "0.00").then_some(formatted)
    }
}

/// Group items by category. Groups appear in order of first appearance.
pub fn group_by_category<'a, I>(items: I) -> Vec<CategoryGroup<'a>>
where
    I: IntoIterator<Item = &'a GroceryItem>,
{
    let mut groups: Vec<CategoryGroup<'a>> = Vec::new();
    for item in items {
        match groups.iter_mut().find(|g| g.category == item.category) {
            Some(group) => group.items.push(item),
            None => groups.push(CategoryGroup {
                category: item.category,
                items: vec![item],
            }),
        }
    }
    groups
}

/// Summary statistics over a set of grocery items
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GrocerySummary {
    pub total_items: usize,
    pub checked_items: usize,
    pub percent_complete: u32,
    pub total_price: f64,
}

impl GrocerySummary {
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a GroceryItem>,
    {
        let mut summary = Self::default();
        for item in items {
            summary.total_items += 1;
            if item.is_checked {
                summary.checked_items += 1;
            }
            summary.total_price += item.item_total();
        }
        summary.percent_complete = percent_complete(summary.checked_items, summary.total_items);
        summary
    }

    pub fn formatted_total(&self) -> String {
        format_price(self.total_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: u64, name: &str, qty: &str, price: Option<&str>, cat: GroceryCategory) -> GroceryItem {
        GroceryItem {
            id,
            name: name.to_string(),
            quantity: qty.to_string(),
            price: price.map(str::to_string),
            category: cat,
            is_checked: false,
            date: NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        }
    }

    #[test]
    fn test_detail_line_with_price() {
        let bananas = item(2, "Bananas", "3", Some("4.99"), GroceryCategory::Produce);
        assert_eq!(bananas.detail_line("$"), "Qty: 3 • $4.99");
        assert_eq!(bananas.detail_line("€"), "Qty: 3 • €4.99");
    }

    #[test]
    fn test_detail_line_without_price() {
        let milk = item(3, "Milk", "1", None, GroceryCategory::Dairy);
        assert_eq!(milk.detail_line("$"), "Qty: 1");

        let eggs = item(4, "Eggs", "12", Some(""), GroceryCategory::Dairy);
        assert_eq!(eggs.detail_line("$"), "Qty: 12");
    }

    #[test]
    fn test_group_by_category_first_appearance_order() {
        let items = vec![
            item(1, "Milk", "1", None, GroceryCategory::Dairy),
            item(2, "Apples", "6", None, GroceryCategory::Produce),
            item(3, "Cheese", "1", None, GroceryCategory::Dairy),
        ];
        let groups = group_by_category(&items);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, GroceryCategory::Dairy);
        assert_eq!(
            groups[0].items.iter().map(|i| i.id).collect::<Vec<_>>(),
            vec![1, 3]
        );
        assert_eq!(groups[1].category, GroceryCategory::Produce);
    }

    #[test]
    fn test_group_total_hidden_when_zero() {
        let items = vec![
            item(1, "Salt", "1", None, GroceryCategory::Pantry),
            item(2, "Flour", "x", Some("3.00"), GroceryCategory::Pantry),
        ];
        let groups = group_by_category(&items);
        assert_eq!(groups[0].display_total(), None);

        let items = vec![item(1, "Apples", "6", Some("5.99"), GroceryCategory::Produce)];
        let groups = group_by_category(&items);
        assert_eq!(groups[0].display_total().as_deref(), Some("35.94"));
    }

    #[test]
    fn test_summary_counts_and_total() {
        let mut items = vec![
            item(1, "Apples", "6", Some("5.99"), GroceryCategory::Produce),
            item(2, "Bananas", "3", Some("4.99"), GroceryCategory::Produce),
            item(3, "Mystery", "lots", Some("2.00"), GroceryCategory::Other),
        ];
        items[0].is_checked = true;

        let summary = GrocerySummary::from_items(&items);
        assert_eq!(summary.total_items, 3);
        assert_eq!(summary.checked_items, 1);
        assert_eq!(summary.percent_complete, 33);
        assert_eq!(summary.formatted_total(), "50.91");
    }

    #[test]
    fn test_summary_empty() {
        let summary = GrocerySummary::from_items(std::iter::empty());
        assert_eq!(summary.percent_complete, 0);
        assert_eq!(summary.formatted_total(), "0.00");
    }

    #[test]
    fn test_category_cycle() {
        assert_eq!(GroceryCategory::Produce.next(), GroceryCategory::Dairy);
        assert_eq!(GroceryCategory::Other.next(), GroceryCategory::Produce);
        assert_eq!(GroceryCategory::Produce.prev(), GroceryCategory::Other);
        assert_eq!(
            GroceryCategory::from_label("beverages"),
            Some(GroceryCategory::Beverages)
        );
    }

    #[test]
    fn test_item_date_serializes_iso() {
        let apples = item(1, "Apples", "6", Some("5.99"), GroceryCategory::Produce);
        let json = serde_json::to_value(&apples).unwrap();
        assert_eq!(json["date"], "2025-04-10");
    }
}
