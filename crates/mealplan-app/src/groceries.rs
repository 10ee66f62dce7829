//! Grocery list state: the item collection, the add/edit form, and the tab's
//! cursor and month selection.

use chrono::NaiveDate;

use mealplan_core::{
    group_by_category, CategoryGroup, GroceryCategory, GroceryDraft, GroceryItem, GroceryItemId,
    GrocerySummary, MonthLabel,
};

use crate::form::{non_blank, FormError};
use crate::month_selector::MonthSelector;

/// In-memory grocery items in insertion order
#[derive(Debug, Clone, Default)]
pub struct GroceryList {
    items: Vec<GroceryItem>,
    next_id: GroceryItemId,
}

impl GroceryList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// List holding the starter item, dated `today`
    pub fn with_seed(today: NaiveDate) -> Self {
        let mut list = Self::new();
        list.add(
            GroceryDraft {
                name: "Apples".to_string(),
                quantity: "6".to_string(),
                price: Some("5.99".to_string()),
                category: GroceryCategory::Produce,
            },
            today,
        );
        list
    }

    pub fn items(&self) -> &[GroceryItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: GroceryItemId) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.id == id)
    }

    pub fn find_by_name(&self, name: &str) -> Option<&GroceryItem> {
        self.items.iter().find(|i| i.name == name)
    }

    /// Append a new unchecked item dated `today`; returns its id
    pub fn add(&mut self, draft: GroceryDraft, today: NaiveDate) -> GroceryItemId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(GroceryItem {
            id,
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            category: draft.category,
            is_checked: false,
            date: today,
        });
        id
    }

    /// Replace the editable fields of an item, keeping id, check state and date
    pub fn edit(&mut self, id: GroceryItemId, draft: GroceryDraft) -> bool {
        match self.items.iter_mut().find(|i| i.id == id) {
            Some(item) => {
                item.name = draft.name;
                item.quantity = draft.quantity;
                item.price = draft.price;
                item.category = draft.category;
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: GroceryItemId) -> Option<GroceryItem> {
        let idx = self.items.iter().position(|i| i.id == id)?;
        Some(self.items.remove(idx))
    }

    /// Flip the checked state; returns the new state
    pub fn toggle(&mut self, id: GroceryItemId) -> Option<bool> {
        let item = self.items.iter_mut().find(|i| i.id == id)?;
        item.is_checked = !item.is_checked;
        Some(item.is_checked)
    }

    /// Items dated within `month`, in insertion order
    pub fn items_in_month(&self, month: MonthLabel) -> Vec<&GroceryItem> {
        self.items.iter().filter(|i| month.contains(i.date)).collect()
    }

    pub fn groups_for_month(&self, month: MonthLabel) -> Vec<CategoryGroup<'_>> {
        group_by_category(self.items_in_month(month))
    }

    pub fn summary_for_month(&self, month: MonthLabel) -> GrocerySummary {
        GrocerySummary::from_items(self.items_in_month(month))
    }

    pub fn summary(&self) -> GrocerySummary {
        GrocerySummary::from_items(&self.items)
    }
}

/// Field of the grocery form with keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroceryField {
    #[default]
    Name,
    Quantity,
    Price,
    Category,
}

impl GroceryField {
    pub fn next(self) -> Self {
        match self {
            GroceryField::Name => GroceryField::Quantity,
            GroceryField::Quantity => GroceryField::Price,
            GroceryField::Price => GroceryField::Category,
            GroceryField::Category => GroceryField::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            GroceryField::Name => GroceryField::Category,
            GroceryField::Quantity => GroceryField::Name,
            GroceryField::Price => GroceryField::Quantity,
            GroceryField::Category => GroceryField::Price,
        }
    }
}

/// Add/edit form for a grocery item
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GroceryForm {
    /// Item being edited; `None` when adding
    pub editing: Option<GroceryItemId>,
    pub name: String,
    pub quantity: String,
    pub price: String,
    pub category: GroceryCategory,
    pub focus: GroceryField,
    pub error: Option<FormError>,
}

impl GroceryForm {
    pub fn for_new() -> Self {
        Self::default()
    }

    pub fn for_item(item: &GroceryItem) -> Self {
        Self {
            editing: Some(item.id),
            name: item.name.clone(),
            quantity: item.quantity.clone(),
            price: item.price.clone().unwrap_or_default(),
            category: item.category,
            focus: GroceryField::Name,
            error: None,
        }
    }

    pub fn title(&self) -> &'static str {
        if self.editing.is_some() {
            "Edit Item"
        } else {
            "Add Item"
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if let Some(field) = self.focused_text_mut() {
            field.push(c);
            self.error = None;
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_text_mut() {
            field.pop();
        }
    }

    pub fn cycle_category(&mut self, forward: bool) {
        self.category = if forward {
            self.category.next()
        } else {
            self.category.prev()
        };
    }

    fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            GroceryField::Name => Some(&mut self.name),
            GroceryField::Quantity => Some(&mut self.quantity),
            GroceryField::Price => Some(&mut self.price),
            GroceryField::Category => None,
        }
    }

    /// Validated draft; name and quantity are required
    pub fn to_draft(&self) -> Result<GroceryDraft, FormError> {
        let name = non_blank(&self.name).ok_or(FormError::MissingField("Name"))?;
        let quantity = non_blank(&self.quantity).ok_or(FormError::MissingField("Quantity"))?;
        Ok(GroceryDraft {
            name,
            quantity,
            price: non_blank(&self.price),
            category: self.category,
        })
    }
}

/// Everything the grocery tab owns
#[derive(Debug, Clone)]
pub struct GroceriesState {
    pub list: GroceryList,
    pub months: MonthSelector,
    /// Index into [`GroceriesState::visible_items`]
    pub cursor: usize,
    pub form: Option<GroceryForm>,
}

impl GroceriesState {
    pub fn new(today: NaiveDate, default_month: Option<MonthLabel>) -> Self {
        Self {
            list: GroceryList::with_seed(today),
            months: MonthSelector::new(today, default_month),
            cursor: 0,
            form: None,
        }
    }

    /// Items of the selected month in display order (grouped by category)
    pub fn visible_items(&self) -> Vec<&GroceryItem> {
        self.list
            .groups_for_month(self.months.selected())
            .into_iter()
            .flat_map(|g| g.items)
            .collect()
    }

    pub fn selected_item(&self) -> Option<&GroceryItem> {
        self.visible_items().get(self.cursor).copied()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.visible_items().len();
        self.cursor = if len == 0 {
            0
        } else {
            (self.cursor as isize + delta).clamp(0, len as isize - 1) as usize
        };
    }

    /// Keep the cursor on a real row after the list shrinks
    pub fn clamp_cursor(&mut self) {
        self.move_cursor(0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 15).unwrap()
    }

    fn draft(name: &str, qty: &str, price: Option<&str>, cat: GroceryCategory) -> GroceryDraft {
        GroceryDraft {
            name: name.to_string(),
            quantity: qty.to_string(),
            price: price.map(str::to_string),
            category: cat,
        }
    }

    #[test]
    fn test_seed_item() {
        let list = GroceryList::with_seed(today());
        assert_eq!(list.len(), 1);
        let apples = &list.items()[0];
        assert_eq!(apples.id, 1);
        assert_eq!(apples.name, "Apples");
        assert_eq!(apples.detail_line("$"), "Qty: 6 • $5.99");
        assert_eq!(apples.date, today());
    }

    #[test]
    fn test_add_assigns_fresh_id_and_today() {
        let mut list = GroceryList::with_seed(today());
        let id = list.add(
            draft("Bananas", "3", Some("4.99"), GroceryCategory::Produce),
            today(),
        );
        assert_eq!(id, 2);
        let bananas = list.get(id).unwrap();
        assert!(!bananas.is_checked);
        assert_eq!(bananas.date, today());
        assert_eq!(bananas.detail_line("$"), "Qty: 3 • $4.99");
    }

    #[test]
    fn test_edit_preserves_identity_check_and_date() {
        let mut list = GroceryList::new();
        let id = list.add(draft("Milk", "1", None, GroceryCategory::Dairy), today());
        list.toggle(id);

        assert!(list.edit(
            id,
            draft("Oat milk", "2", Some("3.50"), GroceryCategory::Beverages)
        ));

        let item = list.get(id).unwrap();
        assert_eq!(item.name, "Oat milk");
        assert_eq!(item.category, GroceryCategory::Beverages);
        assert!(item.is_checked);
        assert_eq!(item.date, today());
        assert!(!list.edit(99, GroceryDraft::default()));
    }

    #[test]
    fn test_delete_removes_item() {
        let mut list = GroceryList::with_seed(today());
        let removed = list.delete(1).unwrap();
        assert_eq!(removed.name, "Apples");
        assert!(list.find_by_name("Apples").is_none());
        assert!(list.delete(1).is_none());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        let mut list = GroceryList::with_seed(today());
        assert_eq!(list.toggle(1), Some(true));
        assert_eq!(list.toggle(1), Some(false));
        assert!(!list.get(1).unwrap().is_checked);
        assert_eq!(list.toggle(42), None);
    }

    #[test]
    fn test_items_filtered_by_month() {
        let mut list = GroceryList::new();
        let april = today();
        let may = NaiveDate::from_ymd_opt(2025, 5, 2).unwrap();
        list.add(draft("Apples", "6", None, GroceryCategory::Produce), april);
        list.add(draft("Bread", "1", None, GroceryCategory::Pantry), may);

        let in_may = list.items_in_month("May 2025".parse().unwrap());
        assert_eq!(in_may.len(), 1);
        assert_eq!(in_may[0].name, "Bread");
        assert!(list
            .items_in_month("May 2024".parse().unwrap())
            .is_empty());
    }

    #[test]
    fn test_summary_total_is_sum_of_item_totals() {
        let mut list = GroceryList::with_seed(today());
        list.add(draft("Bananas", "3", Some("4.99"), GroceryCategory::Produce), today());
        list.add(draft("Chips", "two", Some("1.99"), GroceryCategory::Snacks), today());
        list.toggle(1);

        let summary = list.summary();
        let expected: f64 = list.items().iter().map(|i| i.item_total()).sum();
        assert_eq!(summary.total_price, expected);
        assert_eq!(summary.formatted_total(), "50.91");
        assert_eq!(summary.checked_items, 1);
        assert_eq!(summary.percent_complete, 33);
    }

    #[test]
    fn test_form_requires_name_and_quantity() {
        let mut form = GroceryForm::for_new();
        assert_eq!(form.to_draft(), Err(FormError::MissingField("Name")));

        form.name = "Eggs".into();
        assert_eq!(form.to_draft(), Err(FormError::MissingField("Quantity")));

        form.quantity = "12".into();
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.price, None);
        assert_eq!(draft.category, GroceryCategory::Produce);
    }

    #[test]
    fn test_form_typing_targets_focused_field() {
        let mut form = GroceryForm::for_new();
        form.insert_char('E');
        form.focus = form.focus.next();
        form.insert_char('2');
        form.focus = form.focus.next();
        form.insert_char('1');
        form.backspace();
        form.focus = form.focus.next();
        form.insert_char('x');
        form.cycle_category(true);

        assert_eq!(form.name, "E");
        assert_eq!(form.quantity, "2");
        assert_eq!(form.price, "");
        assert_eq!(form.category, GroceryCategory::Dairy);
    }

    #[test]
    fn test_form_for_item_prefills() {
        let list = GroceryList::with_seed(today());
        let form = GroceryForm::for_item(&list.items()[0]);
        assert_eq!(form.editing, Some(1));
        assert_eq!(form.price, "5.99");
        assert_eq!(form.title(), "Edit Item");
    }

    #[test]
    fn test_visible_items_follow_selected_month() {
        let mut state = GroceriesState::new(today(), None);
        assert_eq!(state.visible_items().len(), 1);

        state.months.select("May 2025".parse().unwrap());
        assert!(state.visible_items().is_empty());
        state.move_cursor(1);
        assert_eq!(state.cursor, 0);
    }
}
