/// One launchable transaction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionType {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    /// Content id the window is opened with.
    pub content: &'static str,
    pub icon: &'static str,
}

/// Launcher groups, in display order.
pub const CATEGORIES: [&str; 4] = ["Masters", "Purchasing", "Sales", "Accounting"];

const fn entry(
    id: &'static str,
    name: &'static str,
    category: &'static str,
    content: &'static str,
    icon: &'static str,
) -> TransactionType {
    TransactionType {
        id,
        name,
        category,
        content,
        icon,
    }
}

#[rustfmt::skip]
pub const TRANSACTIONS: &[TransactionType] = &[
    entry("company", "Company", "Masters", "company-transaction", "building"),
    entry("customer-group", "Customer Group", "Masters", "customer-group-transaction", "users"),
    entry("customer", "Customer", "Masters", "customer-transaction", "user-tie"),
    entry("item-category", "Item Category", "Masters", "item-category-transaction", "tags"),
    entry("item-unit", "Item Unit", "Masters", "item-unit-transaction", "ruler"),
    entry("item", "Item/Product", "Masters", "item-transaction", "box"),
    entry("supplier", "Supplier", "Masters", "supplier-transaction", "truck"),
    entry("location", "Location", "Masters", "location-transaction", "warehouse"),
    entry("purchase-order", "Purchase Order", "Purchasing", "purchase-order-transaction", "file-alt"),
    entry("purchase-invoice", "Purchase Invoice", "Purchasing", "purchase-invoice-transaction", "file-invoice-dollar"),
    entry("purchase-return", "Purchase Return", "Purchasing", "purchase-return-transaction", "undo"),
    entry("accounts-payable-purchasing", "Accounts Payable", "Purchasing", "accounts-payable-transaction", "money-bill-wave"),
    entry("sales-order", "Sales Order", "Sales", "sales-order-transaction", "file-alt"),
    entry("sales-invoice", "Sales Invoice", "Sales", "sales-invoice-transaction", "file-invoice-dollar"),
    entry("sales-return", "Sales Return", "Sales", "sales-return-transaction", "undo"),
    entry("accounts-receivable-sales", "Accounts Receivable", "Sales", "accounts-receivable-transaction", "money-bill-wave"),
    entry("general-ledger", "General Ledger", "Accounting", "general-ledger-transaction", "book"),
    entry("accounts-receivable-accounting", "Accounts Receivable", "Accounting", "accounts-receivable-accounting-transaction", "hand-holding-usd"),
    entry("accounts-payable-accounting", "Accounts Payable", "Accounting", "accounts-payable-accounting-transaction", "credit-card"),
];

/// Single-cell glyph shown next to an entry in the launcher.
pub fn glyph(icon: &str) -> &'static str {
    match icon {
        "building" | "warehouse" => "▣",
        "users" | "user-tie" => "☺",
        "tags" | "ruler" | "box" => "◆",
        "truck" => "➔",
        "file-alt" | "file-invoice-dollar" | "book" => "▤",
        "undo" => "↺",
        _ => "$",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalog_has_unique_ids_and_contents() {
        assert_eq!(TRANSACTIONS.len(), 19);
        let ids: HashSet<_> = TRANSACTIONS.iter().map(|t| t.id).collect();
        let contents: HashSet<_> = TRANSACTIONS.iter().map(|t| t.content).collect();
        assert_eq!(ids.len(), TRANSACTIONS.len());
        assert_eq!(contents.len(), TRANSACTIONS.len());
    }

    #[test]
    fn every_entry_belongs_to_a_known_category() {
        assert!(TRANSACTIONS.iter().all(|t| CATEGORIES.contains(&t.category)));
        let masters = TRANSACTIONS.iter().filter(|t| t.category == "Masters").count();
        assert_eq!(masters, 8);
    }
}
