use super::Bop;

/// One row of a master table: a stable code and its display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasterItem {
    pub code: i32,
    pub name: &'static str,
}

const fn item(code: i32, name: &'static str) -> MasterItem {
    MasterItem { code, name }
}

/// Category master, per bop classifier (カテゴリマスタ).
const INCOME_CATEGORIES: &[MasterItem] = &[
    item(1, "給与"),
    item(2, "立替"),
    item(99, "その他"),
];

const EXPENSE_CATEGORIES: &[MasterItem] = &[
    item(1, "交通費"),
    item(2, "交際費"),
    item(3, "個人年金"),
    item(4, "医療費"),
    item(5, "奨学金返済"),
    item(6, "娯楽"),
    item(7, "携帯電話"),
    item(8, "日用品"),
    item(9, "生命保険"),
    item(10, "立替"),
    item(11, "食費"),
    item(12, "住居費"),
    item(13, "衣類"),
    item(14, "消耗品"),
    item(15, "積立NISA"),
    item(16, "ふるさと納税"),
    item(99, "その他"),
];

/// Payment method master, per bop classifier (支払い方法マスタ).
const INCOME_PAYMENTS: &[MasterItem] = &[item(1, "振込（みずほ）")];

const EXPENSE_PAYMENTS: &[MasterItem] = &[
    item(1, "現金"),
    item(2, "Suica"),
    item(3, "UC"),
    item(4, "引き落とし（みずほ）"),
    item(5, "デビッド（SBI）"),
    item(7, "Amazon"),
    item(8, "三井住友(CL)"),
];

/// Display name for the bop classifier itself (収支区分マスタ).
pub fn bop_name(bop: Bop) -> &'static str {
    match bop {
        Bop::Income => "収入",
        Bop::Expense => "支出",
    }
}

/// All valid categories for the given classifier.
pub fn categories_for(bop: Bop) -> &'static [MasterItem] {
    match bop {
        Bop::Income => INCOME_CATEGORIES,
        Bop::Expense => EXPENSE_CATEGORIES,
    }
}

/// All valid payment methods for the given classifier.
pub fn payments_for(bop: Bop) -> &'static [MasterItem] {
    match bop {
        Bop::Income => INCOME_PAYMENTS,
        Bop::Expense => EXPENSE_PAYMENTS,
    }
}

/// Resolve a category code to its display name.
pub fn category_name(bop: Bop, cat_cd: i32) -> Option<&'static str> {
    categories_for(bop)
        .iter()
        .find(|m| m.code == cat_cd)
        .map(|m| m.name)
}

/// Resolve a payment method code to its display name.
pub fn payment_name(bop: Bop, pmt_cd: i32) -> Option<&'static str> {
    payments_for(bop)
        .iter()
        .find(|m| m.code == pmt_cd)
        .map(|m| m.name)
}

pub fn is_valid_category(bop: Bop, cat_cd: i32) -> bool {
    category_name(bop, cat_cd).is_some()
}

pub fn is_valid_payment(bop: Bop, pmt_cd: i32) -> bool {
    payment_name(bop, pmt_cd).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bop_names() {
        assert_eq!(bop_name(Bop::Income), "収入");
        assert_eq!(bop_name(Bop::Expense), "支出");
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(category_name(Bop::Income, 1), Some("給与"));
        assert_eq!(category_name(Bop::Expense, 11), Some("食費"));
        assert_eq!(category_name(Bop::Expense, 99), Some("その他"));
        assert_eq!(category_name(Bop::Income, 11), None);
    }

    #[test]
    fn test_payment_lookup() {
        assert_eq!(payment_name(Bop::Income, 1), Some("振込（みずほ）"));
        assert_eq!(payment_name(Bop::Expense, 2), Some("Suica"));
        // code 6 is a gap in the expense payment master
        assert_eq!(payment_name(Bop::Expense, 6), None);
    }

    #[test]
    fn test_validity_checks() {
        assert!(is_valid_category(Bop::Expense, 16));
        assert!(!is_valid_category(Bop::Expense, 17));
        assert!(is_valid_payment(Bop::Expense, 8));
        assert!(!is_valid_payment(Bop::Income, 2));
    }

    #[test]
    fn test_master_codes_are_unique_per_table() {
        for bop in [Bop::Income, Bop::Expense] {
            for table in [categories_for(bop), payments_for(bop)] {
                let mut codes: Vec<i32> = table.iter().map(|m| m.code).collect();
                codes.sort_unstable();
                codes.dedup();
                assert_eq!(codes.len(), table.len());
            }
        }
    }
}
