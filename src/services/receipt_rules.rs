/// Fixed point-currency reward granted per successful receipt upload.
pub const UPLOAD_REWARD: u64 = 100_000;

/// Categorization rule: if the lower-cased vendor name contains any of the
/// keywords, the receipt gets this category and icon.
struct CategoryRule {
    keywords: &'static [&'static str],
    category: &'static str,
    icon: &'static str,
}

/// Evaluated top to bottom; the first matching rule wins, so keep the more
/// specific rules above the broader ones when extending this table.
const RULES: &[CategoryRule] = &[
    CategoryRule {
        keywords: &["mcdonald", "burger"],
        category: "Fast Food",
        icon: "🍔",
    },
    CategoryRule {
        keywords: &["healthy", "salad", "bowl"],
        category: "Healthy",
        icon: "🥗",
    },
];

const FALLBACK: (&str, &str) = ("Other", "🧾");

/// Map a vendor name to a (category, icon) pair.
pub fn categorize(vendor: &str) -> (&'static str, &'static str) {
    let vendor = vendor.to_lowercase();
    RULES
        .iter()
        .find(|rule| rule.keywords.iter().any(|kw| vendor.contains(kw)))
        .map(|rule| (rule.category, rule.icon))
        .unwrap_or(FALLBACK)
}
