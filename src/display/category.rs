//! Category display formatting

use crate::models::Category;

/// Format the category registry as a list
pub fn format_category_list<'a>(categories: impl IntoIterator<Item = &'a Category>) -> String {
    let mut output = String::new();
    output.push_str(&format!("   {:<15} {:<20} {}\n", "ID", "Name", "Color"));
    for c in categories {
        output.push_str(&format!("{} {:<15} {:<20} {}\n", c.icon, c.id, c.name, c.color));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::category;

    #[test]
    fn test_lists_every_category() {
        let output = format_category_list(category::all());
        assert_eq!(output.lines().count(), 10);
        assert!(output.contains("entertainment"));
        assert!(output.contains("#6b7280"));
    }
}
