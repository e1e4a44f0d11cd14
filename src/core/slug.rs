//! Slugs: stable identifiers derived from generated display names.

/// Lowercase `name`, keep ASCII alphanumerics, and collapse every other
/// run of characters into a single underscore. Leading and trailing
/// separators are dropped.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_sep = false;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_sep && !slug.is_empty() {
                slug.push('_');
            }
            pending_sep = false;
            slug.push(c.to_ascii_lowercase());
        } else {
            pending_sep = true;
        }
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basic_name() {
        assert_eq!(slugify("Ban All Birds"), "ban_all_birds");
    }

    #[test]
    fn punctuation_collapses() {
        assert_eq!(slugify("Parliament's Printer -- Unionizes!"), "parliament_s_printer_unionizes");
    }

    #[test]
    fn trims_separators() {
        assert_eq!(slugify("  Tax Oxygen  "), "tax_oxygen");
    }

    #[test]
    fn keeps_digits() {
        assert_eq!(slugify("Leader 07 Pork"), "leader_07_pork");
    }

    #[test]
    fn drops_non_ascii() {
        assert_eq!(slugify("Café Décret"), "caf_d_cret");
    }
}
