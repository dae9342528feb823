/// Left-aligned key/value rows with the values in one column.
pub fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    if entries.is_empty() {
        return Vec::new();
    }

    let label_width = entries
        .iter()
        .map(|(label, _)| label.len())
        .max()
        .unwrap_or(0);
    let padding = " ".repeat(indent);

    entries
        .iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::key_value_rows;

    #[test]
    fn values_line_up_in_one_column() {
        let rows = key_value_rows(
            &[
                ("Short:", "1".to_string()),
                ("A longer label:", "2".to_string()),
            ],
            2,
        );
        assert_eq!(rows[0], "  Short:           1");
        assert_eq!(rows[1], "  A longer label:  2");
    }

    #[test]
    fn empty_input_renders_nothing() {
        assert!(key_value_rows(&[], 2).is_empty());
    }
}
