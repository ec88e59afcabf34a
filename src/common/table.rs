use tabled::{
    settings::{Alignment, Padding, Style},
    Table, Tabled,
};

/// Render a table from a vector of instances of Tabled structs
pub fn render_table<T: Tabled>(rows: &Vec<T>, terminal_output: bool) -> String {
    let mut table = Table::new(rows);

    if terminal_output {
        // If output is going to a terminal, print as a table
        table.with(Style::sharp())
    } else {
        // If output is being piped, print as tab-delimited text
        table
            .with(Style::empty().vertical('\t'))
            .with(Alignment::left())
            .with(Padding::zero())
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Tabled)]
    struct TestRow<'a> {
        category: &'a str,
        name: &'a str,
    }

    fn rows() -> Vec<TestRow<'static>> {
        vec![
            TestRow {
                category: "browser",
                name: "NetSurf",
            },
            TestRow {
                category: "mailer",
                name: "Claws Mail",
            },
        ]
    }

    #[test]
    fn terminal_output_draws_borders() {
        let table = render_table(&rows(), true);
        assert!(table.contains('│'));
        assert!(table.contains("NetSurf"));
        assert!(table.contains("Claws Mail"));
    }

    #[test]
    fn piped_output_is_tab_delimited() {
        let table = render_table(&rows(), false);
        assert!(table.contains('\t'));
        assert!(!table.contains('│'));
        assert!(table.contains("mailer"));
    }
}
