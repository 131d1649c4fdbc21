//! `filters` subcommand.

use eda_core::{DashboardApi, Facet, Vocabulary};
use log::info;

pub async fn run_filters<A: DashboardApi>(api: &A) -> anyhow::Result<()> {
    let vocabulary = Vocabulary::from(api.fetch_filters().await?);
    info!("Fetched vocabulary with {} facets", vocabulary.len());
    for line in vocabulary_lines(&vocabulary) {
        println!("{}", line);
    }
    Ok(())
}

/// One line per sidebar facet: "Label (param): a, b, c".
fn vocabulary_lines(vocabulary: &Vocabulary) -> Vec<String> {
    Facet::SIDEBAR
        .into_iter()
        .map(|facet| {
            let options = vocabulary.options(facet);
            let values = if options.is_empty() {
                "(none)".to_string()
            } else {
                options
                    .iter()
                    .map(|option| {
                        let value = option.value.as_param();
                        if value == option.label {
                            value
                        } else {
                            format!("{} [{}]", option.label, value)
                        }
                    })
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            format!("{} ({}): {}", facet.label(), facet.query_param(), values)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use eda_core::FiltersResponse;

    #[test]
    fn test_vocabulary_lines_in_sidebar_order() {
        let vocabulary = Vocabulary::from(FiltersResponse {
            brands: vec!["Brand A".to_string(), "Brand B".to_string()],
            months: vec![1, 2],
            ..Default::default()
        });
        let lines = vocabulary_lines(&vocabulary);
        assert_eq!(lines.len(), Facet::SIDEBAR.len());
        assert!(lines[0].ends_with("(none)"));
        assert!(lines.iter().any(|l| l.ends_with(": Brand A, Brand B")));
        assert!(lines.iter().any(|l| l.ends_with(": January [1], February [2]")));
    }
}
