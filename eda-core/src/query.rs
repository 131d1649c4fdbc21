//! Canonical query derived from a selection.

use crate::facet::Facet;
use crate::filters::Selection;

/// Backend request parameters, one multi-valued entry per facet with a
/// non-empty selection.
///
/// Parameters follow [`Facet::ALL`] order and values keep the order they were
/// picked in, so equal selections always serialize to the same string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CanonicalQuery {
    params: Vec<(&'static str, Vec<String>)>,
}

impl CanonicalQuery {
    /// Build the query for `selection`. Facets with nothing selected are left out.
    pub fn derive(selection: &Selection) -> Self {
        let params = Facet::ALL
            .iter()
            .filter_map(|&facet| {
                let mut values: Vec<String> = Vec::new();
                for item in selection.get(facet) {
                    let value = item.value.as_param();
                    if !values.contains(&value) {
                        values.push(value);
                    }
                }
                if values.is_empty() {
                    None
                } else {
                    Some((facet.query_param(), values))
                }
            })
            .collect();
        Self { params }
    }

    /// Values sent under `param`, if any.
    pub fn get(&self, param: &str) -> Option<&[String]> {
        self.params
            .iter()
            .find(|(name, _)| *name == param)
            .map(|(_, values)| values.as_slice())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameter names present, in order.
    pub fn params(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.params.iter().map(|(name, _)| *name)
    }

    /// Flattened `(name, value)` pairs, each value repeated under its name.
    pub fn pairs(&self) -> Vec<(&'static str, &str)> {
        self.params
            .iter()
            .flat_map(|(name, values)| values.iter().map(move |v| (*name, v.as_str())))
            .collect()
    }

    /// URL-encoded query string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        self.pairs()
            .iter()
            .map(|(name, value)| format!("{}={}", name, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facet::FilterOption;

    #[test]
    fn test_empty_selection_yields_empty_query() {
        let query = CanonicalQuery::derive(&Selection::default());
        assert!(query.is_empty());
        assert_eq!(query.to_query_string(), "");
    }

    #[test]
    fn test_brand_and_years_only() {
        let mut selection = Selection::default();
        selection.set(Facet::Brand, vec![FilterOption::plain("ColaCo")]);
        selection.set(
            Facet::Year,
            vec![FilterOption::plain(2023i64), FilterOption::plain(2024i64)],
        );
        let query = CanonicalQuery::derive(&selection);

        assert_eq!(query.params().collect::<Vec<_>>(), vec!["brand", "year"]);
        assert_eq!(query.get("brand"), Some(&["ColaCo".to_string()][..]));
        assert_eq!(
            query.get("year"),
            Some(&["2023".to_string(), "2024".to_string()][..])
        );
        assert_eq!(query.get("month"), None);
    }

    #[test]
    fn test_query_string_repeats_params_and_encodes() {
        let mut selection = Selection::default();
        selection.set(
            Facet::PackType,
            vec![FilterOption::plain("Glass Bottle"), FilterOption::plain("Can")],
        );
        selection.set(Facet::Month, vec![FilterOption::month(3)]);
        let query = CanonicalQuery::derive(&selection);
        assert_eq!(
            query.to_query_string(),
            "pack_type=Glass%20Bottle&pack_type=Can&month=3"
        );
    }

    #[test]
    fn test_duplicate_values_collapse() {
        let mut selection = Selection::default();
        selection.set(
            Facet::Channel,
            vec![FilterOption::plain("Retail"), FilterOption::plain("Retail")],
        );
        let query = CanonicalQuery::derive(&selection);
        assert_eq!(query.get("channel").map(<[String]>::len), Some(1));
    }

    #[test]
    fn test_derivation_is_deterministic() {
        let mut selection = Selection::default();
        selection.set(Facet::Ppg, vec![FilterOption::plain("Large")]);
        assert_eq!(
            CanonicalQuery::derive(&selection),
            CanonicalQuery::derive(&selection.clone())
        );
    }
}
