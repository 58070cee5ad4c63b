use super::CharFilter;

/// A char filter that applies `(from, to)` replacement pairs in order.
///
/// Each pair is a global substring replacement over the output of the
/// previous pair, so later pairs see the effects of earlier ones. Pairs with
/// an empty `from` never match.
#[derive(Clone, Debug, Default)]
pub struct MappingCharFilter {
    pairs: Vec<(String, String)>,
}

impl MappingCharFilter {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        let pairs = pairs
            .into_iter()
            .filter(|(from, _)| !from.is_empty())
            .collect();
        Self { pairs }
    }

    /// The configured pairs, in application order.
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl CharFilter for MappingCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = input.to_string();
        for (from, to) in &self.pairs {
            if output.contains(from.as_str()) {
                output = output.replace(from.as_str(), to);
            }
        }
        output
    }

    fn name(&self) -> &'static str {
        "mapping"
    }
}
