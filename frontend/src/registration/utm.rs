use std::collections::HashMap;

/// Decoded `location.search`, first value per key.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct QueryParams {
    values: HashMap<String, String>,
}

impl QueryParams {
    pub fn parse(search: &str) -> Self {
        let mut values = HashMap::new();
        let query = search.strip_prefix('?').unwrap_or(search);

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            values.entry(decode(key)).or_insert_with(|| decode(value));
        }

        Self { values }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

#[cfg(test)]
impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = HashMap::new();
        for (key, value) in iter {
            values.entry(key.into()).or_insert_with(|| value.into());
        }
        Self { values }
    }
}

fn decode(component: &str) -> String {
    let spaced = component.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Campaign attribution carried along with every lead.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UtmParams {
    pub source: String,
    pub medium: String,
    pub campaign: String,
    pub term: String,
    pub content: String,
}

impl UtmParams {
    pub fn from_query(params: &QueryParams) -> Self {
        let take = |key: &str| params.get(key).unwrap_or_default().to_string();
        Self {
            source: take("utm_source"),
            medium: take("utm_medium"),
            campaign: take("utm_campaign"),
            term: take("utm_term"),
            content: take("utm_content"),
        }
    }
}
