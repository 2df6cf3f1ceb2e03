use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QuotaRecord {
    pub date: String,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Sentiment {
    #[serde(default)]
    pub positive: f64,
    #[serde(default)]
    pub negative: f64,
    #[serde(default)]
    pub neutral: f64,
}

impl Sentiment {
    pub fn total(&self) -> f64 {
        self.positive + self.negative + self.neutral
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryResult {
    pub summary: String,
    /// The service sometimes collapses the list to a single string.
    #[serde(deserialize_with = "one_or_many")]
    pub top_insights: Vec<String>,
    pub consensus: String,
    pub controversial: String,
    #[serde(default)]
    pub sentiment: Sentiment,
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum OneOrMany {
        One(String),
        Many(Vec<String>),
    }

    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(item) => vec![item],
        OneOrMany::Many(items) => items,
    })
}

#[derive(Debug, Serialize)]
pub struct SummarizeRequest<'a> {
    pub url: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitForm {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Deserialize)]
pub struct PlatformQuery {
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct QuotaResponse {
    pub used: u32,
    pub remaining: u32,
    pub max: u32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PlatformResponse {
    pub platform: String,
    pub valid: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StateResponse {
    pub mode: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub summary: Option<SummaryResult>,
}
