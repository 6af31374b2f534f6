use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TourOptions {
    pub two_opt: TwoOptOptions,
}

impl TourOptions {
    /// Parses options from JSON; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TwoOptOptions {
    /// Upper bound on applied improving moves. The restart-on-improvement scan has no a-priori
    /// bound, so services facing untrusted input should set this. `None` runs to a local optimum.
    pub max_moves: Option<usize>,
}
