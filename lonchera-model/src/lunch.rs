use serde::{Deserialize, Serialize};

/// A single lunch box suggestion as returned by the upstream model.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LunchIdea {
    #[serde(rename = "nombre", alias = "name")]
    pub name: String,
    #[serde(rename = "ingredientes", alias = "ingredients")]
    pub ingredients: Vec<String>,
    #[serde(rename = "explicacion", alias = "explanation")]
    pub explanation: String,
    #[serde(rename = "alternativas", alias = "alternatives")]
    pub alternatives: String,
}
