use serde_derive::Deserialize;

//One print variant of an atomic card record, as supplied by the ingestion step.
//Only the fields read while building cards are kept, everything else is ignored.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCard {
    pub name: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub supertypes: Vec<String>,
    #[serde(default)]
    pub subtypes: Vec<String>,
    #[serde(default)]
    pub color_identity: Vec<String>,
    pub text: Option<String>,
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub keywords: Vec<String>,
}
impl RawCard {
    pub fn description(&self) -> &str {
        self.text.as_deref().unwrap_or("")
    }
    pub fn has_keyword(&self, keyword: &str) -> bool {
        self.keywords
            .iter()
            .any(|listed| listed.eq_ignore_ascii_case(keyword))
    }
}
