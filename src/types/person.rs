use serde::Deserialize;

/// A person record as delivered by the read service, with its bucketed
/// ranges already parsed into range codes. Missing keys and `null` both
/// mean the value is absent.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Person {
    pub income: Option<i32>,
    pub wealth: Option<i32>,
    #[serde(alias = "homeValue")]
    pub home_value: Option<i32>,
    pub age: Option<i16>,
    #[serde(alias = "ownRent")]
    pub own_rent: Option<i16>,
    pub competitors: Option<Vec<String>>,
}
