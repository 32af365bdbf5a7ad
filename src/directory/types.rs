use serde::Deserialize;

/// One country record from the GeoNames directory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Country {
    /// Unique GeoNames identifier. Unique within one fetched directory.
    #[serde(rename = "geonameId")]
    pub id: i64,
    /// ISO 3166-1 alpha-2 code, upper case in the wire data.
    #[serde(rename = "countryCode")]
    pub code: String,
    /// English display name.
    #[serde(rename = "countryName")]
    pub name: String,
    /// Capital city. A few territories have none in the wire data.
    #[serde(default)]
    pub capital: String,
}

/// Envelope returned by the `countryInfoJSON` endpoint.
#[derive(Debug, Deserialize)]
pub struct CountryInfoResponse {
    pub geonames: Vec<Country>,
}
