mod provider;
mod types;

pub use provider::{CountryProvider, GeonamesProvider, ProviderError};
pub use types::{Country, CountryInfoResponse};
