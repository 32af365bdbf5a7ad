use flagquiz::directory::Country;

pub fn country(id: i64, code: &str, name: &str, capital: &str) -> Country {
    Country {
        id,
        code: code.to_string(),
        name: name.to_string(),
        capital: capital.to_string(),
    }
}

/// Four distinct countries, enough for exactly one full round.
pub fn sample_directory() -> Vec<Country> {
    vec![
        country(1, "FR", "France", "Paris"),
        country(2, "DE", "Germany", "Berlin"),
        country(3, "IT", "Italy", "Rome"),
        country(4, "ES", "Spain", "Madrid"),
    ]
}
