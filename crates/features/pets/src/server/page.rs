use crate::domain::Species;
use axum::response::Html;
use std::fmt::Write;
use std::sync::LazyLock;
use strum::IntoEnumIterator;

const TEMPLATE: &str = include_str!("../../assets/index.html");
const SPECIES_SLOT: &str = "{{SPECIES_OPTIONS}}";

static PAGE: LazyLock<String> = LazyLock::new(|| TEMPLATE.replace(SPECIES_SLOT, &species_options()));

fn species_options() -> String {
    Species::iter().fold(String::new(), |mut options, species| {
        let _ = writeln!(options, r#"<option value="{0}">{0}</option>"#, species.as_ref());
        options
    })
}

#[allow(clippy::unused_async)]
pub(super) async fn index() -> Html<&'static str> {
    Html(PAGE.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_species_is_offered() {
        for species in Species::iter() {
            assert!(PAGE.contains(&format!(r#"<option value="{species}">"#)), "{species}");
        }
        assert!(!PAGE.contains(SPECIES_SLOT));
    }
}
