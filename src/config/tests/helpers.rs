//! Layer composition for configuration tests.

use ortho_config::MergeComposer;
use serde_json::{Value, json};

use crate::BookrateConfig;

/// Where a configuration layer comes from, lowest precedence first.
#[derive(Debug, Clone, Copy)]
pub enum Source {
    Defaults,
    File,
    Environment,
    Cli,
}

/// Merges `layers` in order over a base that leaves every optional field
/// unset, so a layer only needs the keys it overrides.
pub fn merge_layers(layers: &[(Source, Value)]) -> BookrateConfig {
    let mut composer = MergeComposer::new();
    composer.push_defaults(json!({"rating": null, "star": null, "edit": null}));

    for (source, value) in layers {
        let value = value.clone();
        match source {
            Source::Defaults => composer.push_defaults(value),
            Source::File => composer.push_file(value, None),
            Source::Environment => composer.push_environment(value),
            Source::Cli => composer.push_cli(value),
        }
    }

    BookrateConfig::merge_from_layers(composer.layers()).expect("merge should succeed")
}
