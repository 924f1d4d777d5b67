// themesweep-core/src/infrastructure/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(themesweep::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- MANIFEST (JSON) ---
    // Deux étapes distinctes : le document est-il du JSON, puis a-t-il la
    // forme attendue (map de { file, imports? }).
    #[error("Manifest JSON Parsing Error: {0}")]
    #[diagnostic(
        code(themesweep::infra::manifest_parse),
        help("The manifest file is not valid JSON. Was the build interrupted?")
    )]
    ManifestParse(serde_json::Error),

    #[error("Manifest Schema Error: {0}")]
    #[diagnostic(
        code(themesweep::infra::manifest_schema),
        help("Each manifest entry must be an object with a string 'file' field.")
    )]
    ManifestSchema(serde_json::Error),

    // --- CONFIG / YAML ---
    #[error("YAML Parsing Error: {0}")]
    #[diagnostic(
        code(themesweep::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    YamlError(#[from] serde_yaml::Error),
}
