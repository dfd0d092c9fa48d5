#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("specify exactly one of --demo or --input")]
    NoSource,
    #[error("unknown demo {0:?}; see `symex list-demos`")]
    UnknownDemo(String),
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path} as a function description: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Ast(#[from] symex_ast::AstError),
    #[error(transparent)]
    Engine(#[from] symex_engine::EngineError),
}
