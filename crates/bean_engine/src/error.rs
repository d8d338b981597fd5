use thiserror::Error;

// -----------------------------------------------------------------------------
// ConfigError

/// Inconsistent bean metadata, found when the descriptors of a type are built.
///
/// Stored inside the cached [`BeanInfo`](crate::info::BeanInfo) and reported
/// on every use of the type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("Bean `{bean}` declares field `{field}` more than once")]
    DuplicateField { bean: &'static str, field: &'static str },

    #[error("Bean `{bean}`: lookup key `{key}` of field `{field}` is already used by field `{other}`")]
    AmbiguousKey {
        bean: &'static str,
        key: String,
        field: &'static str,
        other: &'static str,
    },

    #[error("Bean `{bean}`: field `{field}` is resolved by missing sibling `{discriminator}`")]
    UnknownDiscriminator {
        bean: &'static str,
        field: &'static str,
        discriminator: &'static str,
    },

    #[error("Bean `{bean}`: field `{field}` cannot be its own discriminator")]
    SelfDiscriminator { bean: &'static str, field: &'static str },

    #[error("Bean `{bean}`: field `{field}` needs both a union type and a `union` discriminator")]
    UnionShape { bean: &'static str, field: &'static str },

    #[error("Bean `{bean}`: field `{field}` is declared as both a union and a list")]
    UnionList { bean: &'static str, field: &'static str },

    #[error("Union `{union}` maps tag `{tag}` to more than one variant")]
    DuplicateTag { union: &'static str, tag: &'static str },
}

// -----------------------------------------------------------------------------
// BeanError

/// Errors surfaced by hydration, the accessor façade and the registry.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BeanError {
    #[error("Property `{field}` does not exist on bean `{bean}`")]
    PropertyNotFound { bean: &'static str, field: String },

    #[error("Property `{field}` of bean `{bean}` has type `{expect}`, found `{actual}`")]
    FieldTypeMismatch {
        bean: &'static str,
        field: &'static str,
        expect: &'static str,
        actual: &'static str,
    },

    #[error("Field `{field}` of bean `{bean}`: discriminator `{discriminator}` value {value} has no variant")]
    UnresolvedDiscriminator {
        bean: &'static str,
        field: &'static str,
        discriminator: &'static str,
        value: String,
    },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Expected a JSON object, found {0}")]
    InvalidInput(&'static str),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("No bean registered under `{0}`")]
    UnknownType(String),
}
