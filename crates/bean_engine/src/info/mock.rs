use serde_json::Value;

// -----------------------------------------------------------------------------
// MockType

/// Documented type of a mock value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MockType {
    Int,
    String,
    Bool,
    Float,
    Object,
    Array,
    ObjectArray,
    Enum,
}

impl MockType {
    /// Name used in generated documentation.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::String => "string",
            Self::Bool => "bool",
            Self::Float => "float",
            Self::Object => "object",
            Self::Array => "array",
            Self::ObjectArray => "object_array",
            Self::Enum => "enum",
        }
    }
}

// -----------------------------------------------------------------------------
// MockEnum

/// An enum listing its constants for documentation.
///
/// ```
/// use bean_engine::info::MockEnum;
///
/// enum Status { Active, Banned }
///
/// impl MockEnum for Status {
///     fn mock_options() -> &'static [(&'static str, &'static str)] {
///         &[("active", "Active user"), ("banned", "Banned user")]
///     }
/// }
///
/// assert_eq!(Status::mock_options()[1].0, "banned");
/// ```
pub trait MockEnum {
    /// Pairs of constant value and display text.
    fn mock_options() -> &'static [(&'static str, &'static str)];
}

// -----------------------------------------------------------------------------
// MockSpec

/// Documentation-only sample data of a field.
///
/// Never read by hydration or serialization.
#[derive(Clone, Debug)]
pub struct MockSpec {
    kind: MockType,
    value: Value,
    comment: &'static str,
    enums: Option<fn() -> &'static [(&'static str, &'static str)]>,
}

impl MockSpec {
    #[inline]
    pub fn new(kind: MockType) -> Self {
        Self {
            kind,
            value: Value::Null,
            comment: "",
            enums: None,
        }
    }

    #[inline]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    #[inline]
    pub fn with_comment(mut self, comment: &'static str) -> Self {
        self.comment = comment;
        self
    }

    /// Lists the constants of `E`. Also sets the kind to [`MockType::Enum`].
    #[inline]
    pub fn with_enums<E: MockEnum>(mut self) -> Self {
        self.kind = MockType::Enum;
        self.enums = Some(E::mock_options);
        self
    }

    #[inline]
    pub const fn kind(&self) -> MockType {
        self.kind
    }

    #[inline]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    #[inline]
    pub const fn comment(&self) -> &'static str {
        self.comment
    }

    #[inline]
    pub fn enums(&self) -> Option<&'static [(&'static str, &'static str)]> {
        self.enums.map(|f| f())
    }
}
