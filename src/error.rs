#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectionError {
    /// Byte does not encode any [crate::Direction].
    InvalidRepr(u8),
    /// String is not the name of any [crate::Direction].
    UnknownName(String),
}

impl std::fmt::Display for DirectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectionError::InvalidRepr(value) => {
                write!(f, "{} is not a valid direction", value)
            }
            DirectionError::UnknownName(name) => write!(f, "Unknown direction '{}'", name),
        }
    }
}

impl std::error::Error for DirectionError {}
