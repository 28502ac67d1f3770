//! Restriction class of `type` statements

/// Builtin YANG types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinType {
    Int8,
    Int16,
    Int32,
    Int64,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Decimal64,
    String,
    Boolean,
    Enumeration,
    Bits,
    Binary,
    Leafref,
    Identityref,
    Empty,
    Union,
    InstanceIdentifier,
}

impl BuiltinType {
    pub fn from_name(name: &str) -> Option<Self> {
        let ty = match name {
            "int8" => BuiltinType::Int8,
            "int16" => BuiltinType::Int16,
            "int32" => BuiltinType::Int32,
            "int64" => BuiltinType::Int64,
            "uint8" => BuiltinType::Uint8,
            "uint16" => BuiltinType::Uint16,
            "uint32" => BuiltinType::Uint32,
            "uint64" => BuiltinType::Uint64,
            "decimal64" => BuiltinType::Decimal64,
            "string" => BuiltinType::String,
            "boolean" => BuiltinType::Boolean,
            "enumeration" => BuiltinType::Enumeration,
            "bits" => BuiltinType::Bits,
            "binary" => BuiltinType::Binary,
            "leafref" => BuiltinType::Leafref,
            "identityref" => BuiltinType::Identityref,
            "empty" => BuiltinType::Empty,
            "union" => BuiltinType::Union,
            "instance-identifier" => BuiltinType::InstanceIdentifier,
            _ => return None,
        };
        Some(ty)
    }

    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            BuiltinType::Int8
                | BuiltinType::Int16
                | BuiltinType::Int32
                | BuiltinType::Int64
                | BuiltinType::Uint8
                | BuiltinType::Uint16
                | BuiltinType::Uint32
                | BuiltinType::Uint64
        )
    }
}

/// The restriction a `type` statement finally applies: the builtin it
/// bottoms out at after following typedefs, or the unresolved type name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Restriction {
    Builtin(BuiltinType),
    Unresolved(String),
}

impl Restriction {
    pub fn is_integer(&self) -> bool {
        matches!(self, Restriction::Builtin(b) if b.is_integer())
    }
}
