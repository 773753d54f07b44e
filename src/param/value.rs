use glam::Vec3;
use uuid::Uuid;

use crate::types::ItemStack;

/// Closed set of wire value kinds a parameter may carry. The codec maps each
/// kind to one serializer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ParamKind {
    Byte,
    VarInt,
    Float,
    Bool,
    OptText,
    OptUuid,
    ItemStack,
    Vector3,
    NbtBlob,
}

impl ParamKind {
    /// Wire discriminator for the serializer of this kind.
    pub fn wire_id(self) -> u8 {
        match self {
            ParamKind::Byte => 0,
            ParamKind::VarInt => 1,
            ParamKind::Float => 2,
            ParamKind::Bool => 3,
            ParamKind::OptText => 4,
            ParamKind::OptUuid => 5,
            ParamKind::ItemStack => 6,
            ParamKind::Vector3 => 7,
            ParamKind::NbtBlob => 8,
        }
    }
}

/// One parameter value, tagged with its kind.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Byte(u8),
    VarInt(i32),
    Float(f32),
    Bool(bool),
    OptText(Option<String>),
    OptUuid(Option<Uuid>),
    ItemStack(ItemStack),
    Vector3(Vec3),
    NbtBlob(Vec<u8>),
}

impl ParamValue {
    pub fn kind(&self) -> ParamKind {
        match self {
            ParamValue::Byte(_) => ParamKind::Byte,
            ParamValue::VarInt(_) => ParamKind::VarInt,
            ParamValue::Float(_) => ParamKind::Float,
            ParamValue::Bool(_) => ParamKind::Bool,
            ParamValue::OptText(_) => ParamKind::OptText,
            ParamValue::OptUuid(_) => ParamKind::OptUuid,
            ParamValue::ItemStack(_) => ParamKind::ItemStack,
            ParamValue::Vector3(_) => ParamKind::Vector3,
            ParamValue::NbtBlob(_) => ParamKind::NbtBlob,
        }
    }
}
