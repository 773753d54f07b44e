use super::{
    error::ParamError,
    value::{ParamKind, ParamValue},
};

/// Ordinals are one byte on the wire.
pub const MAX_PARAMS: usize = 256;

/// Handle to one registered parameter, carried by capability layers to
/// address their attributes in lists and shadows.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Param {
    index: u8,
    kind: ParamKind,
}

impl Param {
    pub fn index(self) -> u8 {
        self.index
    }

    pub fn kind(self) -> ParamKind {
        self.kind
    }
}

/// Immutable description of one parameter: its stable ordinal, value kind
/// and declared default.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDescriptor {
    index: u8,
    kind: ParamKind,
    default: ParamValue,
}

impl ParamDescriptor {
    pub fn index(&self) -> u8 {
        self.index
    }

    pub fn kind(&self) -> ParamKind {
        self.kind
    }

    pub fn default(&self) -> &ParamValue {
        &self.default
    }

    pub fn handle(&self) -> Param {
        Param {
            index: self.index,
            kind: self.kind,
        }
    }
}

/// Append-only, ordered parameter schema.
///
/// Registries compose by derivation: `derive` copies a base registry with
/// every ordinal preserved, and further `register` calls continue from the
/// base's next free ordinal. Two registries derived from the same base keep
/// identical ordinals for the shared prefix, which is what lets a generic
/// decoder interpret any entity's metadata stream without knowing its
/// concrete species.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamRegistry {
    descriptors: Vec<ParamDescriptor>,
}

impl ParamRegistry {
    pub fn new_root() -> Self {
        Self::default()
    }

    /// Copy of `base`, ready to accept further registrations. Ordinals never
    /// change once assigned.
    pub fn derive(base: &Self) -> Self {
        base.clone()
    }

    /// Appends a descriptor and returns its handle.
    ///
    /// # Panics
    ///
    /// Panics on a full registry or a kind/default mismatch. These are
    /// startup configuration errors; use `try_register` to surface them as
    /// values instead.
    pub fn register(&mut self, kind: ParamKind, default: ParamValue) -> Param {
        match self.try_register(kind, default) {
            Ok(param) => param,
            Err(error) => panic!("parameter registration failed: {}", error),
        }
    }

    pub fn try_register(
        &mut self,
        kind: ParamKind,
        default: ParamValue,
    ) -> Result<Param, ParamError> {
        if default.kind() != kind {
            return Err(ParamError::DefaultKindMismatch {
                declared: kind,
                default: default.kind(),
            });
        }
        if self.descriptors.len() >= MAX_PARAMS {
            return Err(ParamError::RegistryFull { max: MAX_PARAMS });
        }
        let index = self.descriptors.len() as u8;
        self.descriptors.push(ParamDescriptor {
            index,
            kind,
            default,
        });
        Ok(Param { index, kind })
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    pub fn descriptor(&self, index: u8) -> Option<&ParamDescriptor> {
        self.descriptors.get(usize::from(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ParamDescriptor> {
        self.descriptors.iter()
    }
}
