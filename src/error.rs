use crate::geometry::Fp;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A divisor would be zero or an angle is outside its valid domain.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: Fp,
        reason: &'static str,
    },
    #[error("unknown alpha mode {0:?}")]
    UnknownAlphaMode(String),
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
    #[error("glTF error: {0}")]
    Gltf(#[from] gltf::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid(name: &'static str, value: Fp, reason: &'static str) -> Self {
        Error::InvalidParameter {
            name,
            value,
            reason,
        }
    }
}
