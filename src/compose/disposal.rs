use crate::foundation::error::{GifError, GifResult};

/// How a frame's transparent pixels are filled when it is composited.
///
/// Codes follow the GIF graphic-control-extension numbering (0-3).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum DisposalMethod {
    /// The frame's own pixels are authoritative everywhere and become the new baseline.
    #[default]
    None,
    /// Opaque pixels overwrite the baseline; transparent pixels show the accumulated canvas.
    DoNotDispose,
    /// Transparent pixels show frame 0, but only when frame 0 is itself `DoNotDispose`.
    RestoreBackground,
    /// Transparent pixels show the last frame that was not `RestorePrevious`.
    RestorePrevious,
}

impl DisposalMethod {
    /// Map a raw disposal code.
    pub fn from_code(code: u8) -> GifResult<Self> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::DoNotDispose),
            2 => Ok(Self::RestoreBackground),
            3 => Ok(Self::RestorePrevious),
            other => Err(GifError::invalid_animation(format!(
                "unknown disposal code {other}"
            ))),
        }
    }

    /// Raw disposal code.
    pub fn code(self) -> u8 {
        match self {
            Self::None => 0,
            Self::DoNotDispose => 1,
            Self::RestoreBackground => 2,
            Self::RestorePrevious => 3,
        }
    }

    /// Whether a frame with this disposal redefines the accumulation baseline.
    pub fn accumulates(self) -> bool {
        matches!(self, Self::None | Self::DoNotDispose)
    }
}

/// The decoder already maps reserved codes 4-7 to `Any`, so every decoded frame converts.
impl From<gif::DisposalMethod> for DisposalMethod {
    fn from(method: gif::DisposalMethod) -> Self {
        match method {
            gif::DisposalMethod::Any => Self::None,
            gif::DisposalMethod::Keep => Self::DoNotDispose,
            gif::DisposalMethod::Background => Self::RestoreBackground,
            gif::DisposalMethod::Previous => Self::RestorePrevious,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/disposal.rs"]
mod tests;
