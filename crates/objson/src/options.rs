/// Render options as a plain bit-flag integer.
///
/// The visitor stores these and forwards them to the renderer unmodified.
/// Only the flags below are interpreted; all other bits are reserved and
/// pass through opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderOptions(pub u32);

impl RenderOptions {
    /// Indented, human-readable output.
    pub const PRETTY: RenderOptions = RenderOptions(1 << 0);

    pub fn contains(self, flag: RenderOptions) -> bool {
        self.0 & flag.0 == flag.0
    }

    pub fn is_pretty(self) -> bool {
        self.contains(Self::PRETTY)
    }

    pub fn bits(self) -> u32 {
        self.0
    }
}

impl From<u32> for RenderOptions {
    fn from(bits: u32) -> Self {
        RenderOptions(bits)
    }
}

impl core::ops::BitOr for RenderOptions {
    type Output = RenderOptions;

    fn bitor(self, rhs: RenderOptions) -> RenderOptions {
        RenderOptions(self.0 | rhs.0)
    }
}
