/// Counts finished asset loads and opens once all have arrived
///
/// The frame driver must not start before both portraits are decoded.
/// A load that fails is never counted, so the gate simply stays shut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetGate {
    loaded: u8,
    required: u8,
}

impl AssetGate {
    /// One portrait per side
    pub const PORTRAITS: u8 = 2;

    pub fn new(required: u8) -> Self {
        Self {
            loaded: 0,
            required,
        }
    }

    /// Record one finished load
    ///
    /// Returns true exactly once: on the load that opens the gate.
    pub fn mark_loaded(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.loaded += 1;
        self.is_open()
    }

    pub fn is_open(&self) -> bool {
        self.loaded >= self.required
    }

    pub fn loaded(&self) -> u8 {
        self.loaded
    }
}

impl Default for AssetGate {
    fn default() -> Self {
        Self::new(Self::PORTRAITS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_opens_on_second_portrait() {
        let mut gate = AssetGate::default();
        assert!(!gate.is_open());

        assert!(!gate.mark_loaded(), "One portrait is not enough");
        assert!(!gate.is_open());

        assert!(gate.mark_loaded(), "Second portrait opens the gate");
        assert!(gate.is_open());
        assert_eq!(gate.loaded(), 2);
    }

    #[test]
    fn test_gate_fires_only_once() {
        let mut gate = AssetGate::default();
        gate.mark_loaded();
        gate.mark_loaded();

        assert!(!gate.mark_loaded(), "Late loads must not start a second loop");
        assert!(gate.is_open());
        assert_eq!(gate.loaded(), 2);
    }
}
