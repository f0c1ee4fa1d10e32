use crate::domain::materials::Phase;

/// Per-phase tracing rules
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceProfile {
    /// Phase of the moving particle, decides what it may swap with
    pub mover: Phase,
    /// Iteration cap for one trace
    pub max_steps: u32,
    /// Slide sideways along the row when a vertical step and its diagonal
    /// are both blocked
    pub lateral_slip: bool,
    /// Vertical direction tried by deflections of purely horizontal moves
    pub rest_dy: i32,
}

impl TraceProfile {
    pub const SOLID: TraceProfile = TraceProfile {
        mover: Phase::Solid,
        max_steps: 3,
        lateral_slip: false,
        rest_dy: 1,
    };

    pub const LIQUID: TraceProfile = TraceProfile {
        mover: Phase::Liquid,
        max_steps: 10,
        lateral_slip: true,
        rest_dy: 1,
    };

    pub const GAS: TraceProfile = TraceProfile {
        mover: Phase::Gas,
        max_steps: 5,
        lateral_slip: false,
        rest_dy: -1,
    };

    /// Stuck particles are never traced.
    pub fn for_phase(phase: Phase) -> Option<TraceProfile> {
        match phase {
            Phase::SolidStuck => None,
            Phase::Solid => Some(Self::SOLID),
            Phase::Liquid => Some(Self::LIQUID),
            Phase::Gas => Some(Self::GAS),
        }
    }
}

/// Where a traced particle ended up
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceOutcome {
    pub x: i32,
    pub y: i32,
    /// Loop iterations consumed
    pub iterations: u32,
    /// Cell transitions made (moves and swaps)
    pub steps: u32,
    pub swaps: u32,
}

impl TraceOutcome {
    #[inline]
    pub fn stay(x: i32, y: i32) -> Self {
        Self { x, y, iterations: 0, steps: 0, swaps: 0 }
    }

    #[inline]
    pub fn moved_from(&self, x: i32, y: i32) -> bool {
        self.x != x || self.y != y
    }
}
