//! Size ceilings for dynmat containers

/// Maximum element count of a [`Sequence`](crate::Sequence)
pub const MAX_SEQUENCE_LENGTH: usize = 100_000_000;

/// Maximum row and column count of a [`Grid`](crate::Grid)
pub const MAX_GRID_DIMENSION: usize = 10_000;
