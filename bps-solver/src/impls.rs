/// Implementation using Brent's bounded method (golden section with parabolic interpolation)
pub mod brent;

/// Implementation using plain golden-section search
pub mod golden;
