use crate::catalog::Catalog;
use crate::error::EngineError;
use crate::model::{ClubModifier, Flex, SimulationResult, SwingMetrics, TrajectoryPoint};
use std::f64::consts::PI;

/// Carry used when a caller has no measured ball flight, e.g. when hitting
/// from a history record that predates flight tracking.
pub const DEFAULT_CARRY_YARDS: i32 = 220;

impl ClubModifier {
    /// Outcome adjustments for a shaft flex. Stiffer shafts trade accuracy
    /// and launch for distance.
    #[must_use]
    pub fn for_flex(flex: Flex) -> Self {
        let neutral = Self {
            distance: 1.0,
            accuracy: 0.0,
            ball_speed: 1.0,
            launch_angle: 0.0,
            spin: 0.0,
        };
        match flex {
            Flex::R => Self {
                distance: 0.95,
                accuracy: 0.10,
                launch_angle: 1.0,
                ..neutral
            },
            Flex::S => Self {
                distance: 1.0,
                accuracy: 0.05,
                ..neutral
            },
            Flex::X => Self {
                distance: 1.05,
                accuracy: -0.05,
                launch_angle: -1.0,
                ..neutral
            },
        }
    }
}

#[must_use]
pub fn base_distance_or_default(distance: Option<i32>) -> i32 {
    distance.unwrap_or(DEFAULT_CARRY_YARDS)
}

/// Simulate hitting with the chosen club and shaft.
///
/// Both ids must resolve against the catalog; an unknown id fails the call
/// and the same arguments will always fail. The club is resolved for
/// validation but the outcome currently depends on shaft flex alone, so two
/// different clubs with the same shaft produce identical results.
pub fn simulate_hit(
    catalog: &Catalog,
    club_id: i32,
    shaft_id: i32,
    metrics: &SwingMetrics,
) -> Result<SimulationResult, EngineError> {
    let _club = catalog
        .find_club_by_id(club_id)
        .ok_or(EngineError::ClubNotFound(club_id))?;
    let shaft = catalog
        .find_shaft_by_id(shaft_id)
        .ok_or(EngineError::ShaftNotFound(shaft_id))?;

    let modifier = ClubModifier::for_flex(shaft.flex);
    let base_distance = base_distance_or_default(Some(metrics.ball_flight.distance));
    Ok(hit_with_modifier(&modifier, base_distance, metrics.head_speed))
}

/// Core outcome arithmetic, split out so tests can drive it with arbitrary
/// modifiers. Accuracy is deliberately not clamped to 0-100.
#[must_use]
pub fn hit_with_modifier(
    modifier: &ClubModifier,
    base_distance: i32,
    head_speed: f64,
) -> SimulationResult {
    let distance = (f64::from(base_distance) * modifier.distance).floor() as i32;
    SimulationResult {
        distance,
        accuracy: (80.0 + modifier.accuracy * 20.0).floor() as i32,
        ball_speed: (head_speed * 1.4 * modifier.ball_speed).floor() as i32,
        launch_angle: (12.0 + modifier.launch_angle).floor() as i32,
        spin_rate: (2500.0 + modifier.spin).floor() as i32,
        trajectory: trajectory(f64::from(distance)),
    }
}

// Closed-form arc: a single hump peaking near mid-flight with a slight
// taper in the back half standing in for drag. Not physics; the exact
// formula and 51-sample count are part of the contract.
fn trajectory(distance: f64) -> Vec<TrajectoryPoint> {
    (0..=50)
        .map(|i| {
            let progress = f64::from(i) / 50.0;
            TrajectoryPoint {
                x: distance * progress,
                y: 45.0 * (progress * PI).sin() * (1.0 - progress * 0.1),
            }
        })
        .collect()
}
