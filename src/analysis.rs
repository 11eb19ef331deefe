use crate::catalog::Catalog;
use crate::error::EngineError;
use crate::model::{
    BallFlight, Flex, PathPoint, SwingMetrics, SwingPath, SwingTiming, Tempo, VideoRef,
};
use rand::Rng;
use std::f64::consts::PI;

const TEMPOS: [Tempo; 3] = [Tempo::Slow, Tempo::Medium, Tempo::Fast];
const SWING_PATHS: [SwingPath; 5] = [
    SwingPath::Square,
    SwingPath::SlightOutToIn,
    SwingPath::SlightInToOut,
    SwingPath::OutToIn,
    SwingPath::InToOut,
];

/// Shaft flex for a given head speed in m/s. Boundaries are inclusive on the
/// stiffer side: 38.0 is already S, 43.0 is already X.
#[must_use]
pub fn flex_for_head_speed(head_speed: f64) -> Flex {
    if head_speed < 38.0 {
        Flex::R
    } else if head_speed < 43.0 {
        Flex::S
    } else {
        Flex::X
    }
}

/// Produce swing metrics for an uploaded video.
///
/// The video itself is never decoded; its presence only signals that an
/// upload happened. All metrics are sampled from bounded uniform ranges,
/// then the club and shaft suggestions are derived from the catalog and the
/// head-speed flex rule.
pub fn synthesize_swing<R: Rng + ?Sized>(
    catalog: &Catalog,
    _video: &VideoRef,
    rng: &mut R,
) -> Result<SwingMetrics, EngineError> {
    let head_speed = round_to(rng.gen_range(35.0..45.0), 1);
    let tempo = TEMPOS[rng.gen_range(0..TEMPOS.len())];
    let swing_path = SWING_PATHS[rng.gen_range(0..SWING_PATHS.len())];

    let manufacturers = catalog.manufacturers();
    let manufacturer = &manufacturers[rng.gen_range(0..manufacturers.len())];
    let driver = catalog.driver_for(manufacturer).ok_or_else(|| {
        EngineError::CatalogIntegrity(format!("manufacturer {} has no driver", manufacturer.name))
    })?;

    let flex = flex_for_head_speed(head_speed);
    let shaft = catalog.find_shaft_by_flex(flex).ok_or_else(|| {
        EngineError::CatalogIntegrity(format!("no shaft in catalog with flex {flex}"))
    })?;

    let clubhead_path = (0..=100)
        .step_by(5)
        .map(|x| PathPoint {
            x,
            y: (f64::from(x) * PI / 180.0).sin() * 30.0 + rng.gen_range(-5.0..5.0),
        })
        .collect();

    let timing = SwingTiming {
        backswing: round_to(rng.gen_range(0.8..1.1), 2),
        downswing: round_to(rng.gen_range(0.25..0.35), 2),
        impact: round_to(rng.gen_range(0.01..0.03), 3),
    };

    let ball_flight = BallFlight {
        distance: rng.gen_range(200..250),
        height: rng.gen_range(25..45),
        sidespin: rng.gen_range(-500..500),
    };

    Ok(SwingMetrics {
        head_speed,
        tempo,
        swing_path,
        clubhead_path,
        timing,
        recommended_club: format!("{} {}", manufacturer.name, driver.name),
        recommended_shaft: format!("{} {}-Flex", shaft.name, shaft.flex),
        ball_flight,
    })
}

/// `synthesize_swing` with the thread-local rng.
pub fn analyze_swing(catalog: &Catalog, video: &VideoRef) -> Result<SwingMetrics, EngineError> {
    synthesize_swing(catalog, video, &mut rand::thread_rng())
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
