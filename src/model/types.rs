use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClubType {
    Driver,
    Iron,
    Wedge,
}

impl fmt::Display for ClubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ClubType::Driver => "driver",
            ClubType::Iron => "iron",
            ClubType::Wedge => "wedge",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ClubModel {
    pub id: i32,
    pub name: String,
    pub club_type: ClubType,
    pub price: i32,
    pub rental_price: i32,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Manufacturer {
    pub id: i32,
    pub name: String,
    pub models: Vec<ClubModel>,
}

/// Shaft stiffness category. The primary driver of simulated outcomes.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flex {
    R,
    S,
    X,
}

impl fmt::Display for Flex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Flex::R => "R",
            Flex::S => "S",
            Flex::X => "X",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum KickPoint {
    Low,
    Mid,
    High,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ShaftModel {
    pub id: i32,
    pub name: String,
    pub flex: Flex,
    pub weight: String,
    pub kick_point: KickPoint,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tempo {
    Slow,
    Medium,
    Fast,
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tempo::Slow => "slow",
            Tempo::Medium => "medium",
            Tempo::Fast => "fast",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwingPath {
    Square,
    SlightOutToIn,
    SlightInToOut,
    OutToIn,
    InToOut,
}

impl fmt::Display for SwingPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SwingPath::Square => "square",
            SwingPath::SlightOutToIn => "slightly out-to-in",
            SwingPath::SlightInToOut => "slightly in-to-out",
            SwingPath::OutToIn => "out-to-in",
            SwingPath::InToOut => "in-to-out",
        };
        write!(f, "{s}")
    }
}

/// One sample of the clubhead path during the swing. `x` runs 0..=100 in
/// steps of 5.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct PathPoint {
    pub x: i32,
    pub y: f64,
}

/// Swing phase durations in seconds.
#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct SwingTiming {
    pub backswing: f64,
    pub downswing: f64,
    pub impact: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug)]
pub struct BallFlight {
    pub distance: i32,
    pub height: i32,
    pub sidespin: i32,
}

/// Output of one analysis run. Immutable once produced.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct SwingMetrics {
    pub head_speed: f64,
    pub tempo: Tempo,
    pub swing_path: SwingPath,
    pub clubhead_path: Vec<PathPoint>,
    pub timing: SwingTiming,
    pub recommended_club: String,
    pub recommended_shaft: String,
    pub ball_flight: BallFlight,
}

/// Opaque handle for an uploaded swing video. Its presence only signals
/// that an upload happened; the contents are never inspected.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct VideoRef(pub String);

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    Distance,
    Accuracy,
    Forgiving,
    Control,
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Strategy::Distance => "distance",
            Strategy::Accuracy => "accuracy",
            Strategy::Forgiving => "forgiving",
            Strategy::Control => "control",
        };
        write!(f, "{s}")
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExpectedImprovement {
    pub title: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Recommendation {
    pub id: Strategy,
    pub title: String,
    pub subtitle: String,
    pub club: String,
    pub shaft: String,
    pub benefits: Vec<String>,
    pub expected_improvement: ExpectedImprovement,
    pub reasoning: String,
    pub club_id: i32,
    pub shaft_id: i32,
}

/// Outcome adjustments derived from the chosen shaft's flex.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct ClubModifier {
    pub distance: f64,
    pub accuracy: f64,
    pub ball_speed: f64,
    pub launch_angle: f64,
    pub spin: f64,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TrajectoryPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationResult {
    pub distance: i32,
    pub accuracy: i32,
    pub ball_speed: i32,
    pub launch_angle: i32,
    pub spin_rate: i32,
    pub trajectory: Vec<TrajectoryPoint>,
}

/// One line of the stored analysis history shown on the home screen.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AnalysisRecord {
    pub id: i32,
    pub date: NaiveDate,
    pub head_speed: f64,
    pub tempo: Tempo,
    pub swing_path: SwingPath,
    pub recommended_club: String,
    pub recommended_shaft: String,
}
