use crate::catalog::Catalog;
use crate::error::EngineError;
use crate::model::{
    ClubModel, ExpectedImprovement, Flex, KickPoint, Manufacturer, Recommendation, ShaftModel,
    Strategy, SwingMetrics,
};

/// Build the four fitting recommendations for a set of swing metrics.
///
/// Output is always exactly four entries in the fixed order distance,
/// accuracy, forgiving, control. The only metric-dependent piece of catalog
/// selection is the distance strategy's shaft flex (S above 42 m/s head
/// speed, R otherwise); everything else is a fixed catalog reference, so two
/// calls with the same metrics yield identical output.
pub fn generate_recommendations(
    catalog: &Catalog,
    metrics: &SwingMetrics,
) -> Result<Vec<Recommendation>, EngineError> {
    Ok(vec![
        distance_pick(catalog, metrics)?,
        accuracy_pick(catalog, metrics)?,
        forgiving_pick(catalog, metrics)?,
        control_pick(catalog, metrics)?,
    ])
}

fn distance_pick(catalog: &Catalog, metrics: &SwingMetrics) -> Result<Recommendation, EngineError> {
    let (manufacturer, club) = fixed_club(catalog, 1)?;
    let flex = if metrics.head_speed > 42.0 {
        Flex::S
    } else {
        Flex::R
    };
    let shaft = catalog.find_shaft(flex, "Graphite Design").ok_or_else(|| {
        EngineError::CatalogIntegrity(format!("no Graphite Design shaft with flex {flex}"))
    })?;
    Ok(build(
        Strategy::Distance,
        "Maximum Distance",
        "Lightweight, low-spin build for your swing speed",
        manufacturer,
        club,
        shaft,
        &[
            "Lightweight shaft raises clubhead speed",
            "Low spin adds run-out after landing",
            "High launch without ballooning",
        ],
        ExpectedImprovement {
            title: "Expected carry gain".to_string(),
            value: "+10-15 yd".to_string(),
        },
        format!(
            "At {:.1} m/s head speed, a lightweight low-spin shaft converts your speed into maximum carry.",
            metrics.head_speed
        ),
    ))
}

fn accuracy_pick(catalog: &Catalog, metrics: &SwingMetrics) -> Result<Recommendation, EngineError> {
    let (manufacturer, club) = fixed_club(catalog, 0)?;
    let shaft = catalog.find_shaft(Flex::S, "Project X").ok_or_else(|| {
        EngineError::CatalogIntegrity("no Project X shaft with flex S".to_string())
    })?;
    Ok(build(
        Strategy::Accuracy,
        "Accuracy First",
        "Stable mid-kick profile for a repeatable strike",
        manufacturer,
        club,
        shaft,
        &[
            "Mid kick point stabilizes the face through impact",
            "Tighter left-right dispersion",
            "Consistent flight window shot to shot",
        ],
        ExpectedImprovement {
            title: "Dispersion".to_string(),
            value: "-20% offline".to_string(),
        },
        format!(
            "Your {} swing path rewards a stable mid-kick shaft that keeps the face square at impact.",
            metrics.swing_path
        ),
    ))
}

fn forgiving_pick(
    catalog: &Catalog,
    metrics: &SwingMetrics,
) -> Result<Recommendation, EngineError> {
    let (manufacturer, club) = fixed_club(catalog, 2)?;
    let shaft = catalog
        .find_shaft_by_flex_and_kick(Flex::R, KickPoint::High)
        .ok_or_else(|| {
            EngineError::CatalogIntegrity("no R-flex shaft with high kick point".to_string())
        })?;
    Ok(build(
        Strategy::Forgiving,
        "Easy Launch",
        "High-MOI head with an easy-launching shaft",
        manufacturer,
        club,
        shaft,
        &[
            "High MOI keeps off-center strikes on line",
            "High kick point gets the ball airborne easily",
            "Softer R flex smooths out tempo",
        ],
        ExpectedImprovement {
            title: "Mishit carry retained".to_string(),
            value: "90%+".to_string(),
        },
        format!(
            "A high-launch, forgiving setup takes the sting out of the {} tendency in your path.",
            metrics.swing_path
        ),
    ))
}

fn control_pick(catalog: &Catalog, metrics: &SwingMetrics) -> Result<Recommendation, EngineError> {
    let (manufacturer, club) = fixed_club(catalog, 0)?;
    let shaft = catalog
        .find_shaft(Flex::X, "KBS Tour")
        .ok_or_else(|| EngineError::CatalogIntegrity("no KBS Tour shaft with flex X".to_string()))?;
    Ok(build(
        Strategy::Control,
        "Flight Control",
        "Heavier low-kick shaft for a penetrating flight",
        manufacturer,
        club,
        shaft,
        &[
            "Low kick point flattens the trajectory",
            "Extra weight steadies the transition",
            "Penetrating flight cuts through wind",
        ],
        ExpectedImprovement {
            title: "Peak height".to_string(),
            value: "-15%".to_string(),
        },
        format!(
            "With a {} tempo, a heavier low-kick shaft keeps your ball flight down and workable.",
            metrics.tempo
        ),
    ))
}

// Strategies reference clubs by manufacturer position; the tables are
// co-maintained with the catalog, so a miss here is an integrity bug.
fn fixed_club(
    catalog: &Catalog,
    manufacturer_idx: usize,
) -> Result<(&Manufacturer, &ClubModel), EngineError> {
    let manufacturer = catalog.manufacturers().get(manufacturer_idx).ok_or_else(|| {
        EngineError::CatalogIntegrity(format!("no manufacturer at index {manufacturer_idx}"))
    })?;
    let club = manufacturer.models.first().ok_or_else(|| {
        EngineError::CatalogIntegrity(format!("manufacturer {} has no models", manufacturer.name))
    })?;
    Ok((manufacturer, club))
}

#[allow(clippy::too_many_arguments)]
fn build(
    id: Strategy,
    title: &str,
    subtitle: &str,
    manufacturer: &Manufacturer,
    club: &ClubModel,
    shaft: &ShaftModel,
    benefits: &[&str],
    expected_improvement: ExpectedImprovement,
    reasoning: String,
) -> Recommendation {
    Recommendation {
        id,
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        club: format!("{} {}", manufacturer.name, club.name),
        shaft: format!("{} {}-Flex", shaft.name, shaft.flex),
        benefits: benefits.iter().map(|b| (*b).to_string()).collect(),
        expected_improvement,
        reasoning,
        club_id: club.id,
        shaft_id: shaft.id,
    }
}
