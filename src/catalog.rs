use crate::model::{ClubModel, ClubType, Flex, KickPoint, Manufacturer, ShaftModel};
use ahash::RandomState;
use std::collections::HashMap;

/// Read-only equipment reference data: manufacturers with their club models,
/// plus the shaft list. Built once, never mutated, safe to share across
/// concurrent callers.
///
/// Club and shaft ids are globally unique by construction; the indexes built
/// here make that invariant explicit instead of re-scanning the lists on
/// every lookup.
#[derive(Clone, Debug)]
pub struct Catalog {
    manufacturers: Vec<Manufacturer>,
    shafts: Vec<ShaftModel>,
    // club id -> (manufacturer index, model index)
    club_index: HashMap<i32, (usize, usize), RandomState>,
    shaft_index: HashMap<i32, usize, RandomState>,
}

impl Catalog {
    pub fn new(manufacturers: Vec<Manufacturer>, shafts: Vec<ShaftModel>) -> Self {
        let mut club_index: HashMap<i32, (usize, usize), RandomState> = HashMap::default();
        for (mi, manufacturer) in manufacturers.iter().enumerate() {
            for (ci, club) in manufacturer.models.iter().enumerate() {
                club_index.entry(club.id).or_insert((mi, ci));
            }
        }
        let mut shaft_index: HashMap<i32, usize, RandomState> = HashMap::default();
        for (si, shaft) in shafts.iter().enumerate() {
            shaft_index.entry(shaft.id).or_insert(si);
        }
        Self {
            manufacturers,
            shafts,
            club_index,
            shaft_index,
        }
    }

    /// The built-in demo catalog: three manufacturers, nine shafts.
    #[must_use]
    pub fn standard() -> Self {
        let manufacturers = vec![
            Manufacturer {
                id: 1,
                name: "Titleist".to_string(),
                models: vec![
                    club(101, "TSR3 Driver", ClubType::Driver, 3500, 350),
                    club(102, "T300 Iron Set", ClubType::Iron, 4200, 420),
                    club(103, "Vokey SM9 Wedge", ClubType::Wedge, 1800, 180),
                ],
            },
            Manufacturer {
                id: 2,
                name: "TaylorMade".to_string(),
                models: vec![
                    club(201, "Stealth 2 Driver", ClubType::Driver, 3800, 380),
                    club(202, "P770 Iron Set", ClubType::Iron, 4500, 450),
                    club(203, "MG4 Wedge", ClubType::Wedge, 1600, 160),
                ],
            },
            Manufacturer {
                id: 3,
                name: "Callaway".to_string(),
                models: vec![
                    club(301, "Paradym Driver", ClubType::Driver, 3600, 360),
                    club(302, "Apex Pro Iron Set", ClubType::Iron, 4000, 400),
                    club(303, "Jaws Raw Wedge", ClubType::Wedge, 1700, 170),
                ],
            },
        ];
        let shafts = vec![
            shaft(1, "Project X", Flex::R, "95g", KickPoint::Mid),
            shaft(2, "Project X", Flex::S, "105g", KickPoint::Mid),
            shaft(3, "Project X", Flex::X, "115g", KickPoint::Mid),
            shaft(4, "KBS Tour", Flex::R, "120g", KickPoint::Low),
            shaft(5, "KBS Tour", Flex::S, "130g", KickPoint::Low),
            shaft(6, "KBS Tour", Flex::X, "135g", KickPoint::Low),
            shaft(7, "Graphite Design", Flex::R, "60g", KickPoint::High),
            shaft(8, "Graphite Design", Flex::S, "65g", KickPoint::High),
            shaft(9, "Graphite Design", Flex::X, "70g", KickPoint::High),
        ];
        Self::new(manufacturers, shafts)
    }

    #[must_use]
    pub fn manufacturers(&self) -> &[Manufacturer] {
        &self.manufacturers
    }

    #[must_use]
    pub fn shafts(&self) -> &[ShaftModel] {
        &self.shafts
    }

    #[must_use]
    pub fn find_club_by_id(&self, id: i32) -> Option<&ClubModel> {
        let (mi, ci) = *self.club_index.get(&id)?;
        Some(&self.manufacturers[mi].models[ci])
    }

    /// The manufacturer a club model belongs to, for display strings.
    #[must_use]
    pub fn manufacturer_of(&self, club_id: i32) -> Option<&Manufacturer> {
        let (mi, _) = *self.club_index.get(&club_id)?;
        Some(&self.manufacturers[mi])
    }

    #[must_use]
    pub fn find_shaft_by_id(&self, id: i32) -> Option<&ShaftModel> {
        let si = *self.shaft_index.get(&id)?;
        Some(&self.shafts[si])
    }

    /// First driver in the manufacturer's model list. Every manufacturer is
    /// expected to carry one; absence is a data-integrity problem.
    #[must_use]
    pub fn driver_for<'a>(&self, manufacturer: &'a Manufacturer) -> Option<&'a ClubModel> {
        manufacturer
            .models
            .iter()
            .find(|m| m.club_type == ClubType::Driver)
    }

    /// First shaft in catalog order with the given flex.
    #[must_use]
    pub fn find_shaft_by_flex(&self, flex: Flex) -> Option<&ShaftModel> {
        self.shafts.iter().find(|s| s.flex == flex)
    }

    /// First shaft in catalog order matching both flex and line name.
    #[must_use]
    pub fn find_shaft(&self, flex: Flex, name: &str) -> Option<&ShaftModel> {
        self.shafts
            .iter()
            .find(|s| s.flex == flex && s.name == name)
    }

    /// First shaft in catalog order matching flex and kick point.
    #[must_use]
    pub fn find_shaft_by_flex_and_kick(
        &self,
        flex: Flex,
        kick_point: KickPoint,
    ) -> Option<&ShaftModel> {
        self.shafts
            .iter()
            .find(|s| s.flex == flex && s.kick_point == kick_point)
    }
}

fn club(id: i32, name: &str, club_type: ClubType, price: i32, rental_price: i32) -> ClubModel {
    ClubModel {
        id,
        name: name.to_string(),
        club_type,
        price,
        rental_price,
    }
}

fn shaft(id: i32, name: &str, flex: Flex, weight: &str, kick_point: KickPoint) -> ShaftModel {
    ShaftModel {
        id,
        name: name.to_string(),
        flex,
        weight: weight.to_string(),
        kick_point,
    }
}
