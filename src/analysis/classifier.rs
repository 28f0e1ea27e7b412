use super::category::Category;
use crate::api::models::{EventDto, EventKind, ParticipantId};
use serde::Serialize;

/// The other party (or target) of a classified event, kept for inspection.
///
/// Serialized flattened into the heatmap point, e.g. `"victim_id": 7`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PeerField {
    KillerId(Option<ParticipantId>),
    VictimId(Option<ParticipantId>),
    MonsterType(Option<String>),
    BuildingType(Option<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: Category,
    pub peer: PeerField,
}

struct Rule {
    category: Category,
    matches: fn(&EventDto, ParticipantId) -> bool,
    peer: fn(&EventDto) -> PeerField,
}

/// Checked top to bottom; the first hit wins, so death > kill > assist > objective.
const RULES: [Rule; 5] = [
    Rule {
        category: Category::Death,
        matches: |e, p| e.kind == EventKind::ChampionKill && e.is_victim(p),
        peer: |e| PeerField::KillerId(e.killer_id),
    },
    Rule {
        category: Category::Kill,
        matches: |e, p| e.kind == EventKind::ChampionKill && e.is_killer(p),
        peer: |e| PeerField::VictimId(e.victim_id),
    },
    Rule {
        category: Category::Assist,
        matches: |e, p| e.kind == EventKind::ChampionKill && e.is_assisting(p),
        peer: |e| PeerField::VictimId(e.victim_id),
    },
    Rule {
        category: Category::Objective,
        matches: |e, p| e.kind == EventKind::EliteMonsterKill && e.is_killer(p),
        peer: |e| PeerField::MonsterType(e.monster_type.clone()),
    },
    Rule {
        category: Category::Objective,
        matches: |e, p| e.kind == EventKind::BuildingKill && (e.is_assisting(p) || e.is_killer(p)),
        peer: |e| PeerField::BuildingType(e.building_type.clone()),
    },
];

/// Decide which single category, if any, `event` counts towards for `participant`.
///
/// Events without a position never count.
pub fn classify(event: &EventDto, participant: ParticipantId) -> Option<Classification> {
    event.position?;

    RULES
        .iter()
        .find(|rule| (rule.matches)(event, participant))
        .map(|rule| Classification {
            category: rule.category,
            peer: (rule.peer)(event),
        })
}
