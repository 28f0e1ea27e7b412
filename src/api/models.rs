use serde::{Deserialize, Deserializer};

/// 1-based seat of a player inside one match roster.
pub type ParticipantId = u32;

// Match V5 response (only the roster is consumed)
#[derive(Debug, Deserialize)]
pub struct MatchDto {
    pub metadata: MatchMetadata,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    #[serde(default)]
    pub match_id: String,
    pub participants: Vec<String>,
}

// Match V5 timeline response
#[derive(Debug, Deserialize)]
pub struct TimelineDto {
    pub metadata: TimelineMetadata,
    pub info: TimelineInfo,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineMetadata {
    pub match_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfo {
    pub frames: Vec<FrameDto>,
}

#[derive(Debug, Deserialize)]
pub struct FrameDto {
    #[serde(default)]
    pub events: Vec<EventDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventKind {
    ChampionKill,
    EliteMonsterKill,
    BuildingKill,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub timestamp: u64,
    #[serde(default)]
    pub killer_id: Option<ParticipantId>,
    #[serde(default)]
    pub victim_id: Option<ParticipantId>,
    #[serde(default)]
    pub assisting_participant_ids: Vec<ParticipantId>,
    #[serde(default)]
    pub monster_type: Option<String>,
    #[serde(default)]
    pub building_type: Option<String>,
    #[serde(default, deserialize_with = "position_or_empty")]
    pub position: Option<Position>,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Position {
    pub x: i64,
    pub y: i64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPosition {
    Point(Position),
    Empty(EmptyObject),
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EmptyObject {}

// `{}` and `null` both mean "no position"; a half-filled object is still an error.
fn position_or_empty<'de, D>(deserializer: D) -> Result<Option<Position>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawPosition>::deserialize(deserializer)? {
        Some(RawPosition::Point(position)) => Some(position),
        Some(RawPosition::Empty(_)) | None => None,
    })
}

impl EventDto {
    pub fn is_killer(&self, participant: ParticipantId) -> bool {
        self.killer_id == Some(participant)
    }

    pub fn is_victim(&self, participant: ParticipantId) -> bool {
        self.victim_id == Some(participant)
    }

    pub fn is_assisting(&self, participant: ParticipantId) -> bool {
        self.assisting_participant_ids.contains(&participant)
    }
}
