use super::category::{Category, PerCategory};
use super::classifier::classify;
use super::participant::ParticipantResolver;
use super::spatial::{HeatmapPoint, SpatialAggregator};
use super::temporal::{minute_bucket, TemporalAggregator, TimelineSeriesEntry};
use crate::api::models::{ParticipantId, TimelineDto};
use crate::corpus::{MatchCorpus, TimelineSource};
use crate::diagnostics::{Diagnostics, TracingDiagnostics};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total_matches: usize,
    pub deaths_count: usize,
    pub kills_count: usize,
    pub assists_count: usize,
    pub objectives_count: usize,
}

impl Summary {
    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Death => self.deaths_count,
            Category::Kill => self.kills_count,
            Category::Assist => self.assists_count,
            Category::Objective => self.objectives_count,
        }
    }

    fn increment(&mut self, category: Category) {
        match category {
            Category::Death => self.deaths_count += 1,
            Category::Kill => self.kills_count += 1,
            Category::Assist => self.assists_count += 1,
            Category::Objective => self.objectives_count += 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregationResult {
    pub player_id: String,
    pub player_name: String,
    pub summary: Summary,
    pub heatmap: PerCategory<Vec<HeatmapPoint>>,
    pub timeline: PerCategory<Vec<TimelineSeriesEntry>>,
}

impl AggregationResult {
    /// All counters zero, all sequences empty.
    pub fn empty(player_id: &str, player_name: &str) -> Self {
        AggregationResult {
            player_id: player_id.to_string(),
            player_name: player_name.to_string(),
            summary: Summary::default(),
            heatmap: PerCategory::default(),
            timeline: PerCategory::default(),
        }
    }
}

/// Builds heatmap and per-minute timeline data for one player across a corpus.
pub struct TimelineAggregator<C: MatchCorpus> {
    corpus: C,
}

impl<C: MatchCorpus> TimelineAggregator<C> {
    pub fn new(corpus: C) -> Self {
        TimelineAggregator { corpus }
    }

    /// Aggregate with diagnostics sent to `tracing`.
    pub fn aggregate(&self, puuid: &str, player_name: &str) -> AggregationResult {
        self.aggregate_with(puuid, player_name, &mut TracingDiagnostics)
    }

    pub fn aggregate_with(
        &self,
        puuid: &str,
        player_name: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> AggregationResult {
        tracing::info!(player = player_name, "Generating heatmap data");

        let sources: Vec<TimelineSource> = match self.corpus.timeline_sources() {
            Ok(sources) => sources
                .into_iter()
                .filter(|source| !source.is_summary_artifact())
                .collect(),
            Err(e) => {
                diagnostics.corrupt_data("timelines", &format!("Error listing timelines: {}", e));
                Vec::new()
            }
        };

        if sources.is_empty() {
            tracing::warn!("No timeline files found");
            return AggregationResult::empty(puuid, player_name);
        }

        let participants = self.map_participants(&sources, puuid, diagnostics);
        let total_matches = participants.len();
        tracing::info!(total_matches, "Found player in {} matches", total_matches);

        let mut summary = Summary {
            total_matches,
            ..Summary::default()
        };
        let mut spatial = SpatialAggregator::new();
        let mut temporal = TemporalAggregator::new();

        for source in &sources {
            let timeline = match self.corpus.load_timeline(source) {
                Ok(timeline) => timeline,
                Err(e) => {
                    diagnostics.corrupt_data(&source.name, &format!("Error processing: {}", e));
                    continue;
                }
            };

            let match_id = timeline.metadata.match_id.as_str();
            let Some(&participant) = participants.get(match_id) else {
                continue;
            };

            for frame in &timeline.info.frames {
                for event in &frame.events {
                    let (Some(classified), Some(position)) =
                        (classify(event, participant), event.position)
                    else {
                        continue;
                    };

                    spatial.record(
                        classified.category,
                        HeatmapPoint {
                            x: position.x,
                            y: position.y,
                            timestamp: event.timestamp,
                            match_id: match_id.to_string(),
                            peer: classified.peer,
                        },
                    );
                    temporal.record(classified.category, minute_bucket(event.timestamp));
                    summary.increment(classified.category);
                }
            }
        }

        tracing::info!(
            total_matches = summary.total_matches,
            deaths = summary.deaths_count,
            kills = summary.kills_count,
            assists = summary.assists_count,
            objectives = summary.objectives_count,
            "Generated heatmap"
        );

        AggregationResult {
            player_id: puuid.to_string(),
            player_name: player_name.to_string(),
            summary,
            heatmap: spatial.into_points(),
            timeline: temporal.finalize_all(total_matches),
        }
    }

    /// First pass: match id -> participant id for every match the player was found in.
    fn map_participants(
        &self,
        sources: &[TimelineSource],
        puuid: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> HashMap<String, ParticipantId> {
        let mut resolver = ParticipantResolver::new(&self.corpus, puuid);
        let mut participants = HashMap::new();

        for source in sources {
            let timeline: TimelineDto = match self.corpus.load_timeline(source) {
                Ok(timeline) => timeline,
                Err(e) => {
                    diagnostics.corrupt_data(&source.name, &format!("Error reading: {}", e));
                    continue;
                }
            };

            let match_id = timeline.metadata.match_id;
            if let Some(participant) = resolver.resolve(&match_id, diagnostics) {
                tracing::debug!(match_id = %match_id, participant, "Resolved participant");
                participants.insert(match_id, participant);
            }
        }

        participants
    }
}
