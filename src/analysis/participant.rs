use crate::api::models::ParticipantId;
use crate::corpus::MatchCorpus;
use crate::diagnostics::Diagnostics;
use std::collections::HashMap;

/// Maps a player's PUUID to their participant id, one match at a time.
///
/// Results (including misses) are memoized per match id for the lifetime of
/// the resolver, which is one aggregation run.
pub struct ParticipantResolver<'a, C: MatchCorpus + ?Sized> {
    corpus: &'a C,
    puuid: &'a str,
    resolved: HashMap<String, Option<ParticipantId>>,
}

impl<'a, C: MatchCorpus + ?Sized> ParticipantResolver<'a, C> {
    pub fn new(corpus: &'a C, puuid: &'a str) -> Self {
        ParticipantResolver {
            corpus,
            puuid,
            resolved: HashMap::new(),
        }
    }

    pub fn resolve(
        &mut self,
        match_id: &str,
        diagnostics: &mut dyn Diagnostics,
    ) -> Option<ParticipantId> {
        if let Some(cached) = self.resolved.get(match_id) {
            return *cached;
        }

        let participant = self.lookup(match_id, diagnostics);
        self.resolved.insert(match_id.to_string(), participant);
        participant
    }

    fn lookup(&self, match_id: &str, diagnostics: &mut dyn Diagnostics) -> Option<ParticipantId> {
        let match_data = match self.corpus.find_match(match_id) {
            Ok(Some(match_data)) => match_data,
            Ok(None) => {
                diagnostics.missing_data(match_id, "Match file not found");
                return None;
            }
            Err(e) => {
                diagnostics.missing_data(match_id, &format!("Error reading match file: {}", e));
                return None;
            }
        };

        let participant = match_data
            .metadata
            .participants
            .iter()
            .position(|puuid| puuid == self.puuid)
            .map(|idx| idx as ParticipantId + 1);

        if participant.is_none() {
            tracing::debug!(match_id, "Player not in match roster");
        }

        participant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{MatchDto, MatchMetadata, TimelineDto};
    use crate::corpus::TimelineSource;
    use crate::diagnostics::{RecordingDiagnostics, MISSING_DATA};
    use crate::error::AppError;
    use std::cell::Cell;

    struct RosterCorpus {
        lookups: Cell<usize>,
    }

    impl MatchCorpus for RosterCorpus {
        fn timeline_sources(&self) -> Result<Vec<TimelineSource>, AppError> {
            Ok(Vec::new())
        }

        fn load_timeline(&self, source: &TimelineSource) -> Result<TimelineDto, AppError> {
            Err(AppError::JsonError(source.name.clone()))
        }

        fn find_match(&self, match_id: &str) -> Result<Option<MatchDto>, AppError> {
            self.lookups.set(self.lookups.get() + 1);
            match match_id {
                "NA1_1" => Ok(Some(MatchDto {
                    metadata: MatchMetadata {
                        match_id: match_id.to_string(),
                        participants: vec!["p-a".into(), "p-b".into(), "me".into()],
                    },
                })),
                "NA1_BAD" => Err(AppError::JsonError("truncated".into())),
                _ => Ok(None),
            }
        }
    }

    fn corpus() -> RosterCorpus {
        RosterCorpus {
            lookups: Cell::new(0),
        }
    }

    #[test]
    fn test_resolves_one_based_index() {
        let corpus = corpus();
        let mut sink = RecordingDiagnostics::new();
        let mut resolver = ParticipantResolver::new(&corpus, "me");

        assert_eq!(resolver.resolve("NA1_1", &mut sink), Some(3));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_absent_player_is_unknown_without_diagnostic() {
        let corpus = corpus();
        let mut sink = RecordingDiagnostics::new();
        let mut resolver = ParticipantResolver::new(&corpus, "stranger");

        assert_eq!(resolver.resolve("NA1_1", &mut sink), None);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_missing_and_unreadable_matches_warn() {
        let corpus = corpus();
        let mut sink = RecordingDiagnostics::new();
        let mut resolver = ParticipantResolver::new(&corpus, "me");

        assert_eq!(resolver.resolve("NA1_404", &mut sink), None);
        assert_eq!(resolver.resolve("NA1_BAD", &mut sink), None);
        assert_eq!(sink.count(MISSING_DATA), 2);
    }

    #[test]
    fn test_lookups_are_memoized() {
        let corpus = corpus();
        let mut sink = RecordingDiagnostics::new();
        let mut resolver = ParticipantResolver::new(&corpus, "me");

        resolver.resolve("NA1_1", &mut sink);
        resolver.resolve("NA1_1", &mut sink);
        resolver.resolve("NA1_404", &mut sink);
        resolver.resolve("NA1_404", &mut sink);

        assert_eq!(corpus.lookups.get(), 2);
        assert_eq!(sink.count(MISSING_DATA), 1);
    }
}
