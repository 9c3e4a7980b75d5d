use super::Engine;

use async_trait::async_trait;
use futures::future;
use uuid::Uuid;

use crate::{
    api::RouteAPI,
    entities::{
        Comparison, Marker, RouteLeg, RouteLine, RouteOutcome, RoutePlan, RouteQuery, TravelMode,
    },
    error::{missing_address_error, Error},
};

#[async_trait]
impl RouteAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn find_route(&self, token: Uuid, query: RouteQuery) -> Result<RoutePlan, Error> {
        let start = query.start.trim().to_owned();
        let end = query.end.trim().to_owned();

        if start.is_empty() || end.is_empty() {
            return Err(missing_address_error());
        }

        let seq = self.mutate(&token, |session| session.begin_find()).await?;

        // the destination lookup is sequenced strictly after the origin resolves
        let origin = self.geocoder.geocode(&start).await?;
        let origin_marker = self
            .apply(&token, seq, |session| {
                session.map.place_marker(Marker::start(origin))
            })
            .await?;

        let destination = self.geocoder.geocode(&end).await?;
        let destination_marker = self
            .apply(&token, seq, |session| {
                session.map.place_marker(Marker::end(destination))
            })
            .await?;

        // both modes at once; neither completion waits on the other
        let (driving_leg, walking_leg) = future::join(
            self.directions.route(origin, destination, TravelMode::Driving),
            self.directions.route(origin, destination, TravelMode::Walking),
        )
        .await;

        let driving = self
            .record_outcome(&token, seq, TravelMode::Driving, driving_leg)
            .await?;
        let walking = self
            .record_outcome(&token, seq, TravelMode::Walking, walking_leg)
            .await?;

        // the comparison is gated on both outcomes being drawn
        let comparison = match (driving.line(), walking.line()) {
            (Some(car), Some(walk)) => {
                let comparison = Comparison::new(car.duration_minutes, walk.duration_minutes);
                self.apply(&token, seq, |session| {
                    session.info.push(comparison.to_string())
                })
                .await?;

                Some(comparison)
            }
            _ => None,
        };

        Ok(RoutePlan {
            origin: origin_marker,
            destination: destination_marker,
            driving,
            walking,
            comparison,
        })
    }
}

impl Engine {
    async fn record_outcome(
        &self,
        token: &Uuid,
        seq: u64,
        mode: TravelMode,
        leg: Result<RouteLeg, Error>,
    ) -> Result<RouteOutcome, Error> {
        let leg = match leg {
            Ok(leg) => leg,
            Err(err) if err.code == 104 => {
                return Ok(RouteOutcome::Failed {
                    notice: err.message,
                });
            }
            Err(err) => {
                tracing::error!("{} route lookup failed: {}", mode.label(), err.message);

                return Ok(RouteOutcome::Failed {
                    notice: format!("{} route request failed", mode.label()),
                });
            }
        };

        let line = RouteLine::new(mode, leg);

        self.apply(token, seq, |session| {
            session.map.set_route(line.clone());
            session.info.push(line.summary());
        })
        .await?;

        Ok(RouteOutcome::Drawn { line })
    }
}

#[cfg(test)]
mod tests {
    use crate::api::{RouteAPI, SessionAPI};
    use crate::engine::Engine;
    use crate::entities::{RouteOutcome, RouteQuery, TravelMode};
    use crate::simulation::StaticAtlas;
    use std::sync::Arc;
    use tokio_test::block_on;

    fn engine_with(atlas: StaticAtlas) -> (Arc<StaticAtlas>, Engine) {
        let atlas = Arc::new(atlas);
        let engine = Engine::with_services(atlas.clone(), atlas.clone());

        (atlas, engine)
    }

    fn query(start: &str, end: &str) -> RouteQuery {
        RouteQuery {
            start: start.into(),
            end: end.into(),
        }
    }

    #[test]
    fn blank_addresses_issue_no_lookups() {
        let (atlas, engine) = engine_with(StaticAtlas::seoul());
        let token = block_on(engine.create_session()).unwrap().token;

        let err = block_on(engine.find_route(token, query("   ", "Gangnam"))).unwrap_err();

        assert_eq!(err.code, 102);
        assert_eq!(atlas.geocode_calls(), 0);
        assert_eq!(atlas.route_calls(), 0);
    }

    #[test]
    fn both_modes_resolve_and_compare() {
        let (_, engine) = engine_with(StaticAtlas::seoul());
        let token = block_on(engine.create_session()).unwrap().token;

        let plan =
            block_on(engine.find_route(token, query("Seoul Station", "Gangnam"))).unwrap();

        assert!(matches!(plan.driving, RouteOutcome::Drawn { .. }));
        assert!(matches!(plan.walking, RouteOutcome::Drawn { .. }));
        let comparison = plan.comparison.unwrap();
        assert_eq!(comparison.driving_minutes, 21.0);
        assert_eq!(comparison.walking_minutes, 109.0);

        let session = block_on(engine.find_session(token)).unwrap();
        assert!(session.map.start_marker.is_some());
        assert!(session.map.end_marker.is_some());
        assert!(session.map.driving_route.is_some());
        assert!(session.map.walking_route.is_some());
        assert!(session.map.fullscreen.bounds.is_some());
        assert_eq!(
            session.info,
            vec![
                "driving route duration: 21.0 min".to_string(),
                "walking route duration: 109.0 min".to_string(),
                "route comparison: driving 21.0 min / walking 109.0 min".to_string(),
            ]
        );
    }

    #[test]
    fn unknown_destination_keeps_the_start_marker() {
        let (atlas, engine) = engine_with(StaticAtlas::seoul());
        let token = block_on(engine.create_session()).unwrap().token;

        let err =
            block_on(engine.find_route(token, query("Seoul Station", "Atlantis"))).unwrap_err();

        assert_eq!(err.code, 103);
        assert_eq!(atlas.geocode_calls(), 2);
        assert_eq!(atlas.route_calls(), 0);

        let session = block_on(engine.find_session(token)).unwrap();
        assert!(session.map.start_marker.is_some());
        assert!(session.map.end_marker.is_none());
        assert!(session.map.driving_route.is_none());
        assert!(session.map.walking_route.is_none());
        assert!(session.info.is_empty());
    }

    #[test]
    fn rerunning_replaces_rather_than_duplicates() {
        let (_, engine) = engine_with(StaticAtlas::seoul());
        let token = block_on(engine.create_session()).unwrap().token;

        block_on(engine.find_route(token, query("Seoul Station", "Gangnam"))).unwrap();
        block_on(engine.find_route(token, query("Seoul Station", "Gangnam"))).unwrap();

        let session = block_on(engine.find_session(token)).unwrap();
        assert_eq!(session.info.len(), 3);
        assert_eq!(
            session
                .info
                .iter()
                .filter(|line| line.starts_with("route comparison"))
                .count(),
            1
        );
        assert!(session.map.start_marker.is_some());
        assert!(session.map.end_marker.is_some());
    }

    #[test]
    fn one_failed_mode_blocks_the_comparison() {
        let (_, engine) = engine_with(StaticAtlas::seoul().without_leg(TravelMode::Walking));
        let token = block_on(engine.create_session()).unwrap().token;

        let plan =
            block_on(engine.find_route(token, query("Seoul Station", "Gangnam"))).unwrap();

        assert!(matches!(plan.driving, RouteOutcome::Drawn { .. }));
        match &plan.walking {
            RouteOutcome::Failed { notice } => assert!(notice.contains("walking")),
            RouteOutcome::Drawn { .. } => panic!("walking should not have resolved"),
        }
        assert!(plan.comparison.is_none());

        let session = block_on(engine.find_session(token)).unwrap();
        assert!(session.map.route(TravelMode::Driving).is_some());
        assert!(session.map.route(TravelMode::Walking).is_none());
        assert_eq!(session.info, vec!["driving route duration: 21.0 min".to_string()]);
    }
}
