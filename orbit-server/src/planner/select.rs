//! Optimum selection over evaluated candidates.

use crate::domain::{Candidate, WeatherProfile};

use super::config::TieBreak;

/// Pick the fastest candidate.
///
/// A single pass keeps the lowest traverse time seen so far; only a strictly
/// lower time replaces it. On equal time:
/// - [`TieBreak::FirstSeen`]: the earlier candidate is kept
/// - [`TieBreak::VehiclePriority`]: the candidate whose vehicle comes first in
///   `weather`'s eligible list wins, then the earlier candidate
///
/// Returns `None` if there are no candidates.
pub fn select_best(
    candidates: Vec<Candidate>,
    tie_break: TieBreak,
    weather: &WeatherProfile,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;

    for candidate in candidates {
        let replace = match &best {
            None => true,
            Some(current) => is_better(&candidate, current, tie_break, weather),
        };
        if replace {
            best = Some(candidate);
        }
    }

    best
}

/// Whether `challenger` should replace `current`.
fn is_better(
    challenger: &Candidate,
    current: &Candidate,
    tie_break: TieBreak,
    weather: &WeatherProfile,
) -> bool {
    if challenger.traverse_mins != current.traverse_mins {
        return challenger.traverse_mins < current.traverse_mins;
    }

    match tie_break {
        TieBreak::FirstSeen => false,
        TieBreak::VehiclePriority => {
            vehicle_rank(challenger, weather) < vehicle_rank(current, weather)
        }
    }
}

/// Position of the candidate's vehicle in the weather's list; unlisted last.
fn vehicle_rank(candidate: &Candidate, weather: &WeatherProfile) -> usize {
    weather
        .priority_of(&candidate.vehicle)
        .unwrap_or(usize::MAX)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::domain::{Orbit, OrbitId, RouteSequence, Suburb, Vehicle, WeatherType};
    use proptest::prelude::*;

    const VEHICLES: [&str; 3] = ["Bike", "Tuktuk", "Car"];

    fn candidates(specs: &[(usize, u64)]) -> Vec<Candidate> {
        specs
            .iter()
            .enumerate()
            .map(|(i, (vehicle, mins))| {
                let orbit = Orbit::new(
                    OrbitId::parse(&format!("Orbit{i}")).unwrap(),
                    Suburb::parse("A").unwrap(),
                    Suburb::parse("B").unwrap(),
                    1,
                    0,
                )
                .unwrap();
                Candidate::new(
                    RouteSequence::single(orbit),
                    Vehicle::new(VEHICLES[*vehicle], 10, 1),
                    *mins,
                )
            })
            .collect()
    }

    fn weather() -> WeatherProfile {
        WeatherProfile::new(WeatherType::Windy, 0, VEHICLES)
    }

    proptest! {
        /// The winner always has the minimum traverse time
        #[test]
        fn winner_is_minimum(
            specs in prop::collection::vec((0usize..3, 0u64..50), 1..20),
            priority in any::<bool>(),
        ) {
            let tie_break = if priority { TieBreak::VehiclePriority } else { TieBreak::FirstSeen };
            let min = specs.iter().map(|(_, m)| *m).min().unwrap();

            let best = select_best(candidates(&specs), tie_break, &weather()).unwrap();
            prop_assert_eq!(best.traverse_mins, min);
        }

        /// First-seen picks the earliest of the minimum candidates
        #[test]
        fn first_seen_is_earliest(specs in prop::collection::vec((0usize..3, 0u64..10), 1..20)) {
            let min = specs.iter().map(|(_, m)| *m).min().unwrap();
            let first = specs.iter().position(|(_, m)| *m == min).unwrap();

            let best = select_best(candidates(&specs), TieBreak::FirstSeen, &weather()).unwrap();
            let expected = format!("Orbit{first}");
            prop_assert_eq!(best.route.orbits()[0].id.as_str(), expected.as_str());
        }

        /// Selection is deterministic
        #[test]
        fn deterministic(specs in prop::collection::vec((0usize..3, 0u64..10), 0..20)) {
            let a = select_best(candidates(&specs), TieBreak::VehiclePriority, &weather());
            let b = select_best(candidates(&specs), TieBreak::VehiclePriority, &weather());
            prop_assert_eq!(a, b);
        }
    }
}
