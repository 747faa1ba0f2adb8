//! Plain-text rendering of planner results.

use askama::Template;

use crate::domain::{Candidate, Orbit};

/// The fastest candidate as shown to a person.
#[derive(Template)]
#[template(path = "result.txt")]
pub struct ResultTemplate<'a> {
    pub vehicle: &'a str,
    pub traverse_mins: u64,
    pub orbits: &'a [Orbit],
}

impl<'a> ResultTemplate<'a> {
    /// Create the template for a candidate.
    pub fn from_candidate(candidate: &'a Candidate) -> Self {
        Self {
            vehicle: &candidate.vehicle.name,
            traverse_mins: candidate.traverse_mins,
            orbits: candidate.route.orbits(),
        }
    }
}

/// Render a candidate: the vehicle, the traverse time, then one line per
/// orbit in visiting order.
pub fn render(candidate: &Candidate) -> Result<String, askama::Error> {
    let text = ResultTemplate::from_candidate(candidate).render()?;
    Ok(text.trim_end().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{OrbitId, RouteSequence, Suburb, Vehicle};

    fn orbit(id: &str, from: &str, to: &str, distance: u32, craters: u32) -> Orbit {
        Orbit::new(
            OrbitId::parse(id).unwrap(),
            Suburb::parse(from).unwrap(),
            Suburb::parse(to).unwrap(),
            distance,
            craters,
        )
        .unwrap()
    }

    #[test]
    fn single_orbit() {
        let candidate = Candidate::new(
            RouteSequence::single(orbit("Orbit1", "Silk Drob", "Hallitharam", 18, 20)),
            Vehicle::new("Car", 20, 3),
            114,
        );

        assert_eq!(
            render(&candidate).unwrap(),
            "Vehicle Car on following Orbit(s), 114 mins:\n\
             Orbit 1.) Orbit1 Silk Drob-Hallitharam [Distance: 18, Number of Craters: 20];"
        );
    }

    #[test]
    fn orbits_in_visiting_order() {
        let route = RouteSequence::new(vec![
            orbit("Orbit3", "Silk Drob", "RK Puram", 30, 15),
            orbit("Orbit4", "RK Puram", "Hallitharam", 15, 18),
        ])
        .unwrap();
        let candidate = Candidate::new(route, Vehicle::new("Tuktuk", 12, 1), 258);

        assert_eq!(
            render(&candidate).unwrap(),
            "Vehicle Tuktuk on following Orbit(s), 258 mins:\n\
             Orbit 1.) Orbit3 Silk Drob-RK Puram [Distance: 30, Number of Craters: 15];\n\
             Orbit 2.) Orbit4 RK Puram-Hallitharam [Distance: 15, Number of Craters: 18];"
        );
    }

    #[test]
    fn names_are_not_escaped() {
        let candidate = Candidate::new(
            RouteSequence::single(orbit("Orbit<1>", "A & B", "C", 1, 0)),
            Vehicle::new("Bike", 10, 2),
            6,
        );

        let text = render(&candidate).unwrap();
        assert!(text.contains("Orbit<1> A & B-C"));
    }
}
