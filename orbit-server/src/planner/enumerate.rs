//! Route enumeration.
//!
//! Lists every route sequence that visits the requested destinations from a
//! source. The network is small and trips have at most two hops, so this is
//! a plain Cartesian product of matching orbits with no pruning: every
//! sequence is cost-evaluated and the cheapest wins.

use std::collections::BTreeSet;

use crate::catalog::NetworkCatalog;
use crate::domain::{OrbitId, RouteSequence, Suburb};

use super::config::VisitOrder;
use super::validate::ValidationError;

/// Enumerates route sequences over a catalog.
pub struct RouteEnumerator<'a, C: NetworkCatalog + ?Sized> {
    catalog: &'a C,
    visit_order: VisitOrder,
}

impl<'a, C: NetworkCatalog + ?Sized> RouteEnumerator<'a, C> {
    /// Create a new enumerator.
    pub fn new(catalog: &'a C, visit_order: VisitOrder) -> Self {
        Self {
            catalog,
            visit_order,
        }
    }

    /// Enumerate routes from `source` visiting `destinations` in order.
    ///
    /// One destination yields one single-orbit route per direct orbit. Two
    /// destinations yield one two-orbit route per (source→first,
    /// first→second) orbit pair; with [`VisitOrder::EitherOrder`] the
    /// (source→second, second→first) pairs follow. An empty result means no
    /// route exists; it is not an error.
    pub fn enumerate(
        &self,
        source: &Suburb,
        destinations: &[Suburb],
    ) -> Result<Vec<RouteSequence>, ValidationError> {
        match destinations {
            [destination] => Ok(self.direct(source, destination)),
            [first, second] => {
                let mut routes = self.via(source, first, second);
                if self.visit_order == VisitOrder::EitherOrder && first != second {
                    routes.extend(self.via(source, second, first));
                }
                Ok(routes)
            }
            _ => Err(ValidationError::StopCount(destinations.len())),
        }
    }

    /// Single-orbit routes from `source` to `destination`.
    fn direct(&self, source: &Suburb, destination: &Suburb) -> Vec<RouteSequence> {
        self.catalog
            .orbits_between(source, destination)
            .into_iter()
            .map(|orbit| RouteSequence::single(orbit.clone()))
            .collect()
    }

    /// Two-orbit routes from `source` to `last` through `via`.
    fn via(&self, source: &Suburb, via: &Suburb, last: &Suburb) -> Vec<RouteSequence> {
        let first_hops = self.catalog.orbits_between(source, via);
        if first_hops.is_empty() {
            return Vec::new();
        }
        let second_hops = self.catalog.orbits_between(via, last);

        let mut routes = Vec::with_capacity(first_hops.len() * second_hops.len());
        for first in &first_hops {
            for second in &second_hops {
                routes.push(RouteSequence::two_hop((*first).clone(), (*second).clone()));
            }
        }
        routes
    }
}

/// Distinct identifiers of every orbit used by the routes, sorted.
///
/// These are the orbits a caller must supply speed limits for when the
/// catalog carries none.
pub fn orbit_ids(routes: &[RouteSequence]) -> Vec<OrbitId> {
    routes
        .iter()
        .flat_map(|route| route.orbits().iter().map(|o| o.id.clone()))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
