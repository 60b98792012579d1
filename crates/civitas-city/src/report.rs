//! Read model for the city screen.

use civitas_types::CityReport;

use crate::city::{City, StatContext};
use crate::specialist;

/// Snapshot everything the city screen shows for `city`.
///
/// Breakdowns and allocation rows are all computed under `ctx`.
pub fn city_report(city: &City, ctx: StatContext<'_>) -> CityReport {
    let stats = city.stats(ctx);
    CityReport {
        city_id: city.id(),
        name: city.name().to_owned(),
        population: city.population().size(),
        free_population: city.population().free(),
        buildings: city.building_partition().names(),
        yields: stats.yield_breakdown(),
        great_people: stats.great_person_breakdown(),
        specialists: specialist::specialist_rows(city, ctx),
    }
}
