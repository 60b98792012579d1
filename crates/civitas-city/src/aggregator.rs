//! Stat aggregation: which source produced how much of each yield.
//!
//! The city keeps two upstream tables, per-source yield bundles and a
//! separate per-source happiness list. [`aggregate`] merges them into one
//! table ([`unify`]) and turns it inside out ([`invert`]) so the screen can
//! list, for each yield, every source that contributes to it and the total.
//!
//! None of this can fail. Arithmetic saturates and anything missing counts
//! as zero.

use civitas_types::{
    GreatPersonBreakdown, HappinessDeltas, SourceContribution, YieldBreakdown, YieldType,
};

/// Merge per-source happiness into the per-source yield table.
///
/// Sources keep their order; a source that only appears in `happiness` is
/// appended. Zero happiness deltas are skipped. A nonzero delta replaces the
/// source's Happiness amount rather than adding to it, so each source carries
/// at most one happiness figure.
pub fn unify(base: &SourceContribution, happiness: &HappinessDeltas) -> SourceContribution {
    let mut unified = base.clone();
    for (source, delta) in happiness {
        if delta.is_zero() {
            continue;
        }
        unified
            .entry_mut(source.as_str())
            .set(YieldType::Happiness, *delta);
    }
    unified
}

/// Invert a per-source table into a per-yield breakdown.
///
/// Yield types appear in declaration order and sources in table order. Zero
/// amounts are dropped, and a yield type nobody contributes to is absent.
pub fn invert(table: &SourceContribution) -> YieldBreakdown {
    let mut breakdown = YieldBreakdown::new();
    for yield_type in YieldType::ALL {
        for (source, bundle) in table.iter() {
            breakdown.record(yield_type, source, bundle.get(yield_type));
        }
    }
    breakdown
}

/// Per-yield breakdown of a city's output, happiness included.
pub fn aggregate(base: &SourceContribution, happiness: &HappinessDeltas) -> YieldBreakdown {
    invert(&unify(base, happiness))
}

/// Per-great-person breakdown of great person points.
///
/// Points in yields that feed no great person (Food, Happiness) are ignored.
pub fn great_person_breakdown(points: &SourceContribution) -> GreatPersonBreakdown {
    let mut breakdown = GreatPersonBreakdown::new();
    for yield_type in YieldType::ALL {
        let Some(kind) = yield_type.great_person() else {
            continue;
        };
        for (source, bundle) in points.iter() {
            breakdown.record(kind, source, bundle.get(yield_type));
        }
    }
    breakdown
}

#[cfg(test)]
mod tests {
    use civitas_types::{GreatPersonKind, YieldBundle};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use super::*;

    fn happiness(entries: &[(&str, Decimal)]) -> HappinessDeltas {
        entries
            .iter()
            .map(|(source, delta)| ((*source).to_owned(), *delta))
            .collect()
    }

    #[test]
    fn empty_inputs_give_empty_breakdown() {
        let breakdown = aggregate(&SourceContribution::new(), &HappinessDeltas::new());
        assert!(breakdown.is_empty());
    }

    #[test]
    fn farm_and_temple() {
        let base: SourceContribution = [("Farm", YieldBundle::single(YieldType::Food, dec!(2)))]
            .into_iter()
            .collect();
        let deltas = happiness(&[("Farm", dec!(0)), ("Temple", dec!(1))]);

        let breakdown = aggregate(&base, &deltas);

        assert_eq!(breakdown.len(), 2);
        let food = breakdown.get(YieldType::Food);
        assert_eq!(food.map(|f| f.len()), Some(1));
        assert_eq!(food.and_then(|f| f.get("Farm")), Some(dec!(2)));
        assert_eq!(breakdown.total(YieldType::Food), dec!(2));

        let happy = breakdown.get(YieldType::Happiness);
        assert_eq!(happy.map(|h| h.len()), Some(1));
        assert_eq!(happy.and_then(|h| h.get("Temple")), Some(dec!(1)));
        assert_eq!(breakdown.total(YieldType::Happiness), dec!(1));
    }

    #[test]
    fn happiness_overwrites_existing_amount() {
        let base: SourceContribution = [(
            "Colosseum",
            YieldBundle::ZERO
                .with(YieldType::Happiness, dec!(2))
                .with(YieldType::Culture, dec!(1)),
        )]
        .into_iter()
        .collect();
        let unified = unify(&base, &happiness(&[("Colosseum", dec!(4))]));
        let bundle = unified.get("Colosseum");
        assert_eq!(bundle.map(|b| b.get(YieldType::Happiness)), Some(dec!(4)));
        assert_eq!(bundle.map(|b| b.get(YieldType::Culture)), Some(dec!(1)));
    }

    #[test]
    fn happiness_only_sources_are_appended() {
        let base: SourceContribution = [
            ("Population", YieldBundle::single(YieldType::Science, dec!(3))),
            ("Library", YieldBundle::single(YieldType::Science, dec!(1))),
        ]
        .into_iter()
        .collect();
        let unified = unify(&base, &happiness(&[("Temple", dec!(2)), ("Population", dec!(-3))]));
        let order: Vec<_> = unified.sources().collect();
        assert_eq!(order, vec!["Population", "Library", "Temple"]);
    }

    #[test]
    fn totals_match_visible_amounts_and_no_zeros() {
        let base: SourceContribution = [
            (
                "Population",
                YieldBundle::ZERO
                    .with(YieldType::Food, dec!(-8))
                    .with(YieldType::Science, dec!(4))
                    .with(YieldType::Production, dec!(2)),
            ),
            ("Granary", YieldBundle::single(YieldType::Food, dec!(2))),
            ("Monument", YieldBundle::single(YieldType::Culture, dec!(2))),
            ("Specialists", YieldBundle::ZERO.with(YieldType::Science, dec!(6))),
            ("Walls", YieldBundle::ZERO),
        ]
        .into_iter()
        .collect();
        let deltas = happiness(&[("Population", dec!(-4)), ("Temple", dec!(1.5))]);

        let breakdown = aggregate(&base, &deltas);

        for (yield_type, sources) in breakdown.iter() {
            let sum: Decimal = sources.iter().map(|(_, amount)| amount).sum();
            assert_eq!(sources.total(), sum, "total mismatch for {yield_type}");
            assert!(sources.iter().all(|(_, amount)| !amount.is_zero()));
            assert!(!sources.is_empty());
        }
        assert_eq!(breakdown.total(YieldType::Food), dec!(-6));
        assert_eq!(breakdown.total(YieldType::Science), dec!(10));
        assert_eq!(breakdown.total(YieldType::Happiness), dec!(-2.5));
        assert!(breakdown.get(YieldType::Gold).is_none());

        let science_sources: Vec<_> = breakdown
            .get(YieldType::Science)
            .map(|s| s.iter().map(|(source, _)| source.to_owned()).collect())
            .unwrap_or_default();
        assert_eq!(science_sources, vec!["Population", "Specialists"]);
    }

    #[test]
    fn aggregate_is_idempotent() {
        let base: SourceContribution = [
            ("Library", YieldBundle::single(YieldType::Science, dec!(1))),
            ("Market", YieldBundle::single(YieldType::Gold, dec!(2))),
        ]
        .into_iter()
        .collect();
        let deltas = happiness(&[("Temple", dec!(1)), ("Library", dec!(1))]);
        let first = aggregate(&base, &deltas);
        let second = aggregate(&base, &deltas);
        assert_eq!(first, second);

        // Equality ignores source order, so compare the sequences too.
        let sequence = |breakdown: &YieldBreakdown| -> Vec<(YieldType, Vec<(String, Decimal)>)> {
            breakdown
                .iter()
                .map(|(yield_type, sources)| {
                    let sources = sources
                        .iter()
                        .map(|(source, amount)| (source.to_owned(), amount))
                        .collect();
                    (yield_type, sources)
                })
                .collect()
        };
        assert_eq!(sequence(&first), sequence(&second));
        let happy: Vec<_> = first
            .get(YieldType::Happiness)
            .map(|h| h.iter().map(|(source, _)| source.to_owned()).collect())
            .unwrap_or_default();
        assert_eq!(happy, vec!["Library", "Temple"]);
    }

    #[test]
    fn great_person_points_skip_food_and_happiness() {
        let points: SourceContribution = [
            (
                "Specialists",
                YieldBundle::ZERO
                    .with(YieldType::Science, dec!(6))
                    .with(YieldType::Gold, dec!(3)),
            ),
            (
                "Garden",
                YieldBundle::ZERO
                    .with(YieldType::Food, dec!(2))
                    .with(YieldType::Culture, dec!(1)),
            ),
        ]
        .into_iter()
        .collect();

        let breakdown = great_person_breakdown(&points);
        let kinds: Vec<_> = breakdown.keys().collect();
        assert_eq!(
            kinds,
            vec![
                GreatPersonKind::Merchant,
                GreatPersonKind::Scientist,
                GreatPersonKind::Artist
            ]
        );
        assert_eq!(breakdown.total(GreatPersonKind::Scientist), dec!(6));
        assert_eq!(breakdown.total(GreatPersonKind::Engineer), dec!(0));
    }
}
