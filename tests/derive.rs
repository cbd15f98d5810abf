use std::num::NonZeroUsize;

use gachasim::{
    Bucket, CategoricalSampler, RollKind, ScriptedSource, WeightedEnum, percentages, tally,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, WeightedEnum)]
enum Chest {
    #[probability(3/4)]
    #[label("wood")]
    Wooden,
    #[probability(1/5)]
    Iron,
    #[probability(1/100)]
    #[label("gold")]
    Golden,
}

impl std::fmt::Display for Chest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[test]
fn derive_exposes_entries_and_labels() {
    assert_eq!(
        Chest::ENTRIES,
        &[
            (Chest::Wooden, 0.75),
            (Chest::Iron, 0.2),
            (Chest::Golden, 0.01)
        ]
    );
    assert_eq!(Chest::Wooden.label(), "wood");
    assert_eq!(Chest::Iron.label(), "Iron");
    assert_eq!(Chest::Golden.to_string(), "gold");
}

#[test]
fn weights_below_hundred_send_remainder_to_last_variant() {
    let table = Chest::table().unwrap();
    assert_eq!(table.scan(0.5), Bucket::Covered(0));
    assert_eq!(table.scan(0.9), Bucket::Covered(1));
    assert_eq!(table.scan(42.0), Bucket::Remainder);

    let sampler = CategoricalSampler::new(table);
    let mut src = ScriptedSource::new([0.1, 0.8, 50.0]).unwrap();
    let session = sampler.draw_n(&mut src, NonZeroUsize::new(3).unwrap());
    assert_eq!(
        session.draws(),
        &[Chest::Wooden, Chest::Iron, Chest::Golden]
    );
}

#[test]
fn until_then_tally() {
    let sampler = CategoricalSampler::new(Chest::table().unwrap());
    let mut src = ScriptedSource::new([0.1, 0.1, 0.8, 0.1, 99.0]).unwrap();
    let (session, count) = sampler.draw_until(&mut src, &Chest::Golden).unwrap();
    assert_eq!(count, 5);
    assert_eq!(session.kind(), &RollKind::UntilTarget(Chest::Golden));

    let stats = tally(sampler.table(), &session);
    assert_eq!(
        stats.counts(),
        &[(Chest::Wooden, 3), (Chest::Iron, 1), (Chest::Golden, 1)]
    );
    let pct = percentages(&stats).unwrap();
    assert_eq!(pct[0], (Chest::Wooden, 60.0));
}
