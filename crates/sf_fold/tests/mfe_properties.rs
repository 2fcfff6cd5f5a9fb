use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

use sf_energy::Base;
use sf_energy::EnergyModel;
use sf_energy::NucleotideVec;
use sf_energy::StackingModel;
use sf_fold::fold;
use sf_fold::fold_parallel;
use sf_fold::reconstruct;
use sf_fold::FoldTables;

const EPS: f64 = 1e-9;

fn random_sequence(rng: &mut StdRng, len: usize) -> NucleotideVec {
    let bases = [Base::A, Base::C, Base::G, Base::U];
    NucleotideVec((0..len).map(|_| bases[rng.random_range(0..4)]).collect())
}

fn random_sequences(seed: u64, count: usize, max_len: usize) -> Vec<NucleotideVec> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.random_range(0..=max_len);
            random_sequence(&mut rng, len)
        })
        .collect()
}

#[test]
fn test_pairs_are_valid_and_respect_min_span() {
    let model = StackingModel::default();
    for seq in random_sequences(1, 50, 60) {
        let tables = fold(&seq, &model);
        let mfe = reconstruct(&tables, &seq, &model).unwrap();
        for p in mfe.pairs().iter() {
            assert!(p.span() >= 4, "{} has short pair {:?}", seq, p);
            assert!(model.can_pair(seq[p.i()], seq[p.j()]), "{} has invalid pair {:?}", seq, p);
        }
    }
}

#[test]
fn test_pairs_do_not_cross_or_overlap() {
    let model = StackingModel::default();
    for seq in random_sequences(2, 50, 60) {
        let tables = fold(&seq, &model);
        let mfe = reconstruct(&tables, &seq, &model).unwrap();
        let pairs = mfe.pairs().pairs();
        for (x, p) in pairs.iter().enumerate() {
            for q in &pairs[x + 1..] {
                assert!(!p.shares_position(q), "{}: {:?} and {:?} overlap", seq, p, q);
                assert!(!p.crosses(q), "{}: {:?} and {:?} cross", seq, p, q);
            }
        }
        assert!(mfe.pair_table().is_ok());
    }
}

#[test]
fn test_stack_energies_sum_to_mfe() {
    let model = StackingModel::default();
    for seq in random_sequences(3, 50, 80) {
        let tables = fold(&seq, &model);
        let mfe = reconstruct(&tables, &seq, &model).unwrap();
        assert!(mfe.energy() <= 0.0);
        assert_eq!(mfe.energy(), tables.mfe());
        assert!((mfe.stack_energy() - tables.mfe()).abs() < EPS,
            "{}: stacks {} vs mfe {}", seq, mfe.stack_energy(), tables.mfe());

        let pt = mfe.pair_table().unwrap();
        let eval = model.energy_of_structure(&seq, &pt);
        assert!((eval - tables.mfe()).abs() < EPS);
    }
}

#[test]
fn test_e_is_minimal_over_splits() {
    let model = StackingModel::default();
    for seq in random_sequences(4, 10, 40) {
        let tables = fold(&seq, &model);
        let n = seq.len();
        for j in 0..n {
            for i in 0..j {
                for k in i..j {
                    assert!(tables.e(i, j) <= tables.e(i, k) + tables.e(k + 1, j));
                }
                assert!(tables.e(i, j) <= 0.0);
            }
        }
    }
}

#[test]
fn test_fold_is_idempotent_across_schedules() {
    let model = StackingModel::default();
    for seq in random_sequences(5, 10, 120) {
        let t1 = fold(&seq, &model);
        let t2 = fold(&seq, &model);
        let t3 = fold_parallel(&seq, &model);
        assert_eq!(t1, t2);
        assert_eq!(t1, t3);
        for (a, b) in t1.b_table().iter().zip(t3.b_table().iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }
}

#[test]
fn test_trace_depends_only_on_energies() {
    let model = StackingModel::default();
    for seq in random_sequences(6, 400, 60) {
        let folded = fold(&seq, &model);
        let rebuilt = FoldTables::from_energies(
            &seq, &model, folded.e_table().clone(), folded.b_table().clone()).unwrap();
        assert_eq!(folded, rebuilt, "{}: choices differ", seq);
        assert_eq!(
            reconstruct(&folded, &seq, &model).unwrap(),
            reconstruct(&rebuilt, &seq, &model).unwrap(),
            "{}", seq);
    }
}

#[test]
fn test_short_sequences_are_empty() {
    let model = StackingModel::default();
    for s in ["", "G", "GC", "GCA", "GCAU"] {
        let seq = NucleotideVec::try_from(s).unwrap();
        let tables = fold(&seq, &model);
        let mfe = reconstruct(&tables, &seq, &model).unwrap();
        assert!(mfe.pairs().is_empty());
        assert!(mfe.stacks().is_empty());
        assert_eq!(mfe.energy(), 0.0);
    }
}

#[test]
fn test_known_structure() {
    let model = StackingModel::default();
    let seq = NucleotideVec::try_from(
        "UGAUGGGUAUAAGACGAAGUUCGCCCAGUUGGCUCGAUUUGGUUGGUUGGCAGCUUACUACCUGGUUUCC").unwrap();
    let tables = fold(&seq, &model);
    let mfe = reconstruct(&tables, &seq, &model).unwrap();
    assert_eq!(mfe.dot_bracket().unwrap().to_string(),
        ".((((((.......(((...)))))))......)).....((..(((....((....)))))......))");
    assert_eq!(mfe.stacks().len(), 10);
    assert!((mfe.energy() - -26.5).abs() < EPS);
}

#[test]
fn test_invalid_symbol_fails_before_folding() {
    assert!(NucleotideVec::try_from("ACGUX").is_err());
}
